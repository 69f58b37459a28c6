use serde_json::Value;
use weave_core::{looks_like_base64, Chunk, CollectionSummary, Metadata, VirtualDocument};

const VALUE_LIMIT: usize = 100;
const NESTED_VALUE_LIMIT: usize = 200;

pub fn content_preview(content: &str, short: usize, long: bool) -> String {
    if looks_like_base64(content) {
        return format!("[base64 data, {} chars]", content.len());
    }
    if long {
        return content.to_string();
    }

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= short {
        return content.trim_end().to_string();
    }
    let mut preview = lines[..short].join("\n");
    preview.push_str(&format!("\n... ({} more lines)", lines.len() - short));
    preview
}

pub fn metadata_value(key: &str, value: &Value) -> String {
    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    let limit = if key == "metadata" {
        NESTED_VALUE_LIMIT
    } else {
        VALUE_LIMIT
    };
    truncate(&text, limit)
}

pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit).collect();
    format!("{kept}...")
}

pub fn metadata_lines(metadata: &Metadata, indent: &str) -> Vec<String> {
    metadata
        .iter()
        .map(|(key, value)| format!("{indent}{key}: {}", metadata_value(key, value)))
        .collect()
}

pub fn chunk_block(index: usize, chunk: &Chunk, short: usize, long: bool) -> String {
    let mut lines = vec![format!("{}. ID: {}", index + 1, chunk.id)];
    if let Some(url) = &chunk.url {
        lines.push(format!("   URL: {url}"));
    }
    if chunk.has_image_payload() {
        let payload = chunk
            .image_data
            .as_deref()
            .or(chunk.image.as_deref())
            .unwrap_or_default();
        lines.push(format!("   Image: [base64 data, {} chars]", payload.len()));
    }
    if let Some(content) = chunk.content.as_deref().filter(|text| !text.is_empty()) {
        lines.push("   Content:".to_string());
        for line in content_preview(content, short, long).lines() {
            lines.push(format!("     {line}"));
        }
    }
    if !chunk.metadata.is_empty() {
        lines.push("   Metadata:".to_string());
        lines.extend(metadata_lines(&chunk.metadata, "     "));
    }
    lines.join("\n")
}

pub fn virtual_line(index: usize, document: &VirtualDocument) -> String {
    let unit = if document.is_image() { "images" } else { "chunks" };
    format!(
        "{}. {} ({} {unit})",
        index + 1,
        document.original_filename,
        document.display_count()
    )
}

pub fn virtual_block(index: usize, document: &VirtualDocument, short: usize, long: bool) -> String {
    let mut lines = vec![virtual_line(index, document)];
    if long {
        lines.extend(metadata_lines(&document.metadata, "   "));
    }
    for (position, chunk) in document.chunks.iter().enumerate() {
        let block = chunk_block(position, chunk, short, long);
        lines.extend(block.lines().map(|line| format!("   {line}")));
    }
    lines.join("\n")
}

pub fn summary_block(summary: &CollectionSummary) -> String {
    [
        format!("Collection: {}", summary.collection),
        format!("  Chunks fetched:    {}", summary.fetched_chunks),
        format!("  Virtual documents: {}", summary.virtual_documents),
        format!(
            "  Text documents:    {} ({} chunks)",
            summary.text_documents, summary.text_chunks
        ),
        format!(
            "  Image stacks:      {} ({} images)",
            summary.image_stacks, summary.images
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base64_content_is_replaced_by_its_length() {
        let blob = "QUJDRA".repeat(30);
        assert_eq!(content_preview(&blob, 5, true), "[base64 data, 180 chars]");
    }

    #[test]
    fn short_preview_keeps_leading_lines() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(content_preview(text, 2, false), "one\ntwo\n... (2 more lines)");
        assert_eq!(content_preview(text, 4, false), text);
        assert_eq!(content_preview(text, 1, true), text);
    }

    #[test]
    fn metadata_values_truncate_by_key() {
        let long = "x".repeat(250);
        assert_eq!(metadata_value("title", &json!(long)).len(), 103);
        assert_eq!(metadata_value("metadata", &json!(long)).len(), 203);
        assert_eq!(metadata_value("total_chunks", &json!(3)), "3");
    }

    #[test]
    fn virtual_line_uses_display_count() {
        let document = VirtualDocument {
            original_filename: "scan.png".to_string(),
            total_chunks: 0,
            chunks: vec![
                Chunk::new("a").with_metadata("content_type", "image"),
                Chunk::new("b").with_metadata("content_type", "image"),
            ],
            metadata: Metadata::new(),
        };
        assert_eq!(virtual_line(0, &document), "1. scan.png (2 images)");
    }
}
