use crate::models::{IngestionOptions, MetadataMode, SchemaGeneration, SchemaMode};
use crate::{Chunk, IngestError, Metadata};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Image,
}

pub fn classify_file(path: &Path) -> Result<FileKind, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "pdf" {
        return Err(IngestError::UnsupportedFile(format!(
            "{} (pdf extraction is not supported)",
            path.display()
        )));
    }
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(FileKind::Image)
    } else {
        Ok(FileKind::Text)
    }
}

pub fn discover_files(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|item| item.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();

    files.sort_unstable();
    files
}

// A single line longer than chunk_size is kept whole.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_size = 0usize;

    for line in text.split('\n') {
        let line_size = line.len() + 1;
        if current_size + line_size > chunk_size && !current.is_empty() {
            chunks.push(current.trim().to_string());
            current.clear();
            current_size = 0;
        }
        current.push_str(line);
        current.push('\n');
        current_size += line_size;
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }
    if chunks.is_empty() {
        chunks.push(text.to_string());
    }
    chunks
}

pub fn chunk_sizes(chunks: &[String]) -> Vec<usize> {
    chunks.iter().map(String::len).collect()
}

pub fn read_chunks(
    path: &Path,
    kind: FileKind,
    options: &IngestionOptions,
    mode: SchemaMode,
) -> Result<Vec<Chunk>, IngestError> {
    let bytes = fs::read(path)?;
    match kind {
        FileKind::Text => {
            let text = String::from_utf8_lossy(&bytes);
            build_text_chunks(path, &text, options, mode)
        }
        FileKind::Image => Ok(vec![build_image_chunk(path, &bytes, mode)?]),
    }
}

pub fn build_text_chunks(
    path: &Path,
    text: &str,
    options: &IngestionOptions,
    mode: SchemaMode,
) -> Result<Vec<Chunk>, IngestError> {
    let filename = file_name(path)?;
    let storage_path = path.display().to_string();
    let pieces = chunk_text(text, options.chunk_size);
    let sizes = chunk_sizes(&pieces);
    let now = timestamp();

    let chunks = pieces
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            let id = Uuid::new_v4().to_string();
            let metadata = match mode.generation {
                SchemaGeneration::Modern => {
                    let mut fields = modern_fields(&id, &filename, &storage_path, &now);
                    fields.insert("is_chunked".into(), json!(pieces.len() > 1));
                    fields.insert("total_chunks".into(), json!(pieces.len()));
                    fields.insert("chunk_index".into(), json!(index));
                    fields.insert("chunk_sizes".into(), json!(sizes));
                    fields.insert("type".into(), json!("text"));
                    fields.insert("content".into(), json!(piece));
                    encode(fields, mode.metadata_mode)
                }
                SchemaGeneration::Legacy => legacy_text_metadata(&filename, &now),
            };

            Chunk {
                id,
                content: Some(piece.clone()),
                url: Some(format!("file://{storage_path}#chunk-{index}")),
                metadata,
                ..Chunk::default()
            }
        })
        .collect();

    Ok(chunks)
}

pub fn build_image_chunk(path: &Path, bytes: &[u8], mode: SchemaMode) -> Result<Chunk, IngestError> {
    let filename = file_name(path)?;
    let storage_path = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let image_format = format!(".{}", extension.to_ascii_lowercase());
    let encoded = STANDARD.encode(bytes);
    let id = Uuid::new_v4().to_string();
    let now = timestamp();

    let mut metadata = match mode.generation {
        SchemaGeneration::Modern => {
            let mut fields = modern_fields(&id, &filename, &storage_path, &now);
            fields.insert("is_chunked".into(), json!(false));
            fields.insert("total_chunks".into(), json!(1));
            fields.insert("chunk_index".into(), json!(0));
            fields.insert("chunk_sizes".into(), json!([bytes.len()]));
            fields.insert("type".into(), json!("image"));
            fields.insert("content_type".into(), json!("image"));
            fields.insert("content".into(), json!(""));
            fields
        }
        SchemaGeneration::Legacy => {
            let mut fields = Metadata::new();
            fields.insert("type".into(), json!("image"));
            fields.insert("filename".into(), json!(filename));
            fields.insert("date_added".into(), json!(now));
            fields.insert("storage_path".into(), json!(storage_path));
            fields
        }
    };
    metadata.insert("file_size".into(), json!(bytes.len()));
    metadata.insert("image_format".into(), json!(image_format));
    metadata.insert("image_size".into(), json!(bytes.len()));

    Ok(Chunk {
        id,
        image: Some(format!("data:image/{extension};base64,{encoded}")),
        image_data: Some(encoded),
        url: Some(format!("file://{storage_path}")),
        metadata,
        ..Chunk::default()
    })
}

fn modern_fields(id: &str, filename: &str, storage_path: &str, now: &str) -> Metadata {
    let mut fields = Metadata::new();
    fields.insert("id".into(), json!(id));
    fields.insert("added_date".into(), json!(now));
    fields.insert("creation_date".into(), json!(now));
    fields.insert("modified_date".into(), json!(now));
    fields.insert("creator".into(), json!(""));
    fields.insert("producer".into(), json!(""));
    fields.insert("title".into(), json!(filename));
    fields.insert("ai_summary".into(), json!(""));
    fields.insert("filename".into(), json!(filename));
    fields.insert("original_filename".into(), json!(filename));
    fields.insert("storage_path".into(), json!(storage_path));
    fields
}

fn legacy_text_metadata(filename: &str, now: &str) -> Metadata {
    let nested = json!({
        "type": "text",
        "filename": filename,
        "date_added": now,
    });
    let mut metadata = Metadata::new();
    metadata.insert("metadata".into(), Value::String(nested.to_string()));
    metadata
}

fn encode(fields: Metadata, mode: MetadataMode) -> Metadata {
    match mode {
        MetadataMode::Flat => fields,
        MetadataMode::Json => {
            let mut metadata = Metadata::new();
            metadata.insert(
                "metadata".into(),
                Value::String(Value::Object(fields).to_string()),
            );
            metadata
        }
    }
}

fn file_name(path: &Path) -> Result<String, IngestError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| IngestError::MissingFileName(path.display().to_string()))
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
