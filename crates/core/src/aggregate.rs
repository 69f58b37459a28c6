use crate::content::is_image_group;
use crate::metadata::resolve_original_filename;
use crate::models::{Chunk, CollectionSummary, ContentKind, Metadata, VirtualDocument};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

pub fn aggregate<I>(chunks: I) -> Vec<VirtualDocument>
where
    I: IntoIterator<Item = Chunk>,
{
    let mut groups = BTreeMap::<String, VirtualDocument>::new();

    for chunk in chunks {
        let resolved = resolve_original_filename(&chunk);
        match groups.entry(resolved.filename) {
            Entry::Occupied(mut group) => group.get_mut().chunks.push(chunk),
            Entry::Vacant(slot) => {
                let original_filename = slot.key().clone();
                slot.insert(VirtualDocument {
                    original_filename,
                    total_chunks: declared_total(&resolved.metadata),
                    chunks: vec![chunk],
                    metadata: resolved.metadata,
                });
            }
        }
    }

    for group in groups.values_mut() {
        if group.total_chunks == 0 && !group.chunks.is_empty() && !is_image_group(group) {
            group.total_chunks = group.chunks.len();
        }
    }

    debug!(groups = groups.len(), "aggregated virtual documents");
    groups.into_values().collect()
}

pub fn summarize(collection: &str, documents: &[VirtualDocument]) -> CollectionSummary {
    let mut summary = CollectionSummary {
        collection: collection.to_string(),
        virtual_documents: documents.len(),
        ..CollectionSummary::default()
    };

    for document in documents {
        summary.fetched_chunks += document.chunks.len();
        match document.kind() {
            ContentKind::Image => {
                summary.image_stacks += 1;
                summary.images += document.display_count();
            }
            ContentKind::Text => {
                summary.text_documents += 1;
                summary.text_chunks += document.display_count();
            }
        }
    }

    summary
}

fn declared_total(metadata: &Metadata) -> usize {
    metadata
        .get("chunk_sizes")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn nested(id: &str, json: &str) -> Chunk {
        Chunk::new(id)
            .with_content(format!("content of {id}"))
            .with_metadata("metadata", json)
    }

    fn id_sets(documents: &[VirtualDocument]) -> BTreeSet<BTreeSet<String>> {
        documents
            .iter()
            .map(|document| document.chunk_ids().into_iter().collect())
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn every_chunk_lands_in_exactly_one_group() {
        let chunks = vec![
            nested("a-1", r#"{"original_filename": "a.pdf"}"#),
            nested("a-2", r#"{"original_filename": "a.pdf"}"#),
            Chunk::new("loose-chunk").with_content("x"),
            Chunk::new("b-0").with_url("file:///b.txt#chunk-0"),
        ];
        let documents = aggregate(chunks.clone());
        let total: usize = documents.iter().map(|document| document.chunks.len()).sum();
        assert_eq!(total, chunks.len());
        assert_eq!(documents.len(), 3);
    }

    #[test]
    fn chunk_sizes_sets_total_chunks() {
        let chunks = (0..2)
            .map(|index| {
                Chunk::new(format!("f-{index}"))
                    .with_metadata("original_filename", "f.txt")
                    .with_metadata("chunk_sizes", vec![10, 20, 30])
            })
            .collect::<Vec<_>>();
        let documents = aggregate(chunks);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].original_filename, "f.txt");
        assert_eq!(documents[0].total_chunks, 3);
        assert_eq!(documents[0].chunks.len(), 2);
    }

    #[test]
    fn chunk_urls_without_filenames_group_and_infer_total() {
        let chunks = (0..3)
            .map(|index| {
                Chunk::new(format!("id-{index}"))
                    .with_content("text")
                    .with_url(format!("file:///a.txt#chunk-{index}"))
            })
            .collect::<Vec<_>>();
        let documents = aggregate(chunks);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].original_filename, "a.txt");
        assert_eq!(documents[0].total_chunks, 3);
    }

    #[test]
    fn image_stacks_keep_zero_total() {
        let chunks = vec![
            nested("img-1", r#"{"original_filename": "deck.pdf", "content_type": "image"}"#),
            nested("img-2", r#"{"original_filename": "deck.pdf", "content_type": "image"}"#),
        ];
        let documents = aggregate(chunks);
        assert_eq!(documents[0].total_chunks, 0);
        assert_eq!(documents[0].display_count(), 2);
        assert!(documents[0].is_image());
    }

    #[test]
    fn first_chunk_metadata_is_representative() {
        let chunks = vec![
            nested("a-1", r#"{"original_filename": "a.pdf", "title": "first"}"#),
            nested("a-2", r#"{"original_filename": "a.pdf", "title": "second"}"#),
        ];
        let documents = aggregate(chunks);
        assert_eq!(
            documents[0].metadata.get("title").and_then(Value::as_str),
            Some("first")
        );
    }

    #[test]
    fn output_is_sorted_bytewise() {
        let chunks = vec![
            Chunk::new("1").with_metadata("filename", "beta.txt"),
            Chunk::new("2").with_metadata("filename", "Zeta.txt"),
            Chunk::new("3").with_metadata("filename", "alpha.txt"),
        ];
        let names = aggregate(chunks)
            .into_iter()
            .map(|document| document.original_filename)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Zeta.txt", "alpha.txt", "beta.txt"]);
    }

    #[test]
    fn grouping_is_independent_of_input_order() {
        let chunks = vec![
            nested("a-1", r#"{"original_filename": "a.pdf"}"#),
            Chunk::new("b-0").with_url("file:///b.txt#chunk-0"),
            nested("a-2", r#"{"original_filename": "a.pdf"}"#),
            Chunk::new("b-1").with_url("file:///b.txt#chunk-1"),
            Chunk::new("standalone").with_content("solo"),
        ];
        let mut reversed = chunks.clone();
        reversed.reverse();
        let mut rotated = chunks.clone();
        rotated.rotate_left(2);

        let expected = id_sets(&aggregate(chunks));
        assert_eq!(id_sets(&aggregate(reversed)), expected);
        assert_eq!(id_sets(&aggregate(rotated)), expected);
    }

    #[test]
    fn standalone_keys_collide_on_prefix_and_length() {
        let chunks = vec![
            Chunk::new("abcdefgh-0001").with_content("same"),
            Chunk::new("abcdefgh-0002").with_content("four"),
        ];
        let documents = aggregate(chunks);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].original_filename, "standalone-abcdefgh-4");
        assert_eq!(documents[0].total_chunks, 2);
    }

    #[test]
    fn summary_counts_text_and_images_separately() {
        let chunks = vec![
            Chunk::new("t-0").with_url("file:///a.txt#chunk-0"),
            Chunk::new("t-1").with_url("file:///a.txt#chunk-1"),
            nested("i-1", r#"{"original_filename": "deck.pdf", "content_type": "image"}"#),
            nested("i-2", r#"{"original_filename": "deck.pdf", "content_type": "image"}"#),
            nested("i-3", r#"{"original_filename": "deck.pdf", "content_type": "image"}"#),
        ];
        let documents = aggregate(chunks);
        let summary = summarize("Mixed", &documents);
        assert_eq!(summary.virtual_documents, 2);
        assert_eq!(summary.fetched_chunks, 5);
        assert_eq!(summary.text_documents, 1);
        assert_eq!(summary.text_chunks, 2);
        assert_eq!(summary.image_stacks, 1);
        assert_eq!(summary.images, 3);
    }
}
