use crate::traits::DocumentStore;
use crate::{Chunk, StoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default, Clone)]
struct MemoryCollection {
    properties: Vec<String>,
    chunks: Vec<Chunk>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<BTreeMap<String, MemoryCollection>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let store = Self::new();
        let json_props = ["content", "url", "metadata"];

        let docs = vec![
            nested_chunk(
                "doc1-chunk1",
                "First chunk of a guide about supervised learning algorithms.",
                r#"{"original_filename": "ml_guide.pdf", "is_chunked": true, "chunk_index": 0, "total_chunks": 3}"#,
            ),
            nested_chunk(
                "doc1-chunk2",
                "Second chunk on neural networks and deep learning architectures.",
                r#"{"original_filename": "ml_guide.pdf", "is_chunked": true, "chunk_index": 1, "total_chunks": 3}"#,
            ),
            nested_chunk(
                "doc1-chunk3",
                "Final chunk covering practical applications and best practices.",
                r#"{"original_filename": "ml_guide.pdf", "is_chunked": true, "chunk_index": 2, "total_chunks": 3}"#,
            ),
            Chunk::new("doc2-single")
                .with_content("A single document about data preprocessing and feature engineering.")
                .with_metadata("author", "Test Author")
                .with_metadata("topic", "Data Preprocessing")
                .with_metadata("year", "2024"),
            nested_chunk(
                "doc3-chunk1",
                "First chunk about data science methodologies.",
                r#"{"original_filename": "data_science.pdf", "is_chunked": true, "chunk_index": 0, "total_chunks": 2}"#,
            ),
            nested_chunk(
                "doc3-chunk2",
                "Second chunk covering visualization and reporting.",
                r#"{"original_filename": "data_science.pdf", "is_chunked": true, "chunk_index": 1, "total_chunks": 2}"#,
            ),
        ];
        let images = vec![
            nested_chunk(
                "img1-page1",
                "Image extracted from page 1 of document.pdf",
                r#"{"original_filename": "document.pdf", "page_number": 1, "image_type": "chart", "content_type": "image"}"#,
            ),
            nested_chunk(
                "img1-page2",
                "Image extracted from page 2 of document.pdf",
                r#"{"original_filename": "document.pdf", "page_number": 2, "image_type": "diagram", "content_type": "image"}"#,
            ),
            nested_chunk(
                "img2-single",
                "Standalone image from presentation.pptx",
                r#"{"original_filename": "presentation.pptx", "slide_number": 5, "image_type": "screenshot", "content_type": "image"}"#,
            ),
        ];

        if let Ok(mut collections) = store.collections.write() {
            collections.insert(
                "WeaveDocs".to_string(),
                MemoryCollection {
                    properties: json_props.iter().map(|p| p.to_string()).collect(),
                    chunks: docs,
                },
            );
            collections.insert(
                "WeaveImages".to_string(),
                MemoryCollection {
                    properties: json_props.iter().map(|p| p.to_string()).collect(),
                    chunks: images,
                },
            );
        }
        store
    }

    pub fn create_collection(
        &self,
        name: impl Into<String>,
        properties: &[&str],
    ) -> Result<(), StoreError> {
        let name = name.into();
        let mut collections = self.write()?;
        if collections.contains_key(&name) {
            return Err(StoreError::Request(format!("collection '{name}' already exists")));
        }
        collections.insert(
            name,
            MemoryCollection {
                properties: properties.iter().map(|p| p.to_string()).collect(),
                chunks: Vec::new(),
            },
        );
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, MemoryCollection>>, StoreError> {
        self.collections
            .read()
            .map_err(|_| StoreError::Request("in-memory store lock poisoned".to_string()))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<String, MemoryCollection>>, StoreError> {
        self.collections
            .write()
            .map_err(|_| StoreError::Request("in-memory store lock poisoned".to_string()))
    }
}

fn nested_chunk(id: &str, content: &str, metadata: &str) -> Chunk {
    Chunk::new(id)
        .with_content(content)
        .with_metadata("metadata", metadata)
}

fn not_found(collection: &str) -> StoreError {
    StoreError::CollectionNotFound(collection.to_string())
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.keys().cloned().collect())
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<Chunk>, StoreError> {
        let collections = self.read()?;
        let target = collections.get(collection).ok_or_else(|| not_found(collection))?;
        let take = if limit == 0 { usize::MAX } else { limit };
        Ok(target.chunks.iter().take(take).cloned().collect())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Chunk, StoreError> {
        let collections = self.read()?;
        let target = collections.get(collection).ok_or_else(|| not_found(collection))?;
        target
            .chunks
            .iter()
            .find(|chunk| chunk.id == id)
            .cloned()
            .ok_or_else(|| StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }

    async fn create_document(&self, collection: &str, chunk: &Chunk) -> Result<(), StoreError> {
        let mut collections = self.write()?;
        let target = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection))?;
        if target.chunks.iter().any(|existing| existing.id == chunk.id) {
            return Err(StoreError::Request(format!(
                "document with ID '{}' already exists in collection '{collection}'",
                chunk.id
            )));
        }
        target.chunks.push(chunk.clone());
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.write()?;
        let target = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection))?;
        let before = target.chunks.len();
        target.chunks.retain(|chunk| chunk.id != id);
        if target.chunks.len() == before {
            return Err(StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_documents_bulk(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<usize, StoreError> {
        let wanted = ids.iter().map(String::as_str).collect::<HashSet<_>>();
        let mut collections = self.write()?;
        let target = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection))?;
        let before = target.chunks.len();
        target.chunks.retain(|chunk| !wanted.contains(chunk.id.as_str()));
        Ok(before - target.chunks.len())
    }

    async fn collection_schema(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let collections = self.read()?;
        collections
            .get(collection)
            .map(|target| target.properties.clone())
            .ok_or_else(|| not_found(collection))
    }

    async fn delete_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.write()?
            .remove(collection)
            .map(|_| ())
            .ok_or_else(|| not_found(collection))
    }
}
