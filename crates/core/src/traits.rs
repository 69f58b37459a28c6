use crate::{Chunk, StoreError};
use async_trait::async_trait;

#[async_trait]
pub trait DocumentStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    // A limit of 0 means no limit.
    async fn list_documents(&self, collection: &str, limit: usize)
        -> Result<Vec<Chunk>, StoreError>;

    async fn get_document(&self, collection: &str, id: &str) -> Result<Chunk, StoreError>;

    async fn create_document(&self, collection: &str, chunk: &Chunk) -> Result<(), StoreError>;

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn delete_documents_bulk(
        &self,
        collection: &str,
        ids: &[String],
    ) -> Result<usize, StoreError>;

    async fn collection_schema(&self, collection: &str) -> Result<Vec<String>, StoreError>;

    async fn delete_collection(&self, collection: &str) -> Result<(), StoreError>;
}
