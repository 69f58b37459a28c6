pub mod memory;
pub mod weaviate;

pub use memory::InMemoryStore;
pub use weaviate::WeaviateStore;
