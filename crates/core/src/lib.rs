pub mod aggregate;
pub mod content;
pub mod error;
pub mod ingest;
pub mod metadata;
pub mod models;
pub mod pattern;
pub mod schema;
pub mod service;
pub mod stores;
pub mod traits;

pub use aggregate::{aggregate, summarize};
pub use content::{is_image, is_image_chunk, is_image_group, looks_like_base64};
pub use error::{IngestError, PatternError, StoreError};
pub use ingest::{chunk_text, classify_file, discover_files, FileKind};
pub use metadata::{resolve_original_filename, standalone_key};
pub use models::{
    Chunk, CollectionSummary, ContentKind, FilenameSource, IngestionOptions, Metadata,
    MetadataMode, ResolvedFilename, SchemaGeneration, SchemaMode, VirtualDocument,
    VirtualDocumentSummary,
};
pub use pattern::{MetadataFilter, Pattern, PatternKind};
pub use schema::{classify_generation, classify_image_generation, classify_metadata_mode};
pub use service::{
    CollectionDeletionReport, DeletionReport, DocumentService, IngestReport, SkippedFile,
    DEFAULT_SELECTION_LIMIT,
};
pub use stores::{InMemoryStore, WeaviateStore};
pub use traits::DocumentStore;
