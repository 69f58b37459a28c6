use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid response from {backend}: {details}")]
    BackendResponse { backend: String, details: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("collection {0} does not exist")]
    CollectionNotFound(String),

    #[error("document with ID {id} not found in collection {collection}")]
    DocumentNotFound { collection: String, id: String },

    #[error("store request failed: {0}")]
    Request(String),
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("path has no file name: {0}")]
    MissingFileName(String),

    #[error("no ingestible files found in {0}")]
    EmptyFolder(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error("invalid metadata filter {0} (expected key=value)")]
    InvalidFilter(String),
}
