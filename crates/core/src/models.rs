use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Metadata = Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        alias = "imageData",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Chunk {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn content_len(&self) -> usize {
        self.content.as_deref().map_or(0, str::len)
    }

    pub fn has_image_payload(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.image) || present(&self.image_data)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameSource {
    OriginalFilename,
    Filename,
    Nested,
    ChunkUrl,
    Standalone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFilename {
    pub filename: String,
    pub metadata: Metadata,
    pub chunk_index: Option<u64>,
    pub source: FilenameSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualDocument {
    pub original_filename: String,
    pub total_chunks: usize,
    pub chunks: Vec<Chunk>,
    pub metadata: Metadata,
}

impl VirtualDocument {
    pub fn is_image(&self) -> bool {
        crate::content::is_image_group(self)
    }

    pub fn kind(&self) -> ContentKind {
        if self.is_image() {
            ContentKind::Image
        } else {
            ContentKind::Text
        }
    }

    pub fn display_count(&self) -> usize {
        if self.total_chunks == 0 {
            self.chunks.len()
        } else {
            self.total_chunks
        }
    }

    pub fn chunk_ids(&self) -> Vec<String> {
        self.chunks.iter().map(|chunk| chunk.id.clone()).collect()
    }

    pub fn summary(&self) -> VirtualDocumentSummary {
        VirtualDocumentSummary {
            original_filename: self.original_filename.clone(),
            kind: self.kind(),
            total_chunks: self.total_chunks,
            fetched_chunks: self.chunks.len(),
            chunk_ids: self.chunk_ids(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VirtualDocumentSummary {
    pub original_filename: String,
    pub kind: ContentKind,
    pub total_chunks: usize,
    pub fetched_chunks: usize,
    pub chunk_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionSummary {
    pub collection: String,
    pub fetched_chunks: usize,
    pub virtual_documents: usize,
    pub text_documents: usize,
    pub text_chunks: usize,
    pub image_stacks: usize,
    pub images: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SchemaGeneration {
    Legacy,
    Modern,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MetadataMode {
    Flat,
    Json,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SchemaMode {
    pub generation: SchemaGeneration,
    pub metadata_mode: MetadataMode,
}

impl Default for SchemaMode {
    fn default() -> Self {
        Self {
            generation: SchemaGeneration::Modern,
            metadata_mode: MetadataMode::Flat,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestionOptions {
    pub chunk_size: usize,
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self { chunk_size: 1_000 }
    }
}
