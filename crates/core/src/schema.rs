use crate::models::{ContentKind, MetadataMode, SchemaGeneration, SchemaMode};
use std::fmt::Display;
use tracing::{debug, warn};

pub const LEGACY_DOCUMENT_ALIASES: [&str; 4] = ["RagMeDocs", "ragmedocs", "ragme-docs", "ragme_docs"];
pub const MODERN_DOCUMENT_ALIASES: [&str; 4] = ["WeaveDocs", "weavedocs", "weave-docs", "weave_docs"];
pub const LEGACY_IMAGE_ALIASES: [&str; 4] =
    ["RagMeImages", "ragmeimages", "ragme-images", "ragme_images"];
pub const MODERN_IMAGE_ALIASES: [&str; 4] =
    ["WeaveImages", "weaveimages", "weave-images", "weave_images"];

const FLAT_MARKERS: [&str; 3] = ["is_chunked", "total_chunks", "chunk_index"];
const JSON_MARKER: &str = "metadata";

pub fn classify_generation(collection: &str) -> SchemaGeneration {
    by_alias(collection, &LEGACY_DOCUMENT_ALIASES, &MODERN_DOCUMENT_ALIASES)
}

pub fn classify_image_generation(collection: &str) -> SchemaGeneration {
    by_alias(collection, &LEGACY_IMAGE_ALIASES, &MODERN_IMAGE_ALIASES)
}

pub fn classify_generation_for(collection: &str, kind: ContentKind) -> SchemaGeneration {
    match kind {
        ContentKind::Text => classify_generation(collection),
        ContentKind::Image => classify_image_generation(collection),
    }
}

pub fn classify_metadata_mode<F, E>(collection: &str, schema_fetch: F) -> MetadataMode
where
    F: FnOnce() -> Result<Vec<String>, E>,
    E: Display,
{
    let properties = match schema_fetch() {
        Ok(properties) => properties,
        Err(error) => {
            warn!(collection, %error, "schema unavailable, defaulting to flat metadata");
            return MetadataMode::Flat;
        }
    };

    let has = |name: &str| properties.iter().any(|property| property == name);
    let mode = if FLAT_MARKERS.iter().any(|marker| has(marker)) {
        MetadataMode::Flat
    } else if has(JSON_MARKER) {
        MetadataMode::Json
    } else {
        MetadataMode::Flat
    };

    debug!(collection, ?mode, "classified metadata mode");
    mode
}

pub fn classify_schema_mode<F, E>(collection: &str, kind: ContentKind, schema_fetch: F) -> SchemaMode
where
    F: FnOnce() -> Result<Vec<String>, E>,
    E: Display,
{
    SchemaMode {
        generation: classify_generation_for(collection, kind),
        metadata_mode: classify_metadata_mode(collection, schema_fetch),
    }
}

fn by_alias(collection: &str, legacy: &[&str], modern: &[&str]) -> SchemaGeneration {
    let matches = |aliases: &[&str]| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(collection));
    if matches(modern) {
        SchemaGeneration::Modern
    } else if matches(legacy) {
        SchemaGeneration::Legacy
    } else {
        SchemaGeneration::Modern
    }
}
