use crate::models::{Chunk, FilenameSource, Metadata, ResolvedFilename};
use serde_json::Value;
use tracing::debug;

pub const MAX_NESTING_DEPTH: usize = 2;

const NESTED_KEY: &str = "metadata";
const CHUNK_FRAGMENT: &str = "#chunk-";

pub fn resolve_original_filename(chunk: &Chunk) -> ResolvedFilename {
    let top = &chunk.metadata;

    if let Some(filename) = string_field(top, "original_filename") {
        return resolved(filename, top.clone(), None, FilenameSource::OriginalFilename);
    }
    if let Some(filename) = string_field(top, "filename") {
        return resolved(filename, top.clone(), None, FilenameSource::Filename);
    }

    let nested = decode_nested_chain(top);
    if let Some(deepest) = &nested {
        if let Some(filename) = filename_field(deepest) {
            return resolved(filename, deepest.clone(), None, FilenameSource::Nested);
        }
    }

    let metadata = nested.unwrap_or_else(|| top.clone());
    let chunk_url = [
        chunk.url.as_deref(),
        string_field(top, "url"),
        string_field(&metadata, "url"),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_chunk_url);

    if let Some((filename, index)) = chunk_url {
        return resolved(filename, metadata, Some(index), FilenameSource::ChunkUrl);
    }

    let key = standalone_key(chunk);
    debug!(chunk_id = %chunk.id, key = %key, "no filename signal, using standalone key");
    resolved(key, metadata, None, FilenameSource::Standalone)
}

// Chunks sharing an id prefix and content length collide.
pub fn standalone_key(chunk: &Chunk) -> String {
    let prefix: String = chunk.id.chars().take(8).collect();
    format!("standalone-{prefix}-{}", chunk.content_len())
}

pub fn parse_chunk_url(url: &str) -> Option<(String, u64)> {
    let (path, index) = url.rsplit_once(CHUNK_FRAGMENT)?;
    let index = index.parse::<u64>().ok()?;
    let path = path.strip_prefix("file://").unwrap_or(path);
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if base.is_empty() {
        return None;
    }
    Some((base.to_string(), index))
}

pub fn decode_nested(metadata: &Metadata) -> Option<Metadata> {
    match metadata.get(NESTED_KEY)? {
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(decoded)) => Some(decoded),
            Ok(_) => None,
            Err(error) => {
                debug!(%error, "nested metadata is not valid JSON");
                None
            }
        },
        Value::Object(map) => Some(map.clone()),
        _ => None,
    }
}

pub fn decode_nested_chain(metadata: &Metadata) -> Option<Metadata> {
    let mut deepest = decode_nested(metadata)?;
    for _ in 1..MAX_NESTING_DEPTH {
        match decode_nested(&deepest) {
            Some(next) => deepest = next,
            None => break,
        }
    }
    Some(deepest)
}

pub fn effective_metadata(chunk: &Chunk) -> Metadata {
    decode_nested_chain(&chunk.metadata).unwrap_or_else(|| chunk.metadata.clone())
}

pub fn string_field<'a>(metadata: &'a Metadata, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(Value::as_str)
}

fn filename_field(metadata: &Metadata) -> Option<&str> {
    string_field(metadata, "original_filename").or_else(|| string_field(metadata, "filename"))
}

fn resolved(
    filename: impl Into<String>,
    metadata: Metadata,
    chunk_index: Option<u64>,
    source: FilenameSource,
) -> ResolvedFilename {
    ResolvedFilename {
        filename: filename.into(),
        metadata,
        chunk_index,
        source,
    }
}
