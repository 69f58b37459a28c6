use crate::metadata::{decode_nested, effective_metadata, string_field};
use crate::models::{Chunk, Metadata, VirtualDocument};

const IMAGE_KEYS: [&str; 3] = ["image", "image_data", "base64_data"];
const BASE64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";
const BASE64_MIN_LEN: usize = 100;
const BASE64_SAMPLE: usize = 200;
const BASE64_RATIO: f64 = 0.8;

pub fn is_image(metadata: &Metadata) -> bool {
    if IMAGE_KEYS.iter().any(|key| metadata.contains_key(*key)) {
        return true;
    }
    if declares_image(metadata) {
        return true;
    }
    decode_nested(metadata).is_some_and(|nested| declares_image(&nested))
}

pub fn is_image_chunk(chunk: &Chunk) -> bool {
    chunk.has_image_payload()
        || is_image(&chunk.metadata)
        || is_image(&effective_metadata(chunk))
}

pub fn is_image_group(document: &VirtualDocument) -> bool {
    document.chunks.iter().any(is_image_chunk)
}

pub fn looks_like_base64(content: &str) -> bool {
    if content.len() < BASE64_MIN_LEN {
        return false;
    }

    let (sampled, matching) = content
        .chars()
        .take(BASE64_SAMPLE)
        .fold((0usize, 0usize), |(sampled, matching), ch| {
            let hit = usize::from(BASE64_ALPHABET.contains(ch));
            (sampled + 1, matching + hit)
        });

    sampled > 0 && (matching as f64 / sampled as f64) > BASE64_RATIO
}

fn declares_image(metadata: &Metadata) -> bool {
    string_field(metadata, "content_type") == Some("image")
}
