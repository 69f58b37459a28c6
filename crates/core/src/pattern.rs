use crate::error::PatternError;
use crate::metadata::decode_nested_chain;
use crate::models::{Chunk, Metadata};
use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const REGEX_MARKERS: [&str; 7] = ["^", "$", "\\d", "\\w", "\\s", "|", ".*"];
const GLOB_MARKERS: [char; 3] = ['*', '?', '['];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Glob,
    Regex,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Glob => f.write_str("glob"),
            PatternKind::Regex => f.write_str("regex"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Glob(GlobMatcher),
    Regex(Regex),
}

impl Matcher {
    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            Matcher::Exact(expected) => expected == candidate,
            Matcher::Glob(glob) => glob.is_match(candidate),
            Matcher::Regex(regex) => regex.is_match(candidate),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    kind: PatternKind,
    matcher: Matcher,
}

impl Pattern {
    pub fn new(raw: impl Into<String>) -> Result<Self, PatternError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        let kind = classify(&raw);
        let matcher = compile(&raw, kind)?;
        debug!(pattern = %raw, %kind, "compiled selection pattern");
        Ok(Self { raw, kind, matcher })
    }

    pub fn exact(name: impl Into<String>) -> Self {
        let raw = name.into();
        Self {
            matcher: Matcher::Exact(raw.clone()),
            raw,
            kind: PatternKind::Glob,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.matcher.is_match(candidate)
    }

    pub fn filter<'a, I>(&self, candidates: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.is_match(candidate))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFilter {
    pub key: String,
    pub value: String,
}

impl FromStr for MetadataFilter {
    type Err = PatternError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(PatternError::InvalidFilter(raw.to_string())),
        }
    }
}

impl MetadataFilter {
    pub fn matches_metadata(&self, metadata: &Metadata) -> bool {
        match metadata.get(&self.key) {
            Some(Value::String(text)) => *text == self.value,
            Some(other) => other.to_string() == self.value,
            None => false,
        }
    }

    // Top-level properties first, then the decoded nested object.
    pub fn matches(&self, chunk: &Chunk) -> bool {
        self.matches_metadata(&chunk.metadata)
            || decode_nested_chain(&chunk.metadata)
                .is_some_and(|nested| self.matches_metadata(&nested))
    }
}

pub fn matches_all(filters: &[MetadataFilter], chunk: &Chunk) -> bool {
    !filters.is_empty() && filters.iter().all(|filter| filter.matches(chunk))
}

pub fn classify(pattern: &str) -> PatternKind {
    let has_marker = REGEX_MARKERS.iter().any(|marker| pattern.contains(marker));
    let has_group = pattern.contains('(') && pattern.contains(')');

    if has_marker || has_group {
        PatternKind::Regex
    } else {
        PatternKind::Glob
    }
}

pub fn compile(pattern: &str, kind: PatternKind) -> Result<Matcher, PatternError> {
    match kind {
        PatternKind::Regex => match Regex::new(pattern) {
            Ok(regex) => Ok(Matcher::Regex(regex)),
            Err(error) => {
                debug!(pattern, %error, "regex rejected, retrying as glob");
                compile_glob(pattern)
            }
        },
        PatternKind::Glob => compile_glob(pattern),
    }
}

fn compile_glob(pattern: &str) -> Result<Matcher, PatternError> {
    if !pattern.contains(GLOB_MARKERS) {
        return Ok(Matcher::Exact(pattern.to_string()));
    }
    let glob = GlobBuilder::new(&escape_alternates(pattern))
        .literal_separator(false)
        .backslash_escape(true)
        .build()?;
    Ok(Matcher::Glob(glob.compile_matcher()))
}

// Braces and commas are literal in shell globs; only `*`, `?` and `[...]` are special.
fn escape_alternates(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                escaped.push(ch);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                escaped.push(ch);
                if let Some(negation) = chars.next_if(|next| *next == '!' || *next == '^') {
                    escaped.push(negation);
                }
                if let Some(bracket) = chars.next_if(|next| *next == ']') {
                    escaped.push(bracket);
                }
            }
            ']' if in_class => {
                in_class = false;
                escaped.push(ch);
            }
            '{' | '}' | ',' if !in_class => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
