use indexmap::IndexMap;
use serde::Serialize;

use crate::normalize::TagError;

/// Category marker carried by every token annotation.
pub const CATEGORY_TOKEN: &str = "token";

/// Fixed feature keys shared by all payload kinds.
pub mod keys {
    pub const WORD: &str = "word";
    pub const LEMMA: &str = "lemma";
    pub const POS: &str = "pos";
    pub const MORPH_TAG: &str = "morph_tag";
}

/// Ordered feature-name → value mapping. Insertion order is extraction
/// order and survives serialization. A key is only present when the tagger
/// actually supplied a value; absence is expressed by omission, never by a
/// placeholder entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(IndexMap<String, String>);

impl FeatureSet {
    pub fn new() -> Self {
        FeatureSet::default()
    }

    /// Inserts a feature. An existing key keeps its position but takes the
    /// new value (last write wins).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

/// One normalized token annotation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRecord {
    /// `tok{group}`, or `tok{group}_{sub}` when several analyses share the
    /// same source span.
    pub id: String,
    pub category: &'static str,
    pub start: usize,
    pub end: usize,
    pub features: FeatureSet,
    /// Recoverable decode failure for this token only; the rest of the
    /// document's annotations stay valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TagError>,
}

/// The annotations produced for one document, with the provenance marker
/// naming which engine produced them. Opaque to this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub category: &'static str,
    pub producer: String,
    pub records: Vec<AnnotationRecord>,
}
