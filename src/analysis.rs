use serde::{Deserialize, Serialize};

/// Structured morphological attributes as delivered by bundle-producing
/// taggers. Every attribute is optional; a tagger that does not assign one
/// leaves it `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphBundle {
    pub animacy: Option<String>,
    pub aspect: Option<String>,
    pub case: Option<String>,
    pub definiteness: Option<String>,
    pub degree: Option<String>,
    pub gender: Option<String>,
    pub mood: Option<String>,
    pub number: Option<String>,
    pub num_type: Option<String>,
    pub person: Option<String>,
    pub pron_type: Option<String>,
    pub possessive: Option<String>,
    pub reflex: Option<String>,
    pub tense: Option<String>,
    pub voice: Option<String>,
    pub verb_form: Option<String>,
}

/// The analysis a tagger attaches to one token or sub-token unit. Which
/// variant a given engine produces is fixed and declared up front via
/// [`PayloadKind`]; it is never auto-detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// Named optional attributes, already structured by the engine.
    Bundle(MorphBundle),
    /// Packed `key=value|key=value` cluster, or the `_` no-analysis sentinel.
    Compact(String),
    /// Concatenated lemma + `<tag>` chain from a compound-aware analyzer.
    Chain(String),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Bundle(_) => PayloadKind::Bundle,
            Payload::Compact(_) => PayloadKind::Compact,
            Payload::Chain(_) => PayloadKind::Chain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadKind {
    Bundle,
    Compact,
    Chain,
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadKind::Bundle => f.write_str("bundle"),
            PayloadKind::Compact => f.write_str("compact"),
            PayloadKind::Chain => f.write_str("chain"),
        }
    }
}

/// One tagger output record, before normalization. `start` and `end` are
/// character offsets into the source text with `start < end`; the surface
/// form is derived from the text by the normalizer, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnalysis {
    pub start: usize,
    pub end: usize,
    pub payload: Payload,
}

impl RawAnalysis {
    pub fn new(start: usize, end: usize, payload: Payload) -> Self {
        RawAnalysis {
            start,
            end,
            payload,
        }
    }

    pub fn bundle(start: usize, end: usize, bundle: MorphBundle) -> Self {
        Self::new(start, end, Payload::Bundle(bundle))
    }

    pub fn compact(start: usize, end: usize, raw: impl Into<String>) -> Self {
        Self::new(start, end, Payload::Compact(raw.into()))
    }

    pub fn chain(start: usize, end: usize, raw: impl Into<String>) -> Self {
        Self::new(start, end, Payload::Chain(raw.into()))
    }
}
