//! Turns a tagger's ordered raw analyses for one document into normalized
//! [`AnnotationRecord`]s. Pure and synchronous; each call owns all of its
//! state, so separate documents can be normalized concurrently without any
//! shared state.

pub mod chain;
pub mod compact;
pub mod flatten;

use serde::Serialize;

use crate::analysis::{Payload, PayloadKind, RawAnalysis};
use crate::annotation::{keys, AnnotationRecord, Annotations, FeatureSet, CATEGORY_TOKEN};

/// Recoverable, per-token decode failure. Attached to the offending token's
/// record; the rest of the document's annotations stay usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum TagError {
    #[error("segment {segment:?} in morph tag {raw:?} has no `=` separator (token {start}..{end})")]
    MalformedSegment {
        segment: String,
        raw: String,
        start: usize,
        end: usize,
    },
}

/// Fatal boundary errors. These indicate a misconfigured engine rather than
/// bad input on a single token, so they abort the whole document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tagger declares {expected} payloads but analysis at {start}..{end} carries {found}")]
    PayloadMismatch {
        expected: PayloadKind,
        found: PayloadKind,
        start: usize,
        end: usize,
    },
    #[error("invalid span {start}..{end}: start must be smaller than end")]
    InvalidSpan { start: usize, end: usize },
    #[error("span {start}..{end} is out of bounds for a document of {len} characters")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Groups raw analyses by source span, assigns stable ids and drives the
/// per-kind feature extraction.
#[derive(Debug, Clone)]
pub struct Normalizer {
    kind: PayloadKind,
    producer: String,
}

impl Normalizer {
    /// `kind` is the payload variant the engine is known to produce;
    /// `producer` is the opaque provenance marker passed through to the
    /// output.
    pub fn new(kind: PayloadKind, producer: impl Into<String>) -> Self {
        Normalizer {
            kind,
            producer: producer.into(),
        }
    }

    /// Normalizes one document. `analyses` must be ordered by non-decreasing
    /// `start` (analyses sharing a span contiguous); this is the engine's
    /// delivery order and is not re-sorted here. A new group begins whenever
    /// `start` differs from the immediately preceding analysis.
    pub fn normalize(&self, text: &str, analyses: &[RawAnalysis]) -> Result<Annotations, Error> {
        let mut records = Vec::with_capacity(analyses.len());

        let mut group_index = 0usize;
        let mut i = 0usize;
        while i < analyses.len() {
            let start = analyses[i].start;
            let mut j = i;
            while j < analyses.len() && analyses[j].start == start {
                j += 1;
            }
            let members = &analyses[i..j];

            for (sub_index, analysis) in members.iter().enumerate() {
                let id = if members.len() == 1 {
                    format!("tok{group_index}")
                } else {
                    format!("tok{group_index}_{sub_index}")
                };
                records.push(self.annotate(id, text, analysis)?);
            }

            group_index += 1;
            i = j;
        }

        Ok(Annotations {
            category: CATEGORY_TOKEN,
            producer: self.producer.clone(),
            records,
        })
    }

    fn annotate(
        &self,
        id: String,
        text: &str,
        analysis: &RawAnalysis,
    ) -> Result<AnnotationRecord, Error> {
        let found = analysis.payload.kind();
        if found != self.kind {
            return Err(Error::PayloadMismatch {
                expected: self.kind,
                found,
                start: analysis.start,
                end: analysis.end,
            });
        }
        if analysis.start >= analysis.end {
            return Err(Error::InvalidSpan {
                start: analysis.start,
                end: analysis.end,
            });
        }

        let word =
            slice_chars(text, analysis.start, analysis.end).ok_or(Error::SpanOutOfBounds {
                start: analysis.start,
                end: analysis.end,
                len: text.chars().count(),
            })?;

        let mut features = FeatureSet::new();
        features.insert(keys::WORD, word);
        let mut error = None;

        match &analysis.payload {
            Payload::Bundle(bundle) => {
                flatten::flatten(bundle, &mut features);
            }
            Payload::Compact(raw) => {
                match compact::split(raw) {
                    Ok(pairs) => {
                        for (key, value) in pairs {
                            features.insert(key, value);
                        }
                    }
                    Err(compact::MalformedSegment(segment)) => {
                        let err = TagError::MalformedSegment {
                            segment,
                            raw: raw.clone(),
                            start: analysis.start,
                            end: analysis.end,
                        };
                        tracing::warn!("{err}");
                        error = Some(err);
                    }
                }
                features.insert(keys::MORPH_TAG, raw.clone());
            }
            Payload::Chain(raw) => {
                let decomposed = chain::decompose(raw);
                features.insert(keys::LEMMA, decomposed.lemma);
                features.insert(keys::POS, decomposed.pos);
                features.insert(keys::MORPH_TAG, raw.clone());
            }
        }

        Ok(AnnotationRecord {
            id,
            category: CATEGORY_TOKEN,
            start: analysis.start,
            end: analysis.end,
            features,
            error,
        })
    }
}

/// Slices `text` by character offsets. Spans arrive as character counts, not
/// byte positions, so multi-byte forms like `çalış` need the conversion.
fn slice_chars(text: &str, start: usize, end: usize) -> Option<&str> {
    let begin = char_to_byte(text, start)?;
    let finish = char_to_byte(text, end)?;
    text.get(begin..finish)
}

fn char_to_byte(text: &str, index: usize) -> Option<usize> {
    if index == 0 {
        return Some(0);
    }
    match text.char_indices().nth(index) {
        Some((byte, _)) => Some(byte),
        None => (text.chars().count() == index).then_some(text.len()),
    }
}
