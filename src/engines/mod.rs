//! Tagger engine boundary. Engines produce ordered [`RawAnalysis`] values
//! for a document; everything downstream of that is the normalizer's job.

pub mod external;

pub use external::ExternalTagger;

use std::process::ExitStatus;
use std::string::FromUtf8Error;

use async_trait::async_trait;

use crate::analysis::{PayloadKind, RawAnalysis};

/// One analysis request: which language model to load and the document text
/// to run through it.
#[derive(Debug, Clone)]
pub struct TagRequest {
    pub language: String,
    pub variant: Option<String>,
    pub text: String,
}

impl TagRequest {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        TagRequest {
            language: language.into(),
            variant: None,
            text: text.into(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tagger process failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("tagger exited with {0}")]
    Status(ExitStatus),

    #[error("tagger emitted invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("cannot parse tagger output line {0:?}")]
    Protocol(String),

    #[error("{0} payloads cannot be carried over the external line protocol")]
    Unsupported(PayloadKind),

    #[error(transparent)]
    Normalize(#[from] crate::normalize::Error),
}

/// A morphological tagger engine. Implementations must emit analyses ordered
/// by non-decreasing start offset, with analyses for the same span adjacent.
#[async_trait]
pub trait Tagger: Send + Sync {
    /// Provenance marker recorded on every annotation this engine produces.
    fn name(&self) -> &str;

    /// The payload variant every analysis from this engine carries.
    fn payload_kind(&self) -> PayloadKind;

    async fn analyze(&self, request: &TagRequest) -> Result<Vec<RawAnalysis>, Error>;
}
