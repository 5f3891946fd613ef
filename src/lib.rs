//! Normalization layer between morphological tagger engines and a uniform
//! token annotation format.
//!
//! Engines emit [`RawAnalysis`] values in one of three payload shapes
//! (structured bundles, packed `key=value` clusters, or lemma + tag chains);
//! the [`Normalizer`] turns them into span-grouped [`AnnotationRecord`]s with
//! stable ids and an ordered feature map. [`annotate`] glues the two halves
//! together for the common case.

pub mod analysis;
pub mod annotation;
pub mod engines;
pub mod normalize;

pub use analysis::{MorphBundle, Payload, PayloadKind, RawAnalysis};
pub use annotation::{AnnotationRecord, Annotations, FeatureSet, CATEGORY_TOKEN};
pub use engines::{ExternalTagger, TagRequest, Tagger};
pub use normalize::{Error, Normalizer, TagError};

/// Runs `request` through `tagger` and normalizes the result in one step.
pub async fn annotate(
    tagger: &(dyn Tagger + Send + Sync),
    request: &TagRequest,
) -> Result<Annotations, engines::Error> {
    let analyses = tagger.analyze(request).await?;
    let normalizer = Normalizer::new(tagger.payload_kind(), tagger.name());
    Ok(normalizer.normalize(&request.text, &analyses)?)
}
