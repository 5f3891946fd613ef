//! Flattens a structured [`MorphBundle`] into present-only feature entries.

use crate::analysis::MorphBundle;
use crate::annotation::FeatureSet;

/// Appends one feature per supplied bundle attribute, in canonical order.
/// Values pass through verbatim; absent attributes are omitted entirely.
pub fn flatten(bundle: &MorphBundle, features: &mut FeatureSet) {
    let attrs: [(&str, &Option<String>); 16] = [
        ("animacy", &bundle.animacy),
        ("aspect", &bundle.aspect),
        ("case", &bundle.case),
        ("definiteness", &bundle.definiteness),
        ("degree", &bundle.degree),
        ("gender", &bundle.gender),
        ("mood", &bundle.mood),
        ("number", &bundle.number),
        ("num_type", &bundle.num_type),
        ("person", &bundle.person),
        ("pron_type", &bundle.pron_type),
        ("possessive", &bundle.possessive),
        ("reflex", &bundle.reflex),
        ("tense", &bundle.tense),
        ("voice", &bundle.voice),
        ("verb_form", &bundle.verb_form),
    ];

    for (name, value) in attrs {
        if let Some(value) = value {
            features.insert(name, value.clone());
        }
    }
}
