//! Decomposes the concatenated lemma + tag-chain strings produced by
//! compound-aware analyzers (TRmorph, Morphisto, SMOR and friends), e.g.
//! `kranken<V><NN><SUFF>Haus<+NN><Neut><Nom><Sg>`.
//!
//! The input interleaves runs of plain lemma text with `<tag>` segments.
//! Structural tags (compound boundaries, derivation classes) are glued back
//! into the lemma; the final run of self-contained tags is the grammatical
//! tag set and is dropped from the lemma, with its first tag promoted to the
//! part of speech.

/// Lemma and part of speech recovered from one chain string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
    pub lemma: String,
    pub pos: String,
}

/// Scans the chain string split on `<`. A segment is a *clean tag* when its
/// first `>` is its last character and it carries no `^` boundary marker;
/// anything else is a *continuation* that resumes lemma text.
///
/// Clean tags accumulate in a pending buffer. A continuation flushes the
/// buffer into the lemma and appends its own text (re-prefixed with the `<`
/// consumed by splitting when it still closes a tag). A clean tag arriving
/// right after a continuation restarts the buffer and becomes the
/// part-of-speech candidate; clean tags chaining after other clean tags only
/// extend the buffer. Whatever is left in the buffer at the end of input is
/// the trailing grammatical tag set and stays out of the lemma.
pub fn decompose(raw: &str) -> Decomposition {
    if !raw.contains('<') {
        // No tag markup at all. The raw string stays visible under
        // "morph_tag"; lemma and pos are empty.
        return Decomposition::default();
    }

    let mut lemma = String::new();
    let mut pending_chain = String::new();
    let mut pos_candidate = "";
    let mut last_was_clean_tag = true;

    for segment in raw.split('<') {
        if segment.is_empty() {
            continue;
        }

        let is_clean_tag = segment.find('>') == Some(segment.len() - 1) && !segment.contains('^');

        if is_clean_tag {
            if last_was_clean_tag {
                pending_chain.push('<');
                pending_chain.push_str(segment);
            } else {
                lemma.push_str(&pending_chain);
                pos_candidate = segment;
                pending_chain.clear();
                pending_chain.push('<');
                pending_chain.push_str(segment);
            }
            last_was_clean_tag = true;
        } else {
            lemma.push_str(&pending_chain);
            if segment.contains('>') {
                lemma.push('<');
            }
            lemma.push_str(segment);
            pending_chain.clear();
            last_was_clean_tag = false;
        }
    }

    Decomposition {
        lemma,
        pos: format!("<{pos_candidate}"),
    }
}
