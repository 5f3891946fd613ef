//! Splits packed `key=value|key=value` attribute clusters.

/// The no-analysis sentinel some taggers emit instead of a tag cluster.
pub const NO_ANALYSIS: &str = "_";

/// A segment lacking the `=` separator. Carries the offending segment text;
/// the caller attaches span and raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSegment(pub String);

/// Splits a compact tag string into its key/value pairs, in input order.
///
/// The sentinel [`NO_ANALYSIS`] yields no pairs. A string without `|` is a
/// single segment. Any segment without `=` fails the whole token rather than
/// being dropped silently.
pub fn split(raw: &str) -> Result<Vec<(&str, &str)>, MalformedSegment> {
    if raw == NO_ANALYSIS {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for segment in raw.split('|') {
        let Some((key, value)) = segment.split_once('=') else {
            return Err(MalformedSegment(segment.to_string()));
        };
        pairs.push((key, value));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pairs() {
        assert_eq!(
            split("case=nom|number=pl").unwrap(),
            vec![("case", "nom"), ("number", "pl")]
        );
    }

    #[test]
    fn single_pair_without_pipe() {
        assert_eq!(split("case=acc").unwrap(), vec![("case", "acc")]);
    }

    #[test]
    fn sentinel_yields_no_pairs() {
        assert_eq!(split(NO_ANALYSIS).unwrap(), Vec::<(&str, &str)>::new());
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        // Only the first `=` separates key from value.
        assert_eq!(split("feat=a=b").unwrap(), vec![("feat", "a=b")]);
    }

    #[test]
    fn segment_without_separator_is_malformed() {
        assert_eq!(
            split("case=nom|broken").unwrap_err(),
            MalformedSegment("broken".to_string())
        );
        assert_eq!(split("").unwrap_err(), MalformedSegment(String::new()));
    }

    #[test]
    fn duplicate_keys_are_kept_as_separate_pairs() {
        // Splitting does not deduplicate; that is the feature map's job.
        assert_eq!(
            split("case=nom|case=acc").unwrap(),
            vec![("case", "nom"), ("case", "acc")]
        );
    }

    #[test]
    fn order_is_preserved() {
        let pairs = split("z=1|a=2|m=3").unwrap();
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
