//! Tokenizer for the `Value` cell of dimension rows.
//!
//! ERDDAP summarizes each dimension in a short `key=token` list, e.g.
//! `nValues=8, evenlySpaced=true, averageSpacing=1 day 0h 0m 0s`. Tokens are
//! separated by `,`; each token is split on its first `=`. Tokens without a
//! key are dropped, and keys the parser does not know about are kept but
//! otherwise ignored.

/// Key holding the number of samples along the dimension.
pub const N_VALUES_KEY: &str = "nValues";

/// Key holding the average spacing between samples.
pub const AVERAGE_SPACING_KEY: &str = "averageSpacing";

/// Parsed `key=token` entries of a dimension value cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionValue {
    entries: Vec<(String, String)>,
}

impl DimensionValue {
    /// Tokenize a dimension value cell. Never fails; unusable tokens are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .split(',')
            .filter_map(|token| {
                let (key, value) = token.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Value of the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sample count from `nValues`, read from the leading digits of the token.
    pub fn n_values(&self) -> Option<u64> {
        let raw = self.get(N_VALUES_KEY)?;
        let end = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        raw[..end].parse().ok()
    }

    /// Average spacing text from `averageSpacing`, if present and non-blank.
    pub fn average_spacing(&self) -> Option<&str> {
        self.get(AVERAGE_SPACING_KEY).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typical_time_dimension() {
        let value = DimensionValue::parse("nValues=8, evenlySpaced=true, averageSpacing=1 day 0h 0m 0s");
        assert_eq!(value.n_values(), Some(8));
        assert_eq!(value.average_spacing(), Some("1 day 0h 0m 0s"));
        assert_eq!(value.get("evenlySpaced"), Some("true"));
    }

    #[test]
    fn test_parse_empty() {
        let value = DimensionValue::parse("");
        assert!(value.is_empty());
        assert_eq!(value.n_values(), None);
        assert_eq!(value.average_spacing(), None);
    }

    #[test]
    fn test_unknown_keys_and_junk_tokens() {
        let value = DimensionValue::parse("junk, =orphan, foo=bar,nValues=3");
        let keys: Vec<&str> = value.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["foo", "nValues"]);
        assert_eq!(value.n_values(), Some(3));
    }

    #[test]
    fn test_n_values_leading_digits() {
        assert_eq!(DimensionValue::parse("nValues=12abc").n_values(), Some(12));
        assert_eq!(DimensionValue::parse("nValues=abc").n_values(), None);
        assert_eq!(DimensionValue::parse("nValues=").n_values(), None);
    }

    #[test]
    fn test_first_key_wins() {
        let value = DimensionValue::parse("nValues=4, nValues=9");
        assert_eq!(value.n_values(), Some(4));
    }

    #[test]
    fn test_blank_average_spacing_unset() {
        let value = DimensionValue::parse("nValues=2, averageSpacing=  ");
        assert_eq!(value.average_spacing(), None);
    }
}
