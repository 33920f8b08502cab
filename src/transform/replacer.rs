//! Literal multi-pair find/replace

use std::collections::BTreeMap;

/// Replaces several literal substrings in a single left-to-right pass.
///
/// At each position the longest matching key wins. Replaced text is never
/// scanned again, so `{"a": "b", "b": "c"}` turns `"ab"` into `"bc"`.
///
/// # Example
/// ```
/// use glue_workflow_clone::transform::Replacer;
///
/// let replacer = Replacer::new([("dev", "prod"), ("eu-west-1", "us-east-1")]);
/// assert_eq!(replacer.replace("dev-etl-eu-west-1"), "prod-etl-us-east-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    // Longest key first
    pairs: Vec<(String, String)>,
}

impl Replacer {
    /// Build a replacer from `(find, replace)` pairs. Empty keys are ignored.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { pairs }
    }

    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::new(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Apply every pair to `input`
    pub fn replace(&self, input: &str) -> String {
        if self.pairs.is_empty() {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(c) = rest.chars().next() {
            match self.pairs.iter().find(|(k, _)| rest.starts_with(k.as_str())) {
                Some((key, value)) => {
                    output.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    output.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_replacer_is_identity() {
        let replacer = Replacer::default();
        assert!(replacer.is_empty());
        assert_eq!(replacer.replace("workflow"), "workflow");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let replacer = Replacer::new([("dev", "prd")]);
        assert_eq!(replacer.replace("dev-job-dev"), "prd-job-prd");
    }

    #[test]
    fn test_longest_key_wins() {
        let replacer = Replacer::new([("dev", "X"), ("dev_eu", "Y")]);
        assert_eq!(replacer.replace("dev_eu_dev"), "Y_X");
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        let replacer = Replacer::new([("a", "b"), ("b", "c")]);
        assert_eq!(replacer.replace("ab"), "bc");
    }

    #[test]
    fn test_empty_keys_are_ignored() {
        let replacer = Replacer::new([("", "x"), ("a", "b")]);
        assert_eq!(replacer.len(), 1);
        assert_eq!(replacer.replace("cat"), "cbt");
    }

    #[test]
    fn test_multibyte_input() {
        let replacer = Replacer::new([("é", "e")]);
        assert_eq!(replacer.replace("flux-étape-ß"), "flux-etape-ß");
    }

    #[test]
    fn test_from_map() {
        let mut map = BTreeMap::new();
        map.insert("eu".to_string(), "us".to_string());
        let replacer = Replacer::from_map(&map);
        assert_eq!(replacer.replace("etl-eu"), "etl-us");
    }
}
