//! Removal of parenthesized asides from subsection text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::config::ExtractConfig;

// Greedy: "a (b) c (d)" loses everything from the first '(' to the last ')'.
static RE_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*\)").unwrap());

/// Normalizes free text according to an [`ExtractConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    keep_parens: bool,
}

impl Normalizer {
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            keep_parens: config.keep_parens,
        }
    }

    /// Strip parenthesized spans unless parens are kept. Borrows when nothing
    /// changes.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        normalize(text, self.keep_parens)
    }
}

/// Delete every `(...)` span (greedy, per line) unless `keep_parens` is set.
pub fn normalize(text: &str, keep_parens: bool) -> Cow<'_, str> {
    if keep_parens {
        return Cow::Borrowed(text);
    }
    RE_PARENS.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_single_group() {
        assert_eq!(normalize("foo (bar)", false), "foo ");
        assert_eq!(normalize("3.2 kg (kilograms)", false), "3.2 kg ");
    }

    #[test]
    fn test_greedy_across_groups() {
        // Text between the groups goes too.
        assert_eq!(normalize("a (b) c (d) e", false), "a  e");
    }

    #[test]
    fn test_keep_parens_passes_through() {
        assert_eq!(normalize("a (b) c", true), "a (b) c");

        let normalizer = Normalizer::new(&ExtractConfig::new().with_keep_parens(true));
        assert!(matches!(normalizer.normalize("x (y)"), Cow::Borrowed("x (y)")));
    }

    #[test]
    fn test_unbalanced_and_multiline() {
        assert_eq!(normalize(") a (", false), ") a (");
        assert_eq!(normalize("a (b\nc) d", false), "a (b\nc) d");
        assert_eq!(normalize("a (b)\nc (d)", false), "a \nc ");
    }

    #[test]
    fn test_idempotent_on_examples() {
        for text in ["a (b) c (d)", "((x))", ") (", "no parens", ""] {
            let once = normalize(text, false).into_owned();
            assert_eq!(normalize(&once, false), once, "not idempotent for {:?}", text);
        }
    }
}
