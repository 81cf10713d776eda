//! Adverbs: words ending in "ly" plus a list of common adverbs that don't.

use super::{clean_token, wrap, Annotator};
use crate::analyzer::wordlists::{COMMON_ADVERBS, LY_EXCEPTIONS};
use crate::{AnalysisState, SpanClass};

/// Rule for flagging adverbs word by word
pub struct AdverbRule;

impl AdverbRule {
    pub fn new() -> Self {
        Self
    }

    /// Whether a cleaned, lowercased token reads as an adverb
    pub fn is_adverb(cleaned: &str) -> bool {
        (cleaned.ends_with("ly") && !LY_EXCEPTIONS.contains(cleaned))
            || COMMON_ADVERBS.contains(cleaned)
    }
}

impl Default for AdverbRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for AdverbRule {
    fn class(&self) -> SpanClass {
        SpanClass::Adverb
    }

    fn annotate(&self, sentence: &str, state: &mut AnalysisState) -> String {
        let mut found = 0;
        let annotated = sentence
            .split(' ')
            .map(|word| {
                if Self::is_adverb(&clean_token(word)) {
                    found += 1;
                    wrap(word, SpanClass::Adverb)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        state.adverbs += found;
        annotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(sentence: &str) -> (String, usize) {
        let mut state = AnalysisState::new();
        let out = AdverbRule::new().annotate(sentence, &mut state);
        (out, state.adverbs)
    }

    #[test]
    fn test_ly_adverb_wrapped_with_original_punctuation() {
        let (out, count) = run("He ran Quickly, then stopped");
        assert_eq!(count, 2);
        assert_eq!(
            out,
            "He ran <span class=\"adverb\">Quickly,</span> <span class=\"adverb\">then</span> stopped"
        );
    }

    #[test]
    fn test_ly_exceptions_are_ignored() {
        let (out, count) = run("My family only eats early");
        assert_eq!(count, 0);
        assert_eq!(out, "My family only eats early");
    }

    #[test]
    fn test_exception_that_is_also_common_adverb_still_counts() {
        // "actually" sits in both tables
        let (_, count) = run("It actually works");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_each_occurrence_counts() {
        let (_, count) = run("very very very");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_double_spaces_survive() {
        let (out, _) = run("a  b");
        assert_eq!(out, "a  b");
    }
}
