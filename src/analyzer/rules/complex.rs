//! Complex phrases that have a simpler replacement.
//!
//! Keys are tried in table order. Each key scans the output of the previous
//! one, so text already wrapped by an earlier key can be wrapped again by a
//! later key. Running the rule twice over its own output is not supported:
//! the second pass wraps and counts the same phrases again.

use super::{span_occurrences, Annotator};
use crate::analyzer::wordlists::COMPLEX_PATTERNS;
use crate::{AnalysisState, SpanClass, Suggestion};

/// Rule for flagging wordy or jargon phrases
pub struct ComplexPhraseRule;

impl ComplexPhraseRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComplexPhraseRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for ComplexPhraseRule {
    fn class(&self) -> SpanClass {
        SpanClass::Complex
    }

    fn annotate(&self, sentence: &str, state: &mut AnalysisState) -> String {
        let mut current = sentence.to_string();
        for (pattern, replacements) in COMPLEX_PATTERNS.iter() {
            let (next, matches) = span_occurrences(&current, pattern, SpanClass::Complex);
            if matches.is_empty() {
                continue;
            }
            tracing::trace!(phrase = matches[0], count = matches.len(), "complex phrase");
            state.complex += matches.len();
            state.suggestions.extend(matches.iter().map(|m| Suggestion {
                phrase: m.to_string(),
                replacements: replacements.iter().map(|r| r.to_string()).collect(),
            }));
            current = next;
        }
        current
    }
}
