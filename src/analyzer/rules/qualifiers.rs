//! Hedging qualifiers ("i think", "perhaps").
//!
//! Matches share the adverb counter; the markup uses its own class.

use super::{span_occurrences, Annotator};
use crate::analyzer::wordlists::QUALIFIER_PATTERNS;
use crate::{AnalysisState, SpanClass};

/// Rule for flagging hedging words and phrases
pub struct QualifierRule;

impl QualifierRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QualifierRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for QualifierRule {
    fn class(&self) -> SpanClass {
        SpanClass::Qualifier
    }

    fn annotate(&self, sentence: &str, state: &mut AnalysisState) -> String {
        let mut current = sentence.to_string();
        for pattern in QUALIFIER_PATTERNS.iter() {
            let (next, matches) = span_occurrences(&current, pattern, SpanClass::Qualifier);
            if matches.is_empty() {
                continue;
            }
            tracing::trace!(qualifier = matches[0], count = matches.len(), "qualifier");
            state.adverbs += matches.len();
            current = next;
        }
        current
    }
}
