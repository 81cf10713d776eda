//! Lexical annotators for style issues

pub mod adverbs;
pub mod complex;
pub mod passive;
pub mod qualifiers;

pub use adverbs::AdverbRule;
pub use complex::ComplexPhraseRule;
pub use passive::PassiveVoiceRule;
pub use qualifiers::QualifierRule;

use crate::{AnalysisState, SpanClass, CLOSE_TAG};
use regex::Regex;

/// Trait for annotation rules
pub trait Annotator: Send + Sync {
    /// Markup class this rule emits
    fn class(&self) -> SpanClass;

    /// Wrap every match in `sentence` and bump the matching counter in `state`
    /// once per match.
    fn annotate(&self, sentence: &str, state: &mut AnalysisState) -> String;
}

/// Lowercased copy of a token with everything but ASCII letters, digits and
/// periods removed.
pub(crate) fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub(crate) fn wrap(text: &str, class: SpanClass) -> String {
    format!("{}{}{}", class.open_tag(), text, CLOSE_TAG)
}

/// Wrap every non-overlapping match of `pattern` in `sentence`.
///
/// Scanning resumes right after each wrapped match. Returns the new text and
/// the matched slices in order.
pub(crate) fn span_occurrences<'a>(
    sentence: &'a str,
    pattern: &Regex,
    class: SpanClass,
) -> (String, Vec<&'a str>) {
    let mut out = String::with_capacity(sentence.len());
    let mut matches = Vec::new();
    let mut cursor = 0;

    while let Some(m) = pattern.find_at(sentence, cursor) {
        if m.end() == m.start() {
            break;
        }
        out.push_str(&sentence[cursor..m.start()]);
        out.push_str(&wrap(m.as_str(), class));
        matches.push(m.as_str());
        cursor = m.end();
    }
    out.push_str(&sentence[cursor..]);

    (out, matches)
}
