//! Human-readable summary messages

use crate::AnalysisState;
use serde::Serialize;

/// Ready-to-display messages built from an [`AnalysisState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub adverb: String,
    pub passive: String,
    pub complex: String,
    pub hard_sentence: String,
    pub very_hard_sentence: String,
}

/// Plural suffix. Zero reads as plural ("0 adverbs"), only 1 is singular.
fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Same rule as [`plural`]: "0 of 0 sentences are".
fn sentence_agreement(count: usize) -> &'static str {
    if count == 1 {
        "sentence is"
    } else {
        "sentences are"
    }
}

/// Recommended ceiling: `count / divisor`, rounded half up
fn ceiling(count: usize, divisor: f64) -> u64 {
    (count as f64 / divisor).round() as u64
}

/// Build the summary messages for a finished analysis.
pub fn summarize(state: &AnalysisState) -> Summary {
    Summary {
        adverb: format!(
            "You have used {} adverb{}. Try to use {} or less.",
            state.adverbs,
            plural(state.adverbs),
            ceiling(state.paragraphs, 3.0)
        ),
        passive: format!(
            "You have used passive voice {} time{}. Aim for {} or less.",
            state.passive_voice,
            plural(state.passive_voice),
            ceiling(state.sentences, 5.0)
        ),
        complex: format!(
            "{} phrase{} could be simplified.",
            state.complex,
            plural(state.complex)
        ),
        hard_sentence: format!(
            "{} of {} {} hard to read.",
            state.hard_sentences,
            state.sentences,
            sentence_agreement(state.sentences)
        ),
        very_hard_sentence: format!(
            "{} of {} {} very hard to read.",
            state.very_hard_sentences,
            state.sentences,
            sentence_agreement(state.sentences)
        ),
    }
}

impl Summary {
    /// Messages in display order
    pub fn lines(&self) -> [&str; 5] {
        [
            self.hard_sentence.as_str(),
            self.very_hard_sentence.as_str(),
            self.adverb.as_str(),
            self.passive.as_str(),
            self.complex.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adverb_singular_and_plural() {
        let one = AnalysisState {
            adverbs: 1,
            ..Default::default()
        };
        assert!(summarize(&one).adverb.starts_with("You have used 1 adverb."));

        let two = AnalysisState {
            adverbs: 2,
            ..Default::default()
        };
        assert!(summarize(&two).adverb.starts_with("You have used 2 adverbs."));
    }

    #[test]
    fn test_zero_counts_take_plural() {
        let summary = summarize(&AnalysisState::new());
        assert_eq!(summary.adverb, "You have used 0 adverbs. Try to use 0 or less.");
        assert_eq!(
            summary.passive,
            "You have used passive voice 0 times. Aim for 0 or less."
        );
        assert_eq!(summary.complex, "0 phrases could be simplified.");
        assert_eq!(summary.hard_sentence, "0 of 0 sentences are hard to read.");
    }

    #[test]
    fn test_recommended_ceilings_round() {
        let state = AnalysisState {
            paragraphs: 5,
            sentences: 12,
            passive_voice: 1,
            ..Default::default()
        };
        let summary = summarize(&state);
        // 5 / 3 = 1.67 -> 2, 12 / 5 = 2.4 -> 2
        assert!(summary.adverb.ends_with("Try to use 2 or less."));
        assert_eq!(
            summary.passive,
            "You have used passive voice 1 time. Aim for 2 or less."
        );
    }

    #[test]
    fn test_sentence_agreement() {
        let state = AnalysisState {
            sentences: 1,
            very_hard_sentences: 1,
            complex: 1,
            ..Default::default()
        };
        let summary = summarize(&state);
        assert_eq!(summary.very_hard_sentence, "1 of 1 sentence is very hard to read.");
        assert_eq!(summary.complex, "1 phrase could be simplified.");
    }
}
