//! Analysis engine - orchestrates segmentation, annotators and scoring

use crate::config::{Config, RuleSetting};
use crate::{AnalysisResult, AnalysisState, Sentence, SentenceDifficulty, SpanClass, CLOSE_TAG};

use super::rules::{AdverbRule, Annotator, ComplexPhraseRule, PassiveVoiceRule, QualifierRule};
use super::scoring::{
    classify, SentenceMetrics, HARD_GRADE, MIN_WORDS_FOR_CLASSIFICATION, VERY_HARD_GRADE,
};
use super::segmenter::{split_paragraphs, split_sentences};

/// Bounds used to classify sentence difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Sentences shorter than this are never flagged
    pub min_words: usize,
    pub hard_grade: u32,
    pub very_hard_grade: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS_FOR_CLASSIFICATION,
            hard_grade: HARD_GRADE,
            very_hard_grade: VERY_HARD_GRADE,
        }
    }
}

/// Main analysis engine that runs every annotator over every sentence.
///
/// The engine itself holds no counters; each call threads its own
/// [`AnalysisState`], so one engine can serve many documents at once.
pub struct AnalysisEngine {
    thresholds: Thresholds,
    /// Annotators in the order they run: adverb, complex, passive, qualifier
    annotators: Vec<Box<dyn Annotator>>,
}

impl AnalysisEngine {
    /// Create an engine with default thresholds and every annotator enabled
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            annotators: vec![
                Box::new(AdverbRule::new()),
                Box::new(ComplexPhraseRule::new()),
                Box::new(PassiveVoiceRule::new()),
                Box::new(QualifierRule::new()),
            ],
        }
    }

    /// Build an engine from a loaded config file
    pub fn from_config(config: &Config) -> Self {
        let thresholds = Thresholds {
            min_words: config
                .min_sentence_words
                .unwrap_or(MIN_WORDS_FOR_CLASSIFICATION),
            hard_grade: config.hard_grade.unwrap_or(HARD_GRADE),
            very_hard_grade: config.very_hard_grade.unwrap_or(VERY_HARD_GRADE),
        };

        for name in config.rules.keys() {
            if SpanClass::from_name(name).is_none() {
                tracing::warn!(rule = %name, "unknown rule in config, ignoring");
            }
        }

        SpanClass::ALL
            .into_iter()
            .filter(|class| config.rule_setting(class.as_str()) == RuleSetting::Off)
            .fold(Self::new().with_thresholds(thresholds), Self::without_rule)
    }

    /// Replace the classification thresholds
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Disable one annotator; its markup and counter are skipped entirely
    pub fn without_rule(mut self, class: SpanClass) -> Self {
        self.annotators.retain(|a| a.class() != class);
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Classes of the annotators that will run, in order
    pub fn enabled_rules(&self) -> Vec<SpanClass> {
        self.annotators.iter().map(|a| a.class()).collect()
    }

    /// Analyze a whole document with a fresh state
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut state = AnalysisState::new();
        let paragraphs = split_paragraphs(text);
        state.paragraphs = paragraphs.len();

        let annotated: Vec<String> = paragraphs
            .into_iter()
            .map(|p| {
                if p.trim().is_empty() {
                    p.to_string()
                } else {
                    self.annotate_paragraph(p, &mut state)
                }
            })
            .collect();

        tracing::debug!(
            paragraphs = state.paragraphs,
            sentences = state.sentences,
            words = state.words,
            "analysis complete"
        );

        AnalysisResult {
            state,
            paragraphs: annotated,
        }
    }

    /// Annotate one paragraph, adding its sentence, word and match counts to
    /// `state`. The paragraph counter is left alone; `analyze` owns it.
    pub fn annotate_paragraph(&self, paragraph: &str, state: &mut AnalysisState) -> String {
        let sentences = split_sentences(paragraph);
        state.sentences += sentences.len();

        let mut out = String::with_capacity(paragraph.len() * 2);
        for sentence in &sentences {
            out.push_str(&sentence.leading);
            if sentence.is_blank() {
                out.push_str(&sentence.terminator);
            } else {
                out.push_str(&self.annotate_sentence(sentence, state));
            }
        }
        out
    }

    /// Annotate a single sentence, terminator included, and classify it
    pub fn annotate_sentence(&self, sentence: &Sentence, state: &mut AnalysisState) -> String {
        let metrics = SentenceMetrics::measure(&sentence.text);
        state.words += metrics.words;

        let mut text = sentence.text.clone();
        for annotator in &self.annotators {
            text = annotator.annotate(&text, state);
        }
        text.push_str(&sentence.terminator);

        let level = metrics.grade();
        let difficulty = classify(
            metrics.words,
            level,
            self.thresholds.min_words,
            self.thresholds.hard_grade,
            self.thresholds.very_hard_grade,
        );
        match difficulty {
            SentenceDifficulty::Hard => state.hard_sentences += 1,
            SentenceDifficulty::VeryHard => state.very_hard_sentences += 1,
            SentenceDifficulty::Normal => {}
        }

        match difficulty.css_class() {
            Some(class) => {
                tracing::debug!(words = metrics.words, level, %difficulty, "flagged sentence");
                format!("<span class=\"{}\">{}{}", class, text, CLOSE_TAG)
            }
            None => text,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HARD_SENTENCE: &str = "The committee, having deliberated extensively on numerous \
        considerations, ultimately reached conclusions regarding organizational restructuring \
        and departmental consolidation.";

    #[test]
    fn test_empty_input_yields_zero_state() {
        let result = AnalysisEngine::new().analyze("");
        assert_eq!(result.state, AnalysisState::new());
        assert!(result.paragraphs.is_empty());
        assert_eq!(result.markup(), "");
    }

    #[test]
    fn test_blank_paragraphs_count_but_are_skipped() {
        let result = AnalysisEngine::new().analyze("One here.\n\n   \nTwo there.");
        assert_eq!(result.state.paragraphs, 4);
        assert_eq!(result.state.sentences, 2);
        assert_eq!(result.paragraphs[2], "   ");
    }

    #[test]
    fn test_terminators_and_spacing_preserved() {
        let result = AnalysisEngine::new().analyze("Cats sit. Dogs run?! Birds sing");
        assert_eq!(result.markup(), "Cats sit. Dogs run?! Birds sing");
        assert_eq!(result.state.sentences, 3);
    }

    #[test]
    fn test_word_count_accumulates() {
        let result = AnalysisEngine::new().analyze("The cat sat. The dog ran.");
        assert_eq!(result.state.words, 6);
    }

    #[test]
    fn test_passive_example() {
        let result = AnalysisEngine::new().analyze("The ball was kicked by him.");
        assert_eq!(result.state.passive_voice, 1);
        assert_eq!(
            result.markup(),
            "The ball <span class=\"passive\">was kicked</span> by him."
        );
    }

    #[test]
    fn test_qualifier_and_complex_example() {
        let result = AnalysisEngine::new().analyze("I think we should utilize this.");
        assert_eq!(result.state.adverbs, 1);
        assert_eq!(result.state.complex, 1);
        assert_eq!(
            result.markup(),
            "<span class=\"qualifier\">I think</span> we should \
             <span class=\"complex\">utilize</span> this."
        );
    }

    #[test]
    fn test_long_dense_sentence_is_wrapped() {
        let result = AnalysisEngine::new().analyze(HARD_SENTENCE);
        assert_eq!(result.state.very_hard_sentences, 1);
        let markup = result.markup();
        assert!(markup.starts_with("<span class=\"veryHardSentence\">"));
        assert!(markup.ends_with(".</span>"));
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let engine = AnalysisEngine::new().without_rule(SpanClass::Passive);
        let result = engine.analyze("The ball was kicked by him.");
        assert_eq!(result.state.passive_voice, 0);
        assert!(!result.markup().contains("passive"));
        assert_eq!(
            engine.enabled_rules(),
            vec![SpanClass::Adverb, SpanClass::Complex, SpanClass::Qualifier]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let engine = AnalysisEngine::new().with_thresholds(Thresholds {
            min_words: 100,
            ..Thresholds::default()
        });
        let result = engine.analyze(HARD_SENTENCE);
        assert_eq!(result.state.very_hard_sentences, 0);
        assert_eq!(result.state.hard_sentences, 0);
    }

    #[test]
    fn test_streaming_paragraphs_share_state() {
        let engine = AnalysisEngine::new();
        let mut state = AnalysisState::new();
        engine.annotate_paragraph("It was very good.", &mut state);
        engine.annotate_paragraph("Perhaps.", &mut state);
        assert_eq!(state.sentences, 2);
        // "very" and "perhaps" as common adverbs, "perhaps" again as a qualifier
        assert_eq!(state.adverbs, 3);
        assert_eq!(state.paragraphs, 0);
    }

    #[test]
    fn test_engines_do_not_share_counters() {
        let engine = AnalysisEngine::new();
        let first = engine.analyze("It was very good.");
        let second = engine.analyze("It was very good.");
        assert_eq!(first.state, second.state);
    }

    #[test]
    fn test_from_config_disables_rules_and_sets_thresholds() {
        let config: Config = serde_json::from_str(
            r#"{ "minSentenceWords": 5, "rules": { "adverb": "off", "bogus": "off" } }"#,
        )
        .unwrap();
        let engine = AnalysisEngine::from_config(&config);
        assert_eq!(engine.thresholds().min_words, 5);
        assert_eq!(engine.thresholds().hard_grade, HARD_GRADE);
        assert!(!engine.enabled_rules().contains(&SpanClass::Adverb));
        assert_eq!(
            engine.enabled_rules(),
            vec![SpanClass::Complex, SpanClass::Passive, SpanClass::Qualifier]
        );
    }
}
