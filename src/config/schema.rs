//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-rule toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    #[default]
    On,
    /// Skip the rule entirely: no markup, no counter
    Off,
}

/// Root config structure for .plainlyrc.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Sentences with fewer words are never flagged. Default: 14
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sentence_words: Option<usize>,

    /// Lowest grade counted as hard. Default: 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_grade: Option<u32>,

    /// Lowest grade counted as very hard. Default: 14
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub very_hard_grade: Option<u32>,

    /// Rule toggles keyed by markup class (adverb, complex, passive, qualifier)
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,

    /// Glob patterns for files to skip when walking directories
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Config {
    /// Apply CLI flags on top of file values. Flags win when present.
    pub fn merge_with_cli(
        mut self,
        min_words: Option<usize>,
        hard_grade: Option<u32>,
        very_hard_grade: Option<u32>,
    ) -> Self {
        if min_words.is_some() {
            self.min_sentence_words = min_words;
        }
        if hard_grade.is_some() {
            self.hard_grade = hard_grade;
        }
        if very_hard_grade.is_some() {
            self.very_hard_grade = very_hard_grade;
        }
        self
    }

    /// Config written by `plainly init`
    pub fn starter() -> Self {
        let rules = crate::SpanClass::ALL
            .iter()
            .map(|class| (class.as_str().to_string(), RuleSetting::On))
            .collect();
        Self {
            min_sentence_words: Some(crate::analyzer::scoring::MIN_WORDS_FOR_CLASSIFICATION),
            hard_grade: Some(crate::analyzer::scoring::HARD_GRADE),
            very_hard_grade: Some(crate::analyzer::scoring::VERY_HARD_GRADE),
            rules,
            ignore: vec!["**/node_modules/**".to_string()],
        }
    }

    pub fn rule_setting(&self, name: &str) -> RuleSetting {
        self.rules.get(name).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.min_sentence_words.is_none());
        assert!(config.rules.is_empty());
        assert_eq!(config.rule_setting("adverb"), RuleSetting::On);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: Config = serde_json::from_str(
            r#"{ "minSentenceWords": 20, "veryHardGrade": 16, "rules": { "passive": "off" } }"#,
        )
        .unwrap();
        assert_eq!(config.min_sentence_words, Some(20));
        assert_eq!(config.very_hard_grade, Some(16));
        assert_eq!(config.rule_setting("passive"), RuleSetting::Off);
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config {
            hard_grade: Some(8),
            min_sentence_words: Some(10),
            ..Default::default()
        }
        .merge_with_cli(None, Some(12), None);
        assert_eq!(config.hard_grade, Some(12));
        assert_eq!(config.min_sentence_words, Some(10));
    }

    #[test]
    fn test_starter_round_trips() {
        let json = serde_json::to_string_pretty(&Config::starter()).unwrap();
        assert!(json.contains("\"minSentenceWords\": 14"));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rules.len(), 4);
    }
}
