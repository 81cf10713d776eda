//! Plainly: readability scoring and style annotation for prose
//!
//! This library splits free text into paragraphs and sentences, grades each
//! sentence for reading difficulty, and wraps adverbs, passive voice, complex
//! phrases and hedging qualifiers in `<span class="...">` markup so an editor
//! can highlight them in place.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod reporter;

pub use analyzer::engine::{AnalysisEngine, Thresholds};
pub use analyzer::scoring::grade;
pub use analyzer::summary::{summarize, Summary};
pub use error::PlainlyError;

use serde::{Deserialize, Serialize};

/// Running counters for one analysis.
///
/// Every `analyze` call starts from a fresh state. Callers that analyze
/// several documents concurrently give each one its own instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisState {
    /// Line-delimited segments, blank ones included
    pub paragraphs: usize,
    /// Sentences across all non-blank paragraphs
    pub sentences: usize,
    pub words: usize,
    pub hard_sentences: usize,
    pub very_hard_sentences: usize,
    /// Adverbs plus qualifier matches (shared bucket)
    pub adverbs: usize,
    pub passive_voice: usize,
    pub complex: usize,
    /// Replacement hints for every complex phrase matched
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and drop collected suggestions
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another document's counters into this one
    pub fn merge(&mut self, other: &AnalysisState) {
        self.paragraphs += other.paragraphs;
        self.sentences += other.sentences;
        self.words += other.words;
        self.hard_sentences += other.hard_sentences;
        self.very_hard_sentences += other.very_hard_sentences;
        self.adverbs += other.adverbs;
        self.passive_voice += other.passive_voice;
        self.complex += other.complex;
        self.suggestions.extend(other.suggestions.iter().cloned());
    }
}

/// A complex phrase found in the text together with simpler alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Matched text as it appears in the document
    pub phrase: String,
    /// Simpler wording from the phrase table
    pub replacements: Vec<String>,
}

/// The result of analyzing one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Final counters
    pub state: AnalysisState,
    /// Annotated markup, one entry per line-delimited paragraph.
    /// Blank paragraphs are carried through untouched.
    pub paragraphs: Vec<String>,
}

impl AnalysisResult {
    /// All paragraphs joined back with the original line breaks
    pub fn markup(&self) -> String {
        self.paragraphs.join("\n")
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.state)
    }
}

/// A sentence cut out of a paragraph.
///
/// `text` is trimmed; `terminator` is the run of `.`, `!` or `?` that closed
/// it, or empty for a trailing fragment. `leading` keeps the whitespace that
/// preceded the sentence so annotated output lines up with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub leading: String,
    pub text: String,
    pub terminator: String,
}

impl Sentence {
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Difficulty bucket for a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentenceDifficulty {
    Normal,
    Hard,
    VeryHard,
}

impl SentenceDifficulty {
    /// Markup class wrapped around a flagged sentence
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            SentenceDifficulty::Normal => None,
            SentenceDifficulty::Hard => Some("hardSentence"),
            SentenceDifficulty::VeryHard => Some("veryHardSentence"),
        }
    }
}

impl std::fmt::Display for SentenceDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceDifficulty::Normal => write!(f, "normal"),
            SentenceDifficulty::Hard => write!(f, "hard"),
            SentenceDifficulty::VeryHard => write!(f, "very hard"),
        }
    }
}

/// Phrase-level markup categories.
///
/// These class names are read by stylesheets downstream; renaming one is a
/// breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanClass {
    Adverb,
    Passive,
    Complex,
    Qualifier,
}

impl SpanClass {
    pub const ALL: [SpanClass; 4] = [
        SpanClass::Adverb,
        SpanClass::Complex,
        SpanClass::Passive,
        SpanClass::Qualifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpanClass::Adverb => "adverb",
            SpanClass::Passive => "passive",
            SpanClass::Complex => "complex",
            SpanClass::Qualifier => "qualifier",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "adverb" => Some(SpanClass::Adverb),
            "passive" => Some(SpanClass::Passive),
            "complex" => Some(SpanClass::Complex),
            "qualifier" => Some(SpanClass::Qualifier),
            _ => None,
        }
    }

    /// Opening tag for this category
    pub fn open_tag(&self) -> String {
        format!("<span class=\"{}\">", self.as_str())
    }
}

impl std::fmt::Display for SpanClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const CLOSE_TAG: &str = "</span>";

/// Analyze a document with the default thresholds and every annotator enabled.
pub fn analyze(text: &str) -> AnalysisResult {
    AnalysisEngine::new().analyze(text)
}

/// Annotate a single paragraph, accumulating counters into `state`.
///
/// Useful for streaming renderers that paint one paragraph at a time.
pub fn annotate_paragraph(paragraph: &str, state: &mut AnalysisState) -> String {
    AnalysisEngine::new().annotate_paragraph(paragraph, state)
}
