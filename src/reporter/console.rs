//! Console reporter with colored output

use super::{AggregateStats, DocumentReport};
use crate::{summarize, AnalysisState, SentenceDifficulty, SpanClass};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Print the annotated markup after the summary
    show_markup: bool,
    /// Print complex-phrase suggestions
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            show_markup: false,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn with_markup(mut self) -> Self {
        self.show_markup = true;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single document
    pub fn report(&self, report: &DocumentReport) {
        print!("{}", self.render(report));
    }

    /// Report multiple documents with totals
    pub fn report_many(&self, reports: &[DocumentReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "-".repeat(60));
        }
        print!("{}", self.render_totals(stats));
    }

    /// Report in quiet mode (one line per document)
    pub fn report_quiet(&self, report: &DocumentReport) {
        println!("{}", self.render_quiet(report));
    }

    pub fn render(&self, report: &DocumentReport) -> String {
        let state = &report.result.state;
        let summary = summarize(state);
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            self.paint(&format!("Readability: {}", report.source), |s| s.bold())
        ));
        out.push_str(&format!(
            "   Paragraphs: {} | Sentences: {} | Words: {}\n\n",
            state.paragraphs, state.sentences, state.words
        ));

        let markers = [
            self.difficulty_marker(SentenceDifficulty::Hard),
            self.difficulty_marker(SentenceDifficulty::VeryHard),
            self.class_marker(SpanClass::Adverb),
            self.class_marker(SpanClass::Passive),
            self.class_marker(SpanClass::Complex),
        ];
        for (marker, message) in markers.into_iter().zip(summary.lines()) {
            out.push_str(&format!("   {} {}\n", marker, message));
        }

        if self.verbose && !state.suggestions.is_empty() {
            out.push_str(&format!("\n   {}\n", self.paint("Simpler wording:", |s| s.bold())));
            for suggestion in &state.suggestions {
                out.push_str(&format!(
                    "   {} {} -> {}\n",
                    self.paint("*", |s| s.purple()),
                    suggestion.phrase,
                    suggestion.replacements.join(", ")
                ));
            }
        }

        if self.show_markup {
            out.push_str(&format!("\n   {}\n", self.paint("Markup:", |s| s.bold())));
            for paragraph in &report.result.paragraphs {
                out.push_str(&format!("   {}\n", paragraph));
            }
        }

        out.push('\n');
        out
    }

    pub fn render_quiet(&self, report: &DocumentReport) -> String {
        let s = &report.result.state;
        format!(
            "{}: {} sentences, {} hard, {} very hard, {} adverbs, {} passive, {} complex",
            report.source,
            s.sentences,
            s.hard_sentences,
            s.very_hard_sentences,
            s.adverbs,
            s.passive_voice,
            s.complex
        )
    }

    fn render_totals(&self, stats: &AggregateStats) -> String {
        let t: &AnalysisState = &stats.totals;
        let rule = "=".repeat(60);
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{}\n{}\n{}\n", rule, self.paint("Totals", |s| s.bold()), rule));
        out.push_str(&format!("   Documents:       {}\n", stats.documents));
        out.push_str(&format!("   Sentences:       {}\n", t.sentences));
        out.push_str(&format!(
            "   Hard/very hard:  {}/{}\n",
            t.hard_sentences, t.very_hard_sentences
        ));
        out.push_str(&format!("   Adverbs:         {}\n", t.adverbs));
        out.push_str(&format!("   Passive voice:   {}\n", t.passive_voice));
        out.push_str(&format!("   Complex phrases: {}\n\n", t.complex));
        out
    }

    fn difficulty_marker(&self, difficulty: SentenceDifficulty) -> ColoredString {
        match difficulty {
            SentenceDifficulty::Hard => self.paint("!", |s| s.yellow()),
            SentenceDifficulty::VeryHard => self.paint("!", |s| s.red().bold()),
            SentenceDifficulty::Normal => "*".normal(),
        }
    }

    fn class_marker(&self, class: SpanClass) -> ColoredString {
        match class {
            SpanClass::Adverb | SpanClass::Qualifier => self.paint("*", |s| s.blue()),
            SpanClass::Passive => self.paint("*", |s| s.green()),
            SpanClass::Complex => self.paint("*", |s| s.purple()),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> ColoredString {
        if self.use_colors {
            style(text)
        } else {
            text.normal()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
