//! Reporter module for output formatting

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::{AnalysisResult, AnalysisState};
use serde::Serialize;

/// One analyzed input and where it came from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    /// File path, or `<stdin>`
    pub source: String,
    pub result: AnalysisResult,
}

impl DocumentReport {
    pub fn new(source: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }

    /// Whether any sentence was flagged hard or very hard
    pub fn has_hard_sentences(&self) -> bool {
        self.result.state.hard_sentences + self.result.state.very_hard_sentences > 0
    }
}

/// Counters summed over several documents
#[derive(Debug, Clone, Default)]
pub struct AggregateStats {
    pub documents: usize,
    pub totals: AnalysisState,
}

impl AggregateStats {
    pub fn from_reports(reports: &[DocumentReport]) -> Self {
        let mut totals = AnalysisState::new();
        for report in reports {
            totals.merge(&report.result.state);
        }
        Self {
            documents: reports.len(),
            totals,
        }
    }
}
