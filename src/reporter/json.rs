//! JSON reporter for machine-readable output

use super::{AggregateStats, DocumentReport};
use crate::{AnalysisState, Summary};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    source: &'a str,
    counts: &'a AnalysisState,
    summary: Summary,
    markup: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    documents: Vec<JsonDocument<'a>>,
    totals: &'a AnalysisState,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single document as JSON
    pub fn report(&self, report: &DocumentReport) -> String {
        self.render(&Self::document(report), "{}")
    }

    /// Report several documents plus summed counters
    pub fn report_many(&self, reports: &[DocumentReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            documents: reports.iter().map(Self::document).collect(),
            totals: &stats.totals,
        };
        self.render(&output, "{}")
    }

    fn document(report: &DocumentReport) -> JsonDocument<'_> {
        JsonDocument {
            source: &report.source,
            counts: &report.result.state,
            summary: report.result.summary(),
            markup: report.result.markup(),
        }
    }

    fn render<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(source: &str, text: &str) -> DocumentReport {
        DocumentReport::new(source, crate::analyze(text))
    }

    #[test]
    fn test_json_single_document_has_expected_keys() {
        let report = make_report("essay.md", "I think we should utilize this.");
        let json = JsonReporter::new().report(&report);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["source"], "essay.md");
        assert_eq!(parsed["counts"]["complex"], 1);
        assert_eq!(parsed["counts"]["adverbs"], 1);
        assert_eq!(parsed["counts"]["suggestions"][0]["phrase"], "utilize");
        assert!(parsed["summary"]["hardSentence"].is_string());
        assert!(parsed["markup"]
            .as_str()
            .unwrap()
            .contains("<span class=\"complex\">utilize</span>"));
    }

    #[test]
    fn test_json_pretty_output() {
        let report = make_report("a.txt", "Short text.");
        let json = JsonReporter::new().pretty().report(&report);
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_many() {
        let reports = vec![
            make_report("a.txt", "The ball was kicked."),
            make_report("b.txt", "It was very good."),
        ];
        let stats = AggregateStats::from_reports(&reports);
        let json = JsonReporter::new().report_many(&reports, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let docs = parsed["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1]["source"], "b.txt");
        assert_eq!(parsed["totals"]["sentences"], 2);
        assert_eq!(parsed["totals"]["passiveVoice"], 1);
    }
}
