//! Analyzer module - segmentation, scoring and annotation pipeline

pub mod engine;
pub mod rules;
pub mod scoring;
pub mod segmenter;
pub mod summary;
pub mod wordlists;

pub use engine::AnalysisEngine;
pub use scoring::SentenceMetrics;
pub use segmenter::{split_paragraphs, split_sentences};
