//! Paragraph and sentence segmentation

use crate::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;

static TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"));

/// Split text on line breaks. Paragraphs are not trimmed.
///
/// Empty input has no paragraphs at all; anything else yields one entry per
/// `\n`-delimited segment, blank segments included.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Split a paragraph at runs of `.`, `!` and `?`.
///
/// Every terminator run closes one sentence, even when the text before it is
/// blank. A non-blank remainder without a terminator becomes a final sentence
/// with an empty terminator.
pub fn split_sentences(paragraph: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut cursor = 0;

    for m in TERMINATOR_RE.find_iter(paragraph) {
        sentences.push(make_sentence(&paragraph[cursor..m.start()], m.as_str()));
        cursor = m.end();
    }

    let rest = &paragraph[cursor..];
    if !rest.trim().is_empty() {
        sentences.push(make_sentence(rest, ""));
    }

    sentences
}

fn make_sentence(chunk: &str, terminator: &str) -> Sentence {
    let body = chunk.trim_start();
    let leading = &chunk[..chunk.len() - body.len()];
    Sentence {
        leading: leading.to_string(),
        text: body.trim_end().to_string(),
        terminator: terminator.to_string(),
    }
}
