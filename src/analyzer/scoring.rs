//! Readability grade and sentence difficulty classification

use crate::SentenceDifficulty;

/// Default minimum word count before a sentence can be flagged
pub const MIN_WORDS_FOR_CLASSIFICATION: usize = 14;
/// Default lowest grade that counts as hard
pub const HARD_GRADE: u32 = 10;
/// Default lowest grade that counts as very hard
pub const VERY_HARD_GRADE: u32 = 14;

/// Grade level from letter, word and sentence counts.
///
/// `round(4.71 * letters/words + 0.5 * words/sentences - 21.43)`, floored at 0.
/// Zero words or zero sentences grade as 0.
pub fn grade(letters: usize, words: usize, sentences: usize) -> u32 {
    if words == 0 || sentences == 0 {
        return 0;
    }
    let letters = letters as f64;
    let words = words as f64;
    let sentences = sentences as f64;
    let level = (4.71 * (letters / words) + 0.5 * (words / sentences) - 21.43).round();
    if level <= 0.0 {
        0
    } else {
        level as u32
    }
}

/// Word and letter counts for one sentence.
///
/// Counting works on a stripped copy: everything except ASCII letters,
/// digits, spaces and periods is removed and a period is appended. Words
/// are the space-separated pieces of that copy (empty pieces included) and
/// letters are its length without spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceMetrics {
    pub words: usize,
    pub letters: usize,
}

impl SentenceMetrics {
    pub fn measure(sentence: &str) -> Self {
        let mut cleaned: String = sentence
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == ' ')
            .collect();
        cleaned.push('.');

        let words = cleaned.split(' ').count();
        let letters = cleaned.len() - (words - 1);
        Self { words, letters }
    }

    /// Per-sentence grade (sentence count fixed at 1)
    pub fn grade(&self) -> u32 {
        grade(self.letters, self.words, 1)
    }
}

/// Bucket a sentence by grade. Short sentences are never flagged.
pub fn classify(
    words: usize,
    level: u32,
    min_words: usize,
    hard_grade: u32,
    very_hard_grade: u32,
) -> SentenceDifficulty {
    if words < min_words {
        return SentenceDifficulty::Normal;
    }
    if level >= very_hard_grade {
        SentenceDifficulty::VeryHard
    } else if level >= hard_grade {
        SentenceDifficulty::Hard
    } else {
        SentenceDifficulty::Normal
    }
}
