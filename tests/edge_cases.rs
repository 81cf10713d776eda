//! Edge cases: empty and degenerate input, odd punctuation, pathological repeats

use plainly::{analyze, AnalysisState};

#[test]
fn empty_input_yields_zero_state() {
    let r = analyze("");
    assert_eq!(r.state, AnalysisState::default());
    assert!(r.paragraphs.is_empty());
    assert_eq!(r.markup(), "");
}

#[test]
fn whitespace_only_paragraph_is_passed_through() {
    let r = analyze("   ");
    assert_eq!(r.state.paragraphs, 1);
    assert_eq!(r.state.sentences, 0);
    assert_eq!(r.state.words, 0);
    assert_eq!(r.markup(), "   ");
}

#[test]
fn only_newlines() {
    let r = analyze("\n\n");
    assert_eq!(r.state.paragraphs, 3);
    assert_eq!(r.state.sentences, 0);
    assert_eq!(r.markup(), "\n\n");
}

#[test]
fn only_punctuation_counts_a_sentence_without_words() {
    let r = analyze("...!!!");
    assert_eq!(r.state.sentences, 1);
    assert_eq!(r.state.words, 0);
    assert_eq!(r.markup(), "...!!!");
}

#[test]
fn unterminated_text_is_one_sentence() {
    let r = analyze("no terminator here");
    assert_eq!(r.state.sentences, 1);
    assert_eq!(r.state.words, 3);
    assert_eq!(r.markup(), "no terminator <span class=\"adverb\">here</span>");
}

#[test]
fn whitespace_between_sentences_is_preserved() {
    let r = analyze("Wait!!!   Really??");
    assert_eq!(r.state.sentences, 2);
    assert_eq!(
        r.markup(),
        "Wait!!!   <span class=\"adverb\">Really</span>??"
    );
}

#[test]
fn non_ascii_text_does_not_panic() {
    let r = analyze("Café naïve résumé déjà vu.");
    assert_eq!(r.state.sentences, 1);
    assert_eq!(r.state.words, 5);
    assert_eq!(r.markup(), "Café naïve résumé déjà vu.");

    let r = analyze("日本語の文章です。 Emoji 🎉 here! Ünïcödé?");
    assert!(r.state.sentences >= 2);
}

#[test]
fn qualifier_inside_adverb_span_counts_twice() {
    let r = analyze("Just just just.");
    assert_eq!(r.state.adverbs, 6);
    assert_eq!(r.markup().matches("class=\"qualifier\"").count(), 3);
    assert_eq!(r.markup().matches("class=\"adverb\"").count(), 3);
}

#[test]
fn repeated_phrase_does_not_overflow_stack() {
    let sentence = "in order to ".repeat(5_000);
    let r = analyze(&sentence);
    assert_eq!(r.state.complex, 5_000);
    assert_eq!(r.state.sentences, 1);
}

#[test]
fn very_long_document_is_linear_in_sentences() {
    let text = "The ball was kicked by him. ".repeat(2_000);
    let r = analyze(&text);
    assert_eq!(r.state.sentences, 2_000);
    assert_eq!(r.state.passive_voice, 2_000);
    assert_eq!(r.state.paragraphs, 1);
}

#[test]
fn trailing_whitespace_after_last_terminator_is_dropped() {
    let r = analyze("One.\r\nTwo.  ");
    assert_eq!(r.state.paragraphs, 2);
    assert_eq!(r.state.sentences, 2);
    assert_eq!(r.markup(), "One.\nTwo.");
}
