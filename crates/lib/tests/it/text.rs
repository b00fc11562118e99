//! Text helper integration tests: stop-word removal and punctuation
//! stripping, including the injectable word/symbol sets.

use dotnest::text::{self, Punctuation, StopWords};

#[test]
fn stop_word_removal_keeps_token_positions() {
    let kept = text::remove_stop_words("Some stopwords can be removed", &StopWords::english());

    assert_eq!(kept.len(), 2);
    assert_eq!(kept.get(&1).map(String::as_str), Some("stopwords"));
    assert_eq!(kept.get(&4).map(String::as_str), Some("removed"));
}

#[test]
fn joined_variant_collapses_to_single_spaces() {
    let stop = StopWords::english();
    assert_eq!(
        text::remove_stop_words_joined("Some stopwords can be removed", &stop),
        "stopwords removed"
    );
    assert_eq!(
        text::remove_stop_words_joined("the   desk   and   the   chair", &stop),
        "desk chair"
    );
}

#[test]
fn custom_word_sets_are_case_insensitive() {
    let stop = StopWords::new(["DESK", "chair"]);
    assert!(stop.contains("desk"));
    assert!(stop.contains("Chair"));
    assert_eq!(
        text::remove_stop_words_joined("the Desk and CHAIR", &stop),
        "the and"
    );
}

#[test]
fn punctuation_stripping_normalizes_whitespace() {
    let punctuation = Punctuation::ascii();
    assert_eq!(
        text::remove_punctuation("punctuation symbols !,.><", &punctuation),
        "punctuation symbols"
    );
}

#[test]
fn custom_symbol_sets_only_strip_their_members() {
    let punctuation = Punctuation::new(['!', '?']);
    assert_eq!(
        text::remove_punctuation("wait! what? a, b.", &punctuation),
        "wait what a, b."
    );
}

#[test]
fn cleanup_pipeline_composes() {
    let stop = StopWords::english();
    let punctuation = Punctuation::ascii();

    let stripped = text::remove_punctuation("Is the desk, or the chair, on sale?", &punctuation);
    let cleaned = text::remove_stop_words_joined(&stripped, &stop);
    assert_eq!(cleaned, "desk chair sale");
}
