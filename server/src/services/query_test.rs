use super::*;

fn parse(message: &str) -> (Option<String>, String) {
    parse_subreddit_and_question(message)
}

fn tagged(name: &str, question: &str) -> (Option<String>, String) {
    (Some(name.to_string()), question.to_string())
}

fn untagged(question: &str) -> (Option<String>, String) {
    (None, question.to_string())
}

#[test]
fn tag_and_question() {
    assert_eq!(parse("@r/learnpython what is flask?"), tagged("learnpython", "what is flask?"));
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(parse("   @r/rust   how do lifetimes work?  "), tagged("rust", "how do lifetimes work?"));
}

#[test]
fn tag_only_gives_empty_question() {
    assert_eq!(parse("@r/askreddit "), tagged("askreddit", ""));
    assert_eq!(parse("@r/askreddit"), tagged("askreddit", ""));
}

#[test]
fn no_tag_returns_trimmed_message() {
    assert_eq!(parse("  what is python?  "), untagged("what is python?"));
}

#[test]
fn tag_must_lead_the_message() {
    assert_eq!(parse("tell me about @r/rust please"), untagged("tell me about @r/rust please"));
}

#[test]
fn tag_without_name_is_not_a_tag() {
    assert_eq!(parse("@r/ hello"), untagged("@r/ hello"));
}

#[test]
fn name_stops_at_first_non_word_character() {
    assert_eq!(parse("@r/rust_lang? why"), tagged("rust_lang", "? why"));
}

#[test]
fn question_stops_at_line_break() {
    assert_eq!(parse("@r/rust first line\nsecond line"), tagged("rust", "first line"));
}

#[test]
fn empty_message() {
    assert_eq!(parse("   "), untagged(""));
}
