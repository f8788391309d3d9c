//! Subreddit tag parsing for incoming chat messages.
//!
//! A message may open with a `@r/<name>` tag. Everything after the tag (up to
//! the first line break) is the question; without a tag the whole trimmed
//! message is the question.

use std::sync::LazyLock;

use regex::Regex;

static SUBREDDIT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@r/(\w+)\b\s*(.*)").expect("subreddit tag pattern should compile"));

/// Split `message` into an optional subreddit name and the question text.
///
/// The question is trimmed and may be empty when only a tag was sent.
#[must_use]
pub fn parse_subreddit_and_question(message: &str) -> (Option<String>, String) {
    let message = message.trim();
    match SUBREDDIT_TAG.captures(message) {
        Some(caps) => {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let question = caps.get(2).map_or("", |m| m.as_str()).trim();
            (Some(name.to_string()), question.to_string())
        }
        None => (None, message.to_string()),
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
