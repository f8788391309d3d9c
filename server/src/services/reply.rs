//! Placeholder assistant replies.
//!
//! Stands in for a language-model call: the text only varies with whether
//! subreddit context was fetched and whether Reddit lookups are enabled.

use super::reddit::SubredditInfo;

const NO_DESCRIPTION: &str = "No description available.";

/// Compose the assistant's answer to `question`.
#[must_use]
pub fn compose_reply(question: &str, context: Option<&SubredditInfo>, reddit_available: bool) -> String {
    if let Some(info) = context {
        let name = if info.display_name.is_empty() { &info.name } else { &info.display_name };
        let description =
            if info.public_description.trim().is_empty() { NO_DESCRIPTION } else { info.public_description.as_str() };
        let subscribers = info.subscribers.map_or_else(|| "N/A".to_string(), |n| n.to_string());
        return format!(
            "Mock assistant: based on live info from r/{name} (Subscribers: {subscribers}, \
             Description: '{description}'), the answer to '{question}' is [answer using this subreddit's context]."
        );
    }

    if reddit_available {
        format!(
            "Mock assistant: I can access Reddit, but you didn't specify a subreddit. \
             For your question '{question}', the general answer is [general answer, Reddit available]."
        )
    } else {
        format!(
            "Mock assistant: I currently don't have access to live Reddit data. \
             Regarding your question '{question}', the general answer without subreddit context is \
             [general answer, Reddit unavailable]."
        )
    }
}

#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;
