//! Domain services used by the chat route.
//!
//! ARCHITECTURE
//! ============
//! Service modules own message parsing, subreddit lookups and reply
//! composition so the route handler stays focused on protocol translation.

pub mod query;
pub mod reddit;
pub mod reply;
