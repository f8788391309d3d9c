//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the optional subreddit lookup; chat requests are otherwise
//! stateless.

use std::sync::Arc;

use crate::services::reddit::SubredditLookup;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Subreddit lookup. `None` when Reddit credentials are absent or rejected.
    pub reddit: Option<Arc<dyn SubredditLookup>>,
}

impl AppState {
    #[must_use]
    pub fn new(reddit: Option<Arc<dyn SubredditLookup>>) -> Self {
        Self { reddit }
    }

    #[must_use]
    pub fn reddit_available(&self) -> bool {
        self.reddit.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
