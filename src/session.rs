//! Stale-result discipline for overlapping searches.
//!
//! The engine never cancels an in-flight search; a new call does not abort a
//! previous one. Callers that issue overlapping searches (a search box, a
//! map view) stamp each request with a token from [`RequestSequence`] and
//! drop any response whose token is no longer current, so a slow earlier
//! search cannot overwrite a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotone counter handing out one token per search request.
#[derive(Debug, Default)]
pub struct RequestSequence {
    counter: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all earlier tokens.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still belongs to the most recent request.
    pub fn is_current(&self, token: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_token_is_current() {
        let sequence = RequestSequence::new();
        let token = sequence.begin();
        assert!(sequence.is_current(token));
    }

    #[test]
    fn a_newer_request_invalidates_older_tokens() {
        let sequence = RequestSequence::new();
        let slow = sequence.begin();
        let fast = sequence.begin();

        // The slow search resolves after the fast one was issued: discard.
        assert!(!sequence.is_current(slow));
        assert!(sequence.is_current(fast));
    }
}
