//! Request sequencing for overlapping status polls
//!
//! Every status request gets a token from a monotonically increasing counter.
//! A response is only applied when its token is newer than the last applied one,
//! so a slow reply can never overwrite a newer snapshot.

/// Hands out request tokens
#[derive(Debug, Default)]
pub struct TokenIssuer {
    last_issued: u64,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next token; the first one is 1 so 0 can mean "nothing applied yet"
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }
}

/// Tracks the newest response that reached the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseGate {
    last_applied: u64,
}

impl ResponseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fresh(&self, token: u64) -> bool {
        token > self.last_applied
    }

    /// Returns true and records the token if it is newer than anything applied so far
    pub fn admit(&mut self, token: u64) -> bool {
        if self.is_fresh(token) {
            self.last_applied = token;
            true
        } else {
            false
        }
    }

    pub fn last_applied(&self) -> u64 {
        self.last_applied
    }
}
