//! Cancellable deferred auto-close.
//!
//! The control never owns a background thread; a pending close is plain
//! data the host drains from its own event loop. Scheduling hands back a
//! token, and only the token of the live entry collapses the control on
//! fire, so a timer cancelled by a later gesture can never close it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity of one scheduled close. Tokens are never reused within a
/// control's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One pending deferred close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClose {
    pub token: TimerToken,
    pub delay: Duration,
}

/// At-most-one pending close entry.
#[derive(Debug, Default)]
pub struct AutoCloseTimer {
    pending: Option<PendingClose>,
    next_token: u64,
}

impl AutoCloseTimer {
    /// Replaces any pending entry with a fresh one and returns its token.
    pub fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(PendingClose { token, delay });
        token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingClose> {
        self.pending
    }

    /// Consumes the pending entry when `token` is the live one.
    ///
    /// Stale tokens (from an entry that was cancelled or superseded)
    /// return `false` and leave the live entry untouched.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(entry) if entry.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
