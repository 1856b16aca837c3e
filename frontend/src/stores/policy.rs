//! Result-handling policies shared by the stores.
//!
//! Failures either surface (the article store records the message and
//! returns the error, see `ArticleStore::propagate`) or are absorbed by
//! [`best_effort`], which logs and yields `None` so dependent UI can fall
//! back to a default.

use std::{cell::Cell, future::Future};

use crate::http::ApiError;

/// Awaits `call`; on failure logs it under `action` and returns `None`.
pub async fn best_effort<T, F>(action: &str, call: F) -> Option<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match call.await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(action, "best-effort call failed: {err}");
            None
        },
    }
}

/// Monotonic request numbering for one store field.
///
/// Each request takes a ticket when issued; its response may be written to
/// state only if no later ticket has been applied already.
#[derive(Debug, Default)]
pub struct Sequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl Sequence {
    /// Hands out the next ticket.
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Marks `ticket` applied unless a newer one already was.
    pub fn try_apply(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }

    /// Invalidates every ticket issued so far.
    pub fn expire(&self) {
        self.applied.set(self.issued.get());
    }
}
