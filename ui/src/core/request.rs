//! Latest-request-wins bookkeeping for outbound AI calls.
//!
//! A view issues a token when it starts a request and checks it when the
//! response arrives. Issuing a new token makes every older one stale, so a
//! slow answer to an old question never overwrites a newer one.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get() == token.0
    }

    /// Invalidate whatever is in flight without starting anything new.
    pub fn invalidate(&self) {
        self.issue();
    }

    /// Issue a token now and resolve to `None` if it went stale while `work`
    /// was running.
    pub fn guard<F>(&self, work: F) -> impl Future<Output = Option<F::Output>>
    where
        F: Future,
    {
        let token = self.issue();
        let tracker = self.clone();
        async move {
            let output = work.await;
            tracker.is_current(token).then_some(output)
        }
    }
}
