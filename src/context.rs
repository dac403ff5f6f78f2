//! Operation context: cancellation and deadlines
//!
//! Every [`PullRequestService::list`](crate::platform::PullRequestService::list)
//! call runs inside a [`Context`]. The adapter wraps its network request in
//! [`Context::run`], so cancelling the context or letting its deadline pass
//! drops the in-flight request and returns an error to the caller.

use crate::error::{Error, Result};
use std::future::{Future, pending};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

/// Cancellation signal and optional deadline for one operation
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every [`Context`] created alongside it
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation; idempotent
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A context paired with a handle that cancels it
    pub fn cancellable() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                deadline: None,
                cancel: Some(rx),
            },
            CancelHandle { tx },
        )
    }

    /// Add a deadline `timeout` from now; an earlier deadline is kept
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Add an absolute deadline; an earlier deadline is kept
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// The deadline, if any
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether cancellation has been signalled
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Drive `fut` to completion unless the context is cancelled or expires first.
    ///
    /// When either happens `fut` is dropped, aborting whatever I/O it owns.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(Error::DeadlineExceeded);
        }

        let cancelled = async {
            if let Some(rx) = &self.cancel {
                let mut rx = rx.clone();
                let closed = rx.wait_for(|c| *c).await.is_err();
                if !closed {
                    return;
                }
            }
            // No signal, or every handle dropped without cancelling.
            pending::<()>().await;
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(Error::Cancelled),
            () = expired => Err(Error::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}
