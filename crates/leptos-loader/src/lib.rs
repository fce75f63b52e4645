//! Leptos Loader Utilities
//!
//! Sequence-guarded remote data loading for Leptos.
//! Each request takes a numbered ticket; only the newest ticket may
//! settle into the visible state, so late responses never overwrite
//! newer ones.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Visible state of one remote resource
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    /// Request in flight, nothing to render yet
    Loading,
    /// Last request settled with data (possibly empty)
    Ready(T),
    /// Last request settled with an error message
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Pure settle step. `current` is the newest issued ticket; a response
/// carrying an older ticket is superseded and must not touch state.
pub fn settle<T, E: std::fmt::Display>(
    current: u64,
    ticket: u64,
    outcome: Result<T, E>,
) -> Option<RemoteState<T>> {
    if ticket != current {
        return None;
    }
    Some(match outcome {
        Ok(value) => RemoteState::Ready(value),
        Err(err) => RemoteState::Failed(err.to_string()),
    })
}

/// Reactive loader handle. Copyable like a signal; hand it to effects
/// and event handlers freely.
pub struct Loader<T: Send + Sync + 'static> {
    state: RwSignal<RemoteState<T>>,
    ticket: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loader<T> {}

impl<T: Send + Sync + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> Loader<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RemoteState::Loading),
            ticket: StoredValue::new(0),
        }
    }

    /// Reactive read of the current state
    pub fn state(&self) -> ReadSignal<RemoteState<T>> {
        self.state.read_only()
    }

    pub fn with<U>(&self, f: impl FnOnce(&RemoteState<T>) -> U) -> U {
        self.state.with(f)
    }

    /// Issues a fresh ticket and flips the state to Loading
    pub fn begin(&self) -> u64 {
        let next = self.ticket.with_value(|t| t + 1);
        self.ticket.set_value(next);
        self.state.set(RemoteState::Loading);
        next
    }

    /// Settles `ticket`; returns whether the state was actually updated
    pub fn finish<E: std::fmt::Display>(&self, ticket: u64, outcome: Result<T, E>) -> bool {
        let current = self.ticket.with_value(|t| *t);
        match settle(current, ticket, outcome) {
            Some(next) => {
                self.state.set(next);
                true
            }
            None => false,
        }
    }

    /// Runs one request: ticket, spawn, settle. Superseded requests are
    /// discarded in `finish`.
    pub fn load<Fut, E>(&self, fut: Fut)
    where
        Fut: Future<Output = Result<T, E>> + 'static,
        E: std::fmt::Display,
    {
        let ticket = self.begin();
        let loader = *self;
        spawn_local(async move {
            let outcome = fut.await;
            loader.finish(ticket, outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_current_ticket_ok() {
        let next = settle::<_, String>(3, 3, Ok(vec![1, 2]));
        assert_eq!(next, Some(RemoteState::Ready(vec![1, 2])));
    }

    #[test]
    fn test_settle_current_ticket_err() {
        let next = settle::<Vec<i32>, _>(3, 3, Err("boom"));
        assert_eq!(next, Some(RemoteState::Failed("boom".into())));
    }

    #[test]
    fn test_settle_discards_superseded() {
        let next = settle::<_, String>(4, 3, Ok("old"));
        assert_eq!(next, None);
    }

    #[test]
    fn test_settle_error_does_not_revive_old_data() {
        // A failed with ticket 1, B succeeded with ticket 2: A must not land
        assert_eq!(settle::<&str, _>(2, 1, Err("late failure")), None);
        assert_eq!(
            settle::<_, String>(2, 2, Ok("fresh")),
            Some(RemoteState::Ready("fresh"))
        );
    }

    #[test]
    fn test_older_response_loses_in_either_settle_order() {
        // Requests A then B; whichever settles first, B's payload wins
        // and A's is discarded.
        let (a, b) = (1u64, 2u64);
        let current = b;

        // A settles first, then B
        assert_eq!(settle::<_, String>(current, a, Ok("a")), None);
        assert_eq!(
            settle::<_, String>(current, b, Ok("b")),
            Some(RemoteState::Ready("b"))
        );

        // B settles first, then A
        assert_eq!(
            settle::<_, String>(current, b, Ok("b")),
            Some(RemoteState::Ready("b"))
        );
        assert_eq!(settle::<_, String>(current, a, Ok("a")), None);
    }

    #[test]
    fn test_loader_begin_is_monotone() {
        let loader = Loader::<Vec<i32>>::new();
        let first = loader.begin();
        let second = loader.begin();
        assert!(second > first);
    }

    #[test]
    fn test_loader_finish_applies_only_newest() {
        let loader = Loader::<&str>::new();
        let a = loader.begin();
        let b = loader.begin();

        assert!(!loader.finish::<String>(a, Ok("stale")));
        assert!(loader.with(|s| s.is_loading()));

        assert!(loader.finish::<String>(b, Ok("fresh")));
        assert_eq!(loader.with(|s| s.ready().copied()), Some("fresh"));
    }

    #[test]
    fn test_loader_error_replaces_ready() {
        let loader = Loader::<&str>::new();
        let a = loader.begin();
        assert!(loader.finish::<String>(a, Ok("data")));

        let b = loader.begin();
        assert!(loader.with(|s| s.is_loading()));
        assert!(loader.finish(b, Err::<&str, _>("network down")));
        assert_eq!(loader.with(|s| s.error().map(str::to_owned)), Some("network down".into()));
        assert_eq!(loader.with(|s| s.ready().copied()), None);
    }

    #[test]
    fn test_loader_retry_takes_fresh_ticket() {
        let loader = Loader::<&str>::new();
        let failed = loader.begin();
        assert!(loader.finish(failed, Err::<&str, _>("timeout")));

        let retry = loader.begin();
        assert!(retry > failed);
        assert!(loader.with(|s| s.is_loading()));
        assert!(loader.finish::<String>(retry, Ok("recovered")));
        assert_eq!(loader.with(|s| s.ready().copied()), Some("recovered"));
    }
}
