use tracing::{debug, warn};

use crate::error::CatalogError;

/// Load status of a piece of remote data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// The last request failed; holds the message to display.
    Failed(String),
}

/// Handle for one dispatched request, returned by [`Loadable::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Remote data plus the sequencing that keeps only the newest response.
///
/// Every [`begin`](Self::begin) issues a higher ticket. A response handed to
/// [`complete`](Self::complete) with anything but the latest ticket is
/// dropped, so a slow earlier request can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    state: LoadState<T>,
    latest: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Moves to `Loading` and returns the ticket of the new request.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = LoadState::Loading;
        debug!(request = self.latest, "load started");
        RequestTicket(self.latest)
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` when a newer request has been started since, in
    /// which case the outcome is discarded.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, CatalogError>) -> bool {
        if ticket.0 != self.latest {
            warn!(request = ticket.0, latest = self.latest, "discarding stale response");
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => {
                warn!(request = ticket.0, error = %err, "load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_then_fails_then_recovers() {
        let mut data: Loadable<u32> = Loadable::new();
        assert_eq!(data.state(), &LoadState::Idle);

        let ticket = data.begin();
        assert!(data.is_loading());
        assert!(data.complete(ticket, Ok(7)));
        assert_eq!(data.ready(), Some(&7));

        let ticket = data.begin();
        assert!(data.complete(
            ticket,
            Err(CatalogError::NetworkFailure("Unable to reach the catalog service".into()))
        ));
        assert_eq!(data.error(), Some("Unable to reach the catalog service"));
        assert_eq!(data.ready(), None);

        let ticket = data.begin();
        assert!(data.complete(ticket, Ok(8)));
        assert_eq!(data.state(), &LoadState::Ready(8));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut data: Loadable<&str> = Loadable::new();
        let older = data.begin();
        let newer = data.begin();

        assert!(data.complete(newer, Ok("newer")));
        assert!(!data.complete(older, Ok("older")));
        assert_eq!(data.ready(), Some(&"newer"));

        let older = data.begin();
        let newer = data.begin();
        assert!(!data.complete(older, Ok("older")));
        assert!(data.is_loading());
        assert!(data.complete(newer, Ok("newest")));
        assert_eq!(data.ready(), Some(&"newest"));
    }
}
