use std::time::Duration;

use tracing::debug;

/// Quiet period after the last keystroke before the input is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A commit scheduled by [`DebouncedSearch::on_input`].
///
/// `due` is measured on the same clock as the `now` passed in. The caller
/// arranges for [`DebouncedSearch::on_timer_fire`] to run with `generation`
/// once `due` is reached, or polls [`DebouncedSearch::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCommit {
    pub generation: u64,
    pub due: Duration,
}

/// Turns raw keystrokes into a rate-limited, committed search term.
///
/// The controller never reads a clock itself: every time-dependent call
/// takes the current time as a [`Duration`] since an epoch of the caller's
/// choosing. Only the most recent input can ever be committed; older
/// timers are recognised by their generation and ignored.
#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    delay: Duration,
    raw_input: String,
    committed_term: String,
    generation: u64,
    scheduled: Option<ScheduledCommit>,
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            raw_input: String::new(),
            committed_term: String::new(),
            generation: 0,
            scheduled: None,
        }
    }

    /// Starts with `value` both typed and committed.
    pub fn with_initial(delay: Duration, value: impl Into<String>) -> Self {
        let mut search = Self::new(delay);
        search.set_search_value(value);
        search
    }

    /// Text exactly as typed so far.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Term currently used for filtering.
    pub fn committed_term(&self) -> &str {
        &self.committed_term
    }

    /// True while a commit is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Whether a search box should offer to clear its text.
    pub fn shows_clear_button(&self) -> bool {
        !self.raw_input.trim().is_empty() && !self.is_pending()
    }

    /// Records a keystroke and (re)schedules the commit `delay` after `now`.
    ///
    /// Any previously scheduled commit is cancelled.
    pub fn on_input(&mut self, text: impl Into<String>, now: Duration) -> ScheduledCommit {
        self.raw_input = text.into();
        self.generation += 1;
        let commit = ScheduledCommit {
            generation: self.generation,
            due: now + self.delay,
        };
        self.scheduled = Some(commit);
        commit
    }

    /// Fires the timer scheduled under `generation`.
    ///
    /// Returns the newly committed term, or `None` when a newer input or a
    /// clear has superseded that timer.
    pub fn on_timer_fire(&mut self, generation: u64) -> Option<&str> {
        let commit = self.scheduled?;
        if commit.generation != generation {
            return None;
        }
        self.scheduled = None;
        self.committed_term = self.raw_input.clone();
        debug!(term = %self.committed_term, "search term committed");
        Some(&self.committed_term)
    }

    /// Fires the scheduled commit if it is due at `now`.
    pub fn advance(&mut self, now: Duration) -> Option<&str> {
        let commit = self.scheduled.filter(|commit| commit.due <= now)?;
        self.on_timer_fire(commit.generation)
    }

    /// Empties both the typed and the committed text, cancelling any pending commit.
    pub fn on_clear(&mut self) {
        self.set_search_value("");
    }

    /// Sets typed and committed text in one step, cancelling any pending commit.
    pub fn set_search_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.generation += 1;
        self.scheduled = None;
        self.raw_input = value.clone();
        self.committed_term = value;
    }
}
