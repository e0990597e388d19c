mod debounce;

pub use debounce::{DebouncedSearch, ScheduledCommit, DEFAULT_DEBOUNCE};
