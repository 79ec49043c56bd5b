//! Fetch lifecycle state machine.
//!
//! Each retrieval attempt is identified by a [`FetchHandle`] allocated from a
//! monotonically increasing counter. Only the completion matching the current
//! handle may update the outcome; completions from superseded or cancelled
//! attempts are discarded, so a slow stale response can never overwrite a
//! later, faster one.

/// One record returned by the row source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub text: String,
}

impl MessageRow {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Identifier for a single fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchHandle(u64);

/// The authoritative result of the most recent fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No attempt has been started yet.
    Idle,
    /// An attempt is in flight.
    Loading,
    /// The last attempt resolved with rows, possibly none.
    Loaded(Vec<MessageRow>),
    /// The last attempt failed with a user-visible description.
    Failed(String),
}

impl FetchOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchOutcome::Idle | FetchOutcome::Loading)
    }

    /// Rows of the current outcome; empty unless loaded.
    pub fn rows(&self) -> &[MessageRow] {
        match self {
            FetchOutcome::Loaded(rows) => rows,
            _ => &[],
        }
    }
}

/// Owns the fetch lifecycle: starts attempts, applies completions, and
/// guards shared state against out-of-order completion.
#[derive(Debug)]
pub struct MessageLoader {
    outcome: FetchOutcome,
    current: Option<FetchHandle>,
    next_attempt: u64,
}

impl MessageLoader {
    pub fn new() -> Self {
        Self {
            outcome: FetchOutcome::Idle,
            current: None,
            next_attempt: 0,
        }
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    /// Handle of the attempt currently in flight, if any.
    pub fn current_handle(&self) -> Option<FetchHandle> {
        self.current
    }

    /// Begin a new attempt. The visible state becomes `Loading` (clearing any
    /// previous error) and any in-flight attempt is superseded.
    pub fn start(&mut self) -> FetchHandle {
        let handle = FetchHandle(self.next_attempt);
        self.next_attempt += 1;
        self.current = Some(handle);
        self.outcome = FetchOutcome::Loading;
        handle
    }

    /// Mark `handle` stale. Safe to call repeatedly, and a no-op when the
    /// attempt has already completed or been superseded.
    pub fn cancel(&mut self, handle: FetchHandle) {
        if self.current == Some(handle) {
            self.current = None;
        }
    }

    /// Apply the result of an attempt. Returns `false` without touching state
    /// when `handle` is stale; otherwise records the outcome and returns
    /// `true`. An empty row list is a valid, non-error outcome.
    pub fn complete(
        &mut self,
        handle: FetchHandle,
        result: Result<Vec<MessageRow>, String>,
    ) -> bool {
        if self.current != Some(handle) {
            return false;
        }
        self.current = None;
        self.outcome = match result {
            Ok(rows) => FetchOutcome::Loaded(rows),
            Err(description) => FetchOutcome::Failed(description),
        };
        true
    }
}

impl Default for MessageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(texts: &[&str]) -> Vec<MessageRow> {
        texts.iter().map(|t| MessageRow::new(*t)).collect()
    }

    #[test]
    fn test_starts_idle_then_loading() {
        let mut loader = MessageLoader::new();
        assert_eq!(*loader.outcome(), FetchOutcome::Idle);
        loader.start();
        assert_eq!(*loader.outcome(), FetchOutcome::Loading);
    }

    #[test]
    fn test_superseded_attempt_cannot_overwrite_later_result() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        let b = loader.start();

        // B resolves first and wins.
        assert!(loader.complete(b, Ok(rows(&["X"]))));
        // A resolves afterward and must be discarded.
        assert!(!loader.complete(a, Ok(rows(&["Y"]))));

        assert_eq!(*loader.outcome(), FetchOutcome::Loaded(rows(&["X"])));
    }

    #[test]
    fn test_start_clears_previous_error() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        assert!(loader.complete(a, Err("network down".into())));
        assert_eq!(*loader.outcome(), FetchOutcome::Failed("network down".into()));

        loader.start();
        assert_eq!(*loader.outcome(), FetchOutcome::Loading);
    }

    #[test]
    fn test_failure_clears_rows() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        assert!(loader.complete(a, Ok(rows(&["hello"]))));
        assert_eq!(loader.outcome().rows().len(), 1);

        let b = loader.start();
        assert!(loader.complete(b, Err("network down".into())));
        assert_eq!(*loader.outcome(), FetchOutcome::Failed("network down".into()));
        assert!(loader.outcome().rows().is_empty());
    }

    #[test]
    fn test_empty_rows_is_a_valid_outcome() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        assert!(loader.complete(a, Ok(Vec::new())));
        assert_eq!(*loader.outcome(), FetchOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_cancelled_attempt_is_discarded() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        loader.cancel(a);
        assert!(!loader.complete(a, Ok(rows(&["late"]))));
        // Cancellation leaves the visible state alone.
        assert_eq!(*loader.outcome(), FetchOutcome::Loading);
    }

    #[test]
    fn test_cancel_is_idempotent_and_safe_after_completion() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        loader.cancel(a);
        loader.cancel(a);
        let b = loader.start();
        assert!(loader.complete(b, Ok(rows(&["ok"]))));
        loader.cancel(b);
        assert_eq!(*loader.outcome(), FetchOutcome::Loaded(rows(&["ok"])));
    }

    #[test]
    fn test_duplicate_completion_is_discarded() {
        let mut loader = MessageLoader::new();
        let a = loader.start();
        assert!(loader.complete(a, Ok(rows(&["first"]))));
        assert!(!loader.complete(a, Ok(rows(&["second"]))));
        assert_eq!(*loader.outcome(), FetchOutcome::Loaded(rows(&["first"])));
    }
}
