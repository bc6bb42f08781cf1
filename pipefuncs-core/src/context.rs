//! Execution context passed to every pipe function call

use std::time::{Duration, Instant};

/// Per-evaluation context supplied by the host
///
/// Carries the deadline of the assertion being evaluated. Pipe functions
/// that do no blocking work are free to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeContext {
    deadline: Option<Instant>,
}

impl PipeContext {
    /// Context with no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the deadline has passed
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_never_expires() {
        let ctx = PipeContext::new();
        assert_eq!(ctx.deadline(), None);
        assert!(!ctx.is_expired());
    }

    #[test]
    fn past_deadline_is_expired() {
        let ctx = PipeContext::with_deadline(Instant::now());
        assert!(ctx.is_expired());
    }

    #[test]
    fn future_deadline_is_not_expired() {
        let ctx = PipeContext::with_timeout(Duration::from_secs(3600));
        assert!(ctx.deadline().is_some());
        assert!(!ctx.is_expired());
    }
}
