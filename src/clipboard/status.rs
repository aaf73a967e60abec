//! Transient copy-status feedback.

use std::time::{Duration, Instant};

/// How long a `Copied!` or `Failed` status stays visible.
pub const STATUS_RESET: Duration = Duration::from_secs(2);

/// Outcome of the most recent copy, as shown on the copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Failed",
        }
    }
}

/// Tracks the copy status and reverts it to [`CopyStatus::Idle`] after
/// [`STATUS_RESET`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyIndicator {
    status: CopyStatus,
    set_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy outcome at `now`.
    pub fn record<E>(&mut self, result: &Result<(), E>, now: Instant) {
        self.status = if result.is_ok() {
            CopyStatus::Copied
        } else {
            CopyStatus::Failed
        };
        self.set_at = Some(now);
    }

    /// Back to `Idle` immediately, e.g. when a new conversion starts.
    pub fn reset(&mut self) {
        self.status = CopyStatus::Idle;
        self.set_at = None;
    }

    /// Status as it should appear at `now`.
    pub fn status_at(&self, now: Instant) -> CopyStatus {
        match self.set_at {
            Some(at) if now.saturating_duration_since(at) < STATUS_RESET => self.status,
            _ => CopyStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CopyStatus::Idle.label(), "Copy");
        assert_eq!(CopyStatus::Copied.label(), "Copied!");
        assert_eq!(CopyStatus::Failed.label(), "Failed");
    }

    #[test]
    fn test_success_reverts_after_two_seconds() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::new();
        ind.record::<()>(&Ok(()), t0);
        assert_eq!(ind.status_at(t0), CopyStatus::Copied);
        assert_eq!(
            ind.status_at(t0 + Duration::from_millis(1999)),
            CopyStatus::Copied
        );
        assert_eq!(ind.status_at(t0 + STATUS_RESET), CopyStatus::Idle);
    }

    #[test]
    fn test_failure_reverts_after_two_seconds() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::new();
        ind.record(&Err("no clipboard"), t0);
        assert_eq!(ind.status_at(t0 + Duration::from_secs(1)), CopyStatus::Failed);
        assert_eq!(ind.status_at(t0 + Duration::from_secs(3)), CopyStatus::Idle);
    }

    #[test]
    fn test_new_outcome_restarts_timer() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::new();
        ind.record(&Err("busy"), t0);
        let t1 = t0 + Duration::from_millis(1500);
        ind.record::<()>(&Ok(()), t1);
        assert_eq!(ind.status_at(t1 + Duration::from_secs(1)), CopyStatus::Copied);
    }

    #[test]
    fn test_reset() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::new();
        ind.record::<()>(&Ok(()), t0);
        ind.reset();
        assert_eq!(ind.status_at(t0), CopyStatus::Idle);
    }
}
