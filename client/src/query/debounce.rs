//! Search input debouncing.

use std::time::{Duration, Instant};

/// Debounces a text value: edits accumulate in `pending` and commit only
/// after the window passes without further edits. The quote list is keyed on
/// the committed value, so typing does not fire a request per keystroke.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
    committed: String,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            committed: String::new(),
        }
    }

    /// The last committed value.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Record an edit. Restarts the window unless the value already matches
    /// what is committed or pending.
    pub fn update(&mut self, value: &str) {
        self.update_at(value, Instant::now());
    }

    pub fn update_at(&mut self, value: &str, now: Instant) {
        if value == self.committed && self.pending.is_none() {
            return;
        }
        if let Some((pending, _)) = &self.pending {
            if pending == value {
                return;
            }
        }
        if value == self.committed {
            // Edited back to the committed value before the window elapsed.
            self.pending = None;
            return;
        }
        self.pending = Some((value.to_string(), now));
    }

    /// Commit the pending value once its window has elapsed. Returns the
    /// newly committed value exactly once per commit.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((value, since)) if now.duration_since(*since) >= self.window => {
                self.committed = value.clone();
                self.pending = None;
                Some(self.committed.clone())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_commits_after_quiet_window() {
        let mut d = Debouncer::new(WINDOW);
        let t0 = Instant::now();
        d.update_at("li", t0);
        assert_eq!(d.poll_at(t0 + Duration::from_millis(499)), None);
        assert_eq!(
            d.poll_at(t0 + Duration::from_millis(500)),
            Some("li".to_string())
        );
        assert_eq!(d.committed(), "li");
        // Commit fires once.
        assert_eq!(d.poll_at(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn test_rapid_edits_commit_only_final_value() {
        let mut d = Debouncer::new(WINDOW);
        let t0 = Instant::now();
        d.update_at("l", t0);
        d.update_at("li", t0 + Duration::from_millis(100));
        d.update_at("lif", t0 + Duration::from_millis(200));
        d.update_at("life", t0 + Duration::from_millis(300));
        assert_eq!(d.poll_at(t0 + Duration::from_millis(700)), None);
        assert_eq!(
            d.poll_at(t0 + Duration::from_millis(800)),
            Some("life".to_string())
        );
    }

    #[test]
    fn test_reverting_to_committed_cancels_pending() {
        let mut d = Debouncer::new(WINDOW);
        let t0 = Instant::now();
        d.update_at("life", t0);
        d.poll_at(t0 + WINDOW);
        d.update_at("lifeb", t0 + Duration::from_secs(1));
        d.update_at("life", t0 + Duration::from_millis(1100));
        assert_eq!(d.poll_at(t0 + Duration::from_secs(10)), None);
        assert_eq!(d.committed(), "life");
    }

    #[test]
    fn test_repeat_of_pending_does_not_restart_window() {
        let mut d = Debouncer::new(WINDOW);
        let t0 = Instant::now();
        d.update_at("li", t0);
        d.update_at("li", t0 + Duration::from_millis(400));
        assert_eq!(
            d.poll_at(t0 + Duration::from_millis(500)),
            Some("li".to_string())
        );
    }
}
