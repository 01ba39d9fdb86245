use std::time::{Duration, Instant};

/// Quiescence window for mutation-driven rescans. Bursty DOM churn keeps
/// resetting the deadline; a scan runs only once the page has been quiet
/// for the full window.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Reset-on-event, fire-after-quiescence timer. No threads; the event
/// loop records events and polls. A pending deadline is replaced, not
/// executed, so at most one scan follows any burst.
pub struct QuiescenceTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl QuiescenceTimer {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn record_event(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Fires at most once per armed deadline, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for QuiescenceTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiescence() {
        let mut timer = QuiescenceTimer::with_window(Duration::from_millis(500));
        let start = Instant::now();

        timer.record_event(start);
        assert!(!timer.poll(start + Duration::from_millis(499)));
        assert!(timer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_event_burst_resets_deadline() {
        let mut timer = QuiescenceTimer::with_window(Duration::from_millis(500));
        let start = Instant::now();

        timer.record_event(start);
        timer.record_event(start + Duration::from_millis(400));

        // The first deadline would have passed; the reset moved it.
        assert!(!timer.poll(start + Duration::from_millis(600)));
        assert!(timer.poll(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_fires_once_then_disarms() {
        let mut timer = QuiescenceTimer::with_window(Duration::from_millis(500));
        let start = Instant::now();

        timer.record_event(start);
        assert!(timer.poll(start + Duration::from_secs(1)));
        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = QuiescenceTimer::new();
        assert!(!timer.poll(Instant::now()));
    }
}
