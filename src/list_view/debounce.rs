use std::time::{Duration, Instant};

/// Single-slot timer that collapses bursts of triggers into one.
///
/// Scheduling replaces any pending deadline, so only the last trigger of a
/// burst fires, `delay` after it arrived. Time is supplied by the caller.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Restarts the quiet window at `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending trigger. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consumes the pending trigger if its quiet window has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn fires_once_after_the_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);

        assert!(!debouncer.fire(start + Duration::from_millis(249)));
        assert!(debouncer.fire(start + DELAY));
        assert!(!debouncer.fire(start + DELAY * 2));
    }

    #[test]
    fn rescheduling_restarts_the_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(200));

        assert!(!debouncer.fire(start + Duration::from_millis(300)));
        assert!(debouncer.fire(start + Duration::from_millis(450)));
    }

    #[test]
    fn cancel_discards_the_pending_trigger() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);

        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(start + DELAY));
        assert!(!debouncer.cancel());
    }
}
