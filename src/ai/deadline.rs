use std::time::{Duration, Instant};

/// Cooperative wall clock cutoff. Work that has started is never interrupted,
/// callers check [`Deadline::expired`] before starting the next unit.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Deadline {
            start: Instant::now(),
            budget,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_budget_is_expired_immediately() {
        assert!(Deadline::after(Duration::ZERO).expired());
    }

    #[test]
    fn generous_budget_is_not_expired() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.expired());
        assert!(deadline.remaining() > Duration::from_secs(59));
    }
}
