use std::time::Duration;

/// Shortest period an interval will run at. Zero would never make progress.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A periodic timer fed by elapsed wall time from the event loop.
///
/// The owner cancels it by dropping it; there is no other handle to leak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    until_next: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            until_next: period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before the next tick fires.
    pub fn until_next(&self) -> Duration {
        self.until_next
    }

    /// Spend time from `budget` up to the next tick.
    ///
    /// Returns true if the tick fired; the time it consumed is taken out of
    /// `budget` so the caller can keep ticking with what is left.
    pub fn tick(&mut self, budget: &mut Duration) -> bool {
        if *budget >= self.until_next {
            *budget -= self.until_next;
            self.until_next = self.period;
            true
        } else {
            self.until_next -= *budget;
            *budget = Duration::ZERO;
            false
        }
    }

    /// Consume the whole budget and return how many ticks fired.
    pub fn drain(&mut self, budget: Duration) -> u64 {
        if budget < self.until_next {
            self.until_next -= budget;
            return 0;
        }

        let rest = budget - self.until_next;
        let period = self.period.as_nanos();
        let extra = rest.as_nanos() / period;
        let leftover = rest.as_nanos() % period;

        // leftover < period, which itself fits in a Duration
        self.until_next = self.period - Duration::from_nanos(leftover as u64);
        1 + extra as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tick_waits_for_full_period() {
        let mut interval = Interval::new(ms(120));
        let mut budget = ms(119);
        assert!(!interval.tick(&mut budget));
        assert_eq!(budget, Duration::ZERO);
        assert_eq!(interval.until_next(), ms(1));

        let mut budget = ms(1);
        assert!(interval.tick(&mut budget));
        assert_eq!(interval.until_next(), ms(120));
    }

    #[test]
    fn test_tick_returns_leftover_budget() {
        let mut interval = Interval::new(ms(100));
        let mut budget = ms(250);
        assert!(interval.tick(&mut budget));
        assert_eq!(budget, ms(150));
        assert!(interval.tick(&mut budget));
        assert_eq!(budget, ms(50));
        assert!(!interval.tick(&mut budget));
        assert_eq!(interval.until_next(), ms(50));
    }

    #[test]
    fn test_drain_counts_ticks() {
        let mut interval = Interval::new(ms(500));
        assert_eq!(interval.drain(ms(499)), 0);
        assert_eq!(interval.drain(ms(1)), 1);
        assert_eq!(interval.drain(ms(2_250)), 4);
        assert_eq!(interval.until_next(), ms(250));
    }

    #[test]
    fn test_drain_exact_multiple() {
        let mut interval = Interval::new(ms(10));
        assert_eq!(interval.drain(ms(30)), 3);
        assert_eq!(interval.until_next(), ms(10));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.period(), MIN_PERIOD);
        assert_eq!(interval.drain(ms(5)), 5);
    }
}
