use std::time::Duration;

use crate::error::CarouselError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A repeating countdown driven by elapsed time.
///
/// The owner feeds frame time through [`Countdown::advance`], which reports how
/// many full periods completed. Dropping the value cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    period: Duration,
    remaining: Duration,
}

impl Countdown {
    /// Arms a countdown that fires after one full `period`.
    pub fn armed(period: Duration) -> Result<Self, CarouselError> {
        if period.is_zero() {
            return Err(CarouselError::ZeroPeriod);
        }
        Ok(Self { period, remaining: period })
    }

    /// Starts a fresh full period.
    pub fn rearm(&mut self) {
        self.remaining = self.period;
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Consumes `elapsed` and returns the number of times the countdown fired,
    /// saturating at `u64::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if elapsed < self.remaining {
            self.remaining -= elapsed;
            return 0;
        }

        // First firing uses up `remaining`, the rest is whole periods plus a partial one.
        let left = (elapsed - self.remaining).as_nanos();
        let period = self.period.as_nanos();
        let extra = left / period;
        let partial = left % period;

        // partial < period, so its seconds fit back into a Duration
        let partial = Duration::new((partial / NANOS_PER_SEC) as u64, (partial % NANOS_PER_SEC) as u32);
        self.remaining = self.period - partial;

        u64::try_from(extra).unwrap_or(u64::MAX).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    fn timer() -> Countdown {
        Countdown::armed(PERIOD).unwrap()
    }

    #[test]
    fn zero_period_is_rejected() {
        assert_eq!(Countdown::armed(Duration::ZERO), Err(CarouselError::ZeroPeriod));
    }

    #[test]
    fn does_not_fire_before_period() {
        let mut timer = timer();
        assert_eq!(timer.advance(Duration::from_millis(4999)), 0);
        assert_eq!(timer.remaining(), Duration::from_millis(1));
    }

    #[test]
    fn fires_exactly_at_period() {
        let mut timer = timer();
        assert_eq!(timer.advance(PERIOD), 1);
        assert_eq!(timer.remaining(), PERIOD);
    }

    #[test]
    fn small_steps_accumulate() {
        let mut timer = timer();
        let frame = Duration::from_millis(16);
        let mut fired = 0;
        for _ in 0..(10_000 / 16) {
            fired += timer.advance(frame);
        }
        // 625 frames of 16ms = 10s
        assert_eq!(fired, 2);
    }

    #[test]
    fn one_large_step_fires_per_period() {
        let mut timer = timer();
        assert_eq!(timer.advance(Duration::from_millis(17_500)), 3);
        assert_eq!(timer.remaining(), Duration::from_millis(2500));
    }

    #[test]
    fn huge_step_is_computed_not_counted() {
        let mut timer = Countdown::armed(Duration::from_millis(1)).unwrap();
        assert_eq!(timer.advance(Duration::from_secs(5_000_000)), 5_000_000_000);
        assert_eq!(timer.remaining(), Duration::from_millis(1));

        let mut timer = Countdown::armed(Duration::from_nanos(1)).unwrap();
        assert_eq!(timer.advance(Duration::MAX), u64::MAX);
        assert_eq!(timer.remaining(), Duration::from_nanos(1));
    }

    #[test]
    fn rearm_restores_full_period() {
        let mut timer = timer();
        timer.advance(Duration::from_millis(3000));
        timer.rearm();
        assert_eq!(timer.remaining(), PERIOD);
    }
}
