//! Hero carousel controller.
//!
//! Owns the current slide index over an immutable [`SlideDeck`] and the
//! auto-advance countdown. Time is pushed in by the caller through
//! [`Carousel::advance`], so the frame loop and tests share one code path.

pub mod fade;
pub mod timer;

use std::time::Duration;

use tracing::debug;

use crate::error::CarouselError;
use crate::slide::{Slide, SlideDeck};

pub use fade::Crossfade;
pub use timer::Countdown;

/// What a manual navigation does to the pending auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RestartPolicy {
    /// Start a full fresh period after every manual action.
    #[default]
    Restart,
    /// Keep counting down from where the timer was.
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Manual,
    Auto,
}

/// A single index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub cause: Cause,
}

#[derive(Debug)]
pub struct Carousel {
    deck: SlideDeck,
    current_index: usize,
    policy: RestartPolicy,
    // None once unmounted
    timer: Option<Countdown>,
}

impl Carousel {
    /// Creates the controller at index 0 and arms the auto-advance timer.
    ///
    /// A zero `period` is rejected with [`CarouselError::ZeroPeriod`].
    pub fn mount(deck: SlideDeck, period: Duration, policy: RestartPolicy) -> Result<Self, CarouselError> {
        let timer = Countdown::armed(period)?;
        debug!(slides = deck.len(), period_ms = period.as_millis() as u64, ?policy, "carousel mounted");
        Ok(Self {
            deck,
            current_index: 0,
            policy,
            timer: Some(timer),
        })
    }

    /// Cancels the auto-advance timer. No automatic transition fires afterwards.
    pub fn unmount(&mut self) {
        if self.timer.take().is_some() {
            debug!(index = self.current_index, "carousel unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) -> Transition {
        let to = (self.current_index + 1) % self.deck.len();
        self.transition(to, Cause::Manual)
    }

    pub fn previous(&mut self) -> Transition {
        let len = self.deck.len();
        let to = (self.current_index + len - 1) % len;
        self.transition(to, Cause::Manual)
    }

    /// Jumps straight to `index`.
    ///
    /// An out-of-range index is a caller bug: it is reported, never clamped,
    /// and leaves both the index and the timer untouched.
    pub fn go_to(&mut self, index: usize) -> Result<Transition, CarouselError> {
        if index >= self.deck.len() {
            return Err(CarouselError::IndexOutOfRange { index, len: self.deck.len() });
        }
        Ok(self.transition(index, Cause::Manual))
    }

    /// Feeds elapsed time to the auto-advance timer.
    ///
    /// Returns the automatic transition, if the timer fired. A step spanning
    /// several periods moves one slide per period, applied as a single
    /// transition.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Transition> {
        let fired = self.timer.as_mut()?.advance(elapsed);
        if fired == 0 {
            return None;
        }

        let len = self.deck.len();
        let steps = (fired % len as u64) as usize;
        let to = (self.current_index + steps) % len;
        Some(self.transition(to, Cause::Auto))
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.deck[self.current_index]
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    // Always false, a deck is never empty
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn slides(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }

    /// Time left before the next automatic advance, `None` once unmounted.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timer.as_ref().map(Countdown::remaining)
    }

    fn transition(&mut self, to: usize, cause: Cause) -> Transition {
        let from = self.current_index;
        self.current_index = to;

        // Manual actions restart the one owned countdown in place; an
        // unmounted carousel has none to restart.
        if cause == Cause::Manual && self.policy == RestartPolicy::Restart {
            if let Some(timer) = self.timer.as_mut() {
                timer.rearm();
            }
        }

        debug!(from, to, ?cause, "slide changed");
        Transition { from, to, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    fn deck(n: u32) -> SlideDeck {
        let slides = (0..n)
            .map(|i| Slide::new(i + 1, &format!("Slide {i}"), "subtitle", "/slide.jpg"))
            .collect();
        SlideDeck::new(slides).unwrap()
    }

    fn carousel(n: u32) -> Carousel {
        Carousel::mount(deck(n), PERIOD, RestartPolicy::Restart).unwrap()
    }

    #[test]
    fn starts_at_zero_and_armed() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_mounted());
        assert_eq!(c.time_until_advance(), Some(PERIOD));
    }

    #[test]
    fn next_k_times_lands_on_k_mod_n() {
        for n in 1..=6 {
            let mut c = carousel(n);
            for k in 1..=20usize {
                c.next();
                assert_eq!(c.current_index(), k % n as usize, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn previous_then_next_restores_index() {
        for n in 1..=5u32 {
            for start in 0..n as usize {
                let mut c = carousel(n);
                c.go_to(start).unwrap();

                c.previous();
                c.next();
                assert_eq!(c.current_index(), start);

                c.next();
                c.previous();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn previous_wraps_from_zero() {
        let mut c = carousel(4);
        let t = c.previous();
        assert_eq!(t, Transition { from: 0, to: 3, cause: Cause::Manual });
    }

    #[test]
    fn go_to_sets_index_and_is_idempotent() {
        let mut c = carousel(5);
        for i in 0..5 {
            c.go_to(i).unwrap();
            assert_eq!(c.current_index(), i);
            c.go_to(i).unwrap();
            assert_eq!(c.current_index(), i);
        }
    }

    #[test]
    fn go_to_out_of_range_fails_and_keeps_state() {
        let mut c = carousel(3);
        c.next();
        c.advance(Duration::from_millis(1200));
        let remaining = c.time_until_advance();

        assert_eq!(c.go_to(3), Err(CarouselError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(c.go_to(usize::MAX), Err(CarouselError::IndexOutOfRange { index: usize::MAX, len: 3 }));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.time_until_advance(), remaining);
    }

    #[test]
    fn auto_advances_once_per_period() {
        let mut c = carousel(3);

        assert_eq!(c.advance(Duration::ZERO), None);
        assert_eq!(c.advance(PERIOD - Duration::from_millis(1)), None);
        assert_eq!(c.current_index(), 0);

        let t = c.advance(Duration::from_millis(1)).unwrap();
        assert_eq!(t, Transition { from: 0, to: 1, cause: Cause::Auto });

        c.advance(PERIOD);
        assert_eq!(c.current_index(), 2);
        c.advance(PERIOD);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn frame_sized_steps_advance_with_jitter() {
        let mut c = carousel(4);
        // ~60 fps with uneven frames for 12 seconds
        let frames = [15u64, 17, 16, 18, 14];
        let mut elapsed = 0;
        let mut i = 0;
        while elapsed < 12_000 {
            let dt = frames[i % frames.len()];
            c.advance(Duration::from_millis(dt));
            elapsed += dt;
            i += 1;
        }
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn manual_action_buys_full_period() {
        let mut c = carousel(3);
        c.advance(Duration::from_millis(4900));

        c.next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.advance(Duration::from_millis(4999)), None);
        assert_eq!(c.current_index(), 1);
        assert!(c.advance(Duration::from_millis(1)).is_some());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn every_manual_operation_rearms() {
        let mut c = carousel(3);

        c.advance(Duration::from_millis(4000));
        c.previous();
        assert_eq!(c.time_until_advance(), Some(PERIOD));

        c.advance(Duration::from_millis(4000));
        c.go_to(0).unwrap();
        assert_eq!(c.time_until_advance(), Some(PERIOD));
        assert_eq!(c.advance(Duration::from_millis(4500)), None);
    }

    #[test]
    fn preserve_policy_keeps_countdown() {
        let mut c = Carousel::mount(deck(3), PERIOD, RestartPolicy::Preserve).unwrap();
        c.advance(Duration::from_millis(4000));
        c.next();
        assert_eq!(c.time_until_advance(), Some(Duration::from_millis(1000)));

        let t = c.advance(Duration::from_millis(1000)).unwrap();
        assert_eq!(t, Transition { from: 1, to: 2, cause: Cause::Auto });
    }

    #[test]
    fn large_step_fires_per_elapsed_period() {
        let mut c = carousel(4);
        let t = c.advance(Duration::from_millis(15_000)).unwrap();
        assert_eq!(t.to, 3);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn huge_step_lands_in_one_transition() {
        let mut c = Carousel::mount(deck(3), Duration::from_millis(1), RestartPolicy::Restart).unwrap();
        // 5e9 periods, 5e9 % 3 == 2
        let t = c.advance(Duration::from_secs(5_000_000)).unwrap();
        assert_eq!(t, Transition { from: 0, to: 2, cause: Cause::Auto });
        assert_eq!(c.time_until_advance(), Some(Duration::from_millis(1)));

        let t = c.advance(Duration::MAX).unwrap();
        assert_eq!(t.cause, Cause::Auto);
        assert!(t.to < 3);
        assert!(c.is_mounted());
    }

    #[test]
    fn zero_period_cannot_mount() {
        let err = Carousel::mount(deck(3), Duration::ZERO, RestartPolicy::Restart).unwrap_err();
        assert_eq!(err, CarouselError::ZeroPeriod);
    }

    #[test]
    fn unmount_cancels_timer() {
        let mut c = carousel(3);
        c.advance(Duration::from_millis(2500));
        c.unmount();

        assert!(!c.is_mounted());
        assert_eq!(c.time_until_advance(), None);
        assert_eq!(c.advance(Duration::from_secs(3600)), None);
        assert_eq!(c.advance(Duration::MAX), None);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn manual_navigation_after_unmount_does_not_rearm() {
        let mut c = carousel(3);
        c.unmount();
        c.next();
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_mounted());
        assert_eq!(c.advance(PERIOD * 10), None);
    }

    #[test]
    fn three_slide_wraparound() {
        let slides = vec![
            Slide::new(1, "A", "", "/a.jpg"),
            Slide::new(2, "B", "", "/b.jpg"),
            Slide::new(3, "C", "", "/c.jpg"),
        ];
        let mut c = Carousel::mount(SlideDeck::new(slides).unwrap(), PERIOD, RestartPolicy::Restart).unwrap();

        assert_eq!(c.current_slide().title, "A");
        c.next();
        assert_eq!((c.current_index(), c.current_slide().title.as_str()), (1, "B"));
        c.next();
        assert_eq!((c.current_index(), c.current_slide().title.as_str()), (2, "C"));
        c.next();
        assert_eq!((c.current_index(), c.current_slide().title.as_str()), (0, "A"));
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = carousel(1);
        assert_eq!(c.next().to, 0);
        assert_eq!(c.previous().to, 0);
        assert_eq!(c.advance(PERIOD).map(|t| t.to), Some(0));
    }
}
