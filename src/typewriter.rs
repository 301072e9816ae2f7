//! Typewriter headline: types a target string out one character per tick,
//! notifies once when the whole string is shown, then cycles an ellipsis
//! after it until the owner drops the session.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::interval::Interval;

pub const TYPING_INTERVAL: Duration = Duration::from_millis(120);
pub const ELLIPSIS_INTERVAL: Duration = Duration::from_millis(500);

/// Periods of the two timers a session owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub typing: Duration,
    pub ellipsis: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing: TYPING_INTERVAL,
            ellipsis: ELLIPSIS_INTERVAL,
        }
    }
}

/// Trailing dots shown once the target is fully typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ellipsis {
    #[default]
    None,
    OneDot,
    TwoDots,
    ThreeDots,
}

impl Ellipsis {
    const CYCLE: [Ellipsis; 4] = [
        Ellipsis::None,
        Ellipsis::OneDot,
        Ellipsis::TwoDots,
        Ellipsis::ThreeDots,
    ];

    pub fn next(self) -> Self {
        self.advance_by(1)
    }

    pub fn advance_by(self, steps: u64) -> Self {
        let idx = (self as u64 + steps % 4) % 4;
        Self::CYCLE[idx as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ellipsis::None => "",
            Ellipsis::OneDot => ".",
            Ellipsis::TwoDots => "..",
            Ellipsis::ThreeDots => "...",
        }
    }
}

impl fmt::Display for Ellipsis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which timer currently drives the session.
///
/// The hand-off between typing and cycling (notify, then start the dots)
/// happens inside a single tick, so it never shows up as a phase of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Cycling,
    Stopped,
}

pub type OnComplete = Box<dyn FnMut()>;

/// One typing session over a fixed target.
pub struct Typewriter {
    target: String,
    // characters revealed so far, and the byte length they cover
    cursor: usize,
    revealed_len: usize,
    ellipsis: Ellipsis,
    completed: bool,
    typing: Option<Interval>,
    cycling: Option<Interval>,
    timings: Timings,
    on_complete: OnComplete,
}

impl Typewriter {
    pub fn new(target: impl Into<String>, on_complete: impl FnMut() + 'static) -> Self {
        Self::with_timings(target, Timings::default(), on_complete)
    }

    /// Start a session. An empty target completes (and notifies) right here.
    pub fn with_timings(
        target: impl Into<String>,
        timings: Timings,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        let mut typewriter = Self {
            target: target.into(),
            cursor: 0,
            revealed_len: 0,
            ellipsis: Ellipsis::None,
            completed: false,
            typing: None,
            cycling: None,
            timings,
            on_complete: Box::new(on_complete),
        };
        typewriter.start();
        typewriter
    }

    fn start(&mut self) {
        self.cursor = 0;
        self.revealed_len = 0;
        self.ellipsis = Ellipsis::None;
        self.completed = false;
        self.cycling = None;
        self.typing = Some(Interval::new(self.timings.typing));
        debug!(chars = self.target.chars().count(), "typewriter started");
        self.settle();
    }

    /// Re-evaluate derived state after the revealed prefix moved.
    fn settle(&mut self) {
        if !self.is_revealed() {
            return;
        }

        if !self.completed {
            self.typing = None;
            self.completed = true;
            debug!(text = %self.target, "typewriter completed");
            (self.on_complete)();
        }

        if self.cycling.is_none() {
            self.cycling = Some(Interval::new(self.timings.ellipsis));
        }
    }

    fn type_next(&mut self) {
        if let Some(ch) = self.target[self.revealed_len..].chars().next() {
            self.revealed_len += ch.len_utf8();
            self.cursor += 1;
        }
        self.settle();
    }

    /// Feed elapsed time to both timers.
    ///
    /// Time left over after the last character is typed goes to the
    /// ellipsis timer, so one large step lands where many small ones would.
    /// Returns that leftover: the share of `elapsed` spent fully revealed.
    pub fn advance(&mut self, elapsed: Duration) -> Duration {
        let mut budget = elapsed;

        while let Some(typing) = self.typing.as_mut() {
            if !typing.tick(&mut budget) {
                break;
            }
            self.type_next();
        }

        if let Some(cycling) = self.cycling.as_mut() {
            let ticks = cycling.drain(budget);
            self.ellipsis = self.ellipsis.advance_by(ticks);
        }

        if self.is_revealed() {
            budget
        } else {
            Duration::ZERO
        }
    }

    /// Swap in a new target, restarting the session from scratch.
    ///
    /// Returns false (and leaves the session alone) if the target is unchanged.
    pub fn set_target(&mut self, target: impl Into<String>) -> bool {
        let target = target.into();
        if target == self.target {
            return false;
        }

        self.cancel();
        self.target = target;
        self.start();
        true
    }

    /// Stop both timers. Further calls to [`Typewriter::advance`] are no-ops.
    pub fn cancel(&mut self) {
        if self.typing.take().is_some() | self.cycling.take().is_some() {
            debug!(text = %self.target, "typewriter cancelled");
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn revealed(&self) -> &str {
        &self.target[..self.revealed_len]
    }

    /// Number of characters revealed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn ellipsis(&self) -> Ellipsis {
        self.ellipsis
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_len == self.target.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn phase(&self) -> Phase {
        if self.typing.is_some() {
            Phase::Typing
        } else if self.cycling.is_some() {
            Phase::Cycling
        } else {
            Phase::Stopped
        }
    }

    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Typewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.revealed(), self.ellipsis)
    }
}

impl fmt::Debug for Typewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typewriter")
            .field("target", &self.target)
            .field("cursor", &self.cursor)
            .field("ellipsis", &self.ellipsis)
            .field("completed", &self.completed)
            .field("phase", &self.phase())
            .finish()
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let hook = {
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        };
        (calls, hook)
    }

    #[test]
    fn test_hi_scenario() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);
        assert_eq!(tw.display(), "");

        tw.advance(TYPING_INTERVAL);
        assert_eq!(tw.display(), "h");
        assert_eq!(calls.get(), 0);

        tw.advance(TYPING_INTERVAL);
        assert_eq!(tw.display(), "hi");
        assert_eq!(calls.get(), 1);
        assert_eq!(tw.phase(), Phase::Cycling);

        let expected = ["hi.", "hi..", "hi...", "hi"];
        for want in expected {
            tw.advance(ELLIPSIS_INTERVAL);
            assert_eq!(tw.display(), want);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_completes_after_exactly_len_ticks() {
        let (calls, hook) = counter();
        let target = "typewriter";
        let mut tw = Typewriter::new(target, hook);

        for k in 1..target.len() {
            tw.advance(TYPING_INTERVAL);
            assert_eq!(tw.cursor(), k);
            assert!(!tw.is_revealed());
            assert_eq!(calls.get(), 0);
        }

        tw.advance(TYPING_INTERVAL);
        assert_eq!(tw.revealed(), target);
        assert!(tw.is_completed());
        assert_eq!(calls.get(), 1);

        for _ in 0..20 {
            tw.advance(TYPING_INTERVAL);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_revealed_is_always_a_prefix() {
        let target = "héllo wörld ✨";
        let (_calls, hook) = counter();
        let mut tw = Typewriter::new(target, hook);

        for k in 0..=target.chars().count() {
            assert!(target.starts_with(tw.revealed()));
            assert_eq!(tw.revealed().chars().count(), k);
            tw.advance(TYPING_INTERVAL);
        }
        assert_eq!(tw.revealed(), target);
    }

    #[test]
    fn test_empty_target_completes_immediately() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("", hook);

        assert_eq!(calls.get(), 1);
        assert!(tw.is_completed());
        assert_eq!(tw.phase(), Phase::Cycling);
        assert_eq!(tw.cursor(), 0);

        tw.advance(ELLIPSIS_INTERVAL);
        assert_eq!(tw.display(), ".");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let (_calls, hook) = counter();
        let mut tw = Typewriter::new("ab", hook);

        tw.advance(Duration::from_millis(60));
        assert_eq!(tw.display(), "");
        tw.advance(Duration::from_millis(60));
        assert_eq!(tw.display(), "a");
    }

    #[test]
    fn test_leftover_time_feeds_ellipsis() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);

        tw.advance(TYPING_INTERVAL * 2 + ELLIPSIS_INTERVAL * 3);
        assert_eq!(tw.display(), "hi...");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_advance_reports_time_since_reveal() {
        let (_calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);

        assert_eq!(tw.advance(TYPING_INTERVAL), Duration::ZERO);
        let extra = Duration::from_millis(70);
        assert_eq!(tw.advance(TYPING_INTERVAL + extra), extra);
        assert_eq!(tw.advance(ELLIPSIS_INTERVAL), ELLIPSIS_INTERVAL);

        let (_calls, hook) = counter();
        let mut empty = Typewriter::new("", hook);
        assert_eq!(empty.advance(extra), extra);
    }

    #[test]
    fn test_ellipsis_has_period_four() {
        let (_calls, hook) = counter();
        let mut tw = Typewriter::new("x", hook);
        tw.advance(TYPING_INTERVAL);

        let mut seen = Vec::new();
        for _ in 0..12 {
            seen.push(tw.ellipsis());
            tw.advance(ELLIPSIS_INTERVAL);
        }
        assert_eq!(seen[0..4], seen[4..8]);
        assert_eq!(seen[4..8], seen[8..12]);
        assert_eq!(seen[0..4], Ellipsis::CYCLE);
    }

    #[test]
    fn test_set_target_resets_session() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);
        tw.advance(TYPING_INTERVAL * 2 + ELLIPSIS_INTERVAL);
        assert_eq!(tw.display(), "hi.");
        assert_eq!(calls.get(), 1);

        assert!(tw.set_target("yo!"));
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.ellipsis(), Ellipsis::None);
        assert!(!tw.is_completed());
        assert_eq!(tw.phase(), Phase::Typing);

        tw.advance(TYPING_INTERVAL * 3);
        assert_eq!(tw.display(), "yo!");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_set_target_mid_typing() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hello", hook);
        tw.advance(TYPING_INTERVAL * 2 + Duration::from_millis(100));
        assert_eq!(tw.display(), "he");

        tw.set_target("ok");
        // the partially elapsed tick of the old session must not carry over
        tw.advance(Duration::from_millis(100));
        assert_eq!(tw.display(), "");
        tw.advance(Duration::from_millis(20));
        assert_eq!(tw.display(), "o");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_same_target_is_not_a_change() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);
        tw.advance(TYPING_INTERVAL * 2);

        assert!(!tw.set_target("hi"));
        assert_eq!(tw.display(), "hi");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cancel_mid_typing_freezes_state() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hello", hook);
        tw.advance(TYPING_INTERVAL * 2);
        tw.cancel();
        assert_eq!(tw.phase(), Phase::Stopped);

        tw.advance(Duration::from_secs(10));
        assert_eq!(tw.display(), "he");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_cancel_mid_cycling_freezes_state() {
        let (calls, hook) = counter();
        let mut tw = Typewriter::new("hi", hook);
        tw.advance(TYPING_INTERVAL * 2 + ELLIPSIS_INTERVAL * 2);
        assert_eq!(tw.display(), "hi..");

        tw.cancel();
        tw.advance(Duration::from_secs(10));
        assert_eq!(tw.display(), "hi..");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_custom_timings() {
        let (calls, hook) = counter();
        let timings = Timings {
            typing: Duration::from_millis(10),
            ellipsis: Duration::from_millis(40),
        };
        let mut tw = Typewriter::with_timings("abc", timings, hook);
        tw.advance(Duration::from_millis(30));
        assert_eq!(tw.display(), "abc");
        assert_eq!(calls.get(), 1);
        tw.advance(Duration::from_millis(40));
        assert_eq!(tw.display(), "abc.");
    }

    #[test]
    fn test_ellipsis_cycle() {
        assert_eq!(Ellipsis::None.next(), Ellipsis::OneDot);
        assert_eq!(Ellipsis::OneDot.next(), Ellipsis::TwoDots);
        assert_eq!(Ellipsis::TwoDots.next(), Ellipsis::ThreeDots);
        assert_eq!(Ellipsis::ThreeDots.next(), Ellipsis::None);
        assert_eq!(Ellipsis::TwoDots.advance_by(u64::MAX), Ellipsis::OneDot);
        assert_eq!(Ellipsis::ThreeDots.to_string(), "...");
    }
}
