//! Progressive reveal of assistant replies.
//!
//! Each assistant turn owns one `Typewriter` that expands a character prefix
//! of the reply at a fixed cadence. The state lives inside the turn, so
//! removing or replacing the turn tears the reveal down with it; there is no
//! detached timer that could fire against stale text.

use std::time::{Duration, Instant};

/// Cadence of the reveal: one character per tick.
pub const TICK: Duration = Duration::from_millis(20);

/// Reveal state for one assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Actively revealing characters
    Printing,
    /// Paused by the user; the revealed prefix is frozen
    Paused,
    /// The full reply is visible; terminal until the turn is replaced
    Complete,
}

/// Character-prefix reveal state machine.
///
/// Counts characters, not bytes, so the visible prefix always lands on a
/// UTF-8 boundary. Driven by `advance` from the UI update loop.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Total characters in the reply text
    total: usize,
    /// Characters currently revealed, `0..=total`
    revealed: usize,
    mode: RevealMode,
    /// Tick reference; `None` whenever not printing
    last_tick: Option<Instant>,
}

impl Typewriter {
    /// Start a reveal for the given reply text.
    pub fn new(content: &str) -> Self {
        let total = content.chars().count();
        let mode = if total == 0 {
            RevealMode::Complete
        } else {
            RevealMode::Printing
        };
        Self {
            total,
            revealed: 0,
            mode,
            last_tick: None,
        }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.mode == RevealMode::Complete
    }

    /// Whether the blinking caret should be drawn: only while printing and
    /// there is still hidden text.
    pub fn caret_visible(&self) -> bool {
        self.mode == RevealMode::Printing && self.revealed < self.total
    }

    /// Advance the reveal to `now`. Returns true if the visible prefix
    /// changed. The first call after entering `Printing` only arms the tick
    /// reference.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.mode != RevealMode::Printing {
            return false;
        }
        let last = match self.last_tick {
            Some(last) => last,
            None => {
                self.last_tick = Some(now);
                return false;
            }
        };
        let steps = (now.saturating_duration_since(last).as_millis() / TICK.as_millis()) as usize;
        if steps == 0 {
            return false;
        }
        self.revealed = (self.revealed + steps).min(self.total);
        if self.revealed == self.total {
            self.mode = RevealMode::Complete;
            self.last_tick = None;
        } else {
            // Carry the remainder so cadence stays steady across frames
            self.last_tick = Some(last + TICK * steps as u32);
        }
        true
    }

    /// Flip between `Printing` and `Paused`.
    ///
    /// Resuming from `Paused` restarts the reveal from zero rather than the
    /// pause point. `Complete` is terminal; toggling then is a no-op.
    pub fn toggle(&mut self) {
        match self.mode {
            RevealMode::Printing => {
                self.mode = RevealMode::Paused;
                self.last_tick = None;
            }
            RevealMode::Paused => {
                self.revealed = 0;
                self.mode = RevealMode::Printing;
                self.last_tick = None;
            }
            RevealMode::Complete => {}
        }
    }

    /// The revealed prefix of `content`, sliced on a character boundary.
    ///
    /// `content` must be the same text this typewriter was created from.
    pub fn prefix<'a>(&self, content: &'a str) -> &'a str {
        if self.revealed >= self.total {
            return content;
        }
        match content.char_indices().nth(self.revealed) {
            Some((idx, _)) => &content[..idx],
            None => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_printing_from_zero() {
        let tw = Typewriter::new("hello");
        assert_eq!(tw.mode(), RevealMode::Printing);
        assert_eq!(tw.revealed(), 0);
        assert_eq!(tw.prefix("hello"), "");
    }

    #[test]
    fn test_empty_content_is_complete() {
        let tw = Typewriter::new("");
        assert_eq!(tw.mode(), RevealMode::Complete);
        assert_eq!(tw.revealed(), 0);
        assert!(!tw.caret_visible());
    }

    #[test]
    fn test_advance_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        let start = Instant::now();
        assert!(!tw.advance(start)); // arms the tick reference
        assert!(tw.advance(start + TICK));
        assert_eq!(tw.revealed(), 1);
        assert_eq!(tw.prefix("abc"), "a");
        assert!(tw.advance(start + TICK * 2));
        assert_eq!(tw.prefix("abc"), "ab");
    }

    #[test]
    fn test_advance_catches_up_after_long_frame() {
        let mut tw = Typewriter::new("abcdef");
        let start = Instant::now();
        tw.advance(start);
        // One slow frame worth three ticks reveals three characters
        assert!(tw.advance(start + TICK * 3));
        assert_eq!(tw.revealed(), 3);
    }

    #[test]
    fn test_monotonic_until_complete() {
        let mut tw = Typewriter::new("hello world");
        let start = Instant::now();
        tw.advance(start);
        let mut prev = 0;
        for i in 1..100 {
            tw.advance(start + TICK * i);
            assert!(tw.revealed() >= prev);
            prev = tw.revealed();
        }
        assert_eq!(tw.mode(), RevealMode::Complete);
        assert_eq!(tw.revealed(), "hello world".chars().count());
        // Complete is terminal
        assert!(!tw.advance(start + TICK * 200));
        assert_eq!(tw.mode(), RevealMode::Complete);
    }

    #[test]
    fn test_pause_freezes_reveal() {
        let mut tw = Typewriter::new("abcdef");
        let start = Instant::now();
        tw.advance(start);
        tw.advance(start + TICK * 2);
        assert_eq!(tw.revealed(), 2);

        tw.toggle();
        assert_eq!(tw.mode(), RevealMode::Paused);
        assert_eq!(tw.revealed(), 2); // unchanged by pausing
        assert!(!tw.advance(start + TICK * 50));
        assert_eq!(tw.revealed(), 2);
        assert!(!tw.caret_visible());
    }

    #[test]
    fn test_resume_replays_from_zero() {
        let mut tw = Typewriter::new("abcdef");
        let start = Instant::now();
        tw.advance(start);
        tw.advance(start + TICK * 3);
        tw.toggle(); // pause at 3
        tw.toggle(); // resume: full replay
        assert_eq!(tw.mode(), RevealMode::Printing);
        assert_eq!(tw.revealed(), 0);

        // No burst catch-up after resuming: the first advance re-arms
        let resume = start + TICK * 100;
        assert!(!tw.advance(resume));
        tw.advance(resume + TICK);
        assert_eq!(tw.revealed(), 1);
    }

    #[test]
    fn test_toggle_after_complete_is_noop() {
        let mut tw = Typewriter::new("ab");
        let start = Instant::now();
        tw.advance(start);
        tw.advance(start + TICK * 10);
        assert!(tw.is_complete());
        tw.toggle();
        assert_eq!(tw.mode(), RevealMode::Complete);
        assert_eq!(tw.revealed(), 2);
    }

    #[test]
    fn test_prefix_lands_on_char_boundary() {
        let text = "caf\u{e9} \u{1f30f} ok";
        let mut tw = Typewriter::new(text);
        let start = Instant::now();
        tw.advance(start);
        for i in 1..=20 {
            tw.advance(start + TICK * i);
            // Slicing must never panic mid-codepoint
            let p = tw.prefix(text);
            assert!(text.starts_with(p));
        }
        assert_eq!(tw.prefix(text), text);
    }
}
