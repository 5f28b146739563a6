//! Phrase cycler: types, holds, and deletes each phrase in turn, forever.
//!
//! The cycler is a pure state machine. A driver asks for
//! [`PhraseCycler::next_delay`], sleeps that long, then calls
//! [`PhraseCycler::advance`]. Only one sleep is ever outstanding.

use std::time::Duration;

use crate::error::{Result, VoltError};

/// Timing knobs for the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerTimings {
    /// Delay before each typed character
    pub typing: Duration,
    /// Delay before each deleted character
    pub deleting: Duration,
    /// Hold time once a phrase is fully typed
    pub pause: Duration,
}

impl Default for CyclerTimings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(1500),
        }
    }
}

impl CyclerTimings {
    pub fn from_millis(typing: u64, deleting: u64, pause: u64) -> Self {
        Self {
            typing: Duration::from_millis(typing),
            deleting: Duration::from_millis(deleting),
            pause: Duration::from_millis(pause),
        }
    }
}

/// Which part of the cycle the active phrase is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePhase {
    Typing,
    Paused,
    Deleting,
}

/// Cycling state for one mounted instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseCycler {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: CyclePhase,
    timings: CyclerTimings,
}

impl PhraseCycler {
    /// Start on the first phrase with nothing typed.
    pub fn new<S: AsRef<str>>(phrases: &[S], timings: CyclerTimings) -> Result<Self> {
        let phrases = split_phrases(phrases)?;
        let mut cycler = Self {
            phrases,
            index: 0,
            shown: 0,
            phase: CyclePhase::Typing,
            timings,
        };
        cycler.settle();
        Ok(cycler)
    }

    /// Replace the phrase list.
    ///
    /// An identical list is ignored. A different list restarts from the
    /// first phrase with nothing typed. An empty list is rejected and the
    /// current list is kept.
    pub fn set_phrases<S: AsRef<str>>(&mut self, phrases: &[S]) -> Result<bool> {
        let phrases = split_phrases(phrases)?;
        if phrases == self.phrases {
            return Ok(false);
        }
        self.phrases = phrases;
        self.index = 0;
        self.shown = 0;
        self.phase = CyclePhase::Typing;
        self.settle();
        Ok(true)
    }

    pub fn set_timings(&mut self, timings: CyclerTimings) {
        self.timings = timings;
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            CyclePhase::Typing => self.timings.typing,
            CyclePhase::Paused => self.timings.pause,
            CyclePhase::Deleting => self.timings.deleting,
        }
    }

    /// Perform the timed transition for the current phase.
    pub fn advance(&mut self) {
        match self.phase {
            CyclePhase::Typing => self.shown += 1,
            CyclePhase::Paused => self.phase = CyclePhase::Deleting,
            CyclePhase::Deleting => self.shown = self.shown.saturating_sub(1),
        }
        self.settle();
    }

    /// Apply the untimed transitions: a fully typed phrase pauses, and an
    /// emptied phrase hands over to the next one.
    fn settle(&mut self) {
        loop {
            let len = self.phrases[self.index].len();
            match self.phase {
                CyclePhase::Typing if self.shown >= len => {
                    self.shown = len;
                    self.phase = CyclePhase::Paused;
                }
                CyclePhase::Deleting if self.shown == 0 => {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = CyclePhase::Typing;
                    // An empty phrase pauses immediately; loop once more.
                    if !self.phrases[self.index].is_empty() {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == CyclePhase::Deleting
    }

    pub fn is_paused(&self) -> bool {
        self.phase == CyclePhase::Paused
    }

    /// Currently visible text; always a prefix of the active phrase.
    pub fn current_text(&self) -> String {
        self.phrases[self.index][..self.shown].iter().collect()
    }

    pub fn current_phrase(&self) -> String {
        self.phrases[self.index].iter().collect()
    }
}

fn split_phrases<S: AsRef<str>>(phrases: &[S]) -> Result<Vec<Vec<char>>> {
    if phrases.is_empty() {
        return Err(VoltError::EmptyPhrases);
    }
    Ok(phrases
        .iter()
        .map(|p| p.as_ref().chars().collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(phrases: &[&str]) -> PhraseCycler {
        PhraseCycler::new(phrases, CyclerTimings::from_millis(10, 5, 100)).unwrap()
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let mut c = cycler(&["ab", "c"]);
        assert_eq!(c.phase(), CyclePhase::Typing);
        assert_eq!(c.next_delay(), Duration::from_millis(10));

        c.advance();
        assert_eq!(c.current_text(), "a");
        c.advance();
        assert_eq!(c.current_text(), "ab");
        assert!(c.is_paused());
        assert_eq!(c.next_delay(), Duration::from_millis(100));

        c.advance();
        assert!(c.is_deleting());
        assert_eq!(c.current_text(), "ab");
        assert_eq!(c.next_delay(), Duration::from_millis(5));

        c.advance();
        assert_eq!(c.current_text(), "a");
        c.advance();
        assert_eq!(c.current_text(), "");
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.phase(), CyclePhase::Typing);
    }

    #[test]
    fn wraps_after_last_phrase() {
        let mut c = cycler(&["x", "y"]);
        let mut visited = vec![c.phrase_index()];
        for _ in 0..20 {
            let before = c.phrase_index();
            c.advance();
            if c.phrase_index() != before {
                visited.push(c.phrase_index());
            }
        }
        assert_eq!(&visited[..5], &[0, 1, 0, 1, 0]);
    }

    #[test]
    fn empty_list_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            PhraseCycler::new(&empty, CyclerTimings::default()),
            Err(VoltError::EmptyPhrases)
        ));

        let mut c = cycler(&["keep"]);
        c.advance();
        assert!(c.set_phrases(&empty).is_err());
        assert_eq!(c.current_text(), "k");
    }

    #[test]
    fn replacing_phrases_resets_to_start() {
        let mut c = cycler(&["one", "two"]);
        c.advance();
        c.advance();

        assert!(!c.set_phrases(&["one", "two"]).unwrap());
        assert_eq!(c.current_text(), "on");

        assert!(c.set_phrases(&["three"]).unwrap());
        assert_eq!(c.phrase_index(), 0);
        assert_eq!(c.current_text(), "");
        assert_eq!(c.phase(), CyclePhase::Typing);
    }

    #[test]
    fn empty_phrase_pauses_without_typing() {
        let mut c = cycler(&["", "z"]);
        assert!(c.is_paused());
        assert_eq!(c.current_text(), "");

        // Deleting an empty phrase hands over immediately.
        c.advance();
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.phase(), CyclePhase::Typing);
    }

    #[test]
    fn all_empty_phrases_do_not_spin() {
        let mut c = cycler(&["", ""]);
        for _ in 0..10 {
            c.advance();
            assert!(c.phrase_index() < 2);
        }
    }

    #[test]
    fn default_timings() {
        let t = CyclerTimings::default();
        assert_eq!(t.typing, Duration::from_millis(100));
        assert_eq!(t.deleting, Duration::from_millis(50));
        assert_eq!(t.pause, Duration::from_millis(1500));
    }
}
