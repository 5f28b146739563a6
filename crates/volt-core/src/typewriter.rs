//! Typewriter engine: reveals a string one character per tick.

use std::time::Duration;

use crate::error::{Result, VoltError};

/// Default per-character delay used by the reveal effect.
pub const DEFAULT_TYPEWRITER_DELAY: Duration = Duration::from_millis(30);

/// Outcome of a single timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterTick {
    /// One more character was revealed; keep ticking.
    Typed(char),
    /// The last character was revealed. The timer must stop and the
    /// completion callback fires now. Returned at most once per source.
    Completed(char),
    /// Nothing to reveal (empty source or already complete).
    Idle,
}

impl TypewriterTick {
    /// Whether the driving timer should keep running after this tick.
    pub fn keeps_running(&self) -> bool {
        matches!(self, TypewriterTick::Typed(_))
    }
}

/// Per-instance reveal state.
///
/// `cursor` counts characters, not bytes, so multi-byte text is never
/// split inside a code point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    source: String,
    chars: Vec<char>,
    displayed: String,
    cursor: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            chars: source.chars().collect(),
            source,
            displayed: String::new(),
            cursor: 0,
        }
    }

    /// Swap in a new source text.
    ///
    /// Returns `true` when the value actually changed and the reveal was
    /// restarted from the first character. An identical value leaves the
    /// cursor untouched.
    pub fn set_source(&mut self, source: &str) -> bool {
        if self.source == source {
            return false;
        }
        *self = Self::new(source);
        true
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> TypewriterTick {
        let Some(&next) = self.chars.get(self.cursor) else {
            return TypewriterTick::Idle;
        };
        self.displayed.push(next);
        self.cursor += 1;
        if self.cursor == self.chars.len() {
            TypewriterTick::Completed(next)
        } else {
            TypewriterTick::Typed(next)
        }
    }

    /// Whether a timer needs to be started for the current source.
    pub fn needs_timer(&self) -> bool {
        self.cursor < self.chars.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the source in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True once every character of a non-empty source is displayed.
    pub fn is_complete(&self) -> bool {
        !self.chars.is_empty() && self.cursor == self.chars.len()
    }
}

/// Validate a per-character delay given in milliseconds.
pub fn tick_delay(delay_ms: u64) -> Result<Duration> {
    if delay_ms == 0 {
        return Err(VoltError::InvalidDelay(delay_ms));
    }
    Ok(Duration::from_millis(delay_ms))
}
