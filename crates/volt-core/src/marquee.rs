//! Marquee geometry and a pausable loop clock.

use std::time::{Duration, Instant};

/// Distance, in pixels, each copy travels per loop.
pub const MARQUEE_DISTANCE: f64 = 1000.0;
/// Loop duration at [`BASE_SPEED`].
pub const BASE_DURATION: Duration = Duration::from_secs(20);
/// Speed at which one loop takes [`BASE_DURATION`].
pub const BASE_SPEED: f64 = 25.0;
/// Shortest loop allowed, however high the speed.
pub const MIN_LOOP_DURATION: Duration = Duration::from_millis(1);

/// Scroll direction of the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarqueeDirection {
    /// Content moves from 0 to -1000
    #[default]
    Left,
    /// Content moves from -1000 to 0
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub direction: MarqueeDirection,
    pub speed: f64,
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            direction: MarqueeDirection::Left,
            speed: BASE_SPEED,
            pause_on_hover: true,
        }
    }
}

impl MarqueeConfig {
    /// `BASE_DURATION / (speed / BASE_SPEED)`, clamped to
    /// `[MIN_LOOP_DURATION, Duration::MAX]`.
    ///
    /// Speeds that are not finite and positive fall back to the base speed.
    pub fn loop_duration(&self) -> Duration {
        let speed = if self.speed.is_finite() && self.speed > 0.0 {
            self.speed
        } else {
            BASE_SPEED
        };
        let secs = BASE_DURATION.as_secs_f64() * BASE_SPEED / speed;
        Duration::try_from_secs_f64(secs)
            .unwrap_or(Duration::MAX)
            .max(MIN_LOOP_DURATION)
    }

    /// Fraction of the current loop completed after `played`, in `[0, 1)`.
    pub fn progress_at(&self, played: Duration) -> f64 {
        let period = self.loop_duration().as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let progress = (played.as_secs_f64() % period) / period;
        if progress.is_finite() {
            progress
        } else {
            0.0
        }
    }

    /// Horizontal offset after `played` time of animation.
    pub fn offset_at(&self, played: Duration) -> f64 {
        self.offset_for_progress(self.progress_at(played))
    }

    fn offset_for_progress(&self, progress: f64) -> f64 {
        match self.direction {
            MarqueeDirection::Left => -MARQUEE_DISTANCE * progress,
            MarqueeDirection::Right => -MARQUEE_DISTANCE + MARQUEE_DISTANCE * progress,
        }
    }
}

/// Wall-clock bookkeeping for a marquee that can be suspended.
///
/// Played time only accumulates while running, so pausing holds the
/// offset and resuming continues from it.
#[derive(Clone, Copy, Debug)]
pub struct MarqueeClock {
    played: Duration,
    running_since: Option<Instant>,
}

impl MarqueeClock {
    /// A clock that starts running at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            played: Duration::ZERO,
            running_since: Some(now),
        }
    }

    pub fn played(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.played.saturating_add(now.saturating_duration_since(since)),
            None => self.played,
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if self.running_since.is_some() {
            self.played = self.played(now);
            self.running_since = None;
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    /// Restart the accounting from `played` at `now`, keeping the
    /// running/paused state.
    pub fn rebase(&mut self, played: Duration, now: Instant) {
        self.played = played;
        if self.running_since.is_some() {
            self.running_since = Some(now);
        }
    }
}

/// Hover state of a mounted marquee plus its clock.
#[derive(Clone, Copy, Debug)]
pub struct Marquee {
    config: MarqueeConfig,
    clock: MarqueeClock,
    hovering: bool,
}

impl Marquee {
    pub fn new(config: MarqueeConfig, now: Instant) -> Self {
        Self {
            config,
            clock: MarqueeClock::start(now),
            hovering: false,
        }
    }

    pub fn config(&self) -> MarqueeConfig {
        self.config
    }

    /// Swap in new settings without a visible jump.
    ///
    /// Progress through the loop is kept across speed changes, and the
    /// hover rule is re-applied so a marquee never stays suspended once
    /// pause-on-hover is off.
    pub fn set_config(&mut self, config: MarqueeConfig, now: Instant) {
        let progress = self.config.progress_at(self.clock.played(now));
        let period = config.loop_duration();
        let played = Duration::try_from_secs_f64(period.as_secs_f64() * progress)
            .unwrap_or(period)
            .min(period);
        self.config = config;
        self.clock.rebase(played, now);
        self.apply_hover_rule(now);
    }

    /// Pointer entered or left the component.
    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        self.hovering = hovering;
        self.apply_hover_rule(now);
    }

    fn apply_hover_rule(&mut self, now: Instant) {
        if self.hovering && self.config.pause_on_hover {
            self.clock.pause(now);
        } else {
            self.clock.resume(now);
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn offset(&self, now: Instant) -> f64 {
        self.config.offset_at(self.clock.played(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn default_speed_uses_base_duration() {
        assert_eq!(MarqueeConfig::default().loop_duration(), BASE_DURATION);
    }

    #[test]
    fn doubling_speed_halves_duration() {
        let slow = MarqueeConfig { speed: 25.0, ..Default::default() };
        let fast = MarqueeConfig { speed: 50.0, ..Default::default() };
        assert_eq!(fast.loop_duration() * 2, slow.loop_duration());
    }

    #[test]
    fn bad_speed_falls_back() {
        for speed in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let config = MarqueeConfig { speed, ..Default::default() };
            assert_eq!(config.loop_duration(), BASE_DURATION);
        }
    }

    #[test]
    fn tiny_speed_saturates_instead_of_panicking() {
        let config = MarqueeConfig { speed: 1e-20, ..Default::default() };
        assert_eq!(config.loop_duration(), Duration::MAX);
        let off = config.offset_at(Duration::from_secs(3600));
        assert!(off.is_finite());
        assert!(approx(off, 0.0));
    }

    #[test]
    fn huge_speed_clamps_to_minimum_loop() {
        let config = MarqueeConfig { speed: 1e18, ..Default::default() };
        assert_eq!(config.loop_duration(), MIN_LOOP_DURATION);
        for ms in [0, 1, 7, 12_345] {
            let off = config.offset_at(Duration::from_micros(ms * 333));
            assert!(off.is_finite());
            assert!((-MARQUEE_DISTANCE..=0.0).contains(&off));
        }
    }

    #[test]
    fn offsets_follow_direction() {
        let left = MarqueeConfig::default();
        let right = MarqueeConfig { direction: MarqueeDirection::Right, ..Default::default() };

        assert!(approx(left.offset_at(Duration::ZERO), 0.0));
        assert!(approx(left.offset_at(Duration::from_secs(5)), -250.0));
        assert!(approx(right.offset_at(Duration::ZERO), -1000.0));
        assert!(approx(right.offset_at(Duration::from_secs(5)), -750.0));
        // Loops back to the start.
        assert!(approx(left.offset_at(Duration::from_secs(20)), 0.0));
    }

    #[test]
    fn hover_pauses_in_place_and_resumes() {
        let t0 = Instant::now();
        let mut m = Marquee::new(MarqueeConfig::default(), t0);

        m.set_hovering(true, t0 + Duration::from_secs(5));
        assert!(m.is_paused());
        let held = m.offset(t0 + Duration::from_secs(9));
        assert!(approx(held, -250.0));

        m.set_hovering(false, t0 + Duration::from_secs(10));
        assert!(approx(m.offset(t0 + Duration::from_secs(15)), -500.0));
    }

    #[test]
    fn disabling_pause_on_hover_resumes_while_hovering() {
        let t0 = Instant::now();
        let mut m = Marquee::new(MarqueeConfig::default(), t0);
        m.set_hovering(true, t0 + Duration::from_secs(5));
        assert!(m.is_paused());

        let config = MarqueeConfig { pause_on_hover: false, ..Default::default() };
        m.set_config(config, t0 + Duration::from_secs(8));
        assert!(m.is_hovering());
        assert!(!m.is_paused());
        assert!(approx(m.offset(t0 + Duration::from_secs(8)), -250.0));
        assert!(approx(m.offset(t0 + Duration::from_secs(13)), -500.0));

        // Turning it back on suspends again, since the pointer never left.
        m.set_config(MarqueeConfig::default(), t0 + Duration::from_secs(13));
        assert!(m.is_paused());
    }

    #[test]
    fn speed_change_keeps_current_offset() {
        let t0 = Instant::now();
        let mut m = Marquee::new(MarqueeConfig::default(), t0);
        let t1 = t0 + Duration::from_secs(15);
        assert!(approx(m.offset(t1), -750.0));

        let fast = MarqueeConfig { speed: 50.0, ..Default::default() };
        m.set_config(fast, t1);
        assert_eq!(m.config().speed, 50.0);
        assert!(approx(m.offset(t1), -750.0));
        // Loop is now 10 s; one more second moves 100 px.
        assert!(approx(m.offset(t1 + Duration::from_secs(1)), -850.0));
    }

    #[test]
    fn hover_without_pause_keeps_running() {
        let t0 = Instant::now();
        let config = MarqueeConfig { pause_on_hover: false, ..Default::default() };
        let mut m = Marquee::new(config, t0);

        m.set_hovering(true, t0 + Duration::from_secs(1));
        assert!(m.is_hovering());
        assert!(!m.is_paused());
        assert!(approx(m.offset(t0 + Duration::from_secs(10)), -500.0));
    }
}
