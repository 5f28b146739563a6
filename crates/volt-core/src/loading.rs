//! Bouncing-dots loading indicator geometry.

use std::time::Duration;

pub const DOT_COUNT: usize = 3;
/// One full bounce (up and back down).
pub const BOUNCE_PERIOD: Duration = Duration::from_millis(800);
/// Delay between consecutive dots.
pub const DOT_PHASE_OFFSET: Duration = Duration::from_millis(200);
/// Caption shown under the dots.
pub const LOADING_CAPTION: &str = "Loading...";

/// Start delay of dot `index`.
pub fn dot_delay(index: usize) -> Duration {
    DOT_PHASE_OFFSET * index as u32
}

/// Vertical lift of dot `index` after `elapsed`, as a fraction of the
/// dot's height (0.0 resting, 1.0 at the top of the bounce).
pub fn dot_lift(index: usize, elapsed: Duration) -> f64 {
    let delay = dot_delay(index);
    if elapsed < delay {
        return 0.0;
    }
    let period = BOUNCE_PERIOD.as_secs_f64();
    let t = ((elapsed - delay).as_secs_f64() % period) / period;
    // Triangle wave 0 -> 1 -> 0 shaped with ease-in-out.
    let tri = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    ease_in_out(tri)
}

fn ease_in_out(x: f64) -> f64 {
    x * x * (3.0 - 2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_phase_shifted() {
        assert_eq!(dot_delay(0), Duration::ZERO);
        assert_eq!(dot_delay(2), Duration::from_millis(400));
    }

    #[test]
    fn lift_peaks_mid_bounce() {
        assert_eq!(dot_lift(0, Duration::ZERO), 0.0);
        assert!((dot_lift(0, Duration::from_millis(400)) - 1.0).abs() < 1e-9);
        assert!(dot_lift(0, Duration::from_millis(800)).abs() < 1e-9);
    }

    #[test]
    fn later_dots_rest_until_their_turn() {
        assert_eq!(dot_lift(2, Duration::from_millis(300)), 0.0);
        assert!(dot_lift(1, Duration::from_millis(400)) > 0.0);
    }
}
