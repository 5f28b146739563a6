//! Property-based tests for the animation state machines
//!
//! Uses proptest to check the reveal, cycling and marquee invariants.

use std::time::Duration;

use proptest::prelude::*;
use volt_core::marquee::MARQUEE_DISTANCE;
use volt_core::{CyclerTimings, MarqueeConfig, MarqueeDirection, PhraseCycler, Typewriter, TypewriterTick};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty text including some multi-byte characters
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 éü✓]{1,80}").expect("valid regex")
}

/// Short phrase lists, allowing empty phrases
fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-z ]{0,12}").expect("valid regex"),
        1..6,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// One character per tick, complete after exactly n ticks, once
    #[test]
    fn typewriter_reveals_one_char_per_tick(source in source_strategy()) {
        let n = source.chars().count();
        let mut tw = Typewriter::new(source.clone());
        let mut completions = 0;

        for tick in 1..=n {
            let before = tw.displayed().chars().count();
            let step = tw.tick();
            prop_assert_eq!(tw.displayed().chars().count(), before + 1);
            prop_assert!(source.starts_with(tw.displayed()));
            if let TypewriterTick::Completed(_) = step {
                completions += 1;
                prop_assert_eq!(tick, n);
            }
        }

        prop_assert_eq!(tw.displayed(), source.as_str());
        prop_assert_eq!(tw.tick(), TypewriterTick::Idle);
        prop_assert_eq!(completions, 1);
    }

    /// Visible text is always a prefix of the active phrase, and phrase
    /// indices are visited in order with wrap-around
    #[test]
    fn cycler_prefix_and_order(phrases in phrases_strategy(), steps in 1usize..400) {
        let mut c = PhraseCycler::new(&phrases, CyclerTimings::default()).unwrap();
        let mut last = c.phrase_index();

        for _ in 0..steps {
            c.advance();
            let idx = c.phrase_index();
            prop_assert!(idx < phrases.len());
            prop_assert!(phrases[idx].starts_with(&c.current_text()));
            if idx != last {
                prop_assert_eq!(idx, (last + 1) % phrases.len());
                last = idx;
            }
        }
    }

    /// Loop distance never depends on speed; duration scales inversely
    #[test]
    fn marquee_duration_scales_with_speed(speed in 1.0f64..500.0, right in any::<bool>()) {
        let direction = if right { MarqueeDirection::Right } else { MarqueeDirection::Left };
        let base = MarqueeConfig { direction, speed, pause_on_hover: true };
        let double = MarqueeConfig { speed: speed * 2.0, ..base };

        let ratio = base.loop_duration().as_secs_f64() / double.loop_duration().as_secs_f64();
        prop_assert!((ratio - 2.0).abs() < 1e-6);

        // Offsets stay within the fixed travel range at any speed.
        for ms in [0u64, 1234, 9999, 45_000] {
            let off = base.offset_at(Duration::from_millis(ms));
            prop_assert!(off <= 0.0 && off >= -MARQUEE_DISTANCE);
        }
    }
}
