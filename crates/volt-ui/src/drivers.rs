//! Timer loops behind the animated components.
//!
//! Each loop only knows how to wait; the state it advances is reached
//! through closures, so the same code runs inside a Dioxus task or a
//! plain Tokio task.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use volt_core::TypewriterTick;

/// Tick every `delay` until `tick` reports the reveal is over.
///
/// `on_complete` runs once, only when the last character was revealed.
/// Periods missed while the event loop was busy are not replayed, so the
/// reveal never jumps ahead by more than one character.
pub async fn drive_reveal<T, C>(delay: Duration, mut tick: T, on_complete: C) -> TypewriterTick
where
    T: FnMut() -> TypewriterTick,
    C: FnOnce(),
{
    let mut ticker = tokio::time::interval(delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let step = tick();
        tracing::trace!(?step, "reveal tick");
        if step.keeps_running() {
            continue;
        }
        if let TypewriterTick::Completed(_) = step {
            on_complete();
        }
        return step;
    }
}

/// Sleep for whatever `next_delay` asks, then `advance`, until it returns
/// `None`. Exactly one sleep is outstanding at any time.
pub async fn drive_cycle<D, A>(mut next_delay: D, mut advance: A)
where
    D: FnMut() -> Option<Duration>,
    A: FnMut(),
{
    while let Some(delay) = next_delay() {
        tokio::time::sleep(delay).await;
        advance();
    }
}

/// Call `frame` every `period`, forever. Late frames are dropped.
pub async fn drive_frames<F: FnMut()>(period: Duration, mut frame: F) {
    let mut frames = tokio::time::interval(period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        frames.tick().await;
        frame();
    }
}
