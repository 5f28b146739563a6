//! Marquee Component
//!
//! Scrolls two back-to-back copies of its children horizontally in an
//! endless loop. Hovering suspends the scroll in place when enabled.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use volt_core::{Marquee as MarqueeState, MarqueeConfig, MarqueeDirection};

use crate::drivers::drive_frames;
use crate::timer::{use_timer_slot, TaskTimer};

/// Repaint interval for the scroll offset (about 60 frames per second).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Properties for the Marquee component
#[derive(Clone, PartialEq, Props)]
pub struct MarqueeProps {
    /// Content to scroll; rendered twice
    pub children: Element,
    /// Scroll direction (default: left)
    #[props(default)]
    pub direction: MarqueeDirection,
    /// Relative speed; 25 completes a loop in 20 seconds (default: 25)
    #[props(default = 25.0)]
    pub speed: f64,
    /// Suspend while the pointer is over the marquee (default: true)
    #[props(default = true)]
    pub pause_on_hover: bool,
}

/// Infinite horizontal scroller
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Marquee { speed: 40.0,
///         for name in partners {
///             span { class: "partner", "{name}" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Marquee(props: MarqueeProps) -> Element {
    let config = MarqueeConfig {
        direction: props.direction,
        speed: props.speed,
        pause_on_hover: props.pause_on_hover,
    };

    let mut state = use_signal(|| MarqueeState::new(config, Instant::now()));
    let mut offset = use_signal(|| config.offset_at(Duration::ZERO));
    let timer = use_timer_slot("marquee");

    // f64 has no Eq, so the speed is tracked by its bit pattern.
    let speed_bits = config.speed.to_bits();
    use_effect(use_reactive(
        (&config.direction, &config.pause_on_hover, &speed_bits),
        move |(direction, pause_on_hover, speed_bits)| {
            let config = MarqueeConfig {
                direction,
                speed: f64::from_bits(speed_bits),
                pause_on_hover,
            };
            if state.peek().config() != config {
                state.with_mut(|m| m.set_config(config, Instant::now()));
            }
        },
    ));

    use_hook(move || {
        let task = spawn(drive_frames(FRAME_INTERVAL, move || {
            let m = *state.peek();
            if !m.is_paused() {
                offset.set(m.offset(Instant::now()));
            }
        }));
        timer.borrow_mut().replace(TaskTimer(task));
    });

    let children = props.children;
    let x = offset();
    let copy_style = format!("transform: translateX({x:.2}px); will-change: transform;");

    rsx! {
        div {
            class: "marquee",
            onmouseenter: move |_| state.with_mut(|m| m.set_hovering(true, Instant::now())),
            onmouseleave: move |_| state.with_mut(|m| m.set_hovering(false, Instant::now())),
            div { class: "marquee-track",
                div { class: "marquee-copy", style: "{copy_style}", {children.clone()} }
                div {
                    class: "marquee-copy",
                    style: "{copy_style}",
                    "aria-hidden": "true",
                    {children}
                }
            }
        }
    }
}
