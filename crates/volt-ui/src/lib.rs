//! Volt UI Components
//!
//! Dioxus components for the Volt landing page and dashboard.
//!
//! Each animated component wraps a state machine from `volt-core` and
//! drives it from a single component-scoped task. The task handle lives
//! in a [`TimerSlot`](volt_core::TimerSlot) so it is cancelled when the
//! input changes or the component unmounts.

pub mod components;
pub mod drivers;
pub mod timer;

pub use components::*;
pub use drivers::{drive_cycle, drive_frames, drive_reveal};
pub use timer::{use_timer_slot, SharedTimerSlot, TaskTimer};
