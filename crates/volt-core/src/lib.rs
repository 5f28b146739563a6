//! Volt Core Library
//!
//! Framework-free building blocks for the Volt workspace-booking front end.
//!
//! ## Overview
//!
//! Every animated widget is a small state machine driven by a timer that
//! the UI layer owns through a [`TimerSlot`]:
//!
//! - [`Typewriter`]: reveals a string one character per tick
//! - [`PhraseCycler`]: types, holds and deletes phrases forever
//! - [`Marquee`]: pausable horizontal loop geometry
//! - [`loading`]: bouncing-dots timing
//!
//! The dashboard is protected by a [`LayoutGuard`] that turns the observed
//! [`AuthState`] into a [`GuardView`] and a one-shot login redirect.
//!
//! ## Quick Start
//!
//! ```
//! use volt_core::{Typewriter, TypewriterTick};
//!
//! let mut tw = Typewriter::new("Hi");
//! assert_eq!(tw.tick(), TypewriterTick::Typed('H'));
//! assert_eq!(tw.tick(), TypewriterTick::Completed('i'));
//! assert_eq!(tw.displayed(), "Hi");
//! ```

pub mod auth;
pub mod config;
pub mod cycler;
pub mod error;
pub mod loading;
pub mod marquee;
pub mod session;
pub mod timer;
pub mod typewriter;

// Re-exports
pub use auth::{
    AuthState, AuthTokens, GuardDecision, GuardView, LayoutGuard, ProfileUpdate, UserRef,
    LOGIN_PATH,
};
pub use config::{ApiRewrite, AppConfig};
pub use cycler::{CyclePhase, CyclerTimings, PhraseCycler};
pub use error::{Result, VoltError};
pub use marquee::{Marquee, MarqueeClock, MarqueeConfig, MarqueeDirection};
pub use session::SessionStore;
pub use timer::{Cancel, TimerSlot};
pub use typewriter::{Typewriter, TypewriterTick};
