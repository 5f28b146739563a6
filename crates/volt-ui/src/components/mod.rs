//! Reusable UI components
//!
//! Animated text, marquee, loading indicator and buttons.

mod button;
mod hero_typewriter;
mod loading;
mod marquee;
mod typewriter;

pub use button::*;
pub use hero_typewriter::*;
pub use loading::*;
pub use marquee::*;
pub use typewriter::*;
