//! Visual theme for Volt.

mod styles;

pub use styles::GLOBAL_STYLES;
