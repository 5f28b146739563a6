//! Dashboard chrome components.

mod header;
mod sidebar;

pub use header::DashboardHeader;
pub use sidebar::{NavItem, Sidebar};
