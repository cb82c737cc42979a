//! Shell chrome: header, footer navigation, and the work drawer.

mod bottom_nav;
mod drawer;
mod top_bar;

pub use bottom_nav::BottomNav;
pub use drawer::{BottomDrawer, DecisionPanel, LogStream};
pub use top_bar::TopBar;
