//! Presentation helpers shared by the interactive apps.

pub mod menu;

pub use menu::{APP_VERSION, farewell, show_menu};
