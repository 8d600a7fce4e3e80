//! Data models
//!
//! Values read from the page markup (menu items, reservation form) and the
//! cart line snapshot handed to renderers.

pub mod cart;
pub mod menu;
pub mod reservation;

// Re-exports
pub use cart::*;
pub use menu::*;
pub use reservation::*;
