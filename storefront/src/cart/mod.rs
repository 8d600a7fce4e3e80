//! In-memory shopping cart
//!
//! - [`CartStore`]: line items keyed by name, insertion-ordered
//! - [`CartCommand`]: routing of clicks inside the cart region
//! - [`CartView`]: full redraw of the cart region after every mutation

pub mod actions;
pub mod store;
pub mod view;

pub use actions::{CartAction, CartCommand, ControlTarget, UnknownAction};
pub use store::{CartError, CartStore};
pub use view::{CartRender, CartRow, CartSurface, CartView, RecordingSurface};
