//! Form-to-chat handoff
//!
//! Serializes the cart or the reservation form into a pre-filled message and
//! composes the external messaging link. No real messaging integration: the
//! link is opened and forgotten.

pub mod checkout;
pub mod link;
pub mod opener;
pub mod reservation;

use shared::error::{AppError, ErrorCode};
use shared::models::ValidationError;
use thiserror::Error;

pub use checkout::{checkout_link, order_lines, order_text};
pub use link::{LINE_BREAK, LinkBuilder, encode_lines};
pub use opener::{ConsoleOpener, LinkOpener, RecordingOpener};
pub use reservation::{reservation_lines, reservation_link, reservation_text};

/// Handoff could not produce a link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandoffError {
    /// Nothing to check out; the checkout control is disabled in this state
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Incomplete(#[from] ValidationError),
}

impl From<HandoffError> for AppError {
    fn from(err: HandoffError) -> Self {
        match err {
            HandoffError::EmptyCart => AppError::new(ErrorCode::CartEmpty),
            HandoffError::Incomplete(e) => e.into(),
        }
    }
}
