//! Shared types for the storefront
//!
//! Common types used by the storefront crate and its binary: the error-code
//! system, money formatting and the domain models read from page markup.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use money::format_brl;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
