//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 4xxx: Cart errors
//! - 6xxx: Menu errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way for the CLI JSON output and for any page script reading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Cart ====================
    /// Cart line not found
    CartItemNotFound = 4006,
    /// Cart is empty
    CartEmpty = 4007,
    /// Line price is negative or above the price ceiling
    CartInvalidPrice = 4008,
    /// Line name is empty
    CartInvalidName = 4009,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item price is missing, unparsable or out of range
    MenuItemInvalidPrice = 6002,
    /// Menu item has no name
    MenuItemNameRequired = 6003,
    /// Two menu items share a name
    MenuItemNameExists = 6004,

    // ==================== 7xxx: Reservation ====================
    /// Required reservation fields are missing
    ReservationIncomplete = 7401,
    /// Reservation date is not selectable
    ReservationInvalidDate = 7402,
    /// Reservation time is not selectable
    ReservationInvalidTime = 7403,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
    /// Menu file could not be loaded
    MenuLoadFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // Cart
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::CartInvalidPrice => "Cart item price is out of range",
            ErrorCode::CartInvalidName => "Cart item name must not be empty",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item price is invalid",
            ErrorCode::MenuItemNameRequired => "Menu item name is required",
            ErrorCode::MenuItemNameExists => "Menu item name already exists",

            // Reservation
            ErrorCode::ReservationIncomplete => "Please fill in all required fields",
            ErrorCode::ReservationInvalidDate => "Reservation date is not available",
            ErrorCode::ReservationInvalidTime => "Reservation time is not available",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::MenuLoadFailed => "Failed to load menu",
        }
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Cart
            4006 => Ok(ErrorCode::CartItemNotFound),
            4007 => Ok(ErrorCode::CartEmpty),
            4008 => Ok(ErrorCode::CartInvalidPrice),
            4009 => Ok(ErrorCode::CartInvalidName),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6003 => Ok(ErrorCode::MenuItemNameRequired),
            6004 => Ok(ErrorCode::MenuItemNameExists),

            // Reservation
            7401 => Ok(ErrorCode::ReservationIncomplete),
            7402 => Ok(ErrorCode::ReservationInvalidDate),
            7403 => Ok(ErrorCode::ReservationInvalidTime),

            // System
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::MenuLoadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::CartEmpty.code(), 4007);
        assert_eq!(ErrorCode::MenuItemInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::ReservationIncomplete.code(), 7401);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::CartItemNotFound,
            ErrorCode::CartEmpty,
            ErrorCode::CartInvalidPrice,
            ErrorCode::CartInvalidName,
            ErrorCode::MenuItemNotFound,
            ErrorCode::MenuItemInvalidPrice,
            ErrorCode::MenuItemNameRequired,
            ErrorCode::MenuItemNameExists,
            ErrorCode::ReservationIncomplete,
            ErrorCode::ReservationInvalidDate,
            ErrorCode::ReservationInvalidTime,
            ErrorCode::ConfigError,
            ErrorCode::MenuLoadFailed,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(
            InvalidErrorCode(1234).to_string(),
            "invalid error code: 1234"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CartEmpty).unwrap();
        assert_eq!(json, "4007");

        let code: ErrorCode = serde_json::from_str("7401").unwrap();
        assert_eq!(code, ErrorCode::ReservationIncomplete);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::MenuItemNotFound.to_string(), "6001");
        assert_eq!(ErrorCode::CartEmpty.message(), "Cart is empty");
    }
}
