//! Cart Line Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct menu item in the cart
///
/// A line only exists while `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item name, unique within the cart
    pub name: String,
    /// Unit price in BRL
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// unit_price × quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new("Burger", Decimal::new(1000, 2));
        assert_eq!(line.line_total(), Decimal::new(1000, 2));
        line.quantity = 3;
        assert_eq!(line.line_total(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_serialize_price_as_number() {
        let line = CartLine::new("Soda", Decimal::new(800, 2));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["unit_price"], serde_json::json!(8.0));
        assert_eq!(json["quantity"], serde_json::json!(1));
    }
}
