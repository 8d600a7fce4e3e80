//! Cart Store - single source of truth for cart contents
//!
//! Lines are keyed by item name and kept in insertion order, which is also
//! the display order. A line never survives at quantity zero.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::CartLine;
use shared::money::{MAX_PRICE_REAIS, is_valid_price};
use thiserror::Error;

/// Input rejected by the store
///
/// Prices and names come from trusted page markup, so these only fire on
/// programming errors; the store is left untouched when they do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("cart item name must not be empty")]
    EmptyName,

    #[error("price must be between 0 and {max}, got {0}", max = MAX_PRICE_REAIS)]
    PriceOutOfRange(Decimal),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::EmptyName => ErrorCode::CartInvalidName,
            CartError::PriceOutOfRange(_) => ErrorCode::CartInvalidPrice,
        };
        AppError::with_message(code, err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: IndexMap<String, CartLine>,
}

impl CartStore {
    /// Empty cart, as at page load
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `name`
    ///
    /// An existing line keeps its original unit price and gains one unit;
    /// otherwise a new line is appended with quantity 1. Returns the new
    /// quantity.
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) -> Result<u32, CartError> {
        if name.is_empty() {
            return Err(CartError::EmptyName);
        }
        if !is_valid_price(unit_price) {
            return Err(CartError::PriceOutOfRange(unit_price));
        }

        let line = self
            .lines
            .entry(name.to_string())
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert_with(|| CartLine::new(name, unit_price));

        tracing::debug!(name = %name, quantity = line.quantity, "Cart item added");
        Ok(line.quantity)
    }

    /// Add one unit to an existing line
    ///
    /// Returns the new quantity, or `None` when no line has that name.
    pub fn increment(&mut self, name: &str) -> Option<u32> {
        let line = self.lines.get_mut(name)?;
        line.quantity = line.quantity.saturating_add(1);
        tracing::debug!(name = %name, quantity = line.quantity, "Cart item incremented");
        Some(line.quantity)
    }

    /// Take one unit from an existing line, floored at zero
    ///
    /// A line reaching zero is removed. Returns the new quantity (`Some(0)`
    /// when the line was removed), or `None` when no line has that name.
    pub fn decrement(&mut self, name: &str) -> Option<u32> {
        let line = self.lines.get_mut(name)?;
        line.quantity = line.quantity.saturating_sub(1);
        let quantity = line.quantity;
        if quantity == 0 {
            self.lines.shift_remove(name);
        }
        tracing::debug!(name = %name, quantity, "Cart item decremented");
        Some(quantity)
    }

    /// Delete the line for `name`; no-op when absent
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.lines.shift_remove(name).is_some();
        if removed {
            tracing::debug!(name = %name, "Cart item removed");
        }
        removed
    }

    /// Remove every line
    pub fn clear(&mut self) {
        let count = self.lines.len();
        self.lines.clear();
        tracing::debug!(count, "Cart cleared");
    }

    /// Σ unit_price × quantity over all lines
    pub fn total(&self) -> Decimal {
        self.lines.values().map(CartLine::line_total).sum()
    }

    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.get(name)
    }

    /// Current quantity of `name`, zero when absent
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.lines.get(name).map_or(0, |line| line.quantity)
    }

    /// Lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
