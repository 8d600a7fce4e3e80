//! Menu Item Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::money::{MAX_PRICE_REAIS, is_valid_price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Class every purchasable card carries; never treated as a category
pub const MENU_ITEM_CLASS: &str = "menu-item";

/// Purchasable menu entry
///
/// Mirrors the card markup contract: `data-name`, `data-price` and the
/// category classes on the `.menu-item` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Price in BRL
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Category keys used by the menu filter (e.g. `pizzas`, `bebidas`)
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuItem {
    /// Build an item from the card's data attributes and class list
    ///
    /// `class_list` is the raw `class` attribute, e.g. `"menu-item pizzas"`.
    pub fn from_markup(data_name: &str, data_price: &str, class_list: &str) -> AppResult<Self> {
        let name = data_name.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::MenuItemNameRequired));
        }

        let price = parse_price(data_price).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MenuItemInvalidPrice,
                format!("Invalid price '{}' for menu item '{}'", data_price, name),
            )
            .with_detail("name", name)
        })?;

        let categories = class_list
            .split_whitespace()
            .filter(|c| *c != MENU_ITEM_CLASS)
            .map(str::to_string)
            .collect();

        Ok(Self {
            name: name.to_string(),
            price,
            categories,
            description: None,
        })
    }

    /// Whether this item belongs to the given category key
    pub fn has_category(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c == key)
    }

    /// Check the invariants the markup contract promises
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::new(ErrorCode::MenuItemNameRequired));
        }
        if !is_valid_price(self.price) {
            return Err(AppError::with_message(
                ErrorCode::MenuItemInvalidPrice,
                format!(
                    "price must be between 0 and {}, got {}",
                    MAX_PRICE_REAIS, self.price
                ),
            )
            .with_detail("name", self.name.as_str()));
        }
        Ok(())
    }
}

/// Parse a `data-price` attribute: plain decimal, dot separator, within bounds
fn parse_price(raw: &str) -> Option<Decimal> {
    let price = Decimal::from_str(raw.trim()).ok()?;
    is_valid_price(price).then_some(price)
}
