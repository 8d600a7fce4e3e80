//! Menu category filter

use serde::Serialize;
use shared::models::MenuItem;

/// Filter key that shows every item
pub const FILTER_ALL: &str = "all";

/// CSS `display` of a menu card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Grid,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDisplay {
    pub name: String,
    pub display: Display,
}

/// Filter buttons; exactly one is active after a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFilter {
    active: String,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl MenuFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }

    /// Activate `key` and compute the display of every item
    pub fn select(&mut self, key: &str, items: &[MenuItem]) -> Vec<ItemDisplay> {
        self.active = key.to_string();
        items
            .iter()
            .map(|item| ItemDisplay {
                name: item.name.clone(),
                display: if Self::shows(key, item) {
                    Display::Grid
                } else {
                    Display::None
                },
            })
            .collect()
    }

    fn shows(key: &str, item: &MenuItem) -> bool {
        key == FILTER_ALL || item.has_category(key)
    }
}
