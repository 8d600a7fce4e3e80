//! Menu catalog
//!
//! The purchasable cards on the page. Loaded from a JSON file when one is
//! configured, otherwise from the built-in card list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shared::error::{AppError, ErrorCode};
use shared::models::MenuItem;
use thiserror::Error;

/// Built-in cards: `data-name`, `data-price`, `class`
const BUILTIN_CARDS: &[(&str, &str, &str)] = &[
    ("Pizza", "45.00", "menu-item pizzas"),
    ("Pizza Calabresa", "48.00", "menu-item pizzas"),
    ("Burger", "10.00", "menu-item lanches"),
    ("X-Tudo", "27.90", "menu-item lanches"),
    ("Feijoada", "62.90", "menu-item pratos"),
    ("Moqueca", "89.00", "menu-item pratos"),
    ("Soda", "8.00", "menu-item bebidas"),
    ("Caipirinha", "18.50", "menu-item bebidas"),
    ("Pudim", "14.00", "menu-item sobremesas"),
];

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate menu item '{0}'")]
    Duplicate(String),

    #[error(transparent)]
    Invalid(#[from] AppError),
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::Invalid(e) => e,
            MenuError::Duplicate(ref name) => {
                AppError::with_message(ErrorCode::MenuItemNameExists, err.to_string())
                    .with_detail("name", name.as_str())
            }
            other => AppError::with_message(ErrorCode::MenuLoadFailed, other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Validate items and reject duplicate names
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.name.as_str()) {
                return Err(MenuError::Duplicate(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn builtin() -> Result<Self, MenuError> {
        let items = BUILTIN_CARDS
            .iter()
            .map(|(name, price, class)| MenuItem::from_markup(name, price, class))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_items(items)
    }

    /// Load a JSON array of items
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<MenuItem> =
            serde_json::from_str(&content).map_err(|source| MenuError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let menu = Self::from_items(items)?;
        tracing::info!(path = %path.display(), items = menu.len(), "Menu loaded");
        Ok(menu)
    }

    /// Configured file if any, built-in cards otherwise
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self, MenuError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Distinct category keys in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .flat_map(|item| item.categories.iter())
            .map(String::as_str)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
