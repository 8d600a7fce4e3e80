//! Cart action routing
//!
//! Every control rendered inside the cart region carries `data-action` and
//! `data-name`. A click is routed to exactly one store operation; anything
//! else inside the region is ignored.

use std::fmt;
use std::str::FromStr;

use super::store::CartStore;

/// `data-action` values understood by the cart region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartAction {
    Inc,
    Dec,
    Del,
}

impl CartAction {
    pub const ALL: [CartAction; 3] = [CartAction::Dec, CartAction::Inc, CartAction::Del];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inc => "inc",
            Self::Dec => "dec",
            Self::Del => "del",
        }
    }

    /// Accessible label of the control (`aria-label`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inc => "Aumentar",
            Self::Dec => "Diminuir",
            Self::Del => "Remover",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown `data-action` value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cart action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for CartAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inc" => Ok(Self::Inc),
            "dec" => Ok(Self::Dec),
            "del" => Ok(Self::Del),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Data attributes of the closest button to a click inside the cart region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlTarget {
    pub action: Option<String>,
    pub name: Option<String>,
}

impl ControlTarget {
    pub fn new(action: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            name: Some(name.into()),
        }
    }
}

/// One routed cart operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    Increment { name: String },
    Decrement { name: String },
    Remove { name: String },
}

impl CartCommand {
    pub fn new(action: CartAction, name: impl Into<String>) -> Self {
        let name = name.into();
        match action {
            CartAction::Inc => CartCommand::Increment { name },
            CartAction::Dec => CartCommand::Decrement { name },
            CartAction::Del => CartCommand::Remove { name },
        }
    }

    /// Route a click inside the cart region
    ///
    /// Returns `None` when the click did not land on a control or the
    /// control carries no name or an unknown action.
    pub fn route(target: Option<&ControlTarget>) -> Option<Self> {
        let target = target?;
        let name = target.name.as_deref()?;
        let action = match target.action.as_deref()?.parse::<CartAction>() {
            Ok(action) => action,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring cart click");
                return None;
            }
        };
        Some(Self::new(action, name))
    }

    pub fn name(&self) -> &str {
        match self {
            CartCommand::Increment { name }
            | CartCommand::Decrement { name }
            | CartCommand::Remove { name } => name,
        }
    }

    /// Apply to the store
    ///
    /// Returns `false` when the named line is not in the cart, in which case
    /// nothing changed and no refresh is due.
    pub fn execute(&self, store: &mut CartStore) -> bool {
        match self {
            CartCommand::Increment { name } => store.increment(name).is_some(),
            CartCommand::Decrement { name } => store.decrement(name).is_some(),
            CartCommand::Remove { name } => store.remove(name),
        }
    }
}
