//! Smooth scrolling for in-page links

use std::collections::HashSet;

/// What a click on an `<a href="#...">` does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    /// Empty or bare `#`: the listener returns without touching the event
    Ignore,
    /// Target not on the page (or not an in-page link): browser default
    Navigate,
    /// Default prevented, target scrolled into view smoothly, aligned to its start
    SmoothScroll { target: String },
}

/// Element ids present on the page
#[derive(Debug, Clone, Default)]
pub struct AnchorTargets {
    ids: HashSet<String>,
}

impl AnchorTargets {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Every id, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Decide what clicking a link with this `href` does
    pub fn resolve(&self, href: &str) -> ScrollAction {
        if href.is_empty() {
            return ScrollAction::Ignore;
        }
        let Some(id) = href.strip_prefix('#') else {
            return ScrollAction::Navigate;
        };
        if id.is_empty() {
            return ScrollAction::Ignore;
        }
        if self.contains(id) {
            ScrollAction::SmoothScroll {
                target: id.to_string(),
            }
        } else {
            ScrollAction::Navigate
        }
    }
}
