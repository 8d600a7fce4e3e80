//! Reveal-on-intersection animations
//!
//! Observed elements get `data-animate`; the first time one is seen at or
//! above the threshold it gets the `visible` class and is no longer observed.

use std::collections::BTreeSet;

/// Elements that animate in when scrolled into view
pub const REVEAL_SELECTORS: &[&str] = &[
    SECTION_SELECTOR,
    MENU_ITEM_SELECTOR,
    ".review",
    ".form",
    ".orders-info",
    ".cart",
    ".gallery img",
];

pub const SECTION_SELECTOR: &str = ".section";
pub const MENU_ITEM_SELECTOR: &str = ".menu-item";

/// Selectors matching one fixed region of the page each
pub const REGION_SELECTORS: &[&str] = &[".form", ".orders-info", ".cart"];

/// Observer key of a page section
pub fn section_target(id: &str) -> String {
    format!("{}#{}", SECTION_SELECTOR, id)
}

/// Observer key of a menu card
pub fn menu_item_target(name: &str) -> String {
    format!("{}[data-name=\"{}\"]", MENU_ITEM_SELECTOR, name)
}

/// Every element the page tags with `data-animate`
///
/// Sections and menu cards are matched one by one; the form, orders info
/// and cart are single regions. Reviews and gallery images are static
/// content with no model here.
pub fn reveal_targets<'a>(
    section_ids: impl IntoIterator<Item = &'a str>,
    menu_item_names: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    section_ids
        .into_iter()
        .map(section_target)
        .chain(menu_item_names.into_iter().map(menu_item_target))
        .chain(REGION_SELECTORS.iter().map(|s| s.to_string()))
        .collect()
}

/// Visible fraction that counts as "in view"
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// One observer callback entry
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    /// Visible fraction of the target, 0.0..=1.0
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            ratio,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    observed: BTreeSet<String>,
    visible: BTreeSet<String>,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: BTreeSet::new(),
            visible: BTreeSet::new(),
        }
    }

    /// Tag an element with `data-animate` and start observing it
    ///
    /// Elements already revealed stay revealed and are not observed again.
    pub fn observe(&mut self, target: impl Into<String>) {
        let target = target.into();
        if !self.visible.contains(&target) {
            self.observed.insert(target);
        }
    }

    /// Handle an observer callback; returns the targets revealed by it
    pub fn on_entries(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        let mut revealed = Vec::new();
        for entry in entries {
            if entry.ratio < self.threshold || !self.observed.remove(&entry.target) {
                continue;
            }
            self.visible.insert(entry.target.clone());
            revealed.push(entry.target.clone());
        }
        if !revealed.is_empty() {
            tracing::trace!(count = revealed.len(), "Elements revealed");
        }
        revealed
    }

    pub fn is_observed(&self, target: &str) -> bool {
        self.observed.contains(target)
    }

    pub fn is_visible(&self, target: &str) -> bool {
        self.visible.contains(target)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once_then_unobserve() {
        let mut observer = RevealObserver::default();
        observer.observe("hero");
        observer.observe("menu");

        let revealed = observer.on_entries(&[
            IntersectionEntry::new("hero", 0.5),
            IntersectionEntry::new("menu", 0.1),
        ]);
        assert_eq!(revealed, vec!["hero"]);
        assert!(observer.is_visible("hero"));
        assert!(!observer.is_observed("hero"));
        assert!(observer.is_observed("menu"));

        // second intersection of a revealed element is a no-op
        assert!(observer.on_entries(&[IntersectionEntry::new("hero", 1.0)]).is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let mut observer = RevealObserver::default();
        assert_eq!(observer.threshold(), REVEAL_THRESHOLD);
        observer.observe("cart");
        assert_eq!(
            observer.on_entries(&[IntersectionEntry::new("cart", 0.15)]),
            vec!["cart"]
        );
    }

    #[test]
    fn test_unobserved_entries_ignored() {
        let mut observer = RevealObserver::default();
        assert!(observer.on_entries(&[IntersectionEntry::new("ghost", 1.0)]).is_empty());
        assert!(!observer.is_visible("ghost"));
    }

    #[test]
    fn test_reveal_targets() {
        let targets = reveal_targets(["sobre"], ["Pizza", "Soda"]);
        assert_eq!(
            targets,
            vec![
                ".section#sobre",
                ".menu-item[data-name=\"Pizza\"]",
                ".menu-item[data-name=\"Soda\"]",
                ".form",
                ".orders-info",
                ".cart",
            ]
        );
        for region in REGION_SELECTORS {
            assert!(REVEAL_SELECTORS.contains(region));
        }
    }

    #[test]
    fn test_observe_after_reveal_is_noop() {
        let mut observer = RevealObserver::default();
        observer.observe("review-1");
        observer.on_entries(&[IntersectionEntry::new("review-1", 0.9)]);
        observer.observe("review-1");
        assert!(!observer.is_observed("review-1"));
    }
}
