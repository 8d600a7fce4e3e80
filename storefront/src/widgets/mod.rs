//! Ambient page widgets
//!
//! Independent listeners with no business state: nav toggle, smooth scroll,
//! reveal-on-intersection, menu filter and the reservation pickers.

pub mod filter;
pub mod nav;
pub mod pickers;
pub mod reveal;
pub mod scroll;

pub use filter::{Display, FILTER_ALL, ItemDisplay, MenuFilter};
pub use nav::NavMenu;
pub use pickers::{DatePickerOptions, InputMode, ReservationPickers, TimePickerOptions};
pub use reveal::{
    IntersectionEntry, REVEAL_SELECTORS, RevealObserver, menu_item_target, reveal_targets,
    section_target,
};
pub use scroll::{AnchorTargets, ScrollAction};
