//! Page root - owns the cart and every widget, dispatches UI events
//!
//! Each [`UiEvent`] maps to one named operation. Cart mutations are followed
//! by exactly one full refresh of the cart region before `handle` returns.

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{FormData, OPENING_MESSAGE};

use crate::cart::{CartCommand, CartStore, CartSurface, CartView, ControlTarget};
use crate::catalog::Menu;
use crate::core::Config;
use crate::handoff::{LinkBuilder, LinkOpener, checkout_link, reservation_link};
use crate::widgets::{
    AnchorTargets, IntersectionEntry, ItemDisplay, MenuFilter, NavMenu, ReservationPickers,
    RevealObserver, ScrollAction, reveal_targets,
};

/// Section ids on the page, in document order
pub const PAGE_SECTIONS: &[&str] = &[
    "inicio",
    "sobre",
    "cardapio",
    "pedido",
    "reservas",
    "contato",
];

/// Discrete user-generated events the page reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// "Add" button on the menu card with this `data-name`
    AddToCart { item: String },
    /// Click inside the cart region; `None` when no button was hit
    CartClick(Option<ControlTarget>),
    Checkout,
    ClearCart,
    SubmitReservation(FormData),
    ToggleNav,
    NavLinkClicked,
    FilterClicked { key: String },
    AnchorClicked { href: String },
    Intersections(Vec<IntersectionEntry>),
}

/// Visible outcome of one event
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// Nothing happened (unknown item, disabled control, stray click)
    Ignored,
    CartRefreshed,
    /// External link opened in a new tab
    LinkOpened(String),
    /// Reservation feedback text changed
    Feedback(String),
    NavToggled { open: bool },
    Filtered(Vec<ItemDisplay>),
    Scroll(ScrollAction),
    Revealed(Vec<String>),
}

pub struct Storefront<S: CartSurface, O: LinkOpener> {
    menu: Menu,
    cart: CartStore,
    links: LinkBuilder,
    surface: S,
    opener: O,
    nav: NavMenu,
    filter: MenuFilter,
    anchors: AnchorTargets,
    reveal: RevealObserver,
    pickers: ReservationPickers,
    feedback: Option<String>,
}

impl<S: CartSurface, O: LinkOpener> Storefront<S, O> {
    /// Page load: empty cart, closed nav, "all" filter, animated elements
    /// observed, initial cart render
    pub fn new(
        config: &Config,
        menu: Menu,
        anchors: AnchorTargets,
        surface: S,
        opener: O,
        today: NaiveDate,
    ) -> Self {
        let mut page = Self {
            menu,
            cart: CartStore::new(),
            links: LinkBuilder::from_config(config),
            surface,
            opener,
            nav: NavMenu::default(),
            filter: MenuFilter::default(),
            anchors,
            reveal: RevealObserver::default(),
            pickers: ReservationPickers::attach(config.date_picker_enabled, today),
            feedback: None,
        };
        let targets = reveal_targets(
            page.anchors.ids(),
            page.menu.items().iter().map(|item| item.name.as_str()),
        );
        for target in targets {
            page.reveal.observe(target);
        }
        page.refresh();
        page
    }

    pub fn handle(&mut self, event: UiEvent) -> Reaction {
        match event {
            UiEvent::AddToCart { item } => self.add_to_cart(&item),
            UiEvent::CartClick(target) => self.cart_click(target.as_ref()),
            UiEvent::Checkout => self.checkout(),
            UiEvent::ClearCart => self.clear_cart(),
            UiEvent::SubmitReservation(form) => self.submit_reservation(&form),
            UiEvent::ToggleNav => Reaction::NavToggled {
                open: self.nav.toggle(),
            },
            UiEvent::NavLinkClicked => {
                self.nav.on_link_click();
                Reaction::NavToggled { open: false }
            }
            UiEvent::FilterClicked { key } => {
                Reaction::Filtered(self.filter.select(&key, self.menu.items()))
            }
            UiEvent::AnchorClicked { href } => Reaction::Scroll(self.anchors.resolve(&href)),
            UiEvent::Intersections(entries) => Reaction::Revealed(self.reveal.on_entries(&entries)),
        }
    }

    fn add_to_cart(&mut self, item: &str) -> Reaction {
        let Some(menu_item) = self.menu.find(item) else {
            log_rejected(
                &AppError::new(ErrorCode::MenuItemNotFound).with_detail("name", item),
                "Add clicked for unknown menu item",
            );
            return Reaction::Ignored;
        };
        if let Err(e) = self.cart.add_item(&menu_item.name, menu_item.price) {
            log_rejected(&AppError::from(e), "Menu item rejected by cart");
        }
        self.refresh();
        Reaction::CartRefreshed
    }

    fn cart_click(&mut self, target: Option<&ControlTarget>) -> Reaction {
        let Some(command) = CartCommand::route(target) else {
            return Reaction::Ignored;
        };
        if !command.execute(&mut self.cart) {
            log_rejected(
                &AppError::new(ErrorCode::CartItemNotFound).with_detail("name", command.name()),
                "Cart click for a line no longer in the cart",
            );
            return Reaction::Ignored;
        }
        self.refresh();
        Reaction::CartRefreshed
    }

    fn clear_cart(&mut self) -> Reaction {
        if self.cart.is_empty() {
            // control is disabled
            return Reaction::Ignored;
        }
        self.cart.clear();
        self.refresh();
        Reaction::CartRefreshed
    }

    fn checkout(&mut self) -> Reaction {
        match checkout_link(&self.links, &self.cart) {
            Ok(url) => {
                self.opener.open_new_tab(&url);
                Reaction::LinkOpened(url)
            }
            Err(e) => {
                // checkout is disabled while the cart is empty
                log_rejected(&AppError::from(e), "Checkout ignored");
                Reaction::Ignored
            }
        }
    }

    fn submit_reservation(&mut self, form: &FormData) -> Reaction {
        let link = self
            .pickers
            .check(form)
            .and_then(|()| reservation_link(&self.links, form).map_err(AppError::from));
        match link {
            Ok(url) => {
                self.opener.open_new_tab(&url);
                self.feedback = Some(OPENING_MESSAGE.to_string());
                Reaction::LinkOpened(url)
            }
            Err(e) => {
                log_rejected(&e, "Reservation blocked");
                self.feedback = Some(e.message.clone());
                Reaction::Feedback(e.message)
            }
        }
    }

    fn refresh(&mut self) {
        CartView::refresh(&self.cart, &mut self.surface);
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn pickers(&self) -> &ReservationPickers {
        &self.pickers
    }

    /// Current text of the reservation feedback element
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

fn log_rejected(err: &AppError, what: &str) {
    tracing::info!(
        code = %err.code,
        category = err.code.category().name(),
        error = %err,
        details = ?err.details,
        "{}",
        what
    );
}
