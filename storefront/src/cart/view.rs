//! Cart View - full redraw of the cart region from the store
//!
//! The view keeps no state of its own. Every refresh rebuilds a
//! [`CartRender`] from the store and hands it to a [`CartSurface`].

use serde::Serialize;
use shared::money::format_brl;

use super::actions::CartAction;
use super::store::CartStore;

// ── Page element identifiers ────────────────────────────────────────

pub const CART_ITEMS_ID: &str = "cartItems";
pub const CART_TOTAL_ID: &str = "cartTotal";
pub const CHECKOUT_BUTTON_ID: &str = "checkoutBtn";
pub const CLEAR_CART_BUTTON_ID: &str = "clearCartBtn";

/// A button inside a cart row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartControl {
    pub action: &'static str,
    pub label: &'static str,
    /// Name of the line this control acts on
    pub name: String,
}

/// One rendered cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub name: String,
    pub quantity: u32,
    /// Formatted unit_price × quantity
    pub line_total: String,
    /// Decrement, increment, remove, in display order
    pub controls: Vec<CartControl>,
}

/// Everything the cart region shows after one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRender {
    pub rows: Vec<CartRow>,
    pub total: String,
    pub checkout_enabled: bool,
    pub clear_enabled: bool,
}

impl CartRender {
    /// Markup for the `#cartItems` container
    pub fn items_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            let name = escape_html(&row.name);
            html.push_str("<div class=\"cart-item\">\n");
            html.push_str(&format!(
                "  <span>{} <small style=\"color:#aaa\">x{}</small></span>\n",
                name, row.quantity
            ));
            html.push_str("  <div class=\"cart-qty\">\n");
            for control in &row.controls {
                match control.action {
                    "dec" => html.push_str(&control_html(control, "", "\u{2212}")),
                    "inc" => html.push_str(&control_html(control, "", "+")),
                    _ => {}
                }
            }
            html.push_str("  </div>\n");
            if let Some(del) = row.controls.iter().find(|c| c.action == "del") {
                html.push_str(&control_html(
                    del,
                    " class=\"cart-remove\"",
                    "<i class=\"fa-solid fa-trash\"></i>",
                ));
            }
            html.push_str("</div>\n");
        }
        html
    }

    /// Every element a refresh touches: items container, total, and the
    /// enabled state of the checkout and clear controls
    pub fn region_html(&self) -> String {
        format!(
            "<div id=\"{}\">\n{}</div>\n<span id=\"{}\">{}</span>\n{}{}",
            CART_ITEMS_ID,
            self.items_html(),
            CART_TOTAL_ID,
            escape_html(&self.total),
            button_html(CHECKOUT_BUTTON_ID, self.checkout_enabled),
            button_html(CLEAR_CART_BUTTON_ID, self.clear_enabled),
        )
    }

    /// Plain-text rendering used by the terminal front end
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.rows.is_empty() {
            out.push_str("(carrinho vazio)\n");
        }
        for row in &self.rows {
            out.push_str(&format!(
                "  {:>3}x {:<28} {:>14}   [-] [+] [x]\n",
                row.quantity, row.name, row.line_total
            ));
        }
        out.push_str(&format!("  Total: {}\n", self.total));
        out.push_str(&format!(
            "  checkout: {} | limpar: {}\n",
            on_off(self.checkout_enabled),
            on_off(self.clear_enabled)
        ));
        out
    }
}

fn button_html(id: &str, enabled: bool) -> String {
    let disabled = if enabled { "" } else { " disabled" };
    format!("<button id=\"{}\"{}></button>\n", id, disabled)
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "habilitado" } else { "desabilitado" }
}

fn control_html(control: &CartControl, extra_attrs: &str, content: &str) -> String {
    format!(
        "  <button{} aria-label=\"{}\" data-action=\"{}\" data-name=\"{}\">{}</button>\n",
        extra_attrs,
        control.label,
        control.action,
        escape_html(&control.name),
        content
    )
}

/// Escape text for element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Target of a cart refresh (the page's cart region)
pub trait CartSurface {
    fn present(&mut self, render: &CartRender);
}

/// Renders the store into a [`CartRender`]
pub struct CartView;

impl CartView {
    pub fn render(store: &CartStore) -> CartRender {
        let rows = store
            .lines()
            .map(|line| CartRow {
                name: line.name.clone(),
                quantity: line.quantity,
                line_total: format_brl(line.line_total()),
                controls: CartAction::ALL
                    .iter()
                    .map(|action| CartControl {
                        action: action.as_str(),
                        label: action.label(),
                        name: line.name.clone(),
                    })
                    .collect(),
            })
            .collect();

        let has_items = !store.is_empty();
        CartRender {
            rows,
            total: format_brl(store.total()),
            checkout_enabled: has_items,
            clear_enabled: has_items,
        }
    }

    /// Rebuild the region and push it to the surface
    pub fn refresh<S: CartSurface + ?Sized>(store: &CartStore, surface: &mut S) {
        let render = Self::render(store);
        surface.present(&render);
    }
}

/// Surface that keeps every render it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub renders: Vec<CartRender>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&CartRender> {
        self.renders.last()
    }

    pub fn refresh_count(&self) -> usize {
        self.renders.len()
    }
}

impl CartSurface for RecordingSurface {
    fn present(&mut self, render: &CartRender) {
        self.renders.push(render.clone());
    }
}
