//! Order checkout handoff
//!
//! Turns the cart into a pre-filled chat message instead of a payment.

use shared::money::format_brl;
use tracing::instrument;

use super::HandoffError;
use super::link::{LINE_BREAK, LinkBuilder, encode_lines};
use crate::cart::CartStore;

pub const CHECKOUT_GREETING: &str = "Olá! Gostaria de finalizar meu pedido:";

/// Message lines for the cart, in display order, ending with the total
///
/// `<qty>x <name> — <line total>` per line, then `Total: <total>`.
pub fn order_lines(cart: &CartStore) -> Vec<String> {
    let mut lines: Vec<String> = cart
        .lines()
        .map(|line| {
            format!(
                "{}x {} — {}",
                line.quantity,
                line.name,
                format_brl(line.line_total())
            )
        })
        .collect();
    lines.push(format!("Total: {}", format_brl(cart.total())));
    lines
}

/// Encoded message block: greeting, blank line, order lines
pub fn order_text(cart: &CartStore) -> Result<String, HandoffError> {
    if cart.is_empty() {
        return Err(HandoffError::EmptyCart);
    }
    Ok(format!(
        "{}{}{}{}",
        encode_lines([CHECKOUT_GREETING]),
        LINE_BREAK,
        LINE_BREAK,
        encode_lines(order_lines(cart))
    ))
}

/// Full checkout URL for the current cart
#[instrument(skip_all, fields(lines = cart.len()))]
pub fn checkout_link(builder: &LinkBuilder, cart: &CartStore) -> Result<String, HandoffError> {
    let text = order_text(cart)?;
    Ok(builder.compose(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn burger_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item("Burger", Decimal::new(1000, 2)).unwrap();
        cart.add_item("Burger", Decimal::new(1000, 2)).unwrap();
        cart
    }

    #[test]
    fn test_order_lines_exact() {
        assert_eq!(
            order_lines(&burger_cart()),
            vec![
                "2x Burger — R$ 20,00".to_string(),
                "Total: R$ 20,00".to_string()
            ]
        );
    }

    #[test]
    fn test_order_text_encodes_each_line() {
        let text = order_text(&burger_cart()).unwrap();
        let expected_lines = format!(
            "{}%0A{}",
            urlencoding::encode("2x Burger — R$ 20,00"),
            urlencoding::encode("Total: R$ 20,00")
        );
        assert!(text.starts_with("Ol%C3%A1%21%20Gostaria%20de%20finalizar%20meu%20pedido%3A%0A%0A"));
        assert!(text.ends_with(&expected_lines));
        assert!(!text.contains(' '));
    }

    #[test]
    fn test_empty_cart_has_no_link() {
        let builder = LinkBuilder::new("https://wa.me", "5543984336883");
        assert!(matches!(
            checkout_link(&builder, &CartStore::new()),
            Err(HandoffError::EmptyCart)
        ));
    }

    #[test]
    fn test_checkout_link_shape() {
        let builder = LinkBuilder::new("https://wa.me", "5543984336883");
        let url = checkout_link(&builder, &burger_cart()).unwrap();
        assert!(url.starts_with("https://wa.me/5543984336883?text=Ol%C3%A1"));
        assert!(url.contains("2x%20Burger%20%E2%80%94%20R%24%2020%2C00%0ATotal%3A%20R%24%2020%2C00"));
    }
}
