//! Currency formatting for Brazilian Real (pt-BR)
//!
//! Amounts are kept as `Decimal` everywhere and only turned into text at the
//! edge, e.g. `R$ 1.234,50`.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Currency symbol for BRL
pub const CURRENCY_SYMBOL: &str = "R$";

/// Thousands separator in pt-BR
const THOUSANDS_SEPARATOR: char = '.';

/// Decimal separator in pt-BR
const DECIMAL_SEPARATOR: char = ',';

/// Round a monetary value to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Highest accepted unit price, in reais
///
/// Keeps `unit_price × quantity` and cart totals far inside `Decimal` range
/// even at `u32::MAX` units.
pub const MAX_PRICE_REAIS: i64 = 1_000_000;

/// Whether `price` is a usable unit price: `0 ≤ price ≤ MAX_PRICE_REAIS`
pub fn is_valid_price(price: Decimal) -> bool {
    !(price.is_sign_negative() && !price.is_zero()) && price <= Decimal::from(MAX_PRICE_REAIS)
}

/// Format an amount as Brazilian Real
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_brl;
///
/// assert_eq!(format_brl(Decimal::new(9800, 2)), "R$ 98,00");
/// assert_eq!(format_brl(Decimal::new(123456789, 2)), "R$ 1.234.567,89");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut out = String::with_capacity(plain.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(' ');
    out.push_str(&group_thousands(int_part));
    out.push(DECIMAL_SEPARATOR);
    out.push_str(frac_part);
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
