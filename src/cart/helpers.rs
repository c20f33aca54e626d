//! Shopping Cart Formatting Helpers

use super::models::CartLine;
use rust_decimal::Decimal;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Jeans, 1x Yoga Mat"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats an amount as dollars with two decimals, e.g. `"$599.98"`.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_pads_to_cents() {
        assert_eq!(format_price(Decimal::new(59998, 2)), "$599.98");
        assert_eq!(format_price(Decimal::new(25, 0)), "$25.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn empty_summary() {
        assert_eq!(format_item_summary(&[]), "");
    }
}
