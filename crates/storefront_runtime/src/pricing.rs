//! Price rendering and cart estimates.

use serde::{Deserialize, Serialize};

/// Renders a number the way a browser converts it to text.
///
/// Integral values drop the fraction (`499`), very large and very small magnitudes switch to
/// exponent form (`1e+21`, `1e-7`), and negative zero renders as `0`.
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

/// Renders `amount` after `currency_prefix` (`"₹"` + `499.0` → `"₹499"`).
pub fn format_price(currency_prefix: &str, amount: f64) -> String {
    format!("{currency_prefix}{}", number_text(amount))
}

/// Flat shipping charge for a cart holding `total_quantity` items.
///
/// Carts outside the 1–16 item tiers carry no charge.
pub const fn shipping_for_quantity(total_quantity: u32) -> u32 {
    match total_quantity {
        1..=4 => 50,
        5..=8 => 65,
        9..=12 => 100,
        13..=16 => 130,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One product line in a cart preview.
pub struct CartLine {
    /// Unit price.
    pub price: f64,
    /// Units of the product.
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Subtotal, shipping, and total for a set of cart lines.
pub struct CartEstimate {
    /// Sum of `price * quantity` over all lines.
    pub subtotal: f64,
    /// Quantity-tiered shipping charge.
    pub shipping: f64,
    /// `subtotal + shipping`.
    pub total: f64,
    /// Units across all lines.
    pub total_quantity: u32,
}

impl CartEstimate {
    /// Computes the estimate for `lines`.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal = lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum::<f64>();
        let total_quantity = lines
            .iter()
            .fold(0_u32, |total, line| total.saturating_add(line.quantity));
        let shipping = f64::from(shipping_for_quantity(total_quantity));
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            total_quantity,
        }
    }
}
