//! # Domain Types
//!
//! Parsed cart items, the parse result, and total aggregation.
//!
//! ## Value Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       From Cells to Total                               │
//! │                                                                         │
//! │  "Mollis consequat,9.00,2" ──► CartItem { name, price: 9.0,            │
//! │                                           quantity: 2.0, id }          │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                             line_total() = price × quantity             │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │              calc_total(items) = Σ line_total  (no rounding here)      │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │        ParseResult::from_items      total = round_to_cents(sum)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens exactly once, at result assembly. Intermediate sums
//! keep full precision so rounding error cannot accumulate per item.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Item
// =============================================================================

/// One parsed line of the cart file.
///
/// ## Invariants
/// - `id` comes from the injected identifier source; this crate never
///   generates one itself.
/// - `price` and `quantity` are non-negative whenever the source row passed
///   validation. An unvalidated row can put NaN here; that is the caller's
///   contract violation, not a reachable state of `parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Externally generated unique identifier.
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Number of units.
    pub quantity: f64,
}

impl CartItem {
    /// Returns this line's contribution to the cart total.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Sums `price × quantity` over all items.
///
/// ## Contract
/// - The empty slice sums to 0.
/// - No rounding; callers that present the value round it themselves
///   (see [`ParseResult::from_items`]).
///
/// ## Example
/// ```rust
/// use cartfile_core::types::{calc_total, CartItem};
///
/// let items = vec![CartItem {
///     id: "item-1".to_string(),
///     name: "Mollis consequat".to_string(),
///     price: 9.0,
///     quantity: 2.0,
/// }];
/// assert_eq!(calc_total(&items), 18.0);
/// assert_eq!(calc_total(&[]), 0.0);
/// ```
pub fn calc_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Rounds a value to 2 decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Parse Result
// =============================================================================

/// The outcome of a successful parse: items in file row order and the
/// rounded cart total.
///
/// Only ever produced after validation returned zero findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Parsed items, in the order their rows appear in the file.
    pub items: Vec<CartItem>,

    /// Cart total, rounded to 2 decimal places.
    pub total: f64,
}

impl ParseResult {
    /// Assembles a result from parsed items, computing the rounded total.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = round_to_cents(calc_total(&items));
        ParseResult { items, total }
    }

    /// Returns the number of parsed items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, quantity: f64) -> CartItem {
        CartItem {
            id: format!("item-{}", name.len()),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("a", 9.0, 2.0).line_total(), 18.0);
        assert_eq!(item("b", 0.0, 5.0).line_total(), 0.0);
    }

    #[test]
    fn test_calc_total_empty_is_zero() {
        assert_eq!(calc_total(&[]), 0.0);
    }

    #[test]
    fn test_calc_total_sums_line_totals() {
        let items = vec![item("a", 9.0, 2.0), item("b", 10.32, 1.0)];
        assert!((calc_total(&items) - 28.32).abs() < 1e-9);
    }

    #[test]
    fn test_calc_total_is_order_independent() {
        let forward = vec![item("a", 9.0, 2.0), item("b", 10.32, 1.0), item("c", 28.72, 10.0)];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert!((calc_total(&forward) - calc_total(&reversed)).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(348.32000000000005), 348.32);
        assert_eq!(round_to_cents(1.005000001), 1.01);
        assert_eq!(round_to_cents(0.0), 0.0);
        assert_eq!(round_to_cents(47.22499), 47.22);
    }

    #[test]
    fn test_from_items_rounds_the_total() {
        // 0.1 × 3 is not representable exactly; the result total is.
        let result = ParseResult::from_items(vec![item("a", 0.1, 3.0)]);
        assert_eq!(result.total, 0.3);
        assert_eq!(result.item_count(), 1);
    }

    #[test]
    fn test_from_items_empty_cart() {
        let result = ParseResult::from_items(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_parse_result_json_round_trip() {
        let result = ParseResult::from_items(vec![item("Mollis consequat", 9.0, 2.0)]);
        let json = serde_json::to_string(&result).unwrap();
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
