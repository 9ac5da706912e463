//! # Coercion Module
//!
//! Lenient numeric coercion for loosely-typed catalog payloads.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Boundary                                     │
//! │                                                                         │
//! │  The storefront backend hands the app product records whose numeric    │
//! │  fields arrive as JSON numbers, numeric strings ("120"), or garbage.   │
//! │                                                                         │
//! │     {"price": 100}        → 100.00                                     │
//! │     {"price": "99.5"}     → 99.50                                      │
//! │     {"price": "N/A"}      → 0.00                                       │
//! │     {"moq": null}         → 0  (callers floor to 1)                    │
//! │                                                                         │
//! │  The cart contract is fail-quiet: anything that does not parse         │
//! │  becomes 0 and keeps flowing through the same floor/no-op rules as     │
//! │  valid input. Nothing here returns an error.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is also the only place the crate touches floating point: fractional
//! inputs are rounded to the nearest cent once, here, and integers travel
//! everywhere else.

use serde_json::Value;

use crate::money::Money;

// =============================================================================
// Integer Coercion
// =============================================================================

/// Coerces a loosely-typed quantity-like field to an integer.
///
/// ## Rules
/// - JSON number → truncated to i64
/// - Numeric string (trimmed) → parsed as i64, else as f64 and truncated
/// - Missing / null / anything else → 0
/// - Negative values pass through; callers apply their own floors
pub fn int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

// =============================================================================
// Money Coercion
// =============================================================================

/// Coerces a loosely-typed price field to [`Money`].
///
/// ## Rules
/// - JSON number or numeric string → major units, rounded to the nearest cent
/// - Missing / null / non-numeric → `Money::zero()`; an unpriced line
///   contributes nothing to the total
pub fn money(value: Option<&Value>) -> Money {
    let units = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Money::from_cents(units.map(to_cents).unwrap_or(0))
}

/// Rounds a major-unit amount to integer cents. Non-finite input is zero.
fn to_cents(units: f64) -> i64 {
    if !units.is_finite() {
        return 0;
    }
    (units * 100.0).round() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_from_number() {
        assert_eq!(int(Some(&json!(5))), 5);
        assert_eq!(int(Some(&json!(-3))), -3);
        assert_eq!(int(Some(&json!(7.9))), 7); // truncates
    }

    #[test]
    fn test_int_from_string() {
        assert_eq!(int(Some(&json!("12"))), 12);
        assert_eq!(int(Some(&json!("  12  "))), 12);
        assert_eq!(int(Some(&json!("3.5"))), 3);
    }

    #[test]
    fn test_int_garbage_is_zero() {
        assert_eq!(int(None), 0);
        assert_eq!(int(Some(&json!(null))), 0);
        assert_eq!(int(Some(&json!("lots"))), 0);
        assert_eq!(int(Some(&json!(true))), 0);
        assert_eq!(int(Some(&json!({"qty": 2}))), 0);
    }

    #[test]
    fn test_money_from_number() {
        assert_eq!(money(Some(&json!(100))).cents(), 10_000);
        assert_eq!(money(Some(&json!(99.5))).cents(), 9_950);
        assert_eq!(money(Some(&json!(0.005))).cents(), 1); // rounds
    }

    #[test]
    fn test_money_from_string() {
        assert_eq!(money(Some(&json!("120"))).cents(), 12_000);
        assert_eq!(money(Some(&json!(" 49.99 "))).cents(), 4_999);
    }

    #[test]
    fn test_money_garbage_is_zero() {
        assert!(money(None).is_zero());
        assert!(money(Some(&json!(null))).is_zero());
        assert!(money(Some(&json!("free"))).is_zero());
        assert!(money(Some(&json!([100]))).is_zero());
    }
}
