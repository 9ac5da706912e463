//! # Product Module
//!
//! The catalog payload shape the cart consumes.
//!
//! ## Where ProductRef Comes From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Record Flow                                  │
//! │                                                                         │
//! │  Storefront REST API ──► screen state ──► add_to_cart(&product, ...)   │
//! │                                                                         │
//! │  The backend is a JS stack: ids arrive as "_id", prices arrive as      │
//! │  numbers or numeric strings, moq/qty may be absent, and the mode may   │
//! │  be a string ("B2B") or a pair of booleans (isWholesale/isRetail).     │
//! │                                                                         │
//! │  ProductRef models that payload as-is (every field optional) and       │
//! │  exposes one resolver per fact so the defaulting rules live in         │
//! │  exactly one place each.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::coerce;
use crate::mode::Mode;
use crate::money::Money;
use crate::MOQ_FLOOR;

// =============================================================================
// ProductRef
// =============================================================================

/// A product record as supplied by the catalog API.
///
/// Read-only input to the cart: the engine copies what it needs into a
/// [`crate::CartLine`] snapshot and never mutates the record. Any partial
/// payload deserializes; resolvers below supply the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRef {
    /// Catalog identifier. The backend sends `_id`; either key is accepted.
    #[serde(alias = "_id")]
    pub id: Option<String>,

    /// Display name shown on cart and checkout screens.
    pub name: Option<String>,

    /// Business identifier, when the catalog carries one.
    pub sku: Option<String>,

    /// Primary image for cart display.
    pub image_url: Option<String>,

    /// Unit price in major units; number or numeric string.
    #[ts(type = "number | string | null")]
    pub price: Option<Value>,

    /// Requested quantity for an add; a new line defaults to the MOQ.
    #[ts(type = "number | string | null")]
    pub qty: Option<Value>,

    /// Minimum order quantity; absent/zero means "no minimum".
    #[ts(type = "number | string | null")]
    pub moq: Option<Value>,

    /// Declared mode string ("wholesale"/"b2b"/"retail"/"b2c").
    pub mode: Option<String>,

    /// Mode hint, consulted only when `mode` is absent or unrecognized.
    pub is_retail: Option<bool>,

    /// Mode hint, consulted only when `mode` is absent or unrecognized.
    pub is_wholesale: Option<bool>,
}

impl ProductRef {
    /// Returns the identifier a cart line would carry, if the record has one.
    ///
    /// A missing or empty id makes every mutating cart call a no-op, so
    /// this is the first gate `add_to_cart` runs. Anything non-empty passes
    /// through verbatim; the cart never rewrites catalog identifiers.
    pub fn line_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Resolves the mode this product declares for itself, if any.
    ///
    /// ## Priority
    /// 1. The `mode` string, when it normalizes to a known mode
    /// 2. `is_wholesale == true` → Wholesale
    /// 3. `is_retail == true` → Retail
    ///
    /// When both flags are set, wholesale wins (the same bias as the
    /// engine's default). A flag that is explicitly `false` declares
    /// nothing.
    pub fn declared_mode(&self) -> Option<Mode> {
        self.mode
            .as_deref()
            .and_then(Mode::normalize)
            .or_else(|| match (self.is_wholesale, self.is_retail) {
                (Some(true), _) => Some(Mode::Wholesale),
                (_, Some(true)) => Some(Mode::Retail),
                _ => None,
            })
    }

    /// Resolves the minimum order quantity: `max(1, numeric moq)`.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::ProductRef;
    /// use serde_json::json;
    ///
    /// let p: ProductRef = serde_json::from_value(json!({"moq": "5"})).unwrap();
    /// assert_eq!(p.min_order_qty(), 5);
    ///
    /// let none: ProductRef = serde_json::from_value(json!({})).unwrap();
    /// assert_eq!(none.min_order_qty(), 1);
    /// ```
    pub fn min_order_qty(&self) -> i64 {
        coerce::int(self.moq.as_ref()).max(MOQ_FLOOR)
    }

    /// Resolves the raw requested quantity; 0 when absent or malformed.
    ///
    /// Merges top up an existing line by exactly this amount: a bare
    /// record (no `qty`) adds nothing and only refreshes the MOQ floor.
    pub fn requested_qty(&self) -> i64 {
        coerce::int(self.qty.as_ref())
    }

    /// Resolves the quantity a new line opens at: `max(numeric qty, moq)`.
    ///
    /// A record without a `qty` (the common "tap add on a product card"
    /// path) opens the line at exactly the MOQ.
    pub fn initial_qty(&self) -> i64 {
        self.requested_qty().max(self.min_order_qty())
    }

    /// Resolves the unit price; non-numeric/missing prices are zero.
    pub fn unit_price(&self) -> Money {
        coerce::money(self.price.as_ref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
