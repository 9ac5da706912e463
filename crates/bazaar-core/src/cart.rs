//! # Cart Engine
//!
//! The dual-mode cart: two independent partitions of lines, MOQ enforcement
//! on every mutation, and the derived values the screens render.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            Operation               State Change          │
//! │  ─────────────            ─────────               ────────────          │
//! │                                                                         │
//! │  Tap "Add" ──────────────► add_to_cart() ───────► merge or push line   │
//! │                                                                         │
//! │  Tap stepper "+" ────────► increment_item() ────► qty += 1             │
//! │                                                                         │
//! │  Tap stepper "−" ────────► decrement_item() ────► qty -= 1, or delete  │
//! │                                                    when at the MOQ floor│
//! │                                                                         │
//! │  Type a quantity ────────► set_item_quantity() ─► qty = max(moq, n),   │
//! │                                                    0 deletes           │
//! │                                                                         │
//! │  Tap "Remove" ───────────► remove_from_cart() ──► delete line          │
//! │                                                                         │
//! │  Checkout done ──────────► clear_cart() ────────► empty one partition  │
//! │                                                                         │
//! │  Every operation resolves its target partition first (override >       │
//! │  product declared mode > active mode) and touches ONLY that partition. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `moq = max(1, product moq)` for every line; never 0, never negative
//! - `qty ≥ moq` for every line; a decrement that would cross the floor
//!   deletes the line instead
//! - ids are unique within a partition; repeat adds merge
//! - the wholesale and retail partitions never affect each other
//!
//! ## Failure Semantics
//! Mutations never panic and never return errors. Missing ids, absent
//! lines, and malformed numerics all degrade to a no-op ("never crash the
//! cart"): callers cannot distinguish "no-op because absent" from "no-op
//! because malformed", and that is the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::mode::Mode;
use crate::money::Money;
use crate::product::ProductRef;

// =============================================================================
// Cart Line
// =============================================================================

/// One product's entry within a mode's cart.
///
/// ## Snapshot Pattern
/// Display fields and the unit price are frozen copies taken when the line
/// was created. If the catalog record changes afterwards, the cart keeps
/// showing what the shopper put in it. The one exception is `moq`, which a
/// repeat add refreshes so the floor always reflects the latest rule.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog identifier; unique within this line's partition.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: Option<String>,

    /// SKU at time of adding (frozen).
    pub sku: Option<String>,

    /// Image at time of adding (frozen).
    pub image_url: Option<String>,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart; always ≥ `moq`.
    pub qty: i64,

    /// Minimum order quantity; always ≥ 1. Refreshed on repeat adds.
    pub moq: i64,

    /// Which partition the line belongs to.
    pub mode: Mode,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line from a product record, freezing its display fields.
    fn from_product(product: &ProductRef, id: String, mode: Mode, moq: i64, qty: i64) -> Self {
        CartLine {
            id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            image_url: product.image_url.clone(),
            unit_price_cents: product.unit_price().cents(),
            qty,
            moq,
            mode,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.qty)
    }

    /// Whether the line sits at its MOQ floor (the next decrement deletes).
    #[inline]
    pub fn at_floor(&self) -> bool {
        self.qty <= self.moq
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The dual-mode cart engine.
///
/// Owns exactly two ordered line lists (wholesale and retail) plus the
/// session's active mode. The partition mapping is private; consumers see
/// only the operations and the derived selectors.
///
/// Lives for the session: created empty at startup, no terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    /// The mode operations default to when nothing more specific resolves.
    active: Mode,

    /// Wholesale partition, insertion order = display order.
    wholesale: Vec<CartLine>,

    /// Retail partition, insertion order = display order.
    retail: Vec<CartLine>,

    /// When the cart was created.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new cart with both partitions empty, active mode wholesale.
    pub fn new() -> Self {
        Cart {
            active: Mode::default(),
            wholesale: Vec::new(),
            retail: Vec::new(),
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Active mode
    // -------------------------------------------------------------------------

    /// Stores the collaborator-supplied active mode.
    ///
    /// The raw string runs through the same normalization as every other
    /// mode input; anything unrecognized resolves to wholesale, so the
    /// stored active mode is always a valid [`Mode`].
    pub fn set_active_mode(&mut self, raw: &str) {
        self.active = Mode::normalize(raw).unwrap_or_default();
    }

    /// The mode the session is currently operating in.
    #[inline]
    pub fn active_mode(&self) -> Mode {
        self.active
    }

    /// Resolves the partition an operation targets.
    fn resolve(&self, override_mode: Option<&str>, product: Option<&ProductRef>) -> Mode {
        Mode::resolve(
            override_mode,
            product.and_then(ProductRef::declared_mode),
            self.active,
        )
    }

    fn lines(&self, mode: Mode) -> &[CartLine] {
        match mode {
            Mode::Wholesale => &self.wholesale,
            Mode::Retail => &self.retail,
        }
    }

    fn lines_mut(&mut self, mode: Mode) -> &mut Vec<CartLine> {
        match mode {
            Mode::Wholesale => &mut self.wholesale,
            Mode::Retail => &mut self.retail,
        }
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Adds a product to the resolved partition, merging on repeat adds.
    ///
    /// ## Behavior
    /// - No-op if the record carries no usable identifier
    /// - `moq = max(1, product moq)`
    /// - New line: opens at `max(product qty, moq)`
    /// - Already present: the line's `moq` is refreshed to the latest
    ///   product moq and `qty = max(new_moq, existing_qty + raw_qty)`:
    ///   repeat adds accumulate by the raw requested quantity (a bare
    ///   record tops up nothing), and the floor is re-enforced against
    ///   the latest moq, not the stale one
    pub fn add_to_cart(&mut self, product: &ProductRef, mode_override: Option<&str>) {
        let Some(id) = product.line_id() else {
            return;
        };
        let id = id.to_string();

        let moq = product.min_order_qty();
        let mode = self.resolve(mode_override, Some(product));

        let lines = self.lines_mut(mode);
        if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
            line.moq = moq;
            line.qty = moq.max(line.qty.saturating_add(product.requested_qty()));
        } else {
            let qty = product.initial_qty();
            lines.push(CartLine::from_product(product, id, mode, moq, qty));
        }
    }

    /// Increases a line's quantity by one. No upper bound; no-op if absent.
    pub fn increment_item(&mut self, id: &str, mode_override: Option<&str>) {
        let mode = self.resolve(mode_override, None);
        if let Some(line) = self.lines_mut(mode).iter_mut().find(|l| l.id == id) {
            line.qty = line.qty.saturating_add(1);
        }
    }

    /// Decreases a line's quantity by one, deleting at the MOQ floor.
    ///
    /// ## Behavior
    /// - At the floor (`qty ≤ moq`): the line is deleted, not clamped;
    ///   stepping below the minimum means "take it out entirely"
    /// - Above the floor: `qty = max(moq, qty - 1)`
    /// - No-op if the line does not exist
    pub fn decrement_item(&mut self, id: &str, mode_override: Option<&str>) {
        let mode = self.resolve(mode_override, None);
        let lines = self.lines_mut(mode);
        let Some(pos) = lines.iter().position(|l| l.id == id) else {
            return;
        };

        if lines[pos].at_floor() {
            lines.remove(pos);
        } else {
            let line = &mut lines[pos];
            line.qty = line.moq.max(line.qty - 1);
        }
    }

    /// Deletes a line unconditionally, if present.
    pub fn remove_from_cart(&mut self, id: &str, mode_override: Option<&str>) {
        let mode = self.resolve(mode_override, None);
        self.lines_mut(mode).retain(|l| l.id != id);
    }

    /// Sets a line's quantity directly.
    ///
    /// ## Behavior
    /// - Negative requests clamp to 0
    /// - 0 deletes the line
    /// - A request below the line's moq is silently raised to the moq
    /// - No-op if the line does not exist: this path edits quantities,
    ///   it never creates lines
    pub fn set_item_quantity(&mut self, id: &str, quantity: i64, mode_override: Option<&str>) {
        let mode = self.resolve(mode_override, None);
        let requested = quantity.max(0);

        let lines = self.lines_mut(mode);
        let Some(pos) = lines.iter().position(|l| l.id == id) else {
            return;
        };

        if requested == 0 {
            lines.remove(pos);
        } else {
            let line = &mut lines[pos];
            line.qty = line.moq.max(requested);
        }
    }

    /// Empties the resolved partition. The other partition is untouched.
    pub fn clear_cart(&mut self, mode_override: Option<&str>) {
        let mode = self.resolve(mode_override, None);
        self.lines_mut(mode).clear();
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// The active mode's lines, in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartLine] {
        self.lines(self.active)
    }

    /// A specific mode's lines, in insertion order.
    #[inline]
    pub fn items_in(&self, mode: Mode) -> &[CartLine] {
        self.lines(mode)
    }

    /// Total quantity across the active mode's lines.
    #[inline]
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity_in(self.active)
    }

    /// Total quantity across a specific mode's lines.
    pub fn total_quantity_in(&self, mode: Mode) -> i64 {
        self.lines(mode).iter().map(|l| l.qty).sum()
    }

    /// Total amount (Σ unit price × qty) across the active mode's lines.
    #[inline]
    pub fn total_amount(&self) -> Money {
        self.total_amount_in(self.active)
    }

    /// Total amount across a specific mode's lines.
    pub fn total_amount_in(&self, mode: Mode) -> Money {
        self.lines(mode).iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines in the active mode.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items().len()
    }

    /// Checks whether both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.wholesale.is_empty() && self.retail.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Summary of the active mode's cart for screen consumption.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines in the active mode.
    pub line_count: usize,

    /// Sum of quantities across those lines.
    pub total_quantity: i64,

    /// Sum of unit price × quantity, in cents.
    pub total_amount_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_amount_cents: cart.total_amount().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
