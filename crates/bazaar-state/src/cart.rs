//! # Cart Handle
//!
//! Shared ownership of the cart engine, plus the view DTO screens consume.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple screens may access/modify the cart
//! 2. Only one caller should modify the cart at a time
//! 3. Host runtimes may dispatch from more than one thread
//!
//! The engine itself is synchronous value state (no suspension, no I/O);
//! the mutex is the external serialization the engine's concurrency
//! contract asks its host to provide.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use bazaar_core::{Cart, CartLine, CartTotals, Mode, ProductRef};

// =============================================================================
// Cart View
// =============================================================================

/// Cart payload for screen consumption: the active mode, its lines, and
/// the derived totals, in one read.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// The mode the view is scoped to.
    pub mode: Mode,

    /// The active mode's lines, insertion order.
    pub items: Vec<CartLine>,

    /// Derived counts and amounts over those lines.
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            mode: cart.active_mode(),
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Cart Handle
// =============================================================================

/// Cloneable shared owner of one [`Cart`].
///
/// Construct once at startup, inject clones into every screen that needs
/// cart access. All clones observe the same state.
#[derive(Debug, Clone)]
pub struct CartHandle {
    cart: Arc<Mutex<Cart>>,
}

impl CartHandle {
    /// Creates a handle over a new empty cart.
    pub fn new() -> Self {
        CartHandle {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Creates a handle over an existing cart (e.g. a restored snapshot).
    pub fn from_cart(cart: Cart) -> Self {
        CartHandle {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = handle.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    // -------------------------------------------------------------------------
    // Operation façade
    // -------------------------------------------------------------------------
    // One wrapper per engine operation: log a structured event, delegate.
    // Semantics (fail-quiet, MOQ floors, mode routing) live entirely in
    // bazaar-core.

    /// Stores the active mode supplied by the session/profile layer.
    pub fn set_active_mode(&self, raw: &str) {
        debug!(mode = %raw, "set_active_mode");
        self.with_cart_mut(|c| c.set_active_mode(raw));
    }

    /// Adds a product to the cart (merge on repeat adds).
    pub fn add_to_cart(&self, product: &ProductRef, mode_override: Option<&str>) {
        debug!(id = ?product.line_id(), mode = ?mode_override, "add_to_cart");
        self.with_cart_mut(|c| c.add_to_cart(product, mode_override));
    }

    /// Increases a line's quantity by one.
    pub fn increment_item(&self, id: &str, mode_override: Option<&str>) {
        debug!(id = %id, mode = ?mode_override, "increment_item");
        self.with_cart_mut(|c| c.increment_item(id, mode_override));
    }

    /// Decreases a line's quantity by one, deleting at the MOQ floor.
    pub fn decrement_item(&self, id: &str, mode_override: Option<&str>) {
        debug!(id = %id, mode = ?mode_override, "decrement_item");
        self.with_cart_mut(|c| c.decrement_item(id, mode_override));
    }

    /// Deletes a line unconditionally.
    pub fn remove_from_cart(&self, id: &str, mode_override: Option<&str>) {
        debug!(id = %id, mode = ?mode_override, "remove_from_cart");
        self.with_cart_mut(|c| c.remove_from_cart(id, mode_override));
    }

    /// Sets a line's quantity (0 removes; below-MOQ raises to the MOQ).
    pub fn set_item_quantity(&self, id: &str, quantity: i64, mode_override: Option<&str>) {
        debug!(id = %id, quantity = %quantity, mode = ?mode_override, "set_item_quantity");
        self.with_cart_mut(|c| c.set_item_quantity(id, quantity, mode_override));
    }

    /// Empties one mode's partition.
    pub fn clear_cart(&self, mode_override: Option<&str>) {
        debug!(mode = ?mode_override, "clear_cart");
        self.with_cart_mut(|c| c.clear_cart(mode_override));
    }

    /// Reads the active mode's lines and totals in one locked pass.
    pub fn view(&self) -> CartView {
        self.with_cart(|cart| CartView::from(cart))
    }
}

impl Default for CartHandle {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: serde_json::Value) -> ProductRef {
        serde_json::from_value(value).expect("product payload should deserialize")
    }

    #[test]
    fn test_clones_share_state() {
        let handle = CartHandle::new();
        let screen_a = handle.clone();
        let screen_b = handle.clone();

        screen_a.add_to_cart(&product(json!({"id": "p1", "price": 10, "moq": 2})), None);
        screen_b.increment_item("p1", None);

        let view = handle.view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].qty, 3);
    }

    #[test]
    fn test_view_carries_mode_items_totals() {
        let handle = CartHandle::new();
        handle.add_to_cart(&product(json!({"id": "p1", "price": 100, "moq": 10})), None);

        let view = handle.view();
        assert_eq!(view.mode, Mode::Wholesale);
        assert_eq!(view.totals.line_count, 1);
        assert_eq!(view.totals.total_quantity, 10);
        assert_eq!(view.totals.total_amount_cents, 100_000);
    }

    #[test]
    fn test_view_follows_active_mode() {
        let handle = CartHandle::new();
        handle.add_to_cart(&product(json!({"id": "r1", "price": 5})), Some("retail"));

        assert_eq!(handle.view().totals.line_count, 0);

        handle.set_active_mode("b2c");
        let view = handle.view();
        assert_eq!(view.mode, Mode::Retail);
        assert_eq!(view.totals.line_count, 1);
    }

    #[test]
    fn test_facade_covers_every_operation() {
        let handle = CartHandle::new();
        handle.add_to_cart(&product(json!({"id": "p1", "moq": 2, "qty": 5})), None);

        handle.set_item_quantity("p1", 4, None);
        assert_eq!(handle.view().items[0].qty, 4);

        handle.decrement_item("p1", None);
        assert_eq!(handle.view().items[0].qty, 3);

        handle.remove_from_cart("p1", None);
        assert!(handle.view().items.is_empty());

        handle.add_to_cart(&product(json!({"id": "p2"})), None);
        handle.clear_cart(None);
        assert!(handle.view().items.is_empty());
    }

    #[test]
    fn test_threaded_callers_serialize_through_the_lock() {
        let handle = CartHandle::new();
        handle.add_to_cart(&product(json!({"id": "p1", "moq": 1})), None);

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let h = handle.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        h.increment_item("p1", None);
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().expect("worker thread panicked");
        }

        assert_eq!(handle.view().items[0].qty, 801);
    }
}
