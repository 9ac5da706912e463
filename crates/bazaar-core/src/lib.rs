//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar cart. It contains the dual-mode
//! cart engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bazaar Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront App (React Native)                  │   │
//! │  │   Product List ──► Product Detail ──► Cart ──► Checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ via bazaar-state handle                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   mode    │  │   money   │  │  product  │  │   cart    │  │   │
//! │  │   │ Wholesale │  │   Money   │  │ ProductRef│  │   Cart    │  │   │
//! │  │   │  Retail   │  │  (cents)  │  │ resolvers │  │ CartLine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`mode`] - The wholesale/retail mode enum and its resolution chain
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`coerce`] - Lenient numeric coercion for loosely-typed payloads
//! - [`product`] - The catalog payload shape consumed by the cart
//! - [`cart`] - The cart engine: lines, operations, derived totals
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Fail Quiet**: Cart mutations never panic and never return errors -
//!    malformed input degrades to a no-op so a render path can never be
//!    crashed by a cart call
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::{Cart, ProductRef};
//! use serde_json::json;
//!
//! let product: ProductRef = serde_json::from_value(json!({
//!     "_id": "p1",
//!     "name": "Basmati Rice 5kg",
//!     "price": 100,
//!     "moq": 10,
//! })).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(&product, None);
//!
//! // The MOQ floor is enforced on creation: qty starts at 10, not 1
//! assert_eq!(cart.items()[0].qty, 10);
//! assert_eq!(cart.total_amount().cents(), 100_000); // 10 × $100.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coerce;
pub mod mode;
pub mod money;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Cart` instead of
// `use bazaar_core::cart::Cart`

pub use cart::{Cart, CartLine, CartTotals};
pub use mode::Mode;
pub use money::Money;
pub use product::ProductRef;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The smallest minimum-order-quantity any cart line can carry.
///
/// A product that declares no MOQ (or declares zero/negative nonsense)
/// effectively has a minimum of one: a line never exists with `moq < 1`,
/// and therefore never with `qty < 1`.
pub const MOQ_FLOOR: i64 = 1;
