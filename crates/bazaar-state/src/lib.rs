//! # bazaar-state: Shared State Layer for the Bazaar Cart
//!
//! The injectable layer between the pure engine and a host application.
//!
//! ## Module Organization
//! ```text
//! bazaar_state/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── cart.rs         ◄─── CartHandle + CartView DTO
//! ├── persist.rs      ◄─── JSON snapshot load/save adapter
//! └── telemetry.rs    ◄─── tracing-subscriber bootstrap
//! ```
//!
//! ## Why a Handle?
//! Every storefront screen (product list, product detail, cart, checkout)
//! reads or writes the same cart without threading state through props.
//! Instead of ambient globals, the host constructs one [`CartHandle`] at
//! startup and injects clones wherever they are needed:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Host App Wiring                                      │
//! │                                                                         │
//! │   startup:   let cart = CartHandle::new();                              │
//! │              telemetry::init();                                         │
//! │                                                                         │
//! │   screens:   cart.clone() ──► add_to_cart / increment / view            │
//! │                                                                         │
//! │   suspend:   cart.save_to(&snapshot_path)  (persist adapter)            │
//! │   resume:    CartHandle::load_from(&snapshot_path)                      │
//! │                                                                         │
//! │  THREAD SAFETY: the handle is Arc<Mutex<Cart>>; operations from         │
//! │  concurrent callers serialize through the one owning lock.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod persist;
pub mod telemetry;

pub use cart::{CartHandle, CartView};
pub use persist::PersistError;
