//! # Snapshot Persistence
//!
//! JSON load/save adapter around the cart snapshot.
//!
//! ## Scope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Boundary                                 │
//! │                                                                         │
//! │  The engine is in-memory state; it never performs I/O in-band.          │
//! │  Hosts that want the cart to survive an app restart call this           │
//! │  adapter at their own lifecycle points:                                 │
//! │                                                                         │
//! │    app suspend ──► handle.save_to(path)   (whole cart, both modes)      │
//! │    app resume  ──► CartHandle::load_from(path)                          │
//! │                                                                         │
//! │  The snapshot is the cart's serde form: active mode + both              │
//! │  partitions. Durability guarantees (fsync, corruption recovery)         │
//! │  are the host's problem, not this adapter's.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use bazaar_core::Cart;

use crate::cart::CartHandle;

// =============================================================================
// Error Type
// =============================================================================

/// Snapshot adapter failures.
///
/// Unlike cart mutations (fail-quiet by contract), persistence touches the
/// filesystem and reports what went wrong.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot contents are not a valid cart.
    #[error("snapshot is not a valid cart: {0}")]
    Serde(#[from] serde_json::Error),
}

// =============================================================================
// Adapter Functions
// =============================================================================

/// Writes a cart snapshot as pretty JSON, creating parent directories.
pub fn save_snapshot(cart: &Cart, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(cart)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a cart snapshot back from disk.
pub fn load_snapshot(path: &Path) -> Result<Cart, PersistError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

// =============================================================================
// Handle Conveniences
// =============================================================================

impl CartHandle {
    /// Snapshots the current cart to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), PersistError> {
        self.with_cart(|cart| save_snapshot(cart, path))
    }

    /// Restores a handle from a snapshot written by [`CartHandle::save_to`].
    pub fn load_from(path: &Path) -> Result<Self, PersistError> {
        Ok(CartHandle::from_cart(load_snapshot(path)?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{Mode, ProductRef};
    use serde_json::json;

    fn product(value: serde_json::Value) -> ProductRef {
        serde_json::from_value(value).expect("product payload should deserialize")
    }

    #[test]
    fn test_snapshot_survives_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state").join("cart.json");

        let handle = CartHandle::new();
        handle.set_active_mode("retail");
        handle.add_to_cart(&product(json!({"id": "w1", "price": 100, "moq": 10})), Some("b2b"));
        handle.add_to_cart(&product(json!({"id": "r1", "price": 5, "qty": 2})), None);

        handle.save_to(&path).expect("save should succeed");

        let restored = CartHandle::load_from(&path).expect("load should succeed");
        let restored_view = restored.view();

        assert_eq!(restored_view.mode, Mode::Retail);
        assert_eq!(restored_view.items.len(), 1);
        assert_eq!(restored_view.items[0].id, "r1");
        assert_eq!(restored_view.items[0].qty, 2);

        restored.set_active_mode("b2b");
        assert_eq!(restored.view().totals.total_quantity, 10);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = CartHandle::load_from(&dir.path().join("nope.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, PersistError::Io(_)));
    }

    #[test]
    fn test_load_garbage_is_serde_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cart.json");
        fs::write(&path, "not json at all").expect("write");

        let err = CartHandle::load_from(&path).expect_err("garbage should fail");
        assert!(matches!(err, PersistError::Serde(_)));
    }
}
