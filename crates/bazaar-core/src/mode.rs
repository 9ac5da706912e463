//! # Mode Module
//!
//! The two pricing/catalog contexts of the storefront and the rules for
//! deciding which one an operation targets.
//!
//! ## Mode Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mode Resolution Chain                                │
//! │                                                                         │
//! │  explicit override        "b2c" passed to the operation                 │
//! │        │ (miss)                                                         │
//! │        ▼                                                                │
//! │  product declared mode    product.mode, else isWholesale/isRetail       │
//! │        │ (miss)                                                         │
//! │        ▼                                                                │
//! │  session active mode      whatever the active-mode provider last set    │
//! │        │ (never misses: normalized at the boundary)                     │
//! │        ▼                                                                │
//! │  "wholesale"              the hardcoded default                         │
//! │                                                                         │
//! │  Every step runs through normalize(); unrecognized strings are          │
//! │  treated as "not specified", never as a third mode.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accepted Synonyms
//! Case-insensitive, surrounding whitespace ignored:
//! - `"wholesale"`, `"b2b"` → [`Mode::Wholesale`]
//! - `"retail"`, `"b2c"` → [`Mode::Retail`]

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Mode
// =============================================================================

/// One of the two independent cart partitions.
///
/// The set is closed on purpose: every loosely-typed mode string from the
/// outside world (user profile, product flags, literal overrides) is folded
/// into these two variants at the boundary, and only the tagged type travels
/// through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bulk/B2B pricing context.
    Wholesale,
    /// Consumer/B2C pricing context.
    Retail,
}

impl Mode {
    /// Folds a raw mode string into a [`Mode`], if it names one.
    ///
    /// ## Rules
    /// - Comparison is case-insensitive and ignores surrounding whitespace
    /// - `"wholesale"` / `"b2b"` → `Some(Wholesale)`
    /// - `"retail"` / `"b2c"` → `Some(Retail)`
    /// - Anything else (including empty) → `None`, meaning "not specified"
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::Mode;
    ///
    /// assert_eq!(Mode::normalize("B2B"), Some(Mode::Wholesale));
    /// assert_eq!(Mode::normalize("  retail "), Some(Mode::Retail));
    /// assert_eq!(Mode::normalize("outlet"), None);
    /// ```
    pub fn normalize(raw: &str) -> Option<Mode> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("wholesale") || raw.eq_ignore_ascii_case("b2b") {
            Some(Mode::Wholesale)
        } else if raw.eq_ignore_ascii_case("retail") || raw.eq_ignore_ascii_case("b2c") {
            Some(Mode::Retail)
        } else {
            None
        }
    }

    /// Resolves the mode an operation targets.
    ///
    /// This is the single resolution chain used by every cart mutation:
    /// explicit override, then the product's declared mode, then the
    /// session's active mode. `active` is already a [`Mode`] (normalized
    /// when the provider set it), so the chain cannot come up empty.
    ///
    /// Operations that carry no product (increment/decrement/remove/
    /// set-quantity/clear) pass `declared = None`.
    pub fn resolve(override_mode: Option<&str>, declared: Option<Mode>, active: Mode) -> Mode {
        override_mode
            .and_then(Mode::normalize)
            .or(declared)
            .unwrap_or(active)
    }

    /// Returns the canonical lowercase name of the mode.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Wholesale => "wholesale",
            Mode::Retail => "retail",
        }
    }
}

/// Default mode is wholesale: the storefront is B2B-first.
impl Default for Mode {
    fn default() -> Self {
        Mode::Wholesale
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_synonyms() {
        assert_eq!(Mode::normalize("wholesale"), Some(Mode::Wholesale));
        assert_eq!(Mode::normalize("WHOLESALE"), Some(Mode::Wholesale));
        assert_eq!(Mode::normalize("b2b"), Some(Mode::Wholesale));
        assert_eq!(Mode::normalize("B2B"), Some(Mode::Wholesale));

        assert_eq!(Mode::normalize("retail"), Some(Mode::Retail));
        assert_eq!(Mode::normalize("Retail"), Some(Mode::Retail));
        assert_eq!(Mode::normalize("b2c"), Some(Mode::Retail));
        assert_eq!(Mode::normalize("B2C"), Some(Mode::Retail));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(Mode::normalize("  b2c  "), Some(Mode::Retail));
        assert_eq!(Mode::normalize("\twholesale\n"), Some(Mode::Wholesale));
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        assert_eq!(Mode::normalize(""), None);
        assert_eq!(Mode::normalize("   "), None);
        assert_eq!(Mode::normalize("outlet"), None);
        assert_eq!(Mode::normalize("b2b2c"), None);
    }

    #[test]
    fn test_resolve_override_wins() {
        let mode = Mode::resolve(Some("b2c"), Some(Mode::Wholesale), Mode::Wholesale);
        assert_eq!(mode, Mode::Retail);
    }

    #[test]
    fn test_resolve_unrecognized_override_falls_through() {
        let mode = Mode::resolve(Some("outlet"), Some(Mode::Retail), Mode::Wholesale);
        assert_eq!(mode, Mode::Retail);
    }

    #[test]
    fn test_resolve_declared_beats_active() {
        let mode = Mode::resolve(None, Some(Mode::Retail), Mode::Wholesale);
        assert_eq!(mode, Mode::Retail);
    }

    #[test]
    fn test_resolve_falls_back_to_active() {
        let mode = Mode::resolve(None, None, Mode::Retail);
        assert_eq!(mode, Mode::Retail);
    }

    #[test]
    fn test_default_is_wholesale() {
        assert_eq!(Mode::default(), Mode::Wholesale);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Wholesale.to_string(), "wholesale");
        assert_eq!(Mode::Retail.to_string(), "retail");
    }
}
