//! # forderung
//!
//! German GDPR-spam claim financials: statutory fee tables (RVG/GKG),
//! base-damage rules, VAT, cost-item templates and per-case financial records.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use forderung::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     CostItemBuilder::new("Grundschaden", CostCategory::Grundkosten, dec!(350.00))
//!         .sort_order(1)
//!         .build(),
//!     CostItemBuilder::new("Anwaltskosten", CostCategory::Anwaltskosten, dec!(96.90))
//!         .sort_order(2)
//!         .build(),
//! ];
//!
//! let breakdown = calculate_totals(&items, dec!(19.00)).unwrap();
//! assert_eq!(breakdown.subtotal, dec!(446.90));
//! // VAT only on the attorney fees, never on the damages.
//! assert_eq!(breakdown.vat_amount, dec!(18.41));
//! assert_eq!(breakdown.total_amount, dec!(465.31));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Cost items, templates, validation, calculation engine |
//! | `fees` | RVG/GKG fee tables and the base-damage rule |
//! | `claim` | GDPR claim assembly from case facts |
//! | `store` | Storage trait, in-memory store, template/record manager |
//! | `export` | CSV financial rows and canonical JSON breakdown |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "fees")]
pub mod fees;

#[cfg(feature = "claim")]
pub mod claim;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
