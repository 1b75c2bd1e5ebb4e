//! # cuival
//!
//! Romanian CUI/CIF validation and ANAF company registry lookup.
//!
//! The validator implements the official weighted-checksum algorithm for
//! Romanian fiscal identification codes and needs no I/O. The `anaf` feature
//! adds a batched client for the public ANAF VAT-payer registry with
//! up-front validation, request deduplication, and retries with exponential
//! backoff.
//!
//! ## Quick Start
//!
//! ```rust
//! use cuival::validator::validate_cui;
//!
//! let result = validate_cui("RO 18.547-290");
//! assert!(result.valid);
//! assert_eq!(result.normalized.as_deref(), Some("18547290"));
//! assert!(result.vat_prefix_present);
//! ```
//!
//! Registry lookup (async, requires network):
//!
//! ```ignore
//! use cuival::anaf::AnafClient;
//!
//! let client = AnafClient::new()?;
//! let info = client.lookup("RO18547290").await?;
//! println!("{:?} vat_payer={}", info.company_name, info.is_vat_payer);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `validator` (default) | CUI/CIF checksum validation, no I/O |
//! | `anaf` | Batched ANAF registry client (`reqwest`, `tokio`) |
//! | `all` | Everything |

#[cfg(feature = "validator")]
pub mod validator;

#[cfg(feature = "anaf")]
pub mod anaf;

// Re-export the validator surface at crate root for convenience
#[cfg(feature = "validator")]
pub use crate::validator::*;
