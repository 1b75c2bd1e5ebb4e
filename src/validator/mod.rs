//! CUI/CIF checksum validation.
//!
//! Validates Romanian fiscal identification codes against the official
//! weighted-checksum algorithm. Pure functions, no network access.
//!
//! # Example
//!
//! ```rust
//! use cuival::validator::validate_cui;
//!
//! assert!(validate_cui("18547290").valid);
//! assert!(validate_cui("RO18547290").valid);
//! assert!(!validate_cui("18547291").valid); // wrong control digit
//! ```

mod cui;

pub use cui::{MAX_CUI_LENGTH, MIN_CUI_LENGTH, ValidationResult, validate_cui};
