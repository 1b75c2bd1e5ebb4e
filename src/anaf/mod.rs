//! Batched client for the public ANAF VAT-payer registry.
//!
//! Resolves validated CUIs to company metadata in a single POST per batch.
//! Inputs are checked with the [`validator`](crate::validator) before any
//! network activity, duplicates collapse to one request line, and transient
//! failures are retried with exponential backoff.
//!
//! The ANAF API is public and unauthenticated. Response caching and rate
//! limiting are out of scope and left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use cuival::anaf::{AnafClient, index_by_cui};
//!
//! let client = AnafClient::new()?;
//! let results = client.lookup_batch(&["RO18547290", "10000008"]).await?;
//!
//! // Results are not in input order; re-key them by CUI.
//! let by_cui = index_by_cui(&results);
//! assert!(by_cui.contains_key(&18547290));
//! ```

mod client;
mod company;
mod error;
mod wire;

pub use client::{AnafClient, AnafClientBuilder, DEFAULT_ANAF_URL};
pub use company::{CompanyInfo, index_by_cui};
pub use error::{AnafError, TransportError};
