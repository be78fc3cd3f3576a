//! Linearisation and reconstruction for the NLmaps MRL query language.
//!
//! MRL queries are functional expressions over OpenStreetMap, e.g.
//! `query(area(keyval('name','Paris')),nwr(keyval('cuisine','japanese')),qtype(count))`.
//! A sequence-to-sequence learner wants them as flat token streams, so this
//! crate converts between the nested surface form and a pre-order
//! `token@arity` stream:
//!
//! ```
//! use nlmaps_mrl::Dialect;
//!
//! let mrl = "query(nwr(keyval('cuisine','japanese')),qtype(count))";
//! let lin = Dialect::Nlmaps.preprocess(mrl);
//! assert_eq!(lin, "query@2 nwr@1 keyval@2 cuisine@0 japanese@s qtype@1 count@0");
//! ```
//!
//! The pipeline is: [`escape`] hides punctuation inside quoted values behind
//! sentinels, [`linearise`] flattens the escaped query using positional arity
//! analysis ([`arity`]), and [`functionalise`] inverts the whole thing,
//! rejecting any stream that does not encode a well-formed tree. The
//! transformations are pure; only [`io`] and the external decoder adapter in
//! [`validate`] touch the outside world.

pub mod arity;
pub mod dialect;
pub mod escape;
pub mod eval;
pub mod functionalise;
pub mod io;
pub mod linearise;
pub mod passthrough;
pub mod validate;

#[cfg(test)]
mod arity_tests;
#[cfg(test)]
mod dialect_tests;

pub use dialect::Dialect;
pub use eval::{Evaluation, evaluate};
pub use functionalise::{FunctionaliseOptions, functionalise};
pub use validate::ValidatorConfig;

/// Errors from the I/O edge of the crate.
///
/// The transformations themselves never fail with an `Error`: a linearised
/// stream that does not encode a tree reconstructs to the empty string, and
/// the external decoder adapter reports failure as `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a line-delimited file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
