//! Core types and error definitions for the Stanbic Mobile Money client.
//!
//! This crate provides the foundational types shared across the stanbicmm
//! crates: the error taxonomy, the normalized transaction record, and the
//! history filter.
//!
//! # Main types
//!
//! - [`StanbicError`] — Unified error enum for all portal interactions.
//! - [`StanbicResult`] — Convenience alias for `Result<T, StanbicError>`.
//! - [`TransactionRecord`] — One normalized entry of the account history.
//! - [`TransactionFilter`] — Optional date/reference filters for a history
//!   query.

/// History query filters.
pub mod filter;
/// Normalized transaction records.
pub mod transaction;

pub use filter::TransactionFilter;
pub use transaction::{TransactionRecord, CURRENCY};

// --- Error types ---

/// Top-level error type for the Stanbic Mobile Money client.
///
/// The first four variants classify portal responses; [`Http`] covers
/// transport-level failures underneath them.
///
/// [`Http`]: StanbicError::Http
#[derive(Debug, thiserror::Error)]
pub enum StanbicError {
    /// The portal redirected to the login page: the session is
    /// unauthenticated or has expired. Recoverable by authenticating and
    /// retrying the same operation once.
    #[error("authentication required: the portal redirected to the login page")]
    AuthRequired,

    /// The portal rejected the supplied account/PIN during authentication.
    #[error("authentication denied: the portal rejected the credentials")]
    AuthDenied,

    /// The portal rejected the request for reasons other than
    /// authentication, or returned data the client cannot make sense of.
    #[error("request error: {0}")]
    Request(String),

    /// An account lookup named an invalid, nonexistent, or self-referential
    /// account. Reserved for future account-detail operations.
    #[error("invalid account: {0}")]
    InvalidAccount(String),

    /// The operation is declared on the client but not implemented yet.
    #[error("operation not implemented: {0}")]
    Unimplemented(&'static str),

    /// A transport-level failure (connection, TLS, reading the body).
    #[error("HTTP error: {0}")]
    Http(String),
}

/// A convenience `Result` alias using [`StanbicError`].
pub type StanbicResult<T> = Result<T, StanbicError>;
