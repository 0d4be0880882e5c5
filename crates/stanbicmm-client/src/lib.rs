//! Client library for the Stanbic Mobile Money portal.
//!
//! Automates the portal on behalf of a single account: logs in through the
//! login form, pulls the transaction history as typed records via the CSV
//! export, and reserves a payment operation for the day the portal grows a
//! write API.
//!
//! ```no_run
//! use stanbicmm_client::{StanbicClient, TransactionFilter};
//!
//! # async fn run() -> stanbicmm_client::StanbicResult<()> {
//! let mut client = StanbicClient::new("2348012345678", "1234");
//! client.authenticate().await?;
//!
//! let transactions = client.get_transactions(&TransactionFilter::none()).await?;
//! for txn in &transactions {
//!     println!("{} {:>12} {}", txn.date, txn.amount, txn.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Main types
//!
//! - [`StanbicClient`] — The session client: authenticate, fetch, submit,
//!   and the history operation.
//! - [`PortalConfig`] — Portal endpoint locations (production defaults).
//! - [`TransactionRecord`] / [`TransactionFilter`] — History records and
//!   query filters, re-exported from `stanbicmm-core`.

/// The session client.
pub mod client;
/// Portal endpoint configuration.
pub mod config;
/// CSV export parsing.
pub mod parser;

pub use client::StanbicClient;
pub use config::PortalConfig;
pub use parser::parse_transactions;

pub use stanbicmm_browser::{Browser, Form};
pub use stanbicmm_core::{
    StanbicError, StanbicResult, TransactionFilter, TransactionRecord, CURRENCY,
};
