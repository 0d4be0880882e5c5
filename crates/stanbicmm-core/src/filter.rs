use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional filters for a history query.
///
/// All supplied filters are applied independently; supplying a transaction
/// reference makes the date bounds unnecessary but does not suppress them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Inclusive start of the date range.
    pub from_date: Option<NaiveDate>,
    /// Inclusive end of the date range.
    pub to_date: Option<NaiveDate>,
    /// A specific transaction number to look up.
    pub txn_ref: Option<String>,
}

impl TransactionFilter {
    /// An unfiltered query: the portal returns its default history window.
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter by an inclusive date range.
    pub fn between(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            from_date: Some(from_date),
            to_date: Some(to_date),
            txn_ref: None,
        }
    }

    /// Filter by a single transaction number.
    pub fn by_reference(txn_ref: impl Into<String>) -> Self {
        Self {
            from_date: None,
            to_date: None,
            txn_ref: Some(txn_ref.into()),
        }
    }
}

/// Format a date the way the portal's query fields expect it.
pub fn portal_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
