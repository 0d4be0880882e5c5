use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The only currency the portal deals in.
pub const CURRENCY: &str = "NGN";

/// One normalized entry of the account history, as produced from the
/// portal's CSV export.
///
/// Records are freshly allocated per parse and carry no identity beyond the
/// portal's own transaction number; their order matches the export row
/// order, which the portal emits chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Timestamp of the transaction.
    pub date: NaiveDateTime,
    /// Human-readable description.
    pub description: String,
    /// Signed amount; debits are negative when the portal encodes them so.
    pub amount: Decimal,
    /// The portal's transaction number.
    pub reference: String,
    /// Sending party, verbatim from the export.
    pub sender: String,
    /// Receiving party, verbatim from the export.
    pub recipient: String,
    /// Always [`CURRENCY`]; the portal supports a single currency.
    pub currency: String,
    /// The portal's transaction type, kept as a free-form comment.
    pub comment: String,
}
