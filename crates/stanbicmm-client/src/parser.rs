//! Parse the portal's CSV account-history export into typed records.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use stanbicmm_core::{StanbicError, StanbicResult, TransactionRecord, CURRENCY};

// Export column headers, exactly as the portal emits them. The sender and
// recipient headers really do look like unexpanded template keys; that is
// the literal header text in the export.
const COL_DATE: &str = "Date";
const COL_DESCRIPTION: &str = "Description";
const COL_AMOUNT: &str = "Amount";
const COL_REFERENCE: &str = "Transaction number";
const COL_SENDER: &str = "???transfer.fromOwner???";
const COL_RECIPIENT: &str = "???transfer.toOwner???";
const COL_TYPE: &str = "Transaction type";

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parse the portal's CSV export into transaction records, in row order.
///
/// An empty or whitespace-only body parses to an empty list; the portal
/// exports nothing for an empty result window. A malformed row (unparsable
/// date or amount, missing column) fails the whole parse with
/// [`StanbicError::Request`]: silently dropping a money movement would be
/// worse than a visible error.
pub fn parse_transactions(body: &str) -> StanbicResult<Vec<TransactionRecord>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| StanbicError::Request(format!("unreadable export header: {e}")))?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut transactions = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result
            .map_err(|e| StanbicError::Request(format!("malformed export row {row}: {e}")))?;
        transactions.push(columns.lift(&record, row)?);
    }

    Ok(transactions)
}

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    description: usize,
    amount: usize,
    reference: usize,
    sender: usize,
    recipient: usize,
    kind: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> StanbicResult<Self> {
        let find = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                StanbicError::Request(format!("export is missing the `{name}` column"))
            })
        };
        Ok(Self {
            date: find(COL_DATE)?,
            description: find(COL_DESCRIPTION)?,
            amount: find(COL_AMOUNT)?,
            reference: find(COL_REFERENCE)?,
            sender: find(COL_SENDER)?,
            recipient: find(COL_RECIPIENT)?,
            kind: find(COL_TYPE)?,
        })
    }

    fn lift(&self, record: &csv::StringRecord, row: usize) -> StanbicResult<TransactionRecord> {
        let field = |index: usize| record.get(index).unwrap_or("");

        let raw_date = field(self.date);
        let date = NaiveDateTime::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
            StanbicError::Request(format!("row {row}: bad date `{raw_date}`: {e}"))
        })?;

        // the portal formats amounts with thousands separators
        let raw_amount = field(self.amount);
        let amount: Decimal = raw_amount.replace(',', "").parse().map_err(|e| {
            StanbicError::Request(format!("row {row}: bad amount `{raw_amount}`: {e}"))
        })?;

        Ok(TransactionRecord {
            date,
            description: field(self.description).to_string(),
            amount,
            reference: field(self.reference).to_string(),
            sender: field(self.sender).to_string(),
            recipient: field(self.recipient).to_string(),
            currency: CURRENCY.to_string(),
            comment: field(self.kind).to_string(),
        })
    }
}
