//! Sequential human-readable document numbers: `PREFIX-YEAR-SEQ`.
//!
//! The sequence number comes from the live count of same-type documents, not
//! from a stored counter. Deleting a document other than the most recent one
//! and then creating a new one can therefore reissue a number; that is the
//! historical behavior of the ledger and is covered by tests rather than
//! "fixed" silently.

use crate::model::DocType;
use chrono::{Datelike, Local};

/// Number for the next document of `doc_type`, given how many documents of
/// that type currently exist. Uses the current calendar year.
pub fn next_number(doc_type: DocType, existing_count: usize) -> String {
    number_for(doc_type, existing_count, Local::now().year())
}

/// Deterministic form of [`next_number`]: prefix is the first three letters
/// of the type tag, the sequence is `existing_count + 1` zero-padded to four
/// digits.
pub fn number_for(doc_type: DocType, existing_count: usize, year: i32) -> String {
    let prefix: String = doc_type.tag().chars().take(3).collect();
    format!("{}-{}-{:04}", prefix, year, existing_count + 1)
}
