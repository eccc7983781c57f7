//! Deterministic inputs shared by every scenario.

use serde::{Deserialize, Serialize};

/// Number of records in the default batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// The benchmarked value shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub first_string: String,
    pub second_string: String,
    pub first_integer: i64,
    pub second_integer: i64,
}

pub fn make_record() -> Record {
    Record {
        first_string: "12345".to_owned(),
        second_string: "67890".to_owned(),
        first_integer: 12345,
        second_integer: 67890,
    }
}

/// Returns `n` copies of [`make_record`].
pub fn make_batch(n: usize) -> Vec<Record> {
    vec![make_record(); n]
}

/// A record-shaped object with a string in an integer field. Every field is
/// otherwise well formed, so the single type mismatch is the only reason a
/// decoder can reject it.
pub fn make_malformed() -> Vec<u8> {
    br#"{"FirstString":"12345","SecondString":"67890","FirstInteger":"not_int","SecondInteger":67890}"#
        .to_vec()
}
