//! # Record Tokenization
//!
//! A cursor over the whitespace-delimited fields of one item record.
//!
//! One record is one line of input: the item type keyword followed by the
//! variant-specific fields in a fixed order. Every record gets its own
//! reader, so discarding a half-read record can never desynchronize the
//! records that follow it.

use crate::{SatchelError, SatchelResult};
use std::str::SplitWhitespace;

/// Reads the fields of a single item record in order.
///
/// # Examples
///
/// ```
/// use satchel::RecordReader;
///
/// let mut record = RecordReader::new("Boots Leather 100");
/// assert_eq!(record.next_str("name").unwrap(), "Boots");
/// assert_eq!(record.next_str("material").unwrap(), "Leather");
/// assert_eq!(record.next_int("durability").unwrap(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RecordReader<'a> {
    fields: SplitWhitespace<'a>,
}

impl<'a> RecordReader<'a> {
    /// Creates a reader over one record's fields.
    pub fn new(record: &'a str) -> Self {
        Self {
            fields: record.split_whitespace(),
        }
    }

    /// Returns the next field, or `None` if the record is exhausted.
    ///
    /// Used for the leading type keyword, where a missing field means an
    /// empty record rather than a malformed one.
    pub fn next(&mut self) -> Option<&'a str> {
        self.fields.next()
    }

    /// Returns the next field, failing if the record ended early.
    ///
    /// `field` names the field being read and is carried into the error so
    /// callers can report which part of the record was missing.
    pub fn next_str(&mut self, field: &'static str) -> SatchelResult<&'a str> {
        self.next().ok_or(SatchelError::MissingField(field))
    }

    /// Returns the next field parsed as an integer.
    ///
    /// Fails if the record ended early or the token is not an integer.
    pub fn next_int(&mut self, field: &'static str) -> SatchelResult<i32> {
        let token = self.next_str(field)?;
        token.parse().map_err(|_| SatchelError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }
}
