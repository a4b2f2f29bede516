//! Single-key ascending ordering of records.
//!
//! Sorting is stable: records with equal keys keep their input order.
//! Every record must carry the key, and all keys must share one kind.

use std::cmp::Ordering;

use crate::error::Result;
use crate::record::{mismatch, Record};

/// Checks that every record has `field` and that all values share a kind.
///
/// The first record fixes the expected kind.
pub fn check_key(records: &[&Record], field: &str) -> Result<()> {
    let mut expected = None;
    for record in records {
        let value = record.require(field)?;
        match expected {
            None => expected = Some(value.kind()),
            Some(kind) if kind != value.kind() => return Err(mismatch(field, kind, value)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Stably sorts records ascending by the value at `field`.
///
/// Only the slice of references is reordered; the records are untouched.
pub fn sort_by_key(records: &mut [&Record], field: &str) -> Result<()> {
    check_key(records, field)?;
    records.sort_by(|a, b| compare_records(a, b, field));
    Ok(())
}

fn compare_records(a: &Record, b: &Record, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
        // callers run check_key first
        _ => Ordering::Equal,
    }
}

/// Returns `true` if records are in non-decreasing order of `field`.
///
/// Fails like [`check_key`] when the key is missing or of mixed kinds.
pub fn is_sorted_by_key(records: &[&Record], field: &str) -> Result<bool> {
    check_key(records, field)?;
    Ok(records
        .windows(2)
        .all(|w| compare_records(w[0], w[1], field) != Ordering::Greater))
}
