// ScanShelf - core/sort.rs
//
// Catalog ordering. Every field compares its raw key (timestamp, integer,
// undecorated name), never a formatted display string.
// Core layer: pure logic, no I/O.

use crate::core::model::{ProfileRecord, SortDirection, SortField, SortSpec};
use std::cmp::Ordering;

/// Compare two records on a single field, ascending.
fn compare_by(field: SortField, a: &ProfileRecord, b: &ProfileRecord) -> Ordering {
    match field {
        SortField::Name => a.display_name().cmp(b.display_name()),
        SortField::Date => a.captured_at().cmp(&b.captured_at()),
        SortField::Count => a.request_count().cmp(&b.request_count()),
        SortField::Filesize => a.byte_size().cmp(&b.byte_size()),
    }
}

/// Order `records` by `field` in `direction`.
///
/// The sort is stable in both directions: records with equal keys keep
/// their incoming (enumeration) order. Descending reverses the comparator,
/// not the output, which is what preserves that.
pub fn sort_records(
    mut records: Vec<ProfileRecord>,
    field: SortField,
    direction: SortDirection,
) -> Vec<ProfileRecord> {
    records.sort_by(|a, b| {
        let ord = compare_by(field, a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    records
}

/// Convenience wrapper taking a `SortSpec`.
pub fn sort_by_spec(records: Vec<ProfileRecord>, spec: SortSpec) -> Vec<ProfileRecord> {
    sort_records(records, spec.field, spec.direction)
}
