use std::cmp::Reverse;

use shelf_types::Record;

use crate::error::QueryResult;
use crate::filter::FilterSpec;
use crate::ordering::{Direction, OrderingSpec};

/// A parsed list query: label filter plus ordering.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub ordering: OrderingSpec,
}

impl ListQuery {
    /// Parse the two raw query strings of a list request.
    ///
    /// Fails fast on a malformed ordering clause, before any store access.
    pub fn parse(ordering: &str, filtering: &str) -> QueryResult<Self> {
        Ok(Self {
            ordering: OrderingSpec::parse(ordering)?,
            filter: FilterSpec::parse(filtering),
        })
    }

    /// Filter and order a store snapshot.
    ///
    /// Pure: consumes the snapshot and touches no shared state. An empty
    /// result is success, not an error. The sort is stable — records
    /// comparing equal (identical creation timestamps, or identical ids)
    /// keep their snapshot order.
    pub fn apply(&self, snapshot: Vec<Record>) -> Vec<Record> {
        let mut records: Vec<Record> = snapshot
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .collect();
        sort_records(&mut records, &self.ordering);
        records
    }
}

/// Fixed ordering precedence: an `id` clause always wins over a `createdAt`
/// clause; `createdAt` descending must be asked for explicitly; everything
/// else — no clause at all, or an ignored key — falls back to creation time
/// ascending. Timestamps compare at microsecond precision.
fn sort_records(records: &mut [Record], ordering: &OrderingSpec) {
    if let Some(direction) = ordering.id {
        match direction {
            Direction::Ascending => records.sort_by(|a, b| a.id.cmp(&b.id)),
            Direction::Descending => records.sort_by(|a, b| b.id.cmp(&a.id)),
        }
        return;
    }

    match ordering.created_at {
        Some(Direction::Descending) => {
            records.sort_by_key(|record| Reverse(record.created_at.timestamp_micros()))
        }
        _ => records.sort_by_key(|record| record.created_at.timestamp_micros()),
    }
}
