use crate::error::{QueryError, QueryResult};

/// Sort direction of an ordering clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Case-insensitive `asc` / `desc`.
    fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }
}

/// Resolved ordering for a list query.
///
/// Both clauses may in principle be populated; the engine gives an `id`
/// clause precedence over a `createdAt` clause. With neither set, the
/// default of creation time ascending applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderingSpec {
    pub id: Option<Direction>,
    pub created_at: Option<Direction>,
}

impl OrderingSpec {
    /// Parse a raw `"<key>:<direction>"` ordering clause.
    ///
    /// An empty string yields the default spec (no clause set). A non-empty
    /// string not ending in `:asc` / `:desc` (case-insensitive) is a hard
    /// parse error. A syntactically valid clause whose key is neither `id`
    /// nor `createdAt` (case-insensitive) is accepted but ignored: callers
    /// get default ordering, operators get a WARN.
    pub fn parse(raw: &str) -> QueryResult<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let (key, direction) = raw
            .rsplit_once(':')
            .ok_or_else(|| QueryError::InvalidOrdering(raw.to_string()))?;
        let direction = Direction::parse(direction)
            .ok_or_else(|| QueryError::InvalidOrdering(raw.to_string()))?;

        match key.to_ascii_lowercase().as_str() {
            "id" => Ok(Self {
                id: Some(direction),
                ..Self::default()
            }),
            "createdat" => Ok(Self {
                created_at: Some(direction),
                ..Self::default()
            }),
            _ => {
                tracing::warn!(ordering = raw, "ignoring ordering clause with unrecognized key");
                Ok(Self::default())
            }
        }
    }
}
