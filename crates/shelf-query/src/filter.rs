use std::collections::HashSet;

use shelf_types::{Label, Record};

/// Label filter of a list query.
///
/// An empty filter passes every record. A non-empty filter passes a record
/// when any one of its labels is in the set — OR semantics, a single match
/// suffices. Order and duplicates among the requested labels are irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    labels: HashSet<Label>,
}

impl FilterSpec {
    /// Parse a raw comma-separated label list.
    ///
    /// All whitespace is stripped before splitting. An empty result disables
    /// filtering; a single label with no comma yields a one-element set.
    pub fn parse(raw: &str) -> Self {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Self::default();
        }
        Self {
            labels: stripped.split(',').map(Label::from).collect(),
        }
    }

    /// Build a filter from explicit labels.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    /// Returns `true` when no labels are set and every record passes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &Record) -> bool {
        self.labels.is_empty() || record.labels.iter().any(|label| self.labels.contains(label))
    }
}
