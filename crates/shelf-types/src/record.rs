use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::RecordId;
use crate::label::Label;

/// The stored entity.
///
/// `created_at` is assigned exactly once, when the record is materialized
/// from a [`RecordInput`], and never mutated afterwards. The payload is an
/// opaque JSON value the store never interprets. Labels are kept in the
/// order the client supplied them, duplicates included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub payload: Value,
}

impl Record {
    /// Build a record stamped with the current wall-clock time.
    pub fn new(id: RecordId, labels: Vec<Label>, payload: Value) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            labels,
            payload,
        }
    }
}

/// Inbound shape of a create request: everything a client may supply.
///
/// There is deliberately no creation-time field here — `created_at` is
/// always server-assigned.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub payload: Value,
}

impl RecordInput {
    /// Materialize a storable record, generating an id when the client
    /// supplied none (or the empty string).
    pub fn into_record(self) -> Record {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => RecordId::generate(),
        };
        Record::new(id, self.labels, self.payload)
    }
}
