use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a stored record.
///
/// Either supplied by the client on create or generated as a random UUID v4.
/// Ordering is lexicographic on the underlying string — which is what list
/// queries sorting by id rely on (`"10"` sorts before `"2"`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty string, which create requests use to
    /// mean "no id supplied".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let one = RecordId::from("1");
        let ten = RecordId::from("10");
        let two = RecordId::from("2");
        assert!(one < ten);
        assert!(ten < two);
    }

    #[test]
    fn generated_ids_are_unique_and_nonempty() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_id_is_detected() {
        assert!(RecordId::from("").is_empty());
        assert!(!RecordId::from("x").is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let id = RecordId::from("rec-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rec-7\"");
        let parsed: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn display_is_raw_string() {
        assert_eq!(format!("{}", RecordId::from("abc")), "abc");
    }
}
