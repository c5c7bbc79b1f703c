//! Revision history rows.

use serde::{Deserialize, Deserializer, Serialize};

/// Delimiter accepted between fields of a joined revision row string.
pub const ROW_DELIMITER: &str = "|||";

/// One row of the revision-history table.
///
/// Deserializes from either a three-field object or a single
/// `"date|||revised_by|||description"` string. Missing trailing parts
/// default to the empty string, extra parts are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevisionRow {
    /// Revision date, as provided by the caller
    pub date: String,

    /// Who made the revision
    pub revised_by: String,

    /// What changed
    pub description: String,
}

impl RevisionRow {
    /// Create a row from the three discrete fields.
    pub fn new(
        date: impl Into<String>,
        revised_by: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            revised_by: revised_by.into(),
            description: description.into(),
        }
    }

    /// Create a row from a delimiter-joined string.
    pub fn from_joined(raw: &str) -> Self {
        let mut parts = raw.split(ROW_DELIMITER);
        Self {
            date: parts.next().unwrap_or_default().to_string(),
            revised_by: parts.next().unwrap_or_default().to_string(),
            description: parts.next().unwrap_or_default().to_string(),
        }
    }

    /// The three cell values in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.date, &self.revised_by, &self.description]
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.revised_by.is_empty() && self.description.is_empty()
    }
}

impl<'de> Deserialize<'de> for RevisionRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Joined(String),
            Fields {
                #[serde(default)]
                date: String,
                #[serde(default)]
                revised_by: String,
                #[serde(default)]
                description: String,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Joined(raw) => RevisionRow::from_joined(&raw),
            Repr::Fields {
                date,
                revised_by,
                description,
            } => RevisionRow {
                date,
                revised_by,
                description,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_joined_complete() {
        let row = RevisionRow::from_joined("2024-01-15|||J. Doe|||Initial release");
        assert_eq!(row.date, "2024-01-15");
        assert_eq!(row.revised_by, "J. Doe");
        assert_eq!(row.description, "Initial release");
    }

    #[test]
    fn test_from_joined_missing_parts_pad_empty() {
        let row = RevisionRow::from_joined("2024-01-15");
        assert_eq!(row.date, "2024-01-15");
        assert_eq!(row.revised_by, "");
        assert_eq!(row.description, "");

        let row = RevisionRow::from_joined("2024-01-15|||J. Doe");
        assert_eq!(row.revised_by, "J. Doe");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_from_joined_extra_parts_truncated() {
        let row = RevisionRow::from_joined("a|||b|||c|||d|||e");
        assert_eq!(row.cells(), ["a", "b", "c"]);
    }

    #[test]
    fn test_deserialize_object_and_string_forms() {
        let row: RevisionRow =
            serde_json::from_str(r#"{"date":"d","revised_by":"r","description":"x"}"#).unwrap();
        assert_eq!(row, RevisionRow::new("d", "r", "x"));

        let row: RevisionRow = serde_json::from_str(r#""d|||r|||x""#).unwrap();
        assert_eq!(row, RevisionRow::new("d", "r", "x"));
    }

    #[test]
    fn test_deserialize_partial_object() {
        let row: RevisionRow = serde_json::from_str(r#"{"date":"d"}"#).unwrap();
        assert_eq!(row, RevisionRow::new("d", "", ""));
    }
}
