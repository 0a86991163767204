//! Export-boundary projection of typed entries into generic rows.

use serde::{Deserialize, Serialize};

use crate::types::ReferenceEntry;

/// One reference as an all-strings row for the downstream row-oriented
/// consumer that renders the footnote list. Internal logic stays typed;
/// this shape exists only at the hand-off boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceRow {
    /// Caller-supplied reference key.
    pub key: String,
    /// Decimal rendering of the assigned reference number.
    pub number: String,
    /// Accumulated reference text.
    pub text: String,
}

impl From<&ReferenceEntry> for ReferenceRow {
    /// Project a typed entry into the row shape.
    fn from(entry: &ReferenceEntry) -> Self {
        return Self {
            key: entry.key.clone(),
            number: entry.number.to_string(),
            text: entry.text.clone(),
        };
    }
}
