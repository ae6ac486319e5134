//! Position of a result page inside a possibly paginated result set.

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// Describes where the current page sits in the whole result.
///
/// Row numbers are plain `u64`; this type is intentionally not `Serialize`.
/// Use [`EdgeInfo::to_serializable`] before handing it to a transport that
/// carries numbers as doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeInfo {
    pub has_prev: bool,
    pub has_next: bool,
    pub row_number_start: u64,
    pub row_number_end: u64,
}

impl EdgeInfo {
    pub fn to_serializable(&self) -> SerializableEdgeInfo {
        SerializableEdgeInfo::from(*self)
    }
}

/// [`EdgeInfo`] with row numbers carried as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableEdgeInfo {
    pub has_prev: bool,
    pub has_next: bool,
    pub row_number_start: String,
    pub row_number_end: String,
}

impl From<EdgeInfo> for SerializableEdgeInfo {
    fn from(value: EdgeInfo) -> Self {
        Self {
            has_prev: value.has_prev,
            has_next: value.has_next,
            row_number_start: value.row_number_start.to_string(),
            row_number_end: value.row_number_end.to_string(),
        }
    }
}

impl TryFrom<&SerializableEdgeInfo> for EdgeInfo {
    type Error = ParseIntError;

    fn try_from(value: &SerializableEdgeInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            has_prev: value.has_prev,
            has_next: value.has_next,
            row_number_start: value.row_number_start.parse()?,
            row_number_end: value.row_number_end.parse()?,
        })
    }
}
