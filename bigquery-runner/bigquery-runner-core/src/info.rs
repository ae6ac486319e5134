//! Job and table metadata passed through to the results viewer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of the query job that produced the rows. Not interpreted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobInfo(pub Value);

/// Metadata of the destination table. Not interpreted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableInfo(pub Value);
