//! Request types for the roster API.
//!
//! This module defines the JSON request structures for the `/roster` and
//! `/roster/export` endpoints. The `/roster/manual` endpoint accepts a
//! [`ManualEntryForm`](crate::input::ManualEntryForm) directly.

use serde::{Deserialize, Serialize};

use crate::models::PreferenceTable;

/// Request body carrying a preference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRequest {
    /// Column names, in input order.
    pub columns: Vec<String>,
    /// Cell values, one array per row.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl From<TableRequest> for PreferenceTable {
    fn from(req: TableRequest) -> Self {
        PreferenceTable::new(req.columns, req.rows)
    }
}
