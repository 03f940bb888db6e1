use serde::{Deserialize, Serialize};

use crate::store::Entry;

/// Request body for POST /entry
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateEntryRequest {
    pub key: String,
    pub value: String,
}

/// Response body for a created or retrieved entry
#[derive(Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EntryResponse {
    pub key: String,
    pub value: String,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            key: entry.key,
            value: entry.value,
        }
    }
}
