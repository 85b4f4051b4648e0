//! Pathway summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Lightweight view of a persisted pathway, used when listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathwaySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Number of steps currently attached to the pathway
    pub total_steps: u32,
    /// Timestamp of the last upsert (UTC)
    pub updated_at: Timestamp,
}
