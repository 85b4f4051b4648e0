//! Outgoing mutation payloads sent to the backend.

use serde::{Deserialize, Serialize};

use super::{PathwayDocument, StepId, StepRecord, StepType};

/// Create-or-update request for a pathway.
///
/// Only the listed steps are upserted; steps the backend already holds and
/// that are not listed are left alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PathwayUpsert {
    pub id: String,
    pub name: String,
    pub steps: Vec<StepSummary>,
    pub tags: Vec<String>,
    pub description: String,
}

impl PathwayUpsert {
    /// Reads the pathway metadata from `document` and attaches `steps`.
    pub fn from_document(document: &PathwayDocument, steps: Vec<StepSummary>) -> Self {
        Self {
            id: document.pathway_id.clone(),
            name: document.pathway_name.clone(),
            steps,
            tags: document.pathway_tags.clone(),
            description: document.pathway_description.clone(),
        }
    }
}

/// Condensed step description carried by a [`PathwayUpsert`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StepSummary {
    pub id: StepId,
    pub name: String,
    /// Time limit in seconds
    pub time: u32,
    pub index: usize,
    pub step_type: StepType,
    pub type_id: String,
}

impl StepSummary {
    /// Summarizes an existing record at the given position.
    pub fn from_record(record: &StepRecord, index: usize) -> Self {
        Self {
            id: record.id.clone(),
            name: record.heading.clone(),
            time: record.time_limit,
            index,
            step_type: record.step_type,
            type_id: record.type_id.clone(),
        }
    }
}

/// Create-or-update request for the written content of a content step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContentUpsert {
    pub id: String,
    pub title: String,
    pub content: String,
}
