//! Pathway representation served by the backend for hydration.

use serde::{Deserialize, Serialize};

use super::{StepId, StepRecord, StepType};

/// Server-side view of a persisted pathway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PathwayPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<TagPayload>,
    #[serde(default)]
    pub steps: Vec<StepPayload>,
}

/// A tag as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TagPayload {
    pub name: String,
}

impl From<&str> for TagPayload {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A persisted step, carrying its declared position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StepPayload {
    pub id: StepId,
    /// Declared position within the pathway (0-indexed)
    pub index: usize,
    /// Time limit in seconds
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub step_type: StepType,
    /// Linked written content, present for content steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentPayload>,
    #[serde(default)]
    pub name: String,
}

/// Written content linked to a content step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContentPayload {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl From<&StepPayload> for StepRecord {
    /// Builds the editing record for a persisted step. The heading comes from
    /// the linked content's title when there is one, otherwise from the step
    /// name.
    fn from(step: &StepPayload) -> Self {
        let (heading, content, type_id) = match &step.content {
            Some(c) => (c.title.clone(), c.content.clone(), c.id.clone()),
            None => (step.name.clone(), String::new(), String::new()),
        };

        StepRecord {
            id: step.id.clone(),
            heading,
            content,
            step_type: step.step_type,
            selected: false,
            time_limit: step.time,
            is_preview: false,
            type_id,
            share_id: String::new(),
        }
    }
}
