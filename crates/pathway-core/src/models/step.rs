//! Step record definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque step identifier, generated client-side before persistence.
pub type StepId = String;

/// Type-safe enumeration of step variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    /// Plain step authored inside the pathway
    #[default]
    PathwayStep,

    /// Step that carries linked written content
    ContentStep,

    /// Step referencing a reusable step elsewhere
    SharedStep,
}

impl FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pathway" | "pathway_step" => Ok(StepType::PathwayStep),
            "content" | "content_step" => Ok(StepType::ContentStep),
            "shared" | "shared_step" => Ok(StepType::SharedStep),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

impl StepType {
    /// Wire and database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::PathwayStep => "PATHWAY_STEP",
            StepType::ContentStep => "CONTENT_STEP",
            StepType::SharedStep => "SHARED_STEP",
        }
    }

    /// Name given to freshly created steps of this type when they are
    /// persisted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathway_core::models::StepType;
    ///
    /// assert_eq!(StepType::ContentStep.default_name(), "Content Step");
    /// ```
    pub fn default_name(&self) -> &'static str {
        match self {
            StepType::PathwayStep => "Pathway Step",
            StepType::ContentStep => "Content Step",
            StepType::SharedStep => "Shared Step",
        }
    }
}

/// Represents one step of a pathway as held by the editing document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StepRecord {
    /// Unique identifier for the step
    pub id: StepId,

    /// Heading shown in the step list
    pub heading: String,

    /// Markdown body of the step
    pub content: String,

    /// Variant of the step
    pub step_type: StepType,

    /// Whether the step is currently open for editing
    pub selected: bool,

    /// Time limit in seconds
    pub time_limit: u32,

    /// Whether the step is rendered in preview mode
    pub is_preview: bool,

    /// ID of the linked content or shared entity, empty if none
    pub type_id: String,

    pub share_id: String,
}

impl StepRecord {
    /// Creates a record with the given identity and every other field at its
    /// default.
    pub fn new(id: impl Into<StepId>, step_type: StepType) -> Self {
        Self {
            id: id.into(),
            step_type,
            ..Self::default()
        }
    }

    /// Sets the heading, builder style.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Sets the time limit, builder style.
    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = seconds;
        self
    }

    /// Sets the linked entity id, builder style.
    pub fn with_type_id(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = type_id.into();
        self
    }
}

/// Partial update for a [`StepRecord`].
///
/// Only the fields that are `Some` are merged; the step's `id` can never be
/// changed through a patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StepPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_type: Option<StepType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
}

impl StepPatch {
    /// Returns true when the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merges the present fields into `record`.
    pub fn apply_to(&self, record: &mut StepRecord) {
        if let Some(heading) = &self.heading {
            record.heading.clone_from(heading);
        }
        if let Some(content) = &self.content {
            record.content.clone_from(content);
        }
        if let Some(step_type) = self.step_type {
            record.step_type = step_type;
        }
        if let Some(selected) = self.selected {
            record.selected = selected;
        }
        if let Some(time_limit) = self.time_limit {
            record.time_limit = time_limit;
        }
        if let Some(is_preview) = self.is_preview {
            record.is_preview = is_preview;
        }
        if let Some(type_id) = &self.type_id {
            record.type_id.clone_from(type_id);
        }
        if let Some(share_id) = &self.share_id {
            record.share_id.clone_from(share_id);
        }
    }
}
