//! Action records accepted by the step store, and the dispatcher functions
//! that build them.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{PathwayPayload, StepId, StepPatch, StepRecord},
};

/// Every transition the step store understands.
///
/// Serialized with an internal `type` tag so recorded action logs can be
/// replayed. Tags that are not recognized deserialize to
/// [`Action::Unknown`], which the reducer treats as a no-op.
///
/// # Examples
///
/// ```rust
/// use pathway_core::store::Action;
///
/// let action: Action = serde_json::from_str(r#"{"type":"ADD_TAG","tag":"rust"}"#)?;
/// assert_eq!(action, Action::add_tag("rust"));
///
/// let unknown: Action = serde_json::from_str(r#"{"type":"LOGOUT"}"#)?;
/// assert_eq!(unknown, Action::Unknown);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Action {
    #[serde(rename = "ADD_STEP")]
    AddStep { step_data: StepRecord },

    #[serde(rename = "REORDER_STEPS")]
    ReorderSteps {
        source_index: usize,
        destination_index: usize,
    },

    #[serde(rename = "DELETE_STEP")]
    DeleteStep { step_id: StepId },

    #[serde(rename = "SELECT_FOR_EDITING")]
    SelectStepForEditing { step_id: StepId },

    #[serde(rename = "SELECT_FOR_PREVIEW")]
    SelectStepForPreview { step_id: StepId },

    #[serde(rename = "UPDATE_STEP")]
    UpdateStep { step_id: StepId, step_data: StepPatch },

    #[serde(rename = "UPDATE_PATHWAY_NAME")]
    UpdatePathwayDetails {
        id: String,
        name: String,
        description: String,
    },

    #[serde(rename = "ADD_TAG")]
    AddTag { tag: String },

    #[serde(rename = "REMOVE_TAG")]
    RemoveTag { tag: String },

    #[serde(rename = "TOGGLE_MODAL_CLOSE_ON_OVERLAY")]
    ToggleModalCloseOnOverlay,

    /// Explicit value wins; `None` flips the current value.
    #[serde(rename = "TOGGLE_PATHWAY_DETAILS_SCREEN")]
    TogglePathwayDetailsScreen {
        #[serde(default)]
        payload: Option<bool>,
    },

    /// `None` leaves the document untouched.
    #[serde(rename = "UPDATE_PATHWAY_INITIAL_STATE")]
    HydratePathway {
        #[serde(default)]
        payload: Option<PathwayPayload>,
    },

    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn add_step(step_data: StepRecord) -> Self {
        Self::AddStep { step_data }
    }

    pub fn reorder_steps(source_index: usize, destination_index: usize) -> Self {
        Self::ReorderSteps {
            source_index,
            destination_index,
        }
    }

    pub fn delete_step(step_id: impl Into<StepId>) -> Self {
        Self::DeleteStep {
            step_id: step_id.into(),
        }
    }

    pub fn select_for_editing(step_id: impl Into<StepId>) -> Self {
        Self::SelectStepForEditing {
            step_id: step_id.into(),
        }
    }

    pub fn select_for_preview(step_id: impl Into<StepId>) -> Self {
        Self::SelectStepForPreview {
            step_id: step_id.into(),
        }
    }

    pub fn update_step(step_id: impl Into<StepId>, step_data: StepPatch) -> Self {
        Self::UpdateStep {
            step_id: step_id.into(),
            step_data,
        }
    }

    pub fn update_pathway_details(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::UpdatePathwayDetails {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn add_tag(tag: impl Into<String>) -> Self {
        Self::AddTag { tag: tag.into() }
    }

    pub fn remove_tag(tag: impl Into<String>) -> Self {
        Self::RemoveTag { tag: tag.into() }
    }

    pub fn toggle_modal_close_on_overlay() -> Self {
        Self::ToggleModalCloseOnOverlay
    }

    pub fn toggle_pathway_details_screen(payload: Option<bool>) -> Self {
        Self::TogglePathwayDetailsScreen { payload }
    }

    pub fn hydrate_pathway(payload: Option<PathwayPayload>) -> Self {
        Self::HydratePathway { payload }
    }

    /// Wire tag of the action, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddStep { .. } => "ADD_STEP",
            Self::ReorderSteps { .. } => "REORDER_STEPS",
            Self::DeleteStep { .. } => "DELETE_STEP",
            Self::SelectStepForEditing { .. } => "SELECT_FOR_EDITING",
            Self::SelectStepForPreview { .. } => "SELECT_FOR_PREVIEW",
            Self::UpdateStep { .. } => "UPDATE_STEP",
            Self::UpdatePathwayDetails { .. } => "UPDATE_PATHWAY_NAME",
            Self::AddTag { .. } => "ADD_TAG",
            Self::RemoveTag { .. } => "REMOVE_TAG",
            Self::ToggleModalCloseOnOverlay => "TOGGLE_MODAL_CLOSE_ON_OVERLAY",
            Self::TogglePathwayDetailsScreen { .. } => "TOGGLE_PATHWAY_DETAILS_SCREEN",
            Self::HydratePathway { .. } => "UPDATE_PATHWAY_INITIAL_STATE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parses a recorded action log: a JSON array of actions.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::Serialization` if `raw` is not such an array.
    pub fn parse_log(raw: &str) -> Result<Vec<Action>> {
        let actions = serde_json::from_str(raw)?;
        Ok(actions)
    }
}
