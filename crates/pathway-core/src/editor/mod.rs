//! Editing session for one pathway.
//!
//! An [`Editor`] owns the [`Store`] for a single pathway together with the
//! backend the pathway is persisted through. Gestures coming from the list
//! view (drag-and-drop, the add-step menu, the detail form) are turned into
//! store actions here; the ones that must be persisted are followed by
//! backend mutations once the local transition has been applied.
//!
//! ## Submodules
//!
//! - [`builder`]: [`EditorBuilder`], which opens a fresh or hydrated session
//! - [`gestures`]: payloads delivered by the list view
//! - [`ids`]: client-side identifier generation
//! - `mutations`: the persistence side (`add_step`, `save`, `create_pathway`)
//!
//! # Examples
//!
//! ```rust
//! use pathway_core::{
//!     backend::MemoryBackend,
//!     editor::{DragResult, EditorBuilder},
//!     models::StepType,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> pathway_core::error::Result<()> {
//! let mut editor = EditorBuilder::new(MemoryBackend::new()).build().await?;
//! editor.create_pathway("Rust Basics", "Ownership first").await?;
//!
//! let first = editor.add_step(StepType::PathwayStep).await?;
//! let second = editor.add_step(StepType::ContentStep).await?;
//! assert!(editor.on_drag_end(&DragResult::moved(1, 0))?);
//!
//! assert_eq!(editor.document().step_order, vec![second, first]);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::debug;

use crate::{
    backend::PathwayBackend,
    error::{PathwayError, Result},
    models::{PathwayDocument, StepId, StepPatch},
    store::{Action, Store, SubscriptionId},
};

pub mod builder;
pub mod gestures;
pub mod ids;
mod mutations;


pub use builder::EditorBuilder;
pub use gestures::{DragResult, DraggableLocation};
pub use ids::generate_id;

/// Heading given to steps created from the add-step menu.
pub const NEW_STEP_HEADING: &str = "This is a step";
/// Body given to the content created alongside a new content step.
pub const NEW_STEP_CONTENT: &str = "Step Content";
/// Time limit, in seconds, given to new steps.
pub const NEW_STEP_TIME_LIMIT: u32 = 30;

/// Controller for one pathway editing session.
#[derive(Debug)]
pub struct Editor<B> {
    store: Store,
    backend: B,
}

impl<B: PathwayBackend> Editor<B> {
    pub(crate) fn new(store: Store, backend: B) -> Self {
        Self { store, backend }
    }

    /// Snapshot of the current document.
    pub fn document(&self) -> Arc<PathwayDocument> {
        self.store.state()
    }

    /// The backend this session persists through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the editor, handing back its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Dispatches a raw action, e.g. from a recorded action log.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Registers a listener called after every changing dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&PathwayDocument) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Removes a listener registered with [`Editor::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Handles the end of a drag gesture over the step list.
    ///
    /// A drop outside the list is ignored. Returns whether the order
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::InvalidInput` if either index falls outside
    /// the current step order.
    pub fn on_drag_end(&mut self, result: &DragResult) -> Result<bool> {
        let Some(destination) = result.destination else {
            debug!(
                "Drag from index {} dropped outside the list",
                result.source.index
            );
            return Ok(false);
        };

        let len = self.store.state().step_order.len();
        check_index("source", result.source.index, len)?;
        check_index("destination", destination.index, len)?;

        Ok(self
            .store
            .dispatch(Action::reorder_steps(result.source.index, destination.index)))
    }

    /// Removes a step from the visible order. The record is kept so the
    /// next [`save`](Editor::save) can detach it from the backend.
    pub fn delete_step(&mut self, step_id: impl Into<StepId>) -> bool {
        self.store.dispatch(Action::delete_step(step_id))
    }

    /// Opens a step for editing.
    pub fn select_for_editing(&mut self, step_id: impl Into<StepId>) -> bool {
        self.store.dispatch(Action::select_for_editing(step_id))
    }

    /// Marks a step for preview, following the preview flag of the step
    /// currently open for editing.
    pub fn select_for_preview(&mut self, step_id: impl Into<StepId>) -> bool {
        self.store.dispatch(Action::select_for_preview(step_id))
    }

    /// Merges `patch` into a step record.
    pub fn update_step(&mut self, step_id: impl Into<StepId>, patch: StepPatch) -> bool {
        self.store.dispatch(Action::update_step(step_id, patch))
    }

    /// Renames the pathway and replaces its description, keeping its id.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        let id = self.store.state().pathway_id.clone();
        self.store
            .dispatch(Action::update_pathway_details(id, name, description))
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        self.store.dispatch(Action::add_tag(tag))
    }

    pub fn remove_tag(&mut self, tag: impl Into<String>) -> bool {
        self.store.dispatch(Action::remove_tag(tag))
    }

    /// Shows or hides the pathway details screen; `None` flips it.
    pub fn toggle_details_screen(&mut self, show: Option<bool>) -> bool {
        self.store
            .dispatch(Action::toggle_pathway_details_screen(show))
    }

    /// Lets the details modal close on an overlay click. Once enabled it
    /// stays enabled.
    pub fn enable_overlay_close(&mut self) -> bool {
        self.store.dispatch(Action::toggle_modal_close_on_overlay())
    }
}

fn check_index(field: &str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(PathwayError::invalid_input(field).with_reason(format!(
            "Index {index} is out of range. Pathway has {len} steps"
        )));
    }
    Ok(())
}
