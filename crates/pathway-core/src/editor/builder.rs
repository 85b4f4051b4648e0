//! Builder for opening Editor sessions.

use log::{debug, info};

use super::Editor;
use crate::{
    backend::PathwayBackend,
    error::{PathwayError, Result},
    store::{Action, Store},
};

/// Builder for creating and configuring [`Editor`] sessions.
#[derive(Debug)]
pub struct EditorBuilder<B> {
    backend: B,
    pathway_id: Option<String>,
}

impl<B: PathwayBackend> EditorBuilder<B> {
    /// Creates a builder for a session persisting through `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pathway_id: None,
        }
    }

    /// Sets the pathway to hydrate the session from.
    ///
    /// If not specified, the session starts on a new, unsaved pathway.
    pub fn with_pathway<S: Into<String>>(mut self, id: Option<S>) -> Self {
        if let Some(id) = id {
            self.pathway_id = Some(id.into());
        }
        self
    }

    /// Builds the configured editor.
    ///
    /// A new pathway opens with the details screen shown.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::PathwayNotFound` if the requested pathway does
    /// not exist. Backend failures while fetching are returned as-is.
    pub async fn build(self) -> Result<Editor<B>> {
        let mut store = Store::new();

        match self.pathway_id {
            Some(id) => {
                let payload = self
                    .backend
                    .fetch_pathway(&id)
                    .await?
                    .ok_or(PathwayError::PathwayNotFound { id })?;
                info!(
                    "Hydrating pathway {} with {} steps",
                    payload.id,
                    payload.steps.len()
                );
                store.dispatch(Action::hydrate_pathway(Some(payload)));
            }
            None => {
                debug!("Opening editor on a new pathway");
                store.dispatch(Action::toggle_pathway_details_screen(Some(true)));
            }
        }

        Ok(Editor::new(store, self.backend))
    }
}
