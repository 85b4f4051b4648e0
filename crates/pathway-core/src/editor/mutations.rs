//! Persistence side of the Editor.

use log::{debug, info, warn};

use super::{generate_id, Editor, NEW_STEP_CONTENT, NEW_STEP_HEADING, NEW_STEP_TIME_LIMIT};
use crate::{
    backend::PathwayBackend,
    error::{PathwayError, Result},
    models::{ContentUpsert, PathwayUpsert, StepId, StepRecord, StepSummary, StepType},
    store::Action,
};

impl<B: PathwayBackend> Editor<B> {
    /// Adds a step from the add-step menu and persists it.
    ///
    /// The step is added to the document first. For a content step the
    /// linked content is created next, and only once it is accepted is the
    /// pathway upsert sent. Until the pathway has an id the pathway upsert
    /// is skipped.
    ///
    /// # Errors
    ///
    /// Returns the backend error of the first rejected mutation. The local
    /// document keeps the new step either way.
    pub async fn add_step(&mut self, step_type: StepType) -> Result<StepId> {
        // Records include steps deleted since the last save; those are still
        // persisted at their old index.
        let index = self.store.state().steps.len();
        let step_id = generate_id("step");
        let mut record = StepRecord::new(step_id.clone(), step_type)
            .with_heading(NEW_STEP_HEADING)
            .with_time_limit(NEW_STEP_TIME_LIMIT);

        let content = (step_type == StepType::ContentStep).then(|| ContentUpsert {
            id: generate_id("content"),
            title: NEW_STEP_HEADING.to_string(),
            content: NEW_STEP_CONTENT.to_string(),
        });
        if let Some(content) = &content {
            record = record.with_type_id(content.id.clone());
            record.content = content.content.clone();
        }

        self.store.dispatch(Action::add_step(record));

        let document = self.store.state();
        let mut summary = StepSummary {
            id: step_id.clone(),
            name: step_type.default_name().to_string(),
            time: NEW_STEP_TIME_LIMIT,
            index,
            step_type,
            type_id: String::new(),
        };

        if let Some(content) = content {
            self.backend
                .upsert_content(&content)
                .await
                .map_err(|e| rejected("content creation", e))?;
            summary.type_id = content.id;
        }

        if document.pathway_id.is_empty() {
            debug!("Pathway not created yet, keeping step {step_id} local");
            return Ok(step_id);
        }

        self.backend
            .upsert_pathway(&PathwayUpsert::from_document(&document, vec![summary]))
            .await
            .map_err(|e| rejected("pathway update", e))?;

        info!("Added {} {step_id} at index {index}", step_type.as_str());
        Ok(step_id)
    }

    /// Persists the whole document.
    ///
    /// Content of content steps is upserted first, then the pathway with
    /// every visible step at its current index. Steps deleted in this
    /// session are detached last.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::InvalidInput` if the pathway has no id yet,
    /// or the backend error of the first rejected mutation.
    pub async fn save(&mut self) -> Result<()> {
        let document = self.store.state();
        if document.pathway_id.is_empty() {
            return Err(PathwayError::invalid_input("pathwayId")
                .with_reason("Pathway has not been created yet"));
        }

        for step in document
            .ordered_steps()
            .filter(|s| s.step_type == StepType::ContentStep && !s.type_id.is_empty())
        {
            let content = ContentUpsert {
                id: step.type_id.clone(),
                title: step.heading.clone(),
                content: step.content.clone(),
            };
            self.backend
                .upsert_content(&content)
                .await
                .map_err(|e| rejected("content update", e))?;
        }

        let steps = document
            .ordered_steps()
            .enumerate()
            .map(|(index, step)| StepSummary::from_record(step, index))
            .collect();
        self.backend
            .upsert_pathway(&PathwayUpsert::from_document(&document, steps))
            .await
            .map_err(|e| rejected("pathway update", e))?;

        for step in document.deleted_steps() {
            self.backend
                .detach_step(&document.pathway_id, &step.id)
                .await
                .map_err(|e| rejected("step removal", e))?;
        }

        info!(
            "Saved pathway {} with {} steps",
            document.pathway_id,
            document.step_order.len()
        );
        Ok(())
    }

    /// Creates the pathway on the backend under a fresh id and closes the
    /// details screen. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::InvalidInput` if `name` is blank, or the
    /// backend error if the upsert is rejected.
    pub async fn create_pathway(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PathwayError::invalid_input("name").with_reason("Name cannot be empty"));
        }

        let id = generate_id("pathway");
        self.store
            .dispatch(Action::update_pathway_details(id.clone(), name, description));
        self.store
            .dispatch(Action::toggle_pathway_details_screen(Some(false)));

        let document = self.store.state();
        let steps = document
            .ordered_steps()
            .enumerate()
            .map(|(index, step)| StepSummary::from_record(step, index))
            .collect();
        self.backend
            .upsert_pathway(&PathwayUpsert::from_document(&document, steps))
            .await
            .map_err(|e| rejected("pathway creation", e))?;

        info!("Created pathway {id}");
        Ok(id)
    }
}

fn rejected(what: &str, error: PathwayError) -> PathwayError {
    warn!("{what} failed: {error}");
    error
}
