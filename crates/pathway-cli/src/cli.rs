//! Command handlers.
//!
//! Each editing command opens an [`Editor`] on the stored pathway, applies
//! the gesture, saves, and renders the outcome as markdown.

use std::fs;

use anyhow::{bail, Context, Result};
use log::info;
use pathway_core::{
    display::{CreateResult, DeleteResult, OperationStatus, PathwaySummaries, UpdateResult},
    Action, DragResult, Editor, EditorBuilder, PathwayBackend, PathwayDocument, PathwayError,
    SqliteBackend, StepPatch, StepType, Store,
};

use crate::{
    args::{
        AddStepArgs, CreatePathwayArgs, DeletePathwayArgs, DeleteStepArgs, MoveStepArgs,
        PathwayCommands, RenamePathwayArgs, ReplayArgs, ShowPathwayArgs, StepCommands, TagArgs,
        TagCommands, UpdateStepArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    backend: SqliteBackend,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(backend: SqliteBackend, renderer: TerminalRenderer) -> Self {
        Self { backend, renderer }
    }

    async fn open(&self, pathway_id: &str) -> Result<Editor<SqliteBackend>> {
        let editor = EditorBuilder::new(self.backend.clone())
            .with_pathway(Some(pathway_id))
            .build()
            .await?;
        Ok(editor)
    }

    pub async fn handle_pathway_command(&self, command: PathwayCommands) -> Result<()> {
        match command {
            PathwayCommands::Create(args) => self.create_pathway(args).await,
            PathwayCommands::List => self.list_pathways().await,
            PathwayCommands::Show(args) => self.show_pathway(args).await,
            PathwayCommands::Rename(args) => self.rename_pathway(args).await,
            PathwayCommands::Save(args) => {
                let mut editor = self.open(&args.id).await?;
                editor.save().await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Saved pathway {}", args.id)).to_string(),
                )
            }
            PathwayCommands::Delete(args) => self.delete_pathway(args).await,
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(args) => self.add_step(args).await,
            StepCommands::Move(args) => self.move_step(args).await,
            StepCommands::Update(args) => self.update_step(args).await,
            StepCommands::Delete(args) => self.delete_step(args).await,
        }
    }

    pub async fn handle_tag_command(&self, command: TagCommands) -> Result<()> {
        let (args, adding) = match command {
            TagCommands::Add(args) => (args, true),
            TagCommands::Remove(args) => (args, false),
        };
        let TagArgs { pathway_id, tag } = args;

        let mut editor = self.open(&pathway_id).await?;
        let changed = if adding {
            editor.add_tag(tag.as_str())
        } else {
            editor.remove_tag(tag.as_str())
        };
        if changed {
            editor.save().await?;
        }

        let status = if adding {
            OperationStatus::success(format!("Tagged pathway {pathway_id} with '{tag}'"))
        } else {
            OperationStatus::changed(
                changed,
                format!("Removed tag '{tag}' from pathway {pathway_id}"),
                format!("Pathway {pathway_id} has no tag '{tag}'"),
            )
        };
        self.renderer.render(&status.to_string())
    }

    pub async fn list_pathways(&self) -> Result<()> {
        let summaries = PathwaySummaries(self.backend.list_pathways().await?);
        self.renderer.render(&format!("# Pathways\n\n{summaries}"))
    }

    async fn create_pathway(&self, args: CreatePathwayArgs) -> Result<()> {
        let mut editor = EditorBuilder::new(self.backend.clone()).build().await?;
        let id = editor.create_pathway(args.name, args.description).await?;
        info!("Created pathway {id}");

        let document = PathwayDocument::clone(&editor.document());
        self.renderer
            .render(&CreateResult::new(document).to_string())
    }

    async fn show_pathway(&self, args: ShowPathwayArgs) -> Result<()> {
        let editor = self.open(&args.id).await?;
        let document = editor.document();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&*document)?);
            return Ok(());
        }
        self.renderer.render(&document.to_string())
    }

    async fn rename_pathway(&self, args: RenamePathwayArgs) -> Result<()> {
        let mut editor = self.open(&args.id).await?;
        let before = editor.document();

        let description = args
            .description
            .unwrap_or_else(|| before.pathway_description.clone());
        let mut changes = Vec::new();
        if args.name != before.pathway_name {
            changes.push(format!("Name set to '{}'", args.name));
        }
        if description != before.pathway_description {
            changes.push("Description updated".to_string());
        }

        editor.update_details(args.name, description);
        editor.save().await?;

        let document = PathwayDocument::clone(&editor.document());
        self.renderer
            .render(&UpdateResult::with_changes(document, changes).to_string())
    }

    async fn delete_pathway(&self, args: DeletePathwayArgs) -> Result<()> {
        if !args.confirm {
            bail!("Deleting pathway {} requires the --confirm flag", args.id);
        }

        let payload = self
            .backend
            .fetch_pathway(&args.id)
            .await?
            .ok_or_else(|| PathwayError::PathwayNotFound {
                id: args.id.clone(),
            })?;
        self.backend.delete_pathway(&args.id).await?;

        self.renderer.render(
            &DeleteResult::with_name(payload.id, "pathway", payload.name).to_string(),
        )
    }

    async fn add_step(&self, args: AddStepArgs) -> Result<()> {
        let mut editor = self.open(&args.pathway_id).await?;
        let step_id = editor.add_step(args.step_type.into()).await?;

        let document = editor.document();
        let record = document
            .step(&step_id)
            .cloned()
            .with_context(|| format!("Step {step_id} missing after add"))?;
        self.renderer.render(&CreateResult::new(record).to_string())
    }

    async fn move_step(&self, args: MoveStepArgs) -> Result<()> {
        let mut editor = self.open(&args.pathway_id).await?;
        let moved = editor.on_drag_end(&DragResult::moved(args.from, args.to))?;

        let mut changes = Vec::new();
        if moved {
            editor.save().await?;
            changes.push(format!(
                "Moved step from position {} to {}",
                args.from, args.to
            ));
        }

        let document = PathwayDocument::clone(&editor.document());
        self.renderer
            .render(&UpdateResult::with_changes(document, changes).to_string())
    }

    async fn update_step(&self, args: UpdateStepArgs) -> Result<()> {
        let patch = StepPatch::from(&args);
        if patch.is_empty() {
            bail!("Nothing to update. Pass --heading, --content or --time");
        }

        let mut changes = Vec::new();
        if let Some(heading) = &patch.heading {
            changes.push(format!("Heading set to '{heading}'"));
        }
        if patch.content.is_some() {
            changes.push("Content updated".to_string());
        }
        if let Some(time) = patch.time_limit {
            changes.push(format!("Time limit set to {time}s"));
        }

        let mut editor = self.open(&args.pathway_id).await?;
        let step_type = editor
            .document()
            .step(&args.step_id)
            .map(|step| step.step_type)
            .ok_or_else(|| PathwayError::StepNotFound {
                id: args.step_id.clone(),
            })?;
        // Only content steps have somewhere to persist a body.
        if patch.content.is_some() && step_type != StepType::ContentStep {
            return Err(PathwayError::invalid_input("content")
                .with_reason(format!(
                    "{} has no body; only content steps do",
                    step_type.default_name()
                ))
                .into());
        }
        editor.update_step(args.step_id.as_str(), patch);
        editor.save().await?;

        let document = editor.document();
        let record = document
            .step(&args.step_id)
            .cloned()
            .with_context(|| format!("Step {} missing after update", args.step_id))?;
        self.renderer
            .render(&UpdateResult::with_changes(record, changes).to_string())
    }

    async fn delete_step(&self, args: DeleteStepArgs) -> Result<()> {
        let mut editor = self.open(&args.pathway_id).await?;
        let heading = editor
            .document()
            .step(&args.step_id)
            .map(|step| step.heading.clone());

        if !editor.delete_step(args.step_id.as_str()) {
            return Err(PathwayError::StepNotFound { id: args.step_id }.into());
        }
        editor.save().await?;

        let result = match heading {
            Some(heading) => DeleteResult::with_name(args.step_id, "step", heading),
            None => DeleteResult::new(args.step_id, "step"),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn replay(&self, args: ReplayArgs) -> Result<()> {
        let raw = fs::read_to_string(&args.actions)
            .with_context(|| format!("Failed to read {}", args.actions.display()))?;
        let actions = Action::parse_log(&raw)
            .with_context(|| format!("Failed to parse actions in {}", args.actions.display()))?;

        let mut store = Store::new();
        if let Some(id) = &args.pathway {
            let payload = self
                .backend
                .fetch_pathway(id)
                .await?
                .ok_or_else(|| PathwayError::PathwayNotFound { id: id.clone() })?;
            store.dispatch(Action::hydrate_pathway(Some(payload)));
        }

        let total = actions.len();
        let mut applied = 0;
        for action in actions {
            if store.dispatch(action) {
                applied += 1;
            }
        }
        info!("Replayed {total} actions, {applied} changed the document");

        let document = store.state();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&*document)?);
            return Ok(());
        }

        let status = OperationStatus::success(format!(
            "Replayed {total} actions, {applied} changed the document"
        ));
        self.renderer.render(&format!("{status}\n{document}"))
    }
}
