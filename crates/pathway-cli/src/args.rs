//! Command-line argument definitions.
//!
//! Every command gets a clap wrapper struct; wrappers that map onto a core
//! type convert with `From` so clap attributes never reach `pathway-core`.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use pathway_core::{StepPatch, StepType};

/// Author learning pathways from the terminal.
///
/// A pathway is an ordered list of steps. Every edit is applied to a local
/// copy of the pathway first and then saved to the database.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pathway/pathway.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, pathways are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage pathways
    #[command(alias = "p")]
    Pathway {
        #[command(subcommand)]
        command: PathwayCommands,
    },
    /// Manage steps within a pathway
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Manage pathway tags
    #[command(alias = "t")]
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Reduce a recorded action log and print the resulting document
    Replay(ReplayArgs),
}

#[derive(Subcommand)]
pub enum PathwayCommands {
    /// Create a new pathway
    #[command(alias = "c")]
    Create(CreatePathwayArgs),
    /// List all pathways
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a pathway with its steps
    #[command(alias = "s")]
    Show(ShowPathwayArgs),
    /// Rename a pathway or change its description
    #[command(alias = "r")]
    Rename(RenamePathwayArgs),
    /// Save a pathway again, renumbering its steps
    Save(PathwayIdArgs),
    /// Delete a pathway permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePathwayArgs),
}

#[derive(ClapArgs)]
pub struct CreatePathwayArgs {
    /// Name of the pathway
    pub name: String,
    #[arg(short, long, default_value = "", help = "Short description shown in listings")]
    pub description: String,
}

#[derive(ClapArgs)]
pub struct PathwayIdArgs {
    #[arg(help = "Identifier of the pathway")]
    pub id: String,
}

#[derive(ClapArgs)]
pub struct ShowPathwayArgs {
    #[arg(help = "Identifier of the pathway to show")]
    pub id: String,
    /// Print the editing document as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs)]
pub struct RenamePathwayArgs {
    #[arg(help = "Identifier of the pathway to rename")]
    pub id: String,
    /// New name of the pathway
    pub name: String,
    #[arg(short, long, help = "New description; the current one is kept if omitted")]
    pub description: Option<String>,
}

#[derive(ClapArgs)]
pub struct DeletePathwayArgs {
    #[arg(help = "Identifier of the pathway to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a step at the end of a pathway
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Move a step to another position
    #[command(alias = "m")]
    Move(MoveStepArgs),
    /// Update a step's heading, content or time limit
    #[command(alias = "u")]
    Update(UpdateStepArgs),
    /// Remove a step from a pathway
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteStepArgs),
}

#[derive(ClapArgs)]
pub struct AddStepArgs {
    #[arg(help = "Identifier of the pathway to add the step to")]
    pub pathway_id: String,
    #[arg(value_enum, help = "Kind of step to add")]
    pub step_type: StepTypeArg,
}

/// Drag a step from one 0-based position to another.
#[derive(ClapArgs)]
pub struct MoveStepArgs {
    #[arg(help = "Identifier of the pathway")]
    pub pathway_id: String,
    #[arg(help = "Current 0-based position of the step")]
    pub from: usize,
    #[arg(help = "0-based position to move the step to")]
    pub to: usize,
}

#[derive(ClapArgs)]
pub struct UpdateStepArgs {
    #[arg(help = "Identifier of the pathway")]
    pub pathway_id: String,
    #[arg(help = "Identifier of the step to update")]
    pub step_id: String,
    #[arg(long, help = "New heading for the step")]
    pub heading: Option<String>,
    #[arg(long, help = "New markdown body for the step")]
    pub content: Option<String>,
    #[arg(long, help = "New time limit in seconds")]
    pub time: Option<u32>,
}

impl From<&UpdateStepArgs> for StepPatch {
    fn from(val: &UpdateStepArgs) -> Self {
        StepPatch {
            heading: val.heading.clone(),
            content: val.content.clone(),
            time_limit: val.time,
            ..StepPatch::default()
        }
    }
}

#[derive(ClapArgs)]
pub struct DeleteStepArgs {
    #[arg(help = "Identifier of the pathway")]
    pub pathway_id: String,
    #[arg(help = "Identifier of the step to remove")]
    pub step_id: String,
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag to a pathway
    #[command(alias = "a")]
    Add(TagArgs),
    /// Remove every occurrence of a tag from a pathway
    #[command(aliases = ["rm", "r"])]
    Remove(TagArgs),
}

#[derive(ClapArgs)]
pub struct TagArgs {
    #[arg(help = "Identifier of the pathway")]
    pub pathway_id: String,
    pub tag: String,
}

/// Apply a JSON array of actions to a document.
///
/// Starts from an empty document, or from a persisted pathway with
/// `--pathway`. Nothing is saved.
#[derive(ClapArgs)]
pub struct ReplayArgs {
    #[arg(help = "Path to a JSON file holding an array of actions")]
    pub actions: PathBuf,
    #[arg(long, help = "Hydrate from this pathway before replaying")]
    pub pathway: Option<String>,
    /// Print the resulting document as JSON
    #[arg(long)]
    pub json: bool,
}

/// Command-line names for step kinds.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StepTypeArg {
    /// A plain step
    Pathway,
    /// A step with linked written content
    Content,
    /// A step shared from another pathway
    Shared,
}

impl From<StepTypeArg> for StepType {
    fn from(val: StepTypeArg) -> Self {
        match val {
            StepTypeArg::Pathway => StepType::PathwayStep,
            StepTypeArg::Content => StepType::ContentStep,
            StepTypeArg::Shared => StepType::SharedStep,
        }
    }
}
