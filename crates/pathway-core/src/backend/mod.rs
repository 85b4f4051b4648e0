//! Backend surface the editor persists pathways through.
//!
//! The editor only speaks to [`PathwayBackend`]; transports are external
//! collaborators. Two implementations ship with the crate:
//!
//! - [`MemoryBackend`]: in-process maps, with injectable failures for tests
//! - [`SqliteBackend`]: local persistence on top of [`crate::db::Database`]

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{ContentUpsert, PathwayPayload, PathwaySummary, PathwayUpsert},
};

pub mod memory;
pub mod sqlite;

pub use memory::{MemoryBackend, MutationRecord};
pub use sqlite::SqliteBackend;

/// Queries and mutations a pathway backend accepts.
#[async_trait]
pub trait PathwayBackend: Send + Sync {
    /// Fetches the hydration payload for a pathway, `None` if unknown.
    async fn fetch_pathway(&self, id: &str) -> Result<Option<PathwayPayload>>;

    /// Lists every persisted pathway, most recently updated first.
    async fn list_pathways(&self) -> Result<Vec<PathwaySummary>>;

    /// Creates the pathway if absent, overwrites its name, description and
    /// tags, and upserts the listed steps by id. Unlisted steps are kept.
    async fn upsert_pathway(&self, upsert: &PathwayUpsert) -> Result<()>;

    /// Creates or replaces the written content of a content step.
    async fn upsert_content(&self, content: &ContentUpsert) -> Result<()>;

    /// Removes a step from a persisted pathway.
    async fn detach_step(&self, pathway_id: &str, step_id: &str) -> Result<()>;

    /// Deletes a pathway and its steps. Returns `false` if it did not exist.
    async fn delete_pathway(&self, id: &str) -> Result<bool>;
}
