//! Core library for authoring pathways: ordered sequences of learning steps.
//!
//! The crate is built around a single-owner [`store::Store`] holding a
//! [`models::PathwayDocument`]. Every change goes through the pure
//! [`store::reduce`] function, and an [`editor::Editor`] turns list-view
//! gestures into actions and backend mutations.
//!
//! - [`models`]: the document, step records and backend payloads
//! - [`store`]: actions, the reducer and the store
//! - [`editor`]: editing sessions and the persistence flow
//! - [`backend`]: the [`backend::PathwayBackend`] seam with in-memory and
//!   SQLite implementations
//! - [`db`]: the SQLite schema and queries behind [`backend::SqliteBackend`]
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use pathway_core::{EditorBuilder, SqliteBackend, StepType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open(Some("pathways.db")).await?;
//!
//! let mut editor = EditorBuilder::new(backend).build().await?;
//! let id = editor.create_pathway("Rust Basics", "Ownership first").await?;
//! editor.add_step(StepType::ContentStep).await?;
//! editor.add_tag("rust");
//! editor.save().await?;
//!
//! println!("Saved pathway {id}:\n{}", editor.document());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod db;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use backend::{MemoryBackend, PathwayBackend, SqliteBackend};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, PathwaySummaries, UpdateResult};
pub use editor::{generate_id, DragResult, Editor, EditorBuilder};
pub use error::{PathwayError, Result};
pub use models::{
    PathwayDocument, PathwayPayload, PathwaySummary, StepId, StepPatch, StepRecord, StepType,
};
pub use store::{reduce, Action, Store};
