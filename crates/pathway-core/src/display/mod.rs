//! Markdown formatting for pathways, steps and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes go through the wrapper types re-exported here.
//! Every formatter produces markdown, which the CLI renders with termimad.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models   │    │ Wrappers        │    │   Markdown      │
//! │ (PathwayDocument,│───▶│ (PathwaySummar- │───▶│    Output       │
//! │  StepRecord)     │    │  ies, *Result)  │    │                 │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PathwaySummaries`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: `Display` for the domain models
//!
//! # Examples
//!
//! ```rust
//! use pathway_core::{
//!     display::{OperationStatus, UpdateResult},
//!     models::PathwayDocument,
//! };
//!
//! let doc = PathwayDocument {
//!     pathway_id: "pathway-1".to_string(),
//!     pathway_name: "Rust Basics".to_string(),
//!     ..PathwayDocument::default()
//! };
//! let output = UpdateResult::with_changes(doc, vec!["Renamed".to_string()]).to_string();
//! assert!(output.contains("Changes made:"));
//!
//! println!("{}", OperationStatus::success("Saved"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PathwaySummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
