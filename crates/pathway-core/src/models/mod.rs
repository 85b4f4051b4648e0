//! Data models for the pathway-editing document and the payloads exchanged
//! with the backend.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # Document Shape
//!
//! The [`PathwayDocument`] keeps step order and step records apart:
//!
//! ```text
//! step_order: [s2, s1]          steps: { s1: StepRecord, s2: StepRecord,
//!                                        s3: StepRecord (soft-deleted) }
//! ```
//!
//! Reordering touches only `step_order`; editing touches only `steps`.
//!
//! # Examples
//!
//! ```rust
//! use pathway_core::models::{PathwayDocument, StepRecord, StepType};
//!
//! let mut doc = PathwayDocument::default();
//! let step = StepRecord::new("s1", StepType::ContentStep).with_heading("Intro");
//! doc.step_order.push(step.id.clone());
//! doc.steps.insert(step.id.clone(), step);
//!
//! assert_eq!(doc.ordered_steps().count(), 1);
//! assert!(doc.is_consistent());
//! ```

pub mod document;
pub mod mutation;
pub mod payload;
pub mod step;
pub mod summary;

#[cfg(test)]
mod tests;

pub use document::PathwayDocument;
pub use mutation::{ContentUpsert, PathwayUpsert, StepSummary};
pub use payload::{ContentPayload, PathwayPayload, StepPayload, TagPayload};
pub use step::{StepId, StepPatch, StepRecord, StepType};
pub use summary::PathwaySummary;
