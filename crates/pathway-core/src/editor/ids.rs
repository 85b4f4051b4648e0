//! Client-side identifier generation.

use uuid::Uuid;

/// Generates a fresh identifier of the form `{prefix}-{uuid}`.
///
/// # Examples
///
/// ```rust
/// use pathway_core::editor::generate_id;
///
/// let id = generate_id("step");
/// assert!(id.starts_with("step-"));
/// assert_ne!(id, generate_id("step"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
