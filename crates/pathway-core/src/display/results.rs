//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{PathwayDocument, StepRecord};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use pathway_core::{
///     display::CreateResult,
///     models::{StepRecord, StepType},
/// };
///
/// let step = StepRecord::new("step-1", StepType::ContentStep).with_heading("Intro");
/// let output = CreateResult::new(step).to_string();
/// assert!(output.starts_with("Created content step with ID: step-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PathwayDocument> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created pathway with ID: {}", self.resource.pathway_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<StepRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            self.resource.step_type.default_name().to_lowercase(),
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<PathwayDocument> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated pathway with ID: {}", self.resource.pathway_id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<StepRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying deletion confirmations.
pub struct DeleteResult {
    pub resource_id: String,
    pub resource_type: &'static str,
    pub resource_name: Option<String>,
}

impl DeleteResult {
    pub fn new(resource_id: impl Into<String>, resource_type: &'static str) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_type,
            resource_name: None,
        }
    }

    /// Includes the resource name in the confirmation.
    pub fn with_name(
        resource_id: impl Into<String>,
        resource_type: &'static str,
        name: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            resource_type,
            resource_name: Some(name.into()),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource_name {
            Some(name) => writeln!(
                f,
                "Deleted {} '{}' (ID: {})",
                self.resource_type, name, self.resource_id
            ),
            None => writeln!(
                f,
                "Deleted {} with ID: {}",
                self.resource_type, self.resource_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepType;

    #[test]
    fn test_update_result_lists_changes() {
        let step = StepRecord::new("step-1", StepType::PathwayStep).with_heading("Setup");
        let result = UpdateResult::with_changes(
            step,
            vec!["Heading set to 'Setup'".to_string()],
        );
        let output = result.to_string();

        assert!(output.starts_with("Updated step with ID: step-1\n"));
        assert!(output.contains("Changes made:\n- Heading set to 'Setup'"));
        assert!(output.contains("### Setup"));
    }

    #[test]
    fn test_create_pathway_result() {
        let document = PathwayDocument {
            pathway_id: "pathway-1".to_string(),
            pathway_name: "Rust Basics".to_string(),
            ..PathwayDocument::default()
        };
        let output = CreateResult::new(document).to_string();
        assert!(output.starts_with("Created pathway with ID: pathway-1"));
        assert!(output.contains("# Rust Basics"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::with_name("p1", "pathway", "Rust Basics").to_string(),
            "Deleted pathway 'Rust Basics' (ID: p1)\n"
        );
        assert_eq!(
            DeleteResult::new("s1", "step").to_string(),
            "Deleted step with ID: s1\n"
        );
    }
}
