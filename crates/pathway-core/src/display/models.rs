//! Display implementations for domain models.
//!
//! Markdown output, kept apart from the model definitions in
//! [`crate::models`].

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{PathwayDocument, PathwaySummary, StepRecord, StepType};

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

impl fmt::Display for PathwayDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.pathway_name.is_empty() {
            "Untitled pathway"
        } else {
            &self.pathway_name
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;

        if !self.pathway_id.is_empty() {
            writeln!(f, "- ID: {}", self.pathway_id)?;
        }
        if !self.pathway_tags.is_empty() {
            writeln!(f, "- Tags: {}", self.pathway_tags.join(", "))?;
        }
        let total: u32 = self.ordered_steps().map(|s| s.time_limit).sum();
        writeln!(f, "- Total time: {total}s")?;

        if !self.pathway_description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.pathway_description)?;
        }

        if self.step_order.is_empty() {
            writeln!(f, "\nNo steps in this pathway.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (position, step) in self.ordered_steps().enumerate() {
            step.fmt_step(f, Some(position + 1))?;
        }

        let deleted = self.deleted_steps().len();
        if deleted > 0 {
            writeln!(f, "_{deleted} deleted step(s) pending save._")?;
        }

        Ok(())
    }
}

impl StepRecord {
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        let mut markers = Vec::new();
        if self.selected {
            markers.push("editing");
        }
        if self.is_preview {
            markers.push("preview");
        }
        let markers = if markers.is_empty() {
            String::new()
        } else {
            format!(" [{}]", markers.join(", "))
        };

        match position {
            Some(n) => writeln!(f, "### {n}. {}{markers}", self.heading)?,
            None => writeln!(f, "### {}{markers}", self.heading)?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "- {} · {}s · ID: {}",
            self.step_type, self.time_limit, self.id
        )?;
        if !self.type_id.is_empty() {
            writeln!(f, "- Linked: {}", self.type_id)?;
        }
        writeln!(f)?;

        if !self.content.is_empty() {
            writeln!(f, "{}", self.content)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, None)
    }
}

impl fmt::Display for PathwaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.total_steps == 1 { "" } else { "s" };
        writeln!(
            f,
            "## {} (ID: {}) ({} step{plural})",
            self.name, self.id, self.total_steps
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        Ok(())
    }
}
