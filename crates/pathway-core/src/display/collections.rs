//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::PathwaySummary;

/// Newtype wrapper for displaying collections of pathway summaries.
///
/// Titles are left to the caller. Empty collections render a single
/// "No pathways found." line.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use pathway_core::{display::PathwaySummaries, models::PathwaySummary};
///
/// let summary = PathwaySummary {
///     id: "pathway-1".to_string(),
///     name: "Rust Basics".to_string(),
///     description: "Ownership first".to_string(),
///     tags: vec!["rust".to_string()],
///     total_steps: 3,
///     updated_at: Timestamp::now(),
/// };
///
/// let summaries = PathwaySummaries(vec![summary]);
/// let output = format!("{summaries}");
/// assert!(output.contains("Rust Basics"));
/// assert!(output.contains("3 steps"));
/// ```
pub struct PathwaySummaries(pub Vec<PathwaySummary>);

impl PathwaySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PathwaySummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathwaySummary> {
        self.0.iter()
    }
}

impl Index<usize> for PathwaySummaries {
    type Output = PathwaySummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PathwaySummaries {
    type Item = PathwaySummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathwaySummaries {
    type Item = &'a PathwaySummary;
    type IntoIter = std::slice::Iter<'a, PathwaySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PathwaySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No pathways found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn summary(id: &str, name: &str, total_steps: u32) -> PathwaySummary {
        PathwaySummary {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            total_steps,
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_empty_summaries() {
        let output = PathwaySummaries(Vec::new()).to_string();
        assert_eq!(output, "No pathways found.\n");
    }

    #[test]
    fn test_summaries_in_order() {
        let summaries = PathwaySummaries(vec![
            summary("p2", "Async Rust", 1),
            summary("p1", "Rust Basics", 4),
        ]);
        let output = summaries.to_string();

        let first = output.find("Async Rust").unwrap();
        let second = output.find("Rust Basics").unwrap();
        assert!(first < second);
        assert!(output.contains("(1 step)"));
        assert!(output.contains("(4 steps)"));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].id, "p1");
    }
}
