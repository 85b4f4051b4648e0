//! The normalized pathway-editing document.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{StepId, StepRecord};

/// The single in-memory value owned by the step store.
///
/// Display order and step identity live in two sibling containers:
/// `step_order` lists ids, `steps` maps ids to records. `steps` may hold
/// records that are absent from `step_order`; those are soft-deleted and kept
/// for a potential restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PathwayDocument {
    /// Empty until the pathway is first persisted
    pub pathway_id: String,
    pub pathway_name: String,
    pub pathway_description: String,
    pub pathway_tags: Vec<String>,
    /// User-controlled sequencing of steps
    pub step_order: Vec<StepId>,
    pub steps: BTreeMap<StepId, StepRecord>,
    /// Step currently open for editing, if any
    pub selected_step: Option<StepId>,
    pub show_pathway_details_screen: bool,
    pub modal_close_on_overlay: bool,
    /// Set once the document was hydrated from a persisted pathway
    pub initial_state: bool,
}

impl Default for PathwayDocument {
    fn default() -> Self {
        Self {
            pathway_id: String::new(),
            pathway_name: String::new(),
            pathway_description: String::new(),
            pathway_tags: Vec::new(),
            step_order: Vec::new(),
            steps: BTreeMap::new(),
            selected_step: None,
            show_pathway_details_screen: false,
            modal_close_on_overlay: true,
            initial_state: false,
        }
    }
}

impl PathwayDocument {
    /// Looks up a step record by id, whether or not it is in the order.
    pub fn step(&self, id: &str) -> Option<&StepRecord> {
        self.steps.get(id)
    }

    /// Position of `id` within the step order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.step_order.iter().position(|s| s == id)
    }

    /// Iterates the visible steps in display order.
    ///
    /// Ids without a record are skipped.
    pub fn ordered_steps(&self) -> impl Iterator<Item = &StepRecord> + '_ {
        self.step_order.iter().filter_map(|id| self.steps.get(id))
    }

    /// Records that were removed from the order but kept for restore.
    pub fn deleted_steps(&self) -> Vec<&StepRecord> {
        let visible: HashSet<&str> = self.step_order.iter().map(String::as_str).collect();
        self.steps
            .values()
            .filter(|step| !visible.contains(step.id.as_str()))
            .collect()
    }

    /// The record currently selected for editing.
    pub fn selected(&self) -> Option<&StepRecord> {
        self.selected_step.as_deref().and_then(|id| self.steps.get(id))
    }

    /// Checks the ordering invariants: no duplicate ids in the order, every
    /// ordered id backed by a record, and at most one selected record.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        let order_ok = self
            .step_order
            .iter()
            .all(|id| seen.insert(id.as_str()) && self.steps.contains_key(id));
        let selected = self.steps.values().filter(|s| s.selected).count();
        order_ok && selected <= 1
    }
}
