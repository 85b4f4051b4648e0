//! The pure state-transition function of the step store.
//!
//! [`reduce`] dispatches on the action kind to one small handler per case.
//! Handlers return `None` when the action leaves the document as it was, in
//! which case the caller gets its own input back as [`Cow::Borrowed`].

use std::borrow::Cow;

use crate::models::{PathwayDocument, PathwayPayload, StepId, StepPatch, StepPayload, StepRecord};

use super::Action;

/// Applies `action` to `state` and returns the resulting document.
///
/// The input is never modified. When the action changes nothing (unknown
/// kinds, deletes of absent ids, selections of missing steps, a null
/// hydration payload) the result borrows `state` itself.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
///
/// use pathway_core::{
///     models::{PathwayDocument, StepRecord, StepType},
///     store::{reduce, Action},
/// };
///
/// let doc = PathwayDocument::default();
/// let next = reduce(&doc, &Action::add_step(StepRecord::new("s1", StepType::PathwayStep)));
/// assert_eq!(next.step_order, vec!["s1".to_string()]);
///
/// let same = reduce(&doc, &Action::Unknown);
/// assert!(matches!(same, Cow::Borrowed(_)));
/// ```
pub fn reduce<'a>(state: &'a PathwayDocument, action: &Action) -> Cow<'a, PathwayDocument> {
    let next = match action {
        Action::AddStep { step_data } => Some(add_step(state, step_data)),
        Action::ReorderSteps {
            source_index,
            destination_index,
        } => reorder_steps(state, *source_index, *destination_index),
        Action::DeleteStep { step_id } => delete_step(state, step_id),
        Action::SelectStepForEditing { step_id } => select_step_for_editing(state, step_id),
        Action::SelectStepForPreview { step_id } => select_step_for_preview(state, step_id),
        Action::UpdateStep { step_id, step_data } => update_step(state, step_id, step_data),
        Action::UpdatePathwayDetails {
            id,
            name,
            description,
        } => update_pathway_details(state, id, name, description),
        Action::AddTag { tag } => Some(add_tag(state, tag)),
        Action::RemoveTag { tag } => remove_tag(state, tag),
        Action::ToggleModalCloseOnOverlay => toggle_modal_close_on_overlay(state),
        Action::TogglePathwayDetailsScreen { payload } => {
            toggle_pathway_details_screen(state, *payload)
        }
        Action::HydratePathway { payload } => payload
            .as_ref()
            .map(|payload| hydrate_pathway(state, payload)),
        Action::Unknown => None,
    };

    next.map_or(Cow::Borrowed(state), Cow::Owned)
}

/// Appends the step to the end of the order and stores its record. Ids are
/// not checked for uniqueness here.
fn add_step(state: &PathwayDocument, step: &StepRecord) -> PathwayDocument {
    let mut next = state.clone();
    next.step_order.push(step.id.clone());
    next.steps.insert(step.id.clone(), step.clone());
    next
}

/// Array move: remove at `source`, insert at `destination`.
fn reorder_steps(
    state: &PathwayDocument,
    source: usize,
    destination: usize,
) -> Option<PathwayDocument> {
    if source >= state.step_order.len() || source == destination {
        return None;
    }

    let mut next = state.clone();
    let moved = next.step_order.remove(source);
    let destination = destination.min(next.step_order.len());
    next.step_order.insert(destination, moved);
    Some(next)
}

/// Drops the first occurrence from the order only; the record stays so the
/// step can be restored.
fn delete_step(state: &PathwayDocument, step_id: &str) -> Option<PathwayDocument> {
    let index = state.position_of(step_id)?;

    let mut next = state.clone();
    next.step_order.remove(index);
    Some(next)
}

fn select_step_for_editing(state: &PathwayDocument, step_id: &str) -> Option<PathwayDocument> {
    if !state.steps.contains_key(step_id) {
        return None;
    }

    let mut next = state.clone();
    for step in next.steps.values_mut() {
        step.selected = false;
    }
    if let Some(step) = next.steps.get_mut(step_id) {
        step.selected = true;
    }
    next.selected_step = Some(step_id.to_string());
    Some(next)
}

/// The preview flag of the *selected* step decides the value written to the
/// target. No selection reads as "not previewing".
fn select_step_for_preview(state: &PathwayDocument, step_id: &str) -> Option<PathwayDocument> {
    if !state.steps.contains_key(step_id) {
        return None;
    }

    let source_preview = state.selected().is_some_and(|step| step.is_preview);

    let mut next = state.clone();
    if let Some(step) = next.steps.get_mut(step_id) {
        step.is_preview = !source_preview;
    }
    Some(next)
}

fn update_step(state: &PathwayDocument, step_id: &str, patch: &StepPatch) -> Option<PathwayDocument> {
    if !state.steps.contains_key(step_id) {
        return None;
    }

    let mut next = state.clone();
    if let Some(step) = next.steps.get_mut(step_id) {
        patch.apply_to(step);
    }
    Some(next)
}

fn update_pathway_details(
    state: &PathwayDocument,
    id: &str,
    name: &str,
    description: &str,
) -> Option<PathwayDocument> {
    if state.pathway_id == id
        && state.pathway_name == name
        && state.pathway_description == description
    {
        return None;
    }

    Some(PathwayDocument {
        pathway_id: id.to_string(),
        pathway_name: name.to_string(),
        pathway_description: description.to_string(),
        ..state.clone()
    })
}

fn add_tag(state: &PathwayDocument, tag: &str) -> PathwayDocument {
    let mut next = state.clone();
    next.pathway_tags.push(tag.to_string());
    next
}

/// Removes every occurrence of `tag`.
fn remove_tag(state: &PathwayDocument, tag: &str) -> Option<PathwayDocument> {
    if !state.pathway_tags.iter().any(|t| t == tag) {
        return None;
    }

    let mut next = state.clone();
    next.pathway_tags.retain(|t| t != tag);
    Some(next)
}

/// One-directional: once set, nothing clears it.
fn toggle_modal_close_on_overlay(state: &PathwayDocument) -> Option<PathwayDocument> {
    if state.modal_close_on_overlay {
        return None;
    }

    Some(PathwayDocument {
        modal_close_on_overlay: true,
        ..state.clone()
    })
}

fn toggle_pathway_details_screen(
    state: &PathwayDocument,
    explicit: Option<bool>,
) -> Option<PathwayDocument> {
    let show = explicit.unwrap_or(!state.show_pathway_details_screen);
    if show == state.show_pathway_details_screen {
        return None;
    }

    Some(PathwayDocument {
        show_pathway_details_screen: show,
        ..state.clone()
    })
}

/// Replaces steps, order, tags and metadata with the persisted pathway.
fn hydrate_pathway(state: &PathwayDocument, payload: &PathwayPayload) -> PathwayDocument {
    let steps = payload
        .steps
        .iter()
        .map(|step| (step.id.clone(), StepRecord::from(step)))
        .collect();

    let step_order = order_by_declared_index(&payload.steps)
        .unwrap_or_else(|| payload.steps.iter().map(|step| step.id.clone()).collect());

    PathwayDocument {
        pathway_id: payload.id.clone(),
        pathway_name: payload.name.clone(),
        pathway_description: payload.description.clone(),
        pathway_tags: payload.tags.iter().map(|tag| tag.name.clone()).collect(),
        step_order,
        steps,
        selected_step: None,
        initial_state: true,
        ..state.clone()
    }
}

/// Places each id at its declared index. Returns `None` unless the indices
/// fill exactly the slots `0..steps.len()`.
fn order_by_declared_index(steps: &[StepPayload]) -> Option<Vec<StepId>> {
    let mut slots: Vec<Option<StepId>> = vec![None; steps.len()];

    for step in steps {
        let slot = slots.get_mut(step.index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(step.id.clone());
    }

    slots.into_iter().collect()
}
