//! Gesture payloads delivered by the list view.

use serde::{Deserialize, Serialize};

/// Position of a draggable item within the step list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraggableLocation {
    pub index: usize,
}

/// Outcome of a drag gesture. `destination` is `None` when the item was
/// dropped outside the list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DragResult {
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
}

impl DragResult {
    /// A drop from `source` onto `destination`.
    pub fn moved(source: usize, destination: usize) -> Self {
        Self {
            source: DraggableLocation { index: source },
            destination: Some(DraggableLocation { index: destination }),
        }
    }

    /// A drag released outside the list.
    pub fn cancelled(source: usize) -> Self {
        Self {
            source: DraggableLocation { index: source },
            destination: None,
        }
    }
}
