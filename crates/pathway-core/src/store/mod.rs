//! The step store: an explicit owner of the pathway-editing document.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Dispatchers   │    │     reduce      │    │   Subscribers   │
//! │ (Action::add_*) │───▶│ (state, action) │───▶│  (view layer)   │
//! │                 │    │   → new state   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`action`]: the dispatch surface and its constructor functions
//! - [`reducer`]: the pure transition function, one handler per action kind
//!
//! # Examples
//!
//! ```rust
//! use std::sync::{
//!     atomic::{AtomicUsize, Ordering},
//!     Arc,
//! };
//!
//! use pathway_core::store::{Action, Store};
//!
//! let renders = Arc::new(AtomicUsize::new(0));
//! let counter = renders.clone();
//!
//! let mut store = Store::new();
//! store.subscribe(move |_doc| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert!(store.dispatch(Action::add_tag("rust")));
//! assert!(!store.dispatch(Action::remove_tag("python")));
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! assert_eq!(store.state().pathway_tags, vec!["rust".to_string()]);
//! ```

use std::{borrow::Cow, fmt, sync::Arc};

use log::debug;

use crate::models::PathwayDocument;

pub mod action;
pub mod reducer;


pub use action::Action;
pub use reducer::reduce;

/// Callback invoked with the new document after every changing dispatch.
pub type Listener = Box<dyn Fn(&PathwayDocument) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-owner state container for one editing session.
///
/// The current document is held behind an [`Arc`] so readers can keep a
/// snapshot while the store moves on. A dispatch that changes nothing keeps
/// the very same snapshot.
pub struct Store {
    state: Arc<PathwayDocument>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Creates a store holding an empty document for a new pathway.
    pub fn new() -> Self {
        Self::with_document(PathwayDocument::default())
    }

    /// Creates a store around an existing document.
    pub fn with_document(document: PathwayDocument) -> Self {
        Self {
            state: Arc::new(document),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns a snapshot of the current document.
    pub fn state(&self) -> Arc<PathwayDocument> {
        Arc::clone(&self.state)
    }

    /// Reduces `action` over the current document.
    ///
    /// Returns `true` and notifies subscribers in registration order when
    /// the document changed, `false` otherwise.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = match reduce(&self.state, &action) {
            Cow::Borrowed(_) => {
                debug!("{} left the document unchanged", action.kind());
                return false;
            }
            Cow::Owned(next) => next,
        };

        debug!("{} applied", action.kind());
        self.state = Arc::new(next);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        true
    }

    /// Registers a listener for document changes.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&PathwayDocument) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
