//! In-process backend.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::Mutex;

use super::PathwayBackend;
use crate::{
    error::{PathwayError, Result},
    models::{
        ContentPayload, ContentUpsert, PathwayPayload, PathwaySummary, PathwayUpsert, StepId,
        StepPayload, StepSummary, TagPayload,
    },
};

/// A mutation accepted by a [`MemoryBackend`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRecord {
    Pathway(PathwayUpsert),
    Content(ContentUpsert),
    Detach { pathway_id: String, step_id: StepId },
    Delete(String),
}

#[derive(Debug)]
struct StoredPathway {
    id: String,
    name: String,
    description: String,
    tags: Vec<String>,
    steps: BTreeMap<StepId, StepSummary>,
    updated_at: Timestamp,
}

#[derive(Debug, Default)]
struct MemoryState {
    pathways: BTreeMap<String, StoredPathway>,
    contents: BTreeMap<String, ContentUpsert>,
    log: Vec<MutationRecord>,
    failing: HashSet<String>,
}

impl MemoryState {
    fn check(&self, operation: &str) -> Result<()> {
        if self.failing.contains(operation) {
            return Err(PathwayError::backend(operation, "injected failure"));
        }
        Ok(())
    }
}

/// Backend that keeps everything in memory for the lifetime of the value.
///
/// Every accepted mutation is also recorded so callers can assert on what
/// was sent, and operations can be made to fail with [`fail_on`].
///
/// [`fail_on`]: MemoryBackend::fail_on
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call of `operation` (a trait method name such as
    /// `"upsert_content"`) fail with [`PathwayError::Backend`].
    pub async fn fail_on(&self, operation: &str) {
        self.state.lock().await.failing.insert(operation.to_string());
    }

    /// Clears an injected failure.
    pub async fn recover(&self, operation: &str) {
        self.state.lock().await.failing.remove(operation);
    }

    /// Mutations accepted so far, oldest first.
    pub async fn mutations(&self) -> Vec<MutationRecord> {
        self.state.lock().await.log.clone()
    }
}

#[async_trait]
impl PathwayBackend for MemoryBackend {
    async fn fetch_pathway(&self, id: &str) -> Result<Option<PathwayPayload>> {
        let state = self.state.lock().await;
        state.check("fetch_pathway")?;

        let Some(stored) = state.pathways.get(id) else {
            return Ok(None);
        };

        let mut steps: Vec<StepPayload> = stored
            .steps
            .values()
            .map(|step| StepPayload {
                id: step.id.clone(),
                index: step.index,
                time: step.time,
                step_type: step.step_type,
                content: state.contents.get(&step.type_id).map(|c| ContentPayload {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    content: c.content.clone(),
                }),
                name: step.name.clone(),
            })
            .collect();
        steps.sort_by_key(|step| step.index);

        Ok(Some(PathwayPayload {
            id: stored.id.clone(),
            name: stored.name.clone(),
            description: stored.description.clone(),
            tags: stored.tags.iter().map(|t| TagPayload::from(t.as_str())).collect(),
            steps,
        }))
    }

    async fn list_pathways(&self) -> Result<Vec<PathwaySummary>> {
        let state = self.state.lock().await;
        state.check("list_pathways")?;

        let mut summaries: Vec<PathwaySummary> = state
            .pathways
            .values()
            .map(|p| PathwaySummary {
                id: p.id.clone(),
                name: p.name.clone(),
                description: p.description.clone(),
                tags: p.tags.clone(),
                total_steps: p.steps.len() as u32,
                updated_at: p.updated_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn upsert_pathway(&self, upsert: &PathwayUpsert) -> Result<()> {
        let mut state = self.state.lock().await;
        state.check("upsert_pathway")?;

        if upsert.id.is_empty() {
            return Err(PathwayError::invalid_input("id").with_reason("Pathway ID cannot be empty"));
        }

        let stored = state
            .pathways
            .entry(upsert.id.clone())
            .or_insert_with(|| StoredPathway {
                id: upsert.id.clone(),
                name: String::new(),
                description: String::new(),
                tags: Vec::new(),
                steps: BTreeMap::new(),
                updated_at: Timestamp::now(),
            });

        stored.name.clone_from(&upsert.name);
        stored.description.clone_from(&upsert.description);
        stored.tags.clone_from(&upsert.tags);
        for step in &upsert.steps {
            stored.steps.insert(step.id.clone(), step.clone());
        }
        stored.updated_at = Timestamp::now();

        state.log.push(MutationRecord::Pathway(upsert.clone()));
        Ok(())
    }

    async fn upsert_content(&self, content: &ContentUpsert) -> Result<()> {
        let mut state = self.state.lock().await;
        state.check("upsert_content")?;

        state.contents.insert(content.id.clone(), content.clone());
        state.log.push(MutationRecord::Content(content.clone()));
        Ok(())
    }

    async fn detach_step(&self, pathway_id: &str, step_id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        state.check("detach_step")?;

        let stored = state
            .pathways
            .get_mut(pathway_id)
            .ok_or_else(|| PathwayError::PathwayNotFound {
                id: pathway_id.to_string(),
            })?;
        stored.steps.remove(step_id);
        stored.updated_at = Timestamp::now();

        state.log.push(MutationRecord::Detach {
            pathway_id: pathway_id.to_string(),
            step_id: step_id.to_string(),
        });
        Ok(())
    }

    async fn delete_pathway(&self, id: &str) -> Result<bool> {
        let mut state = self.state.lock().await;
        state.check("delete_pathway")?;

        let existed = state.pathways.remove(id).is_some();
        if existed {
            state.log.push(MutationRecord::Delete(id.to_string()));
        }
        Ok(existed)
    }
}
