//! Backend persisting pathways to a local SQLite file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::task;

use super::PathwayBackend;
use crate::{
    db::Database,
    error::{PathwayError, Result},
    models::{ContentUpsert, PathwayPayload, PathwaySummary, PathwayUpsert},
};

/// Local SQLite backend.
///
/// Each call opens a connection on the blocking pool, so the backend itself
/// holds nothing but the database path.
#[derive(Debug, Clone)]
pub struct SqliteBackend {
    db_path: PathBuf,
}

impl SqliteBackend {
    /// Opens the backend on `path`, or on the XDG data file
    /// `$XDG_DATA_HOME/pathway/pathway.db` when no path is given.
    ///
    /// Missing parent directories are created and the schema is set up
    /// before the backend is returned.
    ///
    /// # Errors
    ///
    /// Returns `PathwayError::XdgDirectory` if the data directory cannot be
    /// resolved, `PathwayError::FileSystem` if the parent directory cannot be
    /// created, or `PathwayError::Database` if the schema cannot be applied.
    pub async fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let db_path = match path {
            Some(path) => path.as_ref().to_path_buf(),
            None => xdg::BaseDirectories::with_prefix("pathway")
                .place_data_file("pathway.db")
                .map_err(|e| PathwayError::XdgDirectory(e.to_string()))?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PathwayError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let backend = Self { db_path };
        backend.with_database(|_| Ok(())).await?;
        debug!("Opened pathway database {}", backend.db_path.display());
        Ok(backend)
    }

    /// Path of the underlying database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(PathwayError::join)?
    }
}

#[async_trait]
impl PathwayBackend for SqliteBackend {
    async fn fetch_pathway(&self, id: &str) -> Result<Option<PathwayPayload>> {
        debug!("fetch_pathway: {id}");
        let id = id.to_string();
        self.with_database(move |db| db.get_pathway(&id)).await
    }

    async fn list_pathways(&self) -> Result<Vec<PathwaySummary>> {
        self.with_database(|db| db.list_pathways()).await
    }

    async fn upsert_pathway(&self, upsert: &PathwayUpsert) -> Result<()> {
        debug!("upsert_pathway: {} ({} steps)", upsert.id, upsert.steps.len());
        let upsert = upsert.clone();
        self.with_database(move |db| db.upsert_pathway(&upsert)).await
    }

    async fn upsert_content(&self, content: &ContentUpsert) -> Result<()> {
        debug!("upsert_content: {}", content.id);
        let content = content.clone();
        self.with_database(move |db| db.upsert_content(&content)).await
    }

    async fn detach_step(&self, pathway_id: &str, step_id: &str) -> Result<()> {
        debug!("detach_step: {step_id} from {pathway_id}");
        let pathway_id = pathway_id.to_string();
        let step_id = step_id.to_string();
        self.with_database(move |db| db.detach_step(&pathway_id, &step_id))
            .await
    }

    async fn delete_pathway(&self, id: &str) -> Result<bool> {
        debug!("delete_pathway: {id}");
        let id = id.to_string();
        self.with_database(move |db| db.delete_pathway(&id)).await
    }
}
