//! Pathway upserts, lookups and listing.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PathwayError, Result},
    models::{PathwayPayload, PathwaySummary, PathwayUpsert, TagPayload},
};

const UPSERT_PATHWAY_SQL: &str = "INSERT INTO pathways (id, name, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) ON CONFLICT(id) DO UPDATE SET name = excluded.name, description = excluded.description, updated_at = excluded.updated_at";
const DELETE_TAGS_SQL: &str = "DELETE FROM pathway_tags WHERE pathway_id = ?1";
const INSERT_TAG_SQL: &str =
    "INSERT INTO pathway_tags (pathway_id, position, name) VALUES (?1, ?2, ?3)";
const SELECT_TAGS_SQL: &str =
    "SELECT name FROM pathway_tags WHERE pathway_id = ?1 ORDER BY position";
const SELECT_PATHWAY_SQL: &str = "SELECT id, name, description FROM pathways WHERE id = ?1";
const SELECT_SUMMARIES_SQL: &str = "SELECT p.id, p.name, p.description, p.updated_at, (SELECT COUNT(*) FROM steps s WHERE s.pathway_id = p.id) FROM pathways p ORDER BY p.updated_at DESC, p.id";
const DELETE_PATHWAY_STEPS_SQL: &str = "DELETE FROM steps WHERE pathway_id = ?1";
const DELETE_PATHWAY_SQL: &str = "DELETE FROM pathways WHERE id = ?1";

impl super::Database {
    /// Creates or updates a pathway in one transaction: metadata, the full
    /// tag list, and every listed step.
    pub fn upsert_pathway(&mut self, upsert: &PathwayUpsert) -> Result<()> {
        if upsert.id.trim().is_empty() {
            return Err(PathwayError::invalid_input("id").with_reason("Pathway ID cannot be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPSERT_PATHWAY_SQL,
            params![&upsert.id, &upsert.name, &upsert.description, &now_str],
        )
        .db_context("Failed to upsert pathway")?;

        tx.execute(DELETE_TAGS_SQL, params![&upsert.id])
            .db_context("Failed to clear pathway tags")?;
        for (position, tag) in upsert.tags.iter().enumerate() {
            tx.execute(INSERT_TAG_SQL, params![&upsert.id, position as i64, tag])
                .db_context("Failed to insert pathway tag")?;
        }

        for step in &upsert.steps {
            Self::upsert_step(&tx, &upsert.id, step, &now_str)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Retrieves a pathway in hydration form, steps ordered by index.
    pub fn get_pathway(&self, id: &str) -> Result<Option<PathwayPayload>> {
        let pathway = self
            .connection
            .query_row(SELECT_PATHWAY_SQL, params![id], |row| {
                Ok(PathwayPayload {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    tags: Vec::new(),
                    steps: Vec::new(),
                })
            })
            .optional()
            .db_context("Failed to query pathway")?;

        let Some(mut pathway) = pathway else {
            return Ok(None);
        };

        pathway.tags = self
            .get_tags(id)?
            .into_iter()
            .map(|name| TagPayload { name })
            .collect();
        pathway.steps = self.get_steps(id)?;

        Ok(Some(pathway))
    }

    /// Lists all pathways, most recently updated first.
    pub fn list_pathways(&self) -> Result<Vec<PathwaySummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(PathwaySummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    tags: Vec::new(),
                    updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?,
                    total_steps: row.get::<_, i64>(4)? as u32,
                })
            })
            .db_context("Failed to list pathways")?;

        let mut summaries = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read pathway row")?;

        for summary in &mut summaries {
            summary.tags = self.get_tags(&summary.id)?;
        }

        Ok(summaries)
    }

    /// Deletes a pathway with its steps and tags.
    pub fn delete_pathway(&mut self, id: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PATHWAY_STEPS_SQL, params![id])
            .db_context("Failed to delete pathway steps")?;
        tx.execute(DELETE_TAGS_SQL, params![id])
            .db_context("Failed to delete pathway tags")?;
        let deleted = tx
            .execute(DELETE_PATHWAY_SQL, params![id])
            .db_context("Failed to delete pathway")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }

    fn get_tags(&self, pathway_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TAGS_SQL)
            .db_context("Failed to prepare query")?;

        let tags = stmt
            .query_map(params![pathway_id], |row| row.get(0))
            .db_context("Failed to query tags")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read tag row")?;
        Ok(tags)
    }
}
