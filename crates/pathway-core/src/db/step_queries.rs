//! Step and linked-content queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Transaction};

use crate::{
    error::{DatabaseResultExt, PathwayError, Result},
    models::{ContentPayload, ContentUpsert, StepPayload, StepSummary, StepType},
};

const UPSERT_STEP_SQL: &str = "INSERT INTO steps (id, pathway_id, name, time, step_index, step_type, type_id, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) ON CONFLICT(id) DO UPDATE SET pathway_id = excluded.pathway_id, name = excluded.name, time = excluded.time, step_index = excluded.step_index, step_type = excluded.step_type, type_id = excluded.type_id, updated_at = excluded.updated_at";
const SELECT_STEPS_BY_PATHWAY_SQL: &str = "SELECT s.id, s.step_index, s.time, s.step_type, s.name, c.id, c.title, c.content FROM steps s LEFT JOIN contents c ON c.id = s.type_id AND s.type_id <> '' WHERE s.pathway_id = ?1 ORDER BY s.step_index, s.id";
const CHECK_PATHWAY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM pathways WHERE id = ?1)";
const DELETE_STEP_SQL: &str = "DELETE FROM steps WHERE id = ?1 AND pathway_id = ?2";
const UPDATE_PATHWAY_TIMESTAMP_SQL: &str = "UPDATE pathways SET updated_at = ?1 WHERE id = ?2";
const UPSERT_CONTENT_SQL: &str = "INSERT INTO contents (id, title, content, updated_at) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(id) DO UPDATE SET title = excluded.title, content = excluded.content, updated_at = excluded.updated_at";

impl super::Database {
    /// Helper function to construct a StepPayload from a joined row
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<StepPayload> {
        let type_str: String = row.get(3)?;
        let step_type = type_str.parse::<StepType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid step type: {type_str}").into(),
            )
        })?;

        let content = match row.get::<_, Option<String>>(5)? {
            Some(id) => Some(ContentPayload {
                id,
                title: row.get(6)?,
                content: row.get(7)?,
            }),
            None => None,
        };

        Ok(StepPayload {
            id: row.get(0)?,
            index: row.get::<_, i64>(1)? as usize,
            time: row.get::<_, i64>(2)? as u32,
            step_type,
            content,
            name: row.get(4)?,
        })
    }

    /// Inserts or updates one step row inside an open transaction.
    pub(super) fn upsert_step(
        tx: &Transaction<'_>,
        pathway_id: &str,
        step: &StepSummary,
        now_str: &str,
    ) -> Result<()> {
        tx.execute(
            UPSERT_STEP_SQL,
            params![
                &step.id,
                pathway_id,
                &step.name,
                i64::from(step.time),
                step.index as i64,
                step.step_type.as_str(),
                &step.type_id,
                now_str
            ],
        )
        .db_context("Failed to upsert step")?;
        Ok(())
    }

    /// Retrieves all steps of a pathway with their linked content.
    pub fn get_steps(&self, pathway_id: &str) -> Result<Vec<StepPayload>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_BY_PATHWAY_SQL)
            .db_context("Failed to prepare query")?;

        let steps = stmt
            .query_map(params![pathway_id], Self::build_step_from_row)
            .db_context("Failed to query steps")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read step row")?;
        Ok(steps)
    }

    /// Removes a step from a pathway. Removing a step the pathway does not
    /// hold is not an error.
    pub fn detach_step(&mut self, pathway_id: &str, step_id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PATHWAY_EXISTS_SQL, params![pathway_id], |row| row.get(0))
            .db_context("Failed to check pathway existence")?;
        if !exists {
            return Err(PathwayError::PathwayNotFound {
                id: pathway_id.to_string(),
            });
        }

        tx.execute(DELETE_STEP_SQL, params![step_id, pathway_id])
            .db_context("Failed to delete step")?;
        tx.execute(
            UPDATE_PATHWAY_TIMESTAMP_SQL,
            params![Timestamp::now().to_string(), pathway_id],
        )
        .db_context("Failed to update pathway timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Creates or replaces the written content of a content step.
    pub fn upsert_content(&mut self, content: &ContentUpsert) -> Result<()> {
        if content.id.trim().is_empty() {
            return Err(PathwayError::invalid_input("id").with_reason("Content ID cannot be empty"));
        }

        self.connection
            .execute(
                UPSERT_CONTENT_SQL,
                params![
                    &content.id,
                    &content.title,
                    &content.content,
                    Timestamp::now().to_string()
                ],
            )
            .db_context("Failed to upsert content")?;
        Ok(())
    }
}
