//! Plan document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Transaction};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{Plan, PlanFilter, PlanStatus},
};

// Document queries as const strings
const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (status, updated_at, document) VALUES (?1, ?2, ?3)";
const SELECT_PLAN_SQL: &str = "SELECT document FROM plans WHERE id = ?1";
const UPDATE_PLAN_SQL: &str =
    "UPDATE plans SET status = ?1, updated_at = ?2, document = ?3 WHERE id = ?4";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";
const SELECT_PLANS_BASE_SQL: &str = "SELECT document FROM plans";

impl super::Database {
    /// Persists a new plan document and assigns its store ID.
    ///
    /// The inserted row's ID is written back into the document so the
    /// embedded `id` field and the row always agree.
    pub fn create_plan(&mut self, plan: &Plan) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated_str = plan.updated_at.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![plan.status.as_str(), &updated_str, "{}"],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let mut stored = plan.clone();
        stored.id = tx.last_insert_rowid() as u64;

        let document = serde_json::to_string(&stored)?;
        tx.execute(
            UPDATE_PLAN_SQL,
            params![
                stored.status.as_str(),
                &updated_str,
                &document,
                stored.id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to store plan document", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let document: Option<String> = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        match document {
            Some(document) => {
                let mut plan: Plan = serde_json::from_str(&document)?;
                plan.id = id;
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    /// Lists all plans with optional status filtering, most recently
    /// updated first.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<Plan>> {
        let mut sql = SELECT_PLANS_BASE_SQL.to_string();
        let mut status_param: Option<&'static str> = None;

        if let Some(filter) = filter {
            if let Some(status) = filter.status {
                sql.push_str(" WHERE status = ?1");
                status_param = Some(status.as_str());
            } else if !filter.include_archived {
                sql.push_str(" WHERE status != ?1");
                status_param = Some(PlanStatus::Archived.as_str());
            }
        }
        sql.push_str(" ORDER BY updated_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let documents: Vec<String> = match status_param {
            Some(status) => stmt
                .query_map(params![status], |row| row.get(0))
                .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
                .collect::<rusqlite::Result<_>>()
                .db_context("Failed to read plan rows")?,
            None => stmt
                .query_map([], |row| row.get(0))
                .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
                .collect::<rusqlite::Result<_>>()
                .db_context("Failed to read plan rows")?,
        };

        documents
            .iter()
            .map(|document| serde_json::from_str(document).map_err(Into::into))
            .collect()
    }

    /// Replaces a plan's whole document, bumping its update timestamp.
    pub fn update_plan(&mut self, plan: &Plan) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let stored = Self::store_plan(&tx, plan)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(stored)
    }

    /// Permanently deletes a plan and, by construction, every embedded day
    /// and activity.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let changed = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        if changed == 0 {
            return Err(PlannerError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Loads a plan document inside a transaction, surfacing not-found.
    pub(super) fn load_plan(tx: &Transaction<'_>, id: u64) -> Result<Plan> {
        let document: Option<String> = tx
            .query_row(SELECT_PLAN_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        let document = document.ok_or(PlannerError::PlanNotFound { id })?;
        let mut plan: Plan = serde_json::from_str(&document)?;
        plan.id = id;
        Ok(plan)
    }

    /// Writes a plan document back inside a transaction with a fresh
    /// update timestamp.
    pub(super) fn store_plan(tx: &Transaction<'_>, plan: &Plan) -> Result<Plan> {
        let mut stored = plan.clone();
        stored.updated_at = Timestamp::now();

        let document = serde_json::to_string(&stored)?;
        let changed = tx
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    stored.status.as_str(),
                    stored.updated_at.to_string(),
                    &document,
                    stored.id as i64
                ],
            )
            .map_err(|e| PlannerError::database_error("Failed to store plan document", e))?;

        if changed == 0 {
            return Err(PlannerError::PlanNotFound { id: stored.id });
        }
        Ok(stored)
    }
}
