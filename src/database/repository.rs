/*!
 * Repository layer for the translation history.
 */

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use rusqlite::{params, Connection};

use super::connection::DatabaseConnection;
use super::models::{TranslationRecord, TranslationRow};
use super::HistoryStore;
use crate::errors::StorageError;
use crate::language::{LanguagePair, TranslationRoute};

/// SQLite-backed history store
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::open_in_memory()?;
        Ok(Self::new(db))
    }

    /// The underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the underlying connection
    pub fn close(self) -> Result<()> {
        self.db.close()
    }

    fn insert_sync(
        conn: &Connection,
        route: TranslationRoute,
        input_text: &str,
        output_text: &str,
    ) -> Result<i64> {
        conn.execute(
            r#"
            INSERT INTO translations (language_pair, direction, input_text, output_text)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                route.pair.label(),
                route.direction_label(),
                input_text,
                output_text
            ],
        )
        .context("Failed to insert translation")?;

        Ok(conn.last_insert_rowid())
    }

    fn recent_rows_sync(
        conn: &Connection,
        pair: LanguagePair,
        limit: usize,
    ) -> Result<Vec<TranslationRow>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, language_pair, direction, input_text, output_text, timestamp
            FROM translations
            WHERE language_pair = ?1
            ORDER BY timestamp DESC, id DESC
            LIMIT ?2
            "#,
        )?;

        let rows = stmt
            .query_map(params![pair.label(), limit as i64], |row| {
                Ok(TranslationRow {
                    id: row.get(0)?,
                    language_pair: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    direction: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    input_text: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    output_text: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    created_at: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read recent translations")?;

        Ok(rows)
    }

    fn into_record(row: TranslationRow) -> Result<TranslationRecord, StorageError> {
        let id = row.id;
        let corrupt = |message: String| StorageError::CorruptRow { id, message };

        let pair: LanguagePair = row
            .language_pair
            .parse()
            .map_err(|e: crate::errors::ValidationError| corrupt(e.to_string()))?;
        let route = TranslationRoute::from_labels(pair, &row.direction)
            .map_err(|e| corrupt(e.to_string()))?;

        Ok(TranslationRecord {
            id,
            route,
            input_text: row.input_text,
            output_text: row.output_text,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl HistoryStore for Repository {
    async fn insert(
        &self,
        route: TranslationRoute,
        input_text: &str,
        output_text: &str,
    ) -> Result<i64, StorageError> {
        let input_text = input_text.to_string();
        let output_text = output_text.to_string();

        let id = self
            .db
            .execute_async(move |conn| Self::insert_sync(conn, route, &input_text, &output_text))
            .await?;

        debug!("Stored translation {} ({})", id, route);
        Ok(id)
    }

    async fn recent_by_pair(
        &self,
        pair: LanguagePair,
        limit: usize,
    ) -> Result<Vec<TranslationRecord>, StorageError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let rows = self
            .db
            .execute_async(move |conn| Self::recent_rows_sync(conn, pair, limit))
            .await?;

        // Rows with labels we do not know are left out, not fatal
        let records = rows
            .into_iter()
            .filter_map(|row| match Self::into_record(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping history row: {}", e);
                    None
                }
            })
            .collect();

        Ok(records)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let deleted = self
            .db
            .execute_async(move |conn| {
                let count = conn
                    .execute("DELETE FROM translations WHERE id = ?1", params![id])
                    .context("Failed to delete translation")?;
                Ok(count)
            })
            .await?;

        debug!("Delete of translation {} removed {} row(s)", id, deleted);
        Ok(())
    }
}
