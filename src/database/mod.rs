/*!
 * Database module for the translation history.
 *
 * One SQLite table of past translations with append, bounded recent lookup
 * per language pair, and delete by id. The controller only sees the
 * `HistoryStore` trait, so tests can put a recording or in-memory store in
 * its place.
 */

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::language::{LanguagePair, TranslationRoute};

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::TranslationRecord;
pub use repository::Repository;

/// Persistent log of past translations
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a record; the store assigns id and timestamp.
    async fn insert(
        &self,
        route: TranslationRoute,
        input_text: &str,
        output_text: &str,
    ) -> Result<i64, StorageError>;

    /// Up to `limit` records of `pair`, newest first. Empty when none match.
    /// Rows whose labels cannot be read are skipped.
    async fn recent_by_pair(
        &self,
        pair: LanguagePair,
        limit: usize,
    ) -> Result<Vec<TranslationRecord>, StorageError>;

    /// Remove a record. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;
}
