use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::database::{HistoryStore, TranslationRecord};
use crate::errors::{ProviderError, StorageError, TranslationError, ValidationError};
use crate::language::{LanguagePair, TranslationRoute};
use crate::providers::TranslationClient;
use crate::translation::{build_prompt, extract_summary};

// @module: Interaction controller for the translator form

/// A completed and stored translation
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// Id of the new history record
    pub id: i64,
    pub route: TranslationRoute,
    /// Input as stored, trimmed
    pub input_text: String,
    /// Model output exactly as returned
    pub output_text: String,
}

/// What the page shows after a translate action
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Translation succeeded; the output is rendered as markup
    Translated(String),
    /// Input rejected, nothing was called or stored
    Warning(String),
    /// The call or the save failed
    Error(String),
}

/// One row of the recent translations panel
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub direction: &'static str,
    pub input_text: String,
    /// Output reduced to Words + Pronunciation when it has that layout
    pub summary: String,
}

impl From<TranslationRecord> for HistoryEntry {
    fn from(record: TranslationRecord) -> Self {
        Self {
            id: record.id,
            direction: record.direction_label(),
            summary: extract_summary(&record.output_text),
            input_text: record.input_text,
        }
    }
}

/// Orchestrates input → prompt → model call → history
#[derive(Clone)]
pub struct Controller {
    // @field: Hosted model client
    client: Arc<dyn TranslationClient>,
    // @field: History store
    store: Arc<dyn HistoryStore>,
    // @field: Rows in the history panel
    history_limit: usize,
}

impl Controller {
    // @method: Create a controller over an explicit client and store
    pub fn new(
        client: Arc<dyn TranslationClient>,
        store: Arc<dyn HistoryStore>,
        history_limit: usize,
    ) -> Self {
        Self {
            client,
            store,
            history_limit,
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Translate `input_text` along `route` and store the result.
    ///
    /// Whitespace-only input fails with `ValidationError::EmptyInput` before
    /// any call. A failed call writes nothing.
    pub async fn translate(
        &self,
        route: TranslationRoute,
        input_text: &str,
    ) -> Result<TranslationOutcome, TranslationError> {
        let input_text = input_text.trim();
        if input_text.is_empty() {
            return Err(ValidationError::EmptyInput.into());
        }

        let prompt = build_prompt(route, input_text);
        debug!("Translating {} chars ({})", input_text.len(), route);

        let output_text = self.client.translate(&prompt).await?;
        let id = self.store.insert(route, input_text, &output_text).await?;

        info!("Translation {} stored ({})", id, route);
        Ok(TranslationOutcome {
            id,
            route,
            input_text: input_text.to_string(),
            output_text,
        })
    }

    /// Run a translate action and turn the result into what the page shows
    pub async fn submit(&self, route: TranslationRoute, input_text: &str) -> Notice {
        match self.translate(route, input_text).await {
            Ok(outcome) => Notice::Translated(outcome.output_text),
            Err(TranslationError::Validation(e)) => {
                debug!("Rejected input: {}", e);
                Notice::Warning(e.to_string())
            }
            Err(TranslationError::Provider(e)) => {
                error!("Translation call failed: {}", e);
                Notice::Error(format!("Error: {}", e))
            }
            Err(TranslationError::Storage(e)) => {
                error!("Failed to save translation: {}", e);
                Notice::Error(format!("Error: the translation could not be saved ({})", e))
            }
        }
    }

    /// Recent translations for `pair`, or `None` without touching the store
    /// when the panel is hidden.
    pub async fn history_panel(
        &self,
        pair: LanguagePair,
        show_history: bool,
    ) -> Result<Option<Vec<HistoryEntry>>, StorageError> {
        if !show_history {
            return Ok(None);
        }

        let records = self.store.recent_by_pair(pair, self.history_limit).await?;
        Ok(Some(records.into_iter().map(HistoryEntry::from).collect()))
    }

    /// Raw recent records, capped at the panel size
    pub async fn recent_records(
        &self,
        pair: LanguagePair,
        limit: Option<usize>,
    ) -> Result<Vec<TranslationRecord>, StorageError> {
        let limit = limit.unwrap_or(self.history_limit).min(self.history_limit);
        self.store.recent_by_pair(pair, limit).await
    }

    /// Delete one history row
    pub async fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.store.delete_by_id(id).await?;
        info!("Deleted translation {}", id);
        Ok(())
    }

    /// Whether the hosted model currently answers
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.client.health_check().await.inspect_err(|e| {
            warn!("Model health check failed: {}", e);
        })
    }
}
