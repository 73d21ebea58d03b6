/*!
 * # Dialect Translator
 *
 * A small web tool that translates between English and Hokkien or Teochew
 * with a hosted Gemini model, and keeps a local log of past translations.
 *
 * ## Architecture
 *
 * - `language`: language pairs and the directions valid for each
 * - `translation`: prompt templates and output summary extraction
 * - `providers`: the hosted model client and a mock for tests
 * - `database`: SQLite history store
 * - `app_controller`: translate / history / delete orchestration
 * - `server`: the actix-web page and JSON API
 * - `app_config`: configuration
 * - `errors`: error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod database;
pub mod errors;
pub mod language;
pub mod providers;
pub mod server;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, Notice};
pub use database::{HistoryStore, Repository, TranslationRecord};
pub use errors::{ProviderError, StorageError, TranslationError, ValidationError};
pub use language::{Direction, LanguagePair, TranslationRoute};
pub use providers::TranslationClient;
