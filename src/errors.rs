/*!
 * Error types for the dialect translator.
 *
 * Every failure a translation request can run into falls into one of three
 * kinds: invalid input, a failed call to the hosted model, or a failed read or
 * write against the history table. The controller receives them wrapped in
 * `TranslationError` and decides how each one is shown.
 */

use thiserror::Error;

/// Errors that can occur when calling the hosted language model
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting or exhausted quota
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The model answered without any text
    #[error("API returned an empty response")]
    EmptyResponse,
}

/// Errors raised by the history store
#[derive(Error, Debug)]
pub enum StorageError {
    /// A statement against the history table failed
    #[error("Database error: {0}")]
    Database(String),

    /// A stored row could not be mapped back into a record
    #[error("Corrupt history row {id}: {message}")]
    CorruptRow {
        /// Row id
        id: i64,
        /// What was wrong with it
        message: String,
    },
}

impl From<anyhow::Error> for StorageError {
    fn from(error: anyhow::Error) -> Self {
        Self::Database(format!("{:#}", error))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error.to_string())
    }
}

/// Errors for user input that cannot be translated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace was submitted
    #[error("Please enter some text!")]
    EmptyInput,

    /// The language pair label is not one we offer
    #[error("Unknown language pair: {0}")]
    UnknownLanguagePair(String),

    /// The direction label does not belong to the selected pair
    #[error("Direction '{direction}' is not valid for '{language_pair}'")]
    DirectionMismatch {
        /// Selected pair label
        language_pair: String,
        /// Submitted direction label
        direction: String,
    },
}

/// Errors that can occur while handling one translate action
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The input was rejected before any call was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The hosted model call failed
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The translation could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
