/*!
 * Tests for error types and their conversions
 */

use dialect_translator::errors::{
    ProviderError, StorageError, TranslationError, ValidationError,
};

#[test]
fn test_providerError_display_shouldDescribeFailure() {
    let error = ProviderError::ApiError {
        status_code: 400,
        message: "API key not valid".to_string(),
    };
    assert_eq!(error.to_string(), "API responded with error: 400 - API key not valid");

    assert_eq!(
        ProviderError::EmptyResponse.to_string(),
        "API returned an empty response"
    );
}

#[test]
fn test_translationError_fromProvider_shouldWrapMessage() {
    let error: TranslationError = ProviderError::ConnectionError("refused".to_string()).into();
    assert!(matches!(error, TranslationError::Provider(_)));
    assert_eq!(error.to_string(), "Provider error: Connection error: refused");
}

#[test]
fn test_translationError_fromStorage_shouldWrapMessage() {
    let error: TranslationError = StorageError::Database("locked".to_string()).into();
    assert_eq!(error.to_string(), "Storage error: Database error: locked");
}

#[test]
fn test_validationError_directionMismatch_shouldNameBoth() {
    let error = ValidationError::DirectionMismatch {
        language_pair: "English ⇄ Hokkien".to_string(),
        direction: "English → Teochew".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("English ⇄ Hokkien"));
    assert!(message.contains("English → Teochew"));
}

#[test]
fn test_storageError_fromRusqlite_shouldBecomeDatabase() {
    let error: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(error, StorageError::Database(_)));
}
