//! Error types for catalog loading

use thiserror::Error;

/// Translation error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
	/// The catalog payload could not be decoded
	#[error("Invalid catalog: {0}")]
	InvalidCatalog(String),
}

/// Result type for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;
