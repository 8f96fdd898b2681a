//! Error types for the form components

use aldryn_forms_dom::DomError;
use aldryn_forms_i18n::TranslationError;
use thiserror::Error;

/// Failure of the asynchronous submit request
///
/// The `Display` text is shown to the user inside the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
	/// The request could not be built or sent
	#[error("{0}")]
	Network(String),

	/// The response body is not the expected JSON document
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
}

impl From<serde_json::Error> for FetchError {
	fn from(error: serde_json::Error) -> Self {
		Self::InvalidResponse(error.to_string())
	}
}

/// Form component error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormsError {
	/// DOM access failed
	#[error(transparent)]
	Dom(#[from] DomError),

	/// A message could not be formatted
	#[error(transparent)]
	Translation(#[from] TranslationError),

	/// Settings payload is malformed
	#[error("Invalid settings: {0}")]
	Settings(String),

	/// The submit request failed
	#[error(transparent)]
	Fetch(#[from] FetchError),

	/// An element expected inside a form is not inside one
	#[error("<{0}> is not inside a form")]
	NoForm(String),
}

/// Result type for form components
pub type FormsResult<T> = Result<T, FormsError>;
