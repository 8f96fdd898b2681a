//! JSON document returned for asynchronous submissions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FetchError;

/// Field name under which form-wide errors are reported
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Server reply to a fetch submission
///
/// ```
/// use aldryn_forms_client::fetch::SubmitResponse;
///
/// let response = SubmitResponse::parse(r#"{"status": "ERROR", "form": {"__all__": ["Too many requests"]}}"#).unwrap();
/// assert!(response.is_error());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
	/// `"ERROR"` for a rejected submission, anything else for success
	#[serde(default)]
	pub status: String,
	/// Error messages per field name (`__all__` for form-wide errors)
	#[serde(default)]
	pub form: Option<BTreeMap<String, Vec<String>>>,
	/// Success message
	#[serde(default)]
	pub message: Option<String>,
	/// Keys not covered above, for follow-up handlers
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl SubmitResponse {
	/// Status value of a rejected submission
	pub const ERROR: &'static str = "ERROR";

	/// Decodes a response body
	///
	/// # Errors
	///
	/// Returns [`FetchError::InvalidResponse`] when the body is not a JSON object
	/// of the expected shape.
	pub fn parse(body: &str) -> Result<Self, FetchError> {
		Ok(serde_json::from_str(body)?)
	}

	/// Whether the server rejected the submission
	pub fn is_error(&self) -> bool {
		self.status == Self::ERROR
	}

	/// Field errors in name order (empty when there are none)
	pub fn field_errors(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.form
			.iter()
			.flatten()
			.map(|(name, messages)| (name.as_str(), messages.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_success_with_extra_keys() {
		// Arrange
		let body = json!({"status": "SUCCESS", "message": "Thank you", "redirect": "/done/"}).to_string();

		// Act
		let response = SubmitResponse::parse(&body).unwrap();

		// Assert
		assert!(!response.is_error());
		assert_eq!(response.message.as_deref(), Some("Thank you"));
		assert_eq!(response.extra.get("redirect"), Some(&json!("/done/")));
		assert_eq!(response.field_errors().count(), 0);
	}

	#[rstest]
	fn test_null_form_is_accepted() {
		// Act
		let response = SubmitResponse::parse(r#"{"status": "ERROR", "form": null}"#).unwrap();

		// Assert
		assert!(response.is_error());
		assert_eq!(response.field_errors().count(), 0);
	}

	#[rstest]
	#[case("<html>Server Error</html>")]
	#[case(r#"{"status": 5}"#)]
	#[case("[]")]
	fn test_invalid_bodies(#[case] body: &str) {
		// Act
		let result = SubmitResponse::parse(body);

		// Assert
		assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
	}
}
