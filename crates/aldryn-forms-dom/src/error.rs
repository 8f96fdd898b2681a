//! Error types for DOM access

use thiserror::Error;

/// Selector parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
	/// Empty selector or empty entry in a selector list
	#[error("Empty selector in '{0}'")]
	Empty(String),

	/// `[` without matching `]`
	#[error("Unterminated attribute selector in '{0}'")]
	Unterminated(String),

	/// Syntax outside the supported subset
	#[error("Unsupported selector '{selector}': {detail}")]
	Unsupported {
		/// Full selector text
		selector: String,
		/// What was not understood
		detail: String,
	},
}

/// DOM operation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
	/// The node is not attached to the document or was removed
	#[error("Node is detached: {0}")]
	Detached(String),

	/// The node does not support the requested operation
	#[error("Unsupported operation '{operation}' on <{tag}>")]
	UnsupportedOperation {
		/// Operation name (e.g. `set_files`)
		operation: &'static str,
		/// Tag name of the node
		tag: String,
	},

	/// Markup passed to the in-memory parser is malformed
	#[error("Malformed markup at byte {offset}: {reason}")]
	Markup {
		/// Byte offset into the input
		offset: usize,
		/// Description of the problem
		reason: String,
	},

	/// An invalid selector was used
	#[error(transparent)]
	Selector(#[from] SelectorError),

	/// Error raised by the browser
	#[error("Browser error: {0}")]
	Js(String),
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;
