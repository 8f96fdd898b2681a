//! `accept` attribute rules

use std::sync::LazyLock;

use regex::Regex;

static EXTENSION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\.\w+$").expect("EXTENSION: invalid regex pattern"));

/// Parsed `accept` attribute of a file input
///
/// # Example
///
/// ```
/// use aldryn_forms_client::upload::AcceptRules;
///
/// let rules = AcceptRules::parse(".pdf,image/*");
/// assert!(rules.matches("Scan.PDF", "application/octet-stream"));
/// assert!(rules.matches("photo", "image/png"));
/// assert!(!rules.matches("report.txt", "text/plain"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptRules {
	extensions: Vec<String>,
	mime_types: Vec<String>,
	major_types: Vec<String>,
}

impl AcceptRules {
	/// Splits `accept` on commas into extensions, MIME types and wildcards
	pub fn parse(accept: &str) -> Self {
		let mut rules = Self::default();
		for token in accept.split(',').map(str::trim).filter(|t| !t.is_empty()) {
			if token.starts_with('.') {
				rules.extensions.push(token.to_lowercase());
			} else {
				match token.split_once('/') {
					Some((major, "*")) => rules.major_types.push(major.to_lowercase()),
					_ => rules.mime_types.push(token.to_lowercase()),
				}
			}
		}
		rules
	}

	/// Whether no rule is set (every file passes)
	pub fn is_empty(&self) -> bool {
		self.extensions.is_empty() && self.mime_types.is_empty() && self.major_types.is_empty()
	}

	/// Whether a file with this name and MIME type is accepted
	pub fn matches(&self, name: &str, mime_type: &str) -> bool {
		if self.is_empty() {
			return true;
		}
		let name = name.to_lowercase();
		if let Some(extension) = EXTENSION.find(&name)
			&& self.extensions.iter().any(|e| e == extension.as_str())
		{
			return true;
		}
		let mime_type = mime_type.to_lowercase();
		if self.mime_types.contains(&mime_type) {
			return true;
		}
		let major = mime_type.split('/').next().unwrap_or_default();
		self.major_types.iter().any(|m| m == major)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("report.pdf", "application/pdf", true)]
	#[case("REPORT.PDF", "", true)]
	#[case("report.txt", "text/plain", false)]
	#[case("photo.jpeg", "image/jpeg", true)]
	#[case("archive.tar.gz", "application/gzip", false)]
	#[case("notes", "text/markdown", true)]
	fn test_matches(#[case] name: &str, #[case] mime: &str, #[case] expected: bool) {
		// Arrange
		let rules = AcceptRules::parse(".pdf, image/*, text/markdown");

		// Act / Assert
		assert_eq!(rules.matches(name, mime), expected);
	}

	#[rstest]
	fn test_parse_buckets() {
		// Act
		let rules = AcceptRules::parse(".PDF,image/*,application/zip");

		// Assert
		assert_eq!(rules.extensions, vec![".pdf"]);
		assert_eq!(rules.major_types, vec!["image"]);
		assert_eq!(rules.mime_types, vec!["application/zip"]);
	}

	proptest! {
		#[test]
		fn prop_empty_rules_accept_everything(name in ".*", mime in "[a-z]{0,8}/?[a-z]{0,8}") {
			prop_assert!(AcceptRules::parse("").matches(&name, &mime));
		}

		#[test]
		fn prop_unlisted_files_are_rejected(stem in "[a-z]{1,8}", ext in "(txt|exe|doc)") {
			let rules = AcceptRules::parse(".pdf,image/*");
			let name = format!("{}.{}", stem, ext);
			prop_assert!(!rules.matches(&name, "application/octet-stream"));
		}
	}
}
