//! `interpolate()` equivalents for translated format strings
//!
//! Django's JavaScript catalog formats messages with printf-like
//! placeholders: `%(name)s` for named arguments and `%s` for positional ones.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static NAMED_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"%\((\w+)\)s").expect("NAMED_PLACEHOLDER: invalid regex pattern")
});

/// Replaces every `%(name)s` placeholder with the matching argument
///
/// A placeholder without a matching entry in `args` becomes an empty string,
/// so a faulty translation degrades the message instead of the page.
///
/// # Example
///
/// ```
/// use aldryn_forms_i18n::interpolate_named;
///
/// let text = interpolate_named("chosen %(chosen)s of %(value)s", &[("value", "3"), ("chosen", "1")]);
/// assert_eq!(text, "chosen 1 of 3");
/// ```
pub fn interpolate_named(fmt: &str, args: &[(&str, &str)]) -> String {
	NAMED_PLACEHOLDER
		.replace_all(fmt, |caps: &Captures<'_>| {
			let key = &caps[1];
			match args.iter().find(|(name, _)| *name == key) {
				Some((_, value)) => (*value).to_string(),
				None => {
					tracing::warn!("missing interpolation argument '{}' in {:?}", key, fmt);
					String::new()
				}
			}
		})
		.into_owned()
}

/// Replaces `%s` placeholders from left to right with `args`
///
/// Placeholders beyond the last argument become empty strings.
pub fn interpolate_positional(fmt: &str, args: &[&str]) -> String {
	let pieces: Vec<&str> = fmt.split("%s").collect();
	let expected = pieces.len() - 1;
	if expected > args.len() {
		tracing::warn!(
			"{:?} expects {} positional arguments, got {}",
			fmt,
			expected,
			args.len()
		);
	}

	let mut out = String::with_capacity(fmt.len());
	for (index, piece) in pieces.iter().enumerate() {
		out.push_str(piece);
		if index < expected {
			out.push_str(args.get(index).copied().unwrap_or_default());
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_interpolate_named_replaces_all() {
		// Act
		let text = interpolate_named(
			"You have to choose at least %(value)s options (chosen %(chosen)s).",
			&[("value", "3"), ("chosen", "1")],
		);

		// Assert
		assert_eq!(text, "You have to choose at least 3 options (chosen 1).");
	}

	#[rstest]
	fn test_interpolate_named_missing_argument_is_blank() {
		// Act
		let text = interpolate_named("%(value)s and %(other)s", &[("value", "3")]);

		// Assert
		assert_eq!(text, "3 and ");
	}

	#[rstest]
	#[case("Max. %s files with a total size of max. %s", &["3", "2 MB"], "Max. 3 files with a total size of max. 2 MB")]
	#[case("no placeholders", &[], "no placeholders")]
	#[case("%s", &["a", "unused"], "a")]
	#[case("Max. %s Datei (%s) %s", &["1", "2 kB"], "Max. 1 Datei (2 kB) ")]
	fn test_interpolate_positional(
		#[case] fmt: &str,
		#[case] args: &[&str],
		#[case] expected: &str,
	) {
		// Act
		let text = interpolate_positional(fmt, args);

		// Assert
		assert_eq!(text, expected);
	}
}
