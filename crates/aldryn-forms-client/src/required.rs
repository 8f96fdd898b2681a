//! Minimum-selection validation of `.form-required` checkbox groups

use aldryn_forms_dom::Dom;
use aldryn_forms_i18n::{Translator, interpolate_named};

use crate::error::{FormsError, FormsResult};
use crate::guard;
use crate::markup;
use crate::message;
use crate::options::FormOptions;

const CHOOSE_SINGULAR: &str = "You have to choose at least %(value)s option (chosen %(chosen)s).";
const CHOOSE_PLURAL: &str = "You have to choose at least %(value)s options (chosen %(chosen)s).";
const CORRECT_ERRORS: &str = "Correct the errors first, please.";

/// A group with fewer checked boxes than required
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
	/// `data-required_min`
	pub required: i64,
	/// Checked boxes in the group
	pub chosen: usize,
}

/// Leading integer of `value`, the way `parseInt` reads it
fn parse_min(value: &str) -> Option<i64> {
	let value = value.trim_start();
	let (sign, digits) = match value.strip_prefix('-') {
		Some(rest) => (-1, rest),
		None => (1, value.strip_prefix('+').unwrap_or(value)),
	};
	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Groups of `form` whose checked count is below their minimum
///
/// Groups without a parsable `data-required_min` are ignored.
pub fn shortfalls<D: Dom>(dom: &D, form: &D::Node) -> Vec<(D::Node, Shortfall)> {
	dom.query_all(form, &markup::REQUIRED_GROUP)
		.into_iter()
		.filter_map(|group| {
			let required = parse_min(&dom.data(&group, "required_min")?)?;
			let chosen = dom.query_all(&group, &markup::CHECKED_CHECKBOXES).len();
			let short = i64::try_from(chosen).is_ok_and(|chosen| chosen < required);
			short.then_some((group, Shortfall { required, chosen }))
		})
		.collect()
}

/// Localized shortfall message
pub fn shortfall_message(i18n: &dyn Translator, shortfall: &Shortfall) -> String {
	let count = usize::try_from(shortfall.required).unwrap_or_default();
	let template = i18n.ngettext(CHOOSE_SINGULAR, CHOOSE_PLURAL, count);
	let value = shortfall.required.to_string();
	let chosen = shortfall.chosen.to_string();
	interpolate_named(
		&template,
		&[("value", value.as_str()), ("chosen", chosen.as_str())],
	)
}

/// Checks every group of `form` and paints the outcome
///
/// Returns `false` when a group is short; the form must not be submitted.
pub fn validate<D: Dom>(
	dom: &D,
	i18n: &dyn Translator,
	form: &D::Node,
	options: &FormOptions,
) -> FormsResult<bool> {
	message::remove_all(dom, form, &markup::CYCLE_MESSAGES)?;
	let shortfalls = shortfalls(dom, form);
	for (group, shortfall) in &shortfalls {
		let text = shortfall_message(i18n, shortfall);
		let node = message::notice(dom, markup::REQUIRED_MSG, &text)?;
		dom.insert_after(group, &node)?;
	}
	if shortfalls.is_empty() {
		guard::insert_wait_message(dom, i18n, form, options)?;
		Ok(true)
	} else {
		aldryn_forms_dom::debug_log!("{} checkbox group(s) below their minimum", shortfalls.len());
		let text = i18n.gettext(CORRECT_ERRORS);
		message::notice_after_buttons(dom, form, markup::SUBMIT_MSG, &text)?;
		Ok(false)
	}
}

/// Click on a group checkbox: clears the messages of the last attempt and
/// unlocks the submit buttons
pub fn clear_on_checkbox<D: Dom>(dom: &D, checkbox: &D::Node) -> FormsResult<()> {
	let form = dom
		.closest(checkbox, &markup::FORM)
		.ok_or_else(|| FormsError::NoForm(dom.tag_name(checkbox)))?;
	message::remove_all(dom, &form, &markup::CYCLE_MESSAGES)?;
	guard::unlock_buttons(dom, &form)
}

#[cfg(test)]
mod tests {
	use super::*;
	use aldryn_forms_dom::MemoryDom;
	use aldryn_forms_i18n::MessageCatalog;
	use rstest::rstest;

	use crate::settings::FormsSettings;

	fn group_form(min: &str, checked: usize) -> String {
		let boxes: String = (0..3)
			.map(|i| {
				let state = if i < checked { " checked" } else { "" };
				format!(r#"<input type="checkbox" name="c" value="{}"{}>"#, i, state)
			})
			.collect();
		format!(
			r#"<form id="f"><div id="g" class="form-required" data-required_min="{}">{}</div><button type="submit">Send</button></form>"#,
			min, boxes
		)
	}

	#[rstest]
	#[case("2", Some(2))]
	#[case(" 3px", Some(3))]
	#[case("-1", Some(-1))]
	#[case("abc", None)]
	#[case("", None)]
	fn test_parse_min(#[case] input: &str, #[case] expected: Option<i64>) {
		// Act / Assert
		assert_eq!(parse_min(input), expected);
	}

	#[rstest]
	#[case(1, "You have to choose at least 1 option (chosen 0).")]
	#[case(2, "You have to choose at least 2 options (chosen 0).")]
	fn test_shortfall_message(#[case] required: i64, #[case] expected: &str) {
		// Arrange
		let shortfall = Shortfall {
			required,
			chosen: 0,
		};

		// Act
		let text = shortfall_message(&MessageCatalog::default(), &shortfall);

		// Assert
		assert_eq!(text, expected);
	}

	#[rstest]
	fn test_unparsable_minimum_is_ignored() {
		// Arrange
		let dom = MemoryDom::parse(&group_form("many", 0)).unwrap();
		let form = dom.by_id("f").unwrap();

		// Act / Assert
		assert!(shortfalls(&dom, &form).is_empty());
	}

	#[rstest]
	fn test_validate_then_clear() {
		// Arrange
		let dom = MemoryDom::parse(&group_form("2", 1)).unwrap();
		let form = dom.by_id("f").unwrap();
		let options = FormOptions::from_form(&dom, &form, &FormsSettings::default());
		let i18n = MessageCatalog::default();

		// Act
		let valid = validate(&dom, &i18n, &form, &options).unwrap();

		// Assert
		assert!(!valid);
		let group = dom.by_id("g").unwrap();
		let message = dom.next_element_sibling(&group).unwrap();
		assert!(dom.has_class(&message, markup::REQUIRED_MSG));
		assert_eq!(dom.select(".aldryn-forms-submit-msg").unwrap().len(), 1);

		let checkbox = dom.select("input[type=checkbox]").unwrap()[2];
		clear_on_checkbox(&dom, &checkbox).unwrap();
		assert!(dom.select(".aldryn-forms-required-msg").unwrap().is_empty());
		assert!(dom.select(".aldryn-forms-submit-msg").unwrap().is_empty());
	}
}
