//! Per-form options read from classes and `data-*` attributes

use aldryn_forms_dom::Dom;

use crate::markup;
use crate::settings::FormsSettings;

/// Icon URLs after applying per-form overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
	/// `data-icon_trash`
	pub trash: String,
	/// `data-icon_attach`
	pub attach: String,
	/// `data-icon_error`
	pub error: String,
	/// `data-icon_upload`
	pub upload: String,
}

impl From<&FormsSettings> for Icons {
	fn from(settings: &FormsSettings) -> Self {
		Self {
			trash: settings.icon_trash.clone(),
			attach: settings.icon_attach.clone(),
			error: settings.icon_error.clone(),
			upload: settings.icon_upload.clone(),
		}
	}
}

/// Behavior switches of a single form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
	/// Submit buttons stay enabled during submission
	pub skip_disable_submit: bool,
	/// Submit buttons follow the validity of required controls
	pub toggle_submit: bool,
	/// Hook called instead of toggling the buttons (`data-toggle_submit`)
	pub toggle_submit_hook: Option<String>,
	/// Submission goes through the fetch pipeline
	pub submit_by_fetch: bool,
	/// Payload files come from the upload widgets
	pub adjust_uploads: bool,
	/// `.form-required` checkbox groups are checked on submit
	pub validate_checkbox_groups: bool,
	/// `data-message_wait`
	pub message_wait: Option<String>,
	/// `data-run_next`: follow-up handler for successful responses
	pub run_next: Option<String>,
	/// Icon URLs
	pub icons: Icons,
}

impl FormOptions {
	/// Reads the options of `form`, falling back to `settings` for icons
	pub fn from_form<D: Dom>(dom: &D, form: &D::Node, settings: &FormsSettings) -> Self {
		let data = |key: &str| dom.data(form, key).filter(|value| !value.is_empty());
		let defaults = Icons::from(settings);
		Self {
			skip_disable_submit: dom.has_class(form, markup::SKIP_DISABLE_SUBMIT),
			toggle_submit: dom.has_class(form, markup::TOGGLE_SUBMIT),
			toggle_submit_hook: data("toggle_submit"),
			submit_by_fetch: dom.has_class(form, markup::SUBMIT_BY_FETCH),
			adjust_uploads: dom.has_class(form, markup::ADJUST_UPLOADS),
			validate_checkbox_groups: dom
				.attribute(form, markup::NOVALIDATE_CHECKBOX_GROUPS)
				.is_none_or(|value| value.is_empty()),
			message_wait: data("message_wait"),
			run_next: data("run_next"),
			icons: Icons {
				trash: data("icon_trash").unwrap_or(defaults.trash),
				attach: data("icon_attach").unwrap_or(defaults.attach),
				error: data("icon_error").unwrap_or(defaults.error),
				upload: data("icon_upload").unwrap_or(defaults.upload),
			},
		}
	}
}
