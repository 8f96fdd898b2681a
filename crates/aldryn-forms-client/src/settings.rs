//! Page-wide settings
//!
//! Defaults match the static files shipped with the plugin. A page may
//! override them with a JSON script element:
//!
//! ```html
//! <script type="application/json" id="aldryn-forms-settings">
//!   {"icon_trash": "/static/theme/trash.svg", "locale": "de"}
//! </script>
//! ```

use aldryn_forms_dom::Dom;
use aldryn_forms_i18n::MessageCatalog;
use serde::{Deserialize, Serialize};

use crate::error::{FormsError, FormsResult};
use crate::markup;

/// Icons and texts shared by every form on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsSettings {
	/// Header icon of the admin list toggle
	pub icon_view_link: String,
	/// Remove control of a staged file
	pub icon_trash: String,
	/// Status icon of a valid staged file
	pub icon_attach: String,
	/// Status icon of an invalid staged file
	pub icon_error: String,
	/// Drop-zone icon
	pub icon_upload: String,
	/// Row title while the details are hidden
	pub display_more: String,
	/// Row title while the details are shown
	pub display_less: String,
	/// Title of the admin list header icon
	pub toggle_more_less: String,
	/// Locale used for plural selection
	pub locale: String,
	/// Django `JavaScriptCatalog` entries (`msgid` to text or plural forms)
	pub catalog: Option<serde_json::Value>,
}

impl Default for FormsSettings {
	fn default() -> Self {
		Self {
			icon_view_link: "/static/admin/img/icon-viewlink.svg".to_string(),
			icon_trash: "/static/aldryn_forms/img/trash.svg".to_string(),
			icon_attach: "/static/aldryn_forms/img/attach-file.svg".to_string(),
			icon_error: "/static/aldryn_forms/img/exclamation-mark.svg".to_string(),
			icon_upload: "/static/aldryn_forms/img/upload-one.svg".to_string(),
			display_more: "Display more.".to_string(),
			display_less: "Display less.".to_string(),
			toggle_more_less: "Toggle more/less.".to_string(),
			locale: "en".to_string(),
			catalog: None,
		}
	}
}

impl FormsSettings {
	/// Parses settings from JSON; missing keys keep their defaults
	///
	/// # Errors
	///
	/// Returns [`FormsError::Settings`] for malformed JSON.
	pub fn from_json(payload: &str) -> FormsResult<Self> {
		serde_json::from_str(payload).map_err(|e| FormsError::Settings(e.to_string()))
	}

	/// Reads the `#aldryn-forms-settings` script element, if the page has one
	///
	/// # Errors
	///
	/// Returns [`FormsError::Settings`] when the element holds malformed JSON.
	pub fn from_document<D: Dom>(dom: &D) -> FormsResult<Self> {
		match dom.query(&dom.root(), &markup::SETTINGS_SCRIPT) {
			Some(script) => Self::from_json(&dom.text(&script)),
			None => Ok(Self::default()),
		}
	}

	/// Message catalog for [`locale`](Self::locale) filled from [`catalog`](Self::catalog)
	///
	/// # Errors
	///
	/// Returns [`FormsError::Translation`] when the catalog entries are malformed.
	pub fn message_catalog(&self) -> FormsResult<MessageCatalog> {
		match &self.catalog {
			Some(entries) => Ok(MessageCatalog::from_django_catalog(
				&self.locale,
				&entries.to_string(),
			)?),
			None => Ok(MessageCatalog::new(&self.locale)),
		}
	}
}
