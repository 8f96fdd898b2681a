//! Message catalog for storing translations

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{TranslationError, TranslationResult};
use crate::plural::PluralRule;
use crate::translator::Translator;

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use aldryn_forms_i18n::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Remove file.", "Supprimer le fichier.");
/// catalog.add_plural("file", vec!["fichier", "fichiers"]);
///
/// assert_eq!(catalog.gettext("Remove file."), "Supprimer le fichier.");
/// assert_eq!(catalog.ngettext("file", "files", 0), "fichier");
/// assert_eq!(catalog.ngettext("file", "files", 3), "fichiers");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	rule: PluralRule,
	messages: HashMap<String, String>,
	plurals: HashMap<String, Vec<String>>,
}

impl Default for MessageCatalog {
	fn default() -> Self {
		Self::new("en")
	}
}

impl MessageCatalog {
	/// Create a new, empty message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			rule: PluralRule::for_locale(locale),
			messages: HashMap::new(),
			plurals: HashMap::new(),
		}
	}

	/// Build a catalog from the JSON object served by Django's
	/// `JavaScriptCatalog` view (`{"msgid": "text" | ["form0", "form1", ...]}`)
	///
	/// # Errors
	///
	/// Returns [`TranslationError::InvalidCatalog`] when the payload is not a
	/// JSON object or contains values other than strings and string arrays.
	pub fn from_django_catalog(locale: &str, payload: &str) -> TranslationResult<Self> {
		let value: Value = serde_json::from_str(payload)
			.map_err(|e| TranslationError::InvalidCatalog(e.to_string()))?;
		let entries = value
			.as_object()
			.ok_or_else(|| TranslationError::InvalidCatalog("expected an object".to_string()))?;

		let mut catalog = Self::new(locale);
		for (msgid, entry) in entries {
			match entry {
				Value::String(text) => catalog.add_translation(msgid.as_str(), text.as_str()),
				Value::Array(forms) => {
					let forms = forms
						.iter()
						.map(|form| {
							form.as_str().map(str::to_string).ok_or_else(|| {
								TranslationError::InvalidCatalog(format!(
									"plural forms of '{}' must be strings",
									msgid
								))
							})
						})
						.collect::<TranslationResult<Vec<_>>>()?;
					catalog.plurals.insert(msgid.clone(), forms);
				}
				_ => {
					return Err(TranslationError::InvalidCatalog(format!(
						"unsupported entry for '{}'",
						msgid
					)));
				}
			}
		}
		Ok(catalog)
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Add the plural forms for a singular message id
	pub fn add_plural(&mut self, singular: impl Into<String>, forms: Vec<&str>) {
		self.plurals.insert(
			singular.into(),
			forms.into_iter().map(str::to_string).collect(),
		);
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Get a plural translation
	pub fn get_plural(&self, singular: &str, count: usize) -> Option<&String> {
		self.plurals.get(singular)?.get(self.rule.index(count))
	}
}

impl Translator for MessageCatalog {
	fn gettext(&self, msgid: &str) -> String {
		self.get(msgid)
			.or_else(|| self.plurals.get(msgid).and_then(|forms| forms.first()))
			.cloned()
			.unwrap_or_else(|| msgid.to_string())
	}

	fn ngettext(&self, singular: &str, plural: &str, count: usize) -> String {
		if let Some(text) = self.get_plural(singular, count) {
			return text.clone();
		}
		if let Some(text) = self.get(singular) {
			return text.clone();
		}
		if count == 1 {
			singular.to_string()
		} else {
			plural.to_string()
		}
	}
}
