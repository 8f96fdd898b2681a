//! Translation capability injected into components

/// Source of translated strings
///
/// Mirrors the `gettext` / `ngettext` pair exposed by Django's JavaScript
/// catalog. Implementations must never fail: an unknown message id is
/// returned untranslated.
pub trait Translator {
	/// Translate a message
	fn gettext(&self, msgid: &str) -> String;

	/// Translate a message whose form depends on `count`
	fn ngettext(&self, singular: &str, plural: &str, count: usize) -> String;
}
