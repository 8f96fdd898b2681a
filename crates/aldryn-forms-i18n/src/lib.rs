//! Internationalization support for aldryn-forms-web
//!
//! The form enhancement layer never reads translation functions from the page.
//! Instead every component receives a [`Translator`] explicitly. The default
//! implementation is [`MessageCatalog`], which falls back to the message id
//! (and English plural selection) when no translation is registered, exactly
//! like the stub catalog Django ships for pages without `jsi18n`.
//!
//! ## Example
//!
//! ```
//! use aldryn_forms_i18n::{MessageCatalog, Translator, interpolate_named};
//!
//! let catalog = MessageCatalog::new("en");
//! let text = catalog.ngettext(
//!     "You have to choose at least %(value)s option (chosen %(chosen)s).",
//!     "You have to choose at least %(value)s options (chosen %(chosen)s).",
//!     2,
//! );
//! let text = interpolate_named(&text, &[("value", "2"), ("chosen", "1")]);
//! assert_eq!(text, "You have to choose at least 2 options (chosen 1).");
//! ```

pub mod catalog;
pub mod error;
pub mod interpolate;
pub mod plural;
pub mod translator;

pub use catalog::MessageCatalog;
pub use error::{TranslationError, TranslationResult};
pub use interpolate::{interpolate_named, interpolate_positional};
pub use plural::PluralRule;
pub use translator::Translator;
