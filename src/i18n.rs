//! Message catalogs and plural rules
//!
//! Translations arrive in the Django JavaScript catalog format inside the
//! settings script of the page.

pub use aldryn_forms_i18n::*;
