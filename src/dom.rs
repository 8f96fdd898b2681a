//! DOM abstraction
//!
//! [`MemoryDom`] backs native tests, `WebDom` the browser document.

pub use aldryn_forms_dom::*;
