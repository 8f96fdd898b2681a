//! Form runtime and behavior components

pub use aldryn_forms_client::*;
