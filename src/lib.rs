//! # aldryn-forms-web
//!
//! Browser behaviors for forms rendered by the aldryn-forms Django plugin,
//! compiled to WebAssembly.
//!
//! ## Behaviors
//!
//! - **Submit guard**: submit buttons are locked while a form is in flight
//! - **Checkbox groups**: `.form-required` groups enforce `data-required_min`
//! - **Upload widget**: `input[type=file][data-enable_js]` becomes a
//!   drag-and-drop zone with a staged, removable file list
//! - **Fetch submission**: `form.submit-by-fetch` posts through `fetch` and
//!   renders the JSON answer inline
//! - **Toggle submit**: `form.toggle-submit` keeps its buttons disabled until
//!   every required control is valid
//! - **Admin list**: show more/less toggle of the submissions change list
//!
//! ## Feature Flags
//!
//! - `client` (default): the behavior components
//! - `debug-hooks`: verbose `debug_log!` output in debug builds
//! - `console_error_panic_hook`: readable panics in the browser console
//!
//! ## Crates
//!
//! - [`i18n`]: message catalogs and plural rules
//! - [`dom`]: the [`Dom`](dom::Dom) abstraction with memory and browser backends
//! - [`client`]: the form runtime and its components
//!
//! ## Example
//!
//! The runtime runs on any [`Dom`](dom::Dom) backend. In the browser the
//! `web` module wires it to document listeners at module start.
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use aldryn_forms::prelude::*;
//!
//! let dom = Rc::new(MemoryDom::parse(r#"<form class="submit-by-fetch"></form>"#)?);
//! let runtime = FormsRuntime::new(dom, Rc::new(MyTransport));
//! runtime.install()?;
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod dom;
pub mod i18n;
#[cfg(all(target_arch = "wasm32", feature = "client"))]
pub mod web;

/// Common imports
pub mod prelude {
	#[cfg(feature = "client")]
	pub use aldryn_forms_client::{
		EventOutcome, FormOptions, FormsError, FormsResult, FormsRuntime, FormsSettings,
		fetch::{SubmitResponse, Transport},
	};
	pub use aldryn_forms_dom::{
		Dom, DomEvent, EventKind, FormEntry, FormValue, MemoryDom, MemoryFile, Selector, UploadFile,
	};
	pub use aldryn_forms_i18n::{MessageCatalog, Translator};
}
