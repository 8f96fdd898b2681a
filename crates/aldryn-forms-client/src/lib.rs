//! Form enhancement components for aldryn-forms-web
//!
//! Every component works on a [`Dom`](aldryn_forms_dom::Dom) implementation,
//! so the same code drives the browser document and the in-memory document
//! used in tests.
//!
//! ## Modules
//!
//! - [`admin_list`]: show more/less toggle of the admin change list
//! - [`guard`]: double-submit guard and wait message
//! - [`required`]: minimum selection of `.form-required` checkbox groups
//! - [`upload`]: drag-and-drop upload widget with client-side checks
//! - [`toggle`]: submit buttons following required-control validity
//! - [`fetch`]: asynchronous submission and response rendering
//! - [`runtime`]: install pass and event dispatcher
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use aldryn_forms_client::fetch::Transport;
//! use aldryn_forms_client::{FetchError, FormsRuntime};
//! use aldryn_forms_dom::{DomEvent, EventKind, FormEntry, MemoryDom, MemoryFile};
//!
//! struct Offline;
//!
//! #[async_trait::async_trait(?Send)]
//! impl Transport<MemoryFile> for Offline {
//!     async fn post(&self, _: &str, _: Vec<FormEntry<MemoryFile>>) -> Result<String, FetchError> {
//!         Err(FetchError::Network("offline".to_string()))
//!     }
//! }
//!
//! let dom = Rc::new(MemoryDom::parse(r#"<form id="f"><button type="submit">Send</button></form>"#).unwrap());
//! let runtime = FormsRuntime::new(Rc::clone(&dom), Rc::new(Offline));
//! runtime.install().unwrap();
//!
//! let form = dom.by_id("f").unwrap();
//! let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
//! assert!(!outcome.default_prevented);
//! ```

pub mod admin_list;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod markup;
mod message;
pub mod options;
pub mod required;
pub mod runtime;
pub mod settings;
pub mod toggle;
pub mod upload;

pub use error::{FetchError, FormsError, FormsResult};
pub use options::{FormOptions, Icons};
pub use runtime::{EventOutcome, FormsRuntime};
pub use settings::FormsSettings;
