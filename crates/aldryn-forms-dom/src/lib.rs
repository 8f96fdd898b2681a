//! DOM abstraction layer for aldryn-forms-web
//!
//! ## Modules
//!
//! - [`selector`]: the CSS selector subset used by the markup contract
//! - [`dom`]: the [`Dom`] trait implemented by every backend
//! - [`backend`]: [`MemoryDom`] (native, tests) and `WebDom` (wasm32)
//! - [`event`]: events routed to the form runtime
//! - [`logging`]: console / `tracing` logging macros
//!
//! ## Example
//!
//! ```
//! use aldryn_forms_dom::{Dom, MemoryDom, Selector};
//!
//! let dom = MemoryDom::parse(r#"<form><button type="submit">Send</button></form>"#).unwrap();
//! let buttons = dom.query_all(&dom.root(), &Selector::parse("[type=submit]").unwrap());
//! assert_eq!(buttons.len(), 1);
//! ```

pub mod backend;
pub mod dom;
pub mod error;
pub mod event;
pub mod file;
pub mod logging;
pub mod selector;

pub use backend::memory::{MemoryDom, NodeId};
#[cfg(target_arch = "wasm32")]
pub use backend::web::WebDom;
pub use dom::{Dom, FormEntry, FormValue};
pub use error::{DomError, DomResult, SelectorError};
pub use event::{DomEvent, EventKind};
pub use file::{MemoryFile, UploadFile};
pub use selector::{MatchTarget, Selector};

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
