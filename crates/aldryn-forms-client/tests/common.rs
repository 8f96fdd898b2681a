//! Shared fixtures for the scenario tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use aldryn_forms_client::fetch::Transport;
use aldryn_forms_client::{FetchError, FormsRuntime};
use aldryn_forms_dom::{FormEntry, MemoryDom, MemoryFile};
use async_trait::async_trait;

/// Recorded request
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
	pub action: String,
	pub entries: Vec<FormEntry<MemoryFile>>,
}

/// Transport answering every request with the same reply
pub struct ScriptedTransport {
	reply: Result<String, FetchError>,
	pub requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
	pub fn replying(body: serde_json::Value) -> Rc<Self> {
		Rc::new(Self {
			reply: Ok(body.to_string()),
			requests: RefCell::new(Vec::new()),
		})
	}
}

#[async_trait(?Send)]
impl Transport<MemoryFile> for ScriptedTransport {
	async fn post(
		&self,
		action: &str,
		entries: Vec<FormEntry<MemoryFile>>,
	) -> Result<String, FetchError> {
		self.requests.borrow_mut().push(Request {
			action: action.to_string(),
			entries,
		});
		self.reply.clone()
	}
}

/// Parses `markup`, builds a runtime around it and runs the install pass
pub fn installed(
	markup: &str,
	transport: Rc<ScriptedTransport>,
) -> (Rc<MemoryDom>, FormsRuntime<MemoryDom>) {
	let dom = Rc::new(MemoryDom::parse(markup).unwrap());
	let runtime = FormsRuntime::new(Rc::clone(&dom), transport);
	runtime.install().unwrap();
	(dom, runtime)
}
