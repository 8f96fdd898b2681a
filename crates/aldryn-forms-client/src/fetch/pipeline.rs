//! Fetch submission: request, response rendering and clean-up

use std::collections::HashMap;
use std::rc::Rc;

use aldryn_forms_dom::{Dom, FormEntry};

use crate::error::{FetchError, FormsResult};
use crate::fetch::response::{NON_FIELD_ERRORS, SubmitResponse};
use crate::fetch::transport::Transport;
use crate::guard;
use crate::markup;
use crate::message;

const ERROR_CLASS: &str = "error";
const SUCCESS_CLASS: &str = "success";

/// Handler for a successful response, named by the form's `data-run_next`
pub type FollowUp<N> = Rc<dyn Fn(&N, &SubmitResponse)>;

/// Named follow-up handlers
pub struct FollowUps<N> {
	handlers: HashMap<String, FollowUp<N>>,
}

impl<N> Default for FollowUps<N> {
	fn default() -> Self {
		Self {
			handlers: HashMap::new(),
		}
	}
}

impl<N> Clone for FollowUps<N> {
	fn clone(&self) -> Self {
		Self {
			handlers: self.handlers.clone(),
		}
	}
}

impl<N> FollowUps<N> {
	/// Registers `handler` under `name`
	pub fn register(
		&mut self,
		name: impl Into<String>,
		handler: impl Fn(&N, &SubmitResponse) + 'static,
	) {
		self.handlers.insert(name.into(), Rc::new(handler));
	}

	/// Handler registered under `name`
	pub fn get(&self, name: &str) -> Option<FollowUp<N>> {
		self.handlers.get(name).cloned()
	}
}

/// Removes the messages of the previous submission
pub fn clear_messages<D: Dom>(dom: &D, form: &D::Node) -> FormsResult<()> {
	message::remove_all(dom, form, &markup::POST_MESSAGES)
}

/// Paints a decoded response
pub fn render_response<D: Dom>(
	dom: &D,
	form: &D::Node,
	response: &SubmitResponse,
	follow_ups: &FollowUps<D::Node>,
) -> FormsResult<()> {
	if response.is_error() {
		for (name, messages) in response.field_errors() {
			if name == NON_FIELD_ERRORS {
				match dom.query(form, &markup::SUBMIT_BUTTONS) {
					Some(button) => message::display_after(dom, &button, messages, ERROR_CLASS)?,
					None => message::display_in_form(dom, form, messages, ERROR_CLASS)?,
				}
			} else if let Some(input) = dom
				.query_all(form, &markup::INPUTS)
				.into_iter()
				.find(|input| dom.attribute(input, "name").as_deref() == Some(name))
			{
				message::display_after(dom, &input, messages, ERROR_CLASS)?;
			} else {
				aldryn_forms_dom::warn_log!("no input for field errors of '{}'", name);
			}
		}
		return Ok(());
	}

	match dom.data(form, "run_next").filter(|name| !name.is_empty()) {
		Some(name) => match follow_ups.get(&name) {
			Some(handler) => handler(form, response),
			None => {
				aldryn_forms_dom::error_log!("follow-up handler '{}' is not registered", name);
				let text = format!("Unknown follow-up handler '{}'.", name);
				message::display_in_form(dom, form, &[text], ERROR_CLASS)?;
			}
		},
		None => {
			let text = response.message.clone().unwrap_or_default();
			message::display_in_form(dom, form, &[text], SUCCESS_CLASS)?;
		}
	}
	Ok(())
}

/// Paints a transport or decoding failure
pub fn render_failure<D: Dom>(dom: &D, form: &D::Node, error: &FetchError) -> FormsResult<()> {
	message::display_in_form(dom, form, &[error.to_string()], ERROR_CLASS)
}

/// Sends `entries`, paints the outcome and unlocks the form
pub async fn submit<D: Dom>(
	dom: &D,
	transport: &dyn Transport<D::File>,
	follow_ups: &FollowUps<D::Node>,
	form: &D::Node,
	entries: Vec<FormEntry<D::File>>,
) -> FormsResult<()> {
	let action = dom.attribute(form, "action").unwrap_or_default();
	aldryn_forms_dom::debug_log!("POST {} with {} entries", action, entries.len());
	let outcome = match transport.post(&action, entries).await {
		Ok(body) => SubmitResponse::parse(&body),
		Err(error) => Err(error),
	};
	let painted = match &outcome {
		Ok(response) => render_response(dom, form, response, follow_ups),
		Err(error) => {
			aldryn_forms_dom::warn_log!("submission to '{}' failed: {}", action, error);
			render_failure(dom, form, error)
		}
	};
	let restored = guard::enable_submit(dom, form);
	painted.and(restored)
}
