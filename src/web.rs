//! Browser entry point
//!
//! At module start the runtime is built from the page settings, the install
//! pass runs and one delegated listener per [`EventKind`] is attached to the
//! document. Scripts on the page reach the runtime through [`FormsHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use aldryn_forms_client::fetch::GlooTransport;
use aldryn_forms_client::markup;
use aldryn_forms_client::{FormsError, FormsRuntime, FormsSettings};
use aldryn_forms_dom::{DomEvent, EventKind, WebDom};
use aldryn_forms_i18n::{MessageCatalog, Translator};
use js_sys::{Function, JSON, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Element, Event};

thread_local! {
	static RUNTIME: RefCell<Option<Rc<FormsRuntime<WebDom>>>> = const { RefCell::new(None) };
}

fn to_js(error: FormsError) -> JsValue {
	JsValue::from_str(&error.to_string())
}

fn runtime() -> Result<Rc<FormsRuntime<WebDom>>, JsValue> {
	RUNTIME
		.with(|slot| slot.borrow().clone())
		.ok_or_else(|| JsValue::from_str("aldryn-forms is not started"))
}

fn build_runtime() -> Result<FormsRuntime<WebDom>, FormsError> {
	let dom = Rc::new(WebDom::new()?);
	let settings = FormsSettings::from_document(dom.as_ref()).unwrap_or_else(|error| {
		aldryn_forms_dom::error_log!("settings ignored: {}", error);
		FormsSettings::default()
	});
	let catalog = settings.message_catalog().unwrap_or_else(|error| {
		aldryn_forms_dom::error_log!("translations ignored: {}", error);
		MessageCatalog::new(&settings.locale)
	});
	let i18n: Rc<dyn Translator> = Rc::new(catalog);
	Ok(FormsRuntime::new(dom, Rc::new(GlooTransport))
		.with_translator(i18n)
		.with_settings(settings))
}

fn handle(runtime: &Rc<FormsRuntime<WebDom>>, kind: EventKind, event: &Event) {
	let Some(target) = event
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
	else {
		return;
	};
	match runtime.dispatch(&DomEvent::new(kind, target)) {
		Ok(outcome) => {
			if outcome.default_prevented {
				event.prevent_default();
			}
			if let Some(form) = outcome.fetch {
				let runtime = Rc::clone(runtime);
				spawn_local(async move {
					if let Err(error) = runtime.send_data(form).await {
						aldryn_forms_dom::error_log!("fetch submission failed: {}", error);
					}
				});
			}
		}
		Err(error) => {
			aldryn_forms_dom::error_log!("{} handler failed: {}", kind, error);
			if kind == EventKind::Submit && is_fetch_form(event) {
				event.prevent_default();
			}
		}
	}
}

fn is_fetch_form(event: &Event) -> bool {
	event
		.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.is_some_and(|form| form.class_list().contains(markup::SUBMIT_BY_FETCH))
}

fn listen(runtime: &Rc<FormsRuntime<WebDom>>, kind: EventKind) -> Result<(), JsValue> {
	let handler = Rc::clone(runtime);
	let closure = Closure::wrap(Box::new(move |event: Event| {
		handle(&handler, kind, &event);
	}) as Box<dyn FnMut(_)>);
	runtime
		.dom()
		.document()
		.add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

fn boot() -> Result<(), JsValue> {
	let runtime = Rc::new(build_runtime().map_err(to_js)?);
	if let Err(error) = runtime.install() {
		aldryn_forms_dom::error_log!("aldryn-forms install incomplete: {}", error);
	}
	for kind in EventKind::ALL {
		listen(&runtime, kind)?;
	}
	RUNTIME.with(|slot| slot.replace(Some(runtime)));
	Ok(())
}

/// Module start: boots now, or on `DOMContentLoaded` while the page is still loading
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	if document.ready_state() != "loading" {
		return boot();
	}
	let closure = Closure::once(|| {
		if let Err(error) = boot() {
			aldryn_forms_dom::error_log!("aldryn-forms failed to start: {:?}", error);
		}
	});
	document
		.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Handle on the running runtime for scripts on the page
#[wasm_bindgen]
pub struct FormsHandle {
	runtime: Rc<FormsRuntime<WebDom>>,
}

#[wasm_bindgen]
impl FormsHandle {
	/// Handle on the runtime started at module load
	#[wasm_bindgen(constructor)]
	pub fn new() -> Result<FormsHandle, JsValue> {
		Ok(Self { runtime: runtime()? })
	}

	/// Submits `form` through `fetch`, as a `submit-by-fetch` form would
	#[wasm_bindgen(js_name = sendData)]
	pub fn send_data(&self, form: Element) -> Promise {
		let runtime = Rc::clone(&self.runtime);
		future_to_promise(async move {
			runtime.send_data(form).await.map_err(to_js)?;
			Ok(JsValue::UNDEFINED)
		})
	}

	/// Registers `handler(form, response)` for forms with `data-run_next="{name}"`
	#[wasm_bindgen(js_name = registerFollowUp)]
	pub fn register_follow_up(&self, name: String, handler: Function) {
		self.runtime.register_follow_up(name, move |form, response| {
			let payload = serde_json::to_string(response)
				.map_err(|e| JsValue::from_str(&e.to_string()))
				.and_then(|json| JSON::parse(&json));
			let called = payload.and_then(|payload| handler.call2(&JsValue::NULL, form, &payload));
			if let Err(error) = called {
				aldryn_forms_dom::error_log!("follow-up handler failed: {:?}", error);
			}
		});
	}

	/// Registers `hook(form, valid)` for forms with `data-toggle_submit="{name}"`
	///
	/// The hook takes over from the next `input`/`change` on.
	#[wasm_bindgen(js_name = registerToggleHook)]
	pub fn register_toggle_hook(&self, name: String, hook: Function) {
		self.runtime.register_toggle_hook(name, move |form, valid| {
			if let Err(error) = hook.call2(&JsValue::NULL, form, &JsValue::from_bool(valid)) {
				aldryn_forms_dom::error_log!("toggle-submit hook failed: {:?}", error);
			}
		});
	}
}
