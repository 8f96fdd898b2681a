//! Submit buttons following the validity of required controls
//!
//! Forms with class `toggle-submit` start with disabled submit buttons. Each
//! `input`/`change` on a required control re-evaluates the form. A form can
//! name a registered hook in `data-toggle_submit` to take over the toggling.

use std::collections::HashMap;
use std::rc::Rc;

use aldryn_forms_dom::Dom;

use crate::error::FormsResult;
use crate::markup;

/// Hook receiving the form and whether all required controls are valid
pub type ToggleHook<N> = Rc<dyn Fn(&N, bool)>;

/// Named hooks for `data-toggle_submit`
pub struct ToggleHooks<N> {
	hooks: HashMap<String, ToggleHook<N>>,
}

impl<N> Default for ToggleHooks<N> {
	fn default() -> Self {
		Self {
			hooks: HashMap::new(),
		}
	}
}

impl<N> ToggleHooks<N> {
	/// Registers `hook` under `name`
	pub fn register(&mut self, name: impl Into<String>, hook: impl Fn(&N, bool) + 'static) {
		self.hooks.insert(name.into(), Rc::new(hook));
	}

	/// Hook registered under `name`
	pub fn get(&self, name: &str) -> Option<ToggleHook<N>> {
		self.hooks.get(name).cloned()
	}
}

/// Whether every required control of `form` passes `checkValidity()`
pub fn all_valid<D: Dom>(dom: &D, form: &D::Node) -> bool {
	dom.query_all(form, &markup::TOGGLE_CONTROLS)
		.iter()
		.all(|control| dom.check_validity(control))
}

/// Applies `valid` to the submit buttons, or hands it to `hook`
pub fn apply<D: Dom>(
	dom: &D,
	form: &D::Node,
	valid: bool,
	hook: Option<ToggleHook<D::Node>>,
) -> FormsResult<()> {
	if let Some(hook) = hook {
		hook(form, valid);
		return Ok(());
	}
	for button in dom.query_all(form, &markup::SUBMIT_BUTTONS) {
		dom.set_disabled(&button, !valid)?;
	}
	Ok(())
}

/// Re-evaluates `form`
pub fn revalidate<D: Dom>(dom: &D, form: &D::Node, hook: Option<ToggleHook<D::Node>>) -> FormsResult<()> {
	apply(dom, form, all_valid(dom, form), hook)
}

/// Whether an event on `target` should re-evaluate its toggle-submit form
pub fn is_toggle_control<D: Dom>(dom: &D, target: &D::Node) -> bool {
	dom.matches(target, &markup::TOGGLE_CONTROLS)
}
