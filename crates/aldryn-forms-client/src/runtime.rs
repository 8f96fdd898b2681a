//! Page runtime: install pass and event dispatcher
//!
//! The host installs one delegated listener per [`EventKind`] on the
//! document and forwards every event to [`FormsRuntime::dispatch`]. The
//! returned [`EventOutcome`] tells the host whether to cancel the default
//! action and which form to hand to [`FormsRuntime::send_data`].

use std::cell::RefCell;
use std::rc::Rc;

use aldryn_forms_dom::{Dom, DomEvent, EventKind};
use aldryn_forms_i18n::{MessageCatalog, Translator};

use crate::admin_list;
use crate::error::{FormsError, FormsResult};
use crate::fetch::{FollowUps, SubmitResponse, Transport, payload, pipeline};
use crate::guard;
use crate::markup;
use crate::options::FormOptions;
use crate::required;
use crate::settings::FormsSettings;
use crate::toggle::{self, ToggleHooks};
use crate::upload::UploadWidget;

/// What the host must do after dispatching an event
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome<N> {
	/// Cancel the browser's default action
	pub default_prevented: bool,
	/// Form to submit through [`FormsRuntime::send_data`]
	pub fetch: Option<N>,
}

impl<N> Default for EventOutcome<N> {
	fn default() -> Self {
		Self {
			default_prevented: false,
			fetch: None,
		}
	}
}

impl<N> EventOutcome<N> {
	fn prevented() -> Self {
		Self {
			default_prevented: true,
			fetch: None,
		}
	}
}

/// Form behaviors of one page
pub struct FormsRuntime<D: Dom> {
	dom: Rc<D>,
	i18n: Rc<dyn Translator>,
	settings: FormsSettings,
	transport: Rc<dyn Transport<D::File>>,
	uploads: RefCell<Vec<UploadWidget<D>>>,
	follow_ups: RefCell<FollowUps<D::Node>>,
	toggle_hooks: RefCell<ToggleHooks<D::Node>>,
}

impl<D: Dom> FormsRuntime<D> {
	/// Creates a runtime with default settings and an identity catalog
	pub fn new(dom: Rc<D>, transport: Rc<dyn Transport<D::File>>) -> Self {
		Self {
			dom,
			i18n: Rc::new(MessageCatalog::default()),
			settings: FormsSettings::default(),
			transport,
			uploads: RefCell::new(Vec::new()),
			follow_ups: RefCell::new(FollowUps::default()),
			toggle_hooks: RefCell::new(ToggleHooks::default()),
		}
	}

	/// Replaces the translator
	pub fn with_translator(mut self, i18n: Rc<dyn Translator>) -> Self {
		self.i18n = i18n;
		self
	}

	/// Replaces the settings
	pub fn with_settings(mut self, settings: FormsSettings) -> Self {
		self.settings = settings;
		self
	}

	/// The document
	pub fn dom(&self) -> &D {
		&self.dom
	}

	/// Active settings
	pub fn settings(&self) -> &FormsSettings {
		&self.settings
	}

	/// Registers a handler for `data-run_next="{name}"`
	pub fn register_follow_up(
		&self,
		name: impl Into<String>,
		handler: impl Fn(&D::Node, &SubmitResponse) + 'static,
	) {
		self.follow_ups.borrow_mut().register(name, handler);
	}

	/// Registers a hook for `data-toggle_submit="{name}"`
	pub fn register_toggle_hook(&self, name: impl Into<String>, hook: impl Fn(&D::Node, bool) + 'static) {
		self.toggle_hooks.borrow_mut().register(name, hook);
	}

	/// Staged files of the upload widget bound to `input`
	pub fn staged_files(&self, input: &D::Node) -> Option<Vec<D::File>> {
		self.uploads
			.borrow()
			.iter()
			.find(|widget| widget.input() == input)
			.map(|widget| widget.staged().files())
	}

	/// Enhances upload inputs, prepares the admin list and toggle-submit forms
	///
	/// A part that fails is logged and skipped; the rest of the page is still
	/// installed.
	pub fn install(&self) -> FormsResult<()> {
		let dom = self.dom.as_ref();
		let root = dom.root();
		let mut uploads = self.uploads.borrow_mut();
		for input in dom.query_all(&root, &markup::ENHANCEABLE_UPLOADS) {
			if uploads.iter().any(|widget| widget.input() == &input) {
				continue;
			}
			match UploadWidget::enhance(dom, self.i18n.as_ref(), &self.settings, input) {
				Ok(widget) => uploads.push(widget),
				Err(error) => aldryn_forms_dom::error_log!("upload widget skipped: {}", error),
			}
		}
		drop(uploads);

		if let Err(error) = admin_list::install(dom, &self.settings) {
			aldryn_forms_dom::error_log!("admin list skipped: {}", error);
		}

		for form in dom.query_all(&root, &markup::TOGGLE_SUBMIT_FORMS) {
			if let Err(error) = toggle::apply(dom, &form, false, self.toggle_hook(&form)) {
				aldryn_forms_dom::error_log!("toggle-submit form skipped: {}", error);
			}
		}
		aldryn_forms_dom::info_log!("aldryn-forms installed");
		Ok(())
	}

	/// Routes one DOM event
	pub fn dispatch(&self, event: &DomEvent<D::Node>) -> FormsResult<EventOutcome<D::Node>> {
		match event.kind {
			EventKind::Click => self.on_click(&event.target),
			EventKind::Change => self.on_change(&event.target),
			EventKind::Input => self.on_input(&event.target),
			EventKind::Submit => self
				.on_submit(&event.target)
				.or_else(|error| self.recover_submit(&event.target, error)),
		}
	}

	/// Fetch submission of `form`
	///
	/// Buttons are unlocked again whatever the outcome.
	pub async fn send_data(&self, form: D::Node) -> FormsResult<()> {
		let dom = self.dom.as_ref();
		let prepared = pipeline::clear_messages(dom, &form)
			.and_then(|()| payload::build(dom, &form, &self.uploads.borrow()));
		let entries = match prepared {
			Ok(entries) => entries,
			Err(error) => {
				guard::enable_submit(dom, &form)?;
				return Err(error);
			}
		};
		let follow_ups = self.follow_ups.borrow().clone();
		pipeline::submit(dom, self.transport.as_ref(), &follow_ups, &form, entries).await
	}

	fn toggle_hook(&self, form: &D::Node) -> Option<toggle::ToggleHook<D::Node>> {
		let name = self.dom.data(form, "toggle_submit").filter(|name| !name.is_empty())?;
		let hook = self.toggle_hooks.borrow().get(&name);
		if hook.is_none() {
			aldryn_forms_dom::warn_log!("toggle-submit hook '{}' is not registered", name);
		}
		hook
	}

	fn form_of(&self, node: &D::Node) -> Option<D::Node> {
		self.dom.closest(node, &markup::FORM)
	}

	fn on_click(&self, target: &D::Node) -> FormsResult<EventOutcome<D::Node>> {
		let dom = self.dom.as_ref();
		if admin_list::handle_click(dom, &self.settings, target)? {
			return Ok(EventOutcome::default());
		}
		if dom.matches(target, &markup::REQUIRED_GROUP_CHECKBOX) {
			required::clear_on_checkbox(dom, target)?;
			return Ok(EventOutcome::default());
		}
		if dom.matches(target, &markup::TRASH_ICON) {
			let Some(item) = dom.closest(target, &markup::LIST_ITEM) else {
				return Ok(EventOutcome::default());
			};
			let input = {
				let mut uploads = self.uploads.borrow_mut();
				let Some(widget) = uploads.iter_mut().find(|widget| widget.owns_item(&item)) else {
					return Ok(EventOutcome::default());
				};
				widget.remove_item(dom, self.i18n.as_ref(), &item)?;
				widget.input().clone()
			};
			self.revalidate_toggle(&input)?;
		}
		Ok(EventOutcome::default())
	}

	fn on_change(&self, target: &D::Node) -> FormsResult<EventOutcome<D::Node>> {
		let dom = self.dom.as_ref();
		if dom.matches(target, &markup::FILE_INPUT) {
			let mut uploads = self.uploads.borrow_mut();
			if let Some(widget) = uploads.iter_mut().find(|widget| widget.input() == target) {
				widget.stage_selection(dom, self.i18n.as_ref())?;
			}
		}
		self.revalidate_toggle(target)?;
		Ok(EventOutcome::default())
	}

	fn on_input(&self, target: &D::Node) -> FormsResult<EventOutcome<D::Node>> {
		self.revalidate_toggle(target)?;
		Ok(EventOutcome::default())
	}

	fn revalidate_toggle(&self, target: &D::Node) -> FormsResult<()> {
		let dom = self.dom.as_ref();
		if !toggle::is_toggle_control(dom, target) {
			return Ok(());
		}
		match self.form_of(target) {
			Some(form) if dom.has_class(&form, markup::TOGGLE_SUBMIT) => {
				toggle::revalidate(dom, &form, self.toggle_hook(&form))
			}
			_ => Ok(()),
		}
	}

	/// Failed submit handling on a form: unlocks the buttons and keeps a
	/// `submit-by-fetch` form from falling back to a native submission
	fn recover_submit(&self, form: &D::Node, error: FormsError) -> FormsResult<EventOutcome<D::Node>> {
		let dom = self.dom.as_ref();
		if dom.tag_name(form) != "form" {
			return Err(error);
		}
		aldryn_forms_dom::error_log!("submit handling failed: {}", error);
		guard::enable_submit(dom, form)?;
		Ok(EventOutcome {
			default_prevented: dom.has_class(form, markup::SUBMIT_BY_FETCH),
			fetch: None,
		})
	}

	fn on_submit(&self, form: &D::Node) -> FormsResult<EventOutcome<D::Node>> {
		let dom = self.dom.as_ref();
		if dom.tag_name(form) != "form" {
			return Err(FormsError::NoForm(dom.tag_name(form)));
		}
		let options = FormOptions::from_form(dom, form, &self.settings);

		let blocked = dom
			.query_all(form, &markup::INPUTS)
			.iter()
			.any(|input| !dom.validation_message(input).is_empty());
		if blocked {
			aldryn_forms_dom::debug_log!("submission blocked by constraint validation");
			return Ok(EventOutcome::prevented());
		}

		if !options.skip_disable_submit {
			guard::disable_submit(dom, form)?;
		}
		if options.validate_checkbox_groups
			&& !required::validate(dom, self.i18n.as_ref(), form, &options)?
		{
			return Ok(EventOutcome::prevented());
		}
		if options.submit_by_fetch {
			return Ok(EventOutcome {
				default_prevented: true,
				fetch: Some(form.clone()),
			});
		}
		Ok(EventOutcome::default())
	}
}
