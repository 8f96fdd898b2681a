//! Double-submit guard
//!
//! Submit buttons are disabled (and made read-only) as soon as a form is
//! submitted and re-enabled when the submission cycle ends.

use aldryn_forms_dom::Dom;
use aldryn_forms_i18n::Translator;

use crate::error::FormsResult;
use crate::markup;
use crate::message;
use crate::options::FormOptions;

/// Default text of the wait message
pub const WAIT_MESSAGE: &str = "Please wait. Submitting form...";

/// Blurs the focused element and locks every submit button of `form`
pub fn disable_submit<D: Dom>(dom: &D, form: &D::Node) -> FormsResult<()> {
	dom.blur_active();
	for button in dom.query_all(form, &markup::SUBMIT_BUTTONS) {
		dom.set_disabled(&button, true)?;
		dom.set_read_only(&button, true)?;
	}
	Ok(())
}

/// Inserts the wait message after every submit button
pub fn insert_wait_message<D: Dom>(
	dom: &D,
	i18n: &dyn Translator,
	form: &D::Node,
	options: &FormOptions,
) -> FormsResult<()> {
	let text = options
		.message_wait
		.clone()
		.unwrap_or_else(|| i18n.gettext(WAIT_MESSAGE));
	message::notice_after_buttons(dom, form, markup::SUBMIT_MSG, &text)
}

/// Unlocks the submit buttons and removes submit messages
pub fn enable_submit<D: Dom>(dom: &D, form: &D::Node) -> FormsResult<()> {
	unlock_buttons(dom, form)?;
	message::remove_all(dom, form, &markup::SUBMIT_MESSAGES)
}

pub(crate) fn unlock_buttons<D: Dom>(dom: &D, form: &D::Node) -> FormsResult<()> {
	for button in dom.query_all(form, &markup::SUBMIT_BUTTONS) {
		dom.set_disabled(&button, false)?;
		dom.set_read_only(&button, false)?;
	}
	Ok(())
}
