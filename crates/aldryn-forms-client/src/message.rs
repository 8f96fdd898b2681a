//! Inline messages inserted next to buttons, groups and fields

use aldryn_forms_dom::{Dom, Selector};

use crate::error::FormsResult;
use crate::markup;

/// `div.text-danger.aldryn-forms.{class}` holding `text`
pub(crate) fn notice<D: Dom>(dom: &D, class: &str, text: &str) -> FormsResult<D::Node> {
	let node = dom.create_element("div")?;
	for name in markup::MESSAGE_CLASSES {
		dom.add_class(&node, name)?;
	}
	dom.add_class(&node, class)?;
	dom.set_text(&node, text)?;
	Ok(node)
}

/// Inserts a fresh notice after every submit button of `form`
pub(crate) fn notice_after_buttons<D: Dom>(
	dom: &D,
	form: &D::Node,
	class: &str,
	text: &str,
) -> FormsResult<()> {
	for button in dom.query_all(form, &markup::SUBMIT_BUTTONS) {
		let node = notice(dom, class, text)?;
		dom.insert_after(&button, &node)?;
	}
	Ok(())
}

/// Removes every element of `scope` matching `selector`
pub(crate) fn remove_all<D: Dom>(dom: &D, scope: &D::Node, selector: &Selector) -> FormsResult<()> {
	for node in dom.query_all(scope, selector) {
		dom.remove(&node)?;
	}
	Ok(())
}

/// `ul.messages.aldryn-forms-post-message` with one `li.{class}` per message
fn post_message_list<D: Dom>(dom: &D, messages: &[String], class: &str) -> FormsResult<D::Node> {
	let list = dom.create_element("ul")?;
	dom.add_class(&list, markup::MESSAGES_LIST)?;
	dom.add_class(&list, markup::POST_MESSAGE)?;
	for message in messages {
		let item = dom.create_element("li")?;
		dom.add_class(&item, class)?;
		dom.set_text(&item, message)?;
		dom.append_child(&list, &item)?;
	}
	Ok(list)
}

/// Inserts the message list right after `node`
pub(crate) fn display_after<D: Dom>(
	dom: &D,
	node: &D::Node,
	messages: &[String],
	class: &str,
) -> FormsResult<()> {
	let list = post_message_list(dom, messages, class)?;
	dom.insert_after(node, &list)?;
	Ok(())
}

/// Inserts the message list after every submit button, or after the form
/// when it has none
pub(crate) fn display_in_form<D: Dom>(
	dom: &D,
	form: &D::Node,
	messages: &[String],
	class: &str,
) -> FormsResult<()> {
	let buttons = dom.query_all(form, &markup::SUBMIT_BUTTONS);
	if buttons.is_empty() {
		return display_after(dom, form, messages, class);
	}
	for button in &buttons {
		display_after(dom, button, messages, class)?;
	}
	Ok(())
}
