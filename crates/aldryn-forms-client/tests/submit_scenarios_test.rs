//! End-to-end submit flows through the dispatcher

mod common;

use aldryn_forms_dom::{Dom, DomEvent, EventKind, FormEntry, MemoryFile};
use common::{ScriptedTransport, installed};
use rstest::rstest;
use serde_json::json;

const FETCH_FORM: &str = r#"
<form id="f" class="submit-by-fetch" action="/forms/contact/">
	<input name="name" value="Ada">
	<button id="b" type="submit">Send</button>
</form>"#;

#[rstest]
#[tokio::test]
async fn test_form_wide_error_after_submit_button() {
	// Arrange
	let transport =
		ScriptedTransport::replying(json!({"status": "ERROR", "form": {"__all__": ["Too many requests"]}}));
	let (dom, runtime) = installed(FETCH_FORM, transport.clone());
	let form = dom.by_id("f").unwrap();
	let button = dom.by_id("b").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
	assert!(dom.is_disabled(&button));
	runtime.send_data(outcome.fetch.clone().unwrap()).await.unwrap();

	// Assert
	assert!(outcome.default_prevented);
	let list = dom.next_element_sibling(&button).unwrap();
	assert_eq!(dom.tag_name(&list), "ul");
	assert!(dom.has_class(&list, "messages"));
	assert!(dom.has_class(&list, "aldryn-forms-post-message"));
	let items = dom.select("ul.aldryn-forms-post-message li.error").unwrap();
	assert_eq!(items.len(), 1);
	assert_eq!(dom.text(&items[0]), "Too many requests");
	assert!(!dom.is_disabled(&button));

	let requests = transport.requests.borrow();
	assert_eq!(requests[0].action, "/forms/contact/");
	assert_eq!(requests[0].entries, vec![FormEntry::text("name", "Ada")]);
}

#[rstest]
#[tokio::test]
async fn test_success_message_and_buttons_enabled() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({"message": "Thank you", "status": "OK"}));
	let (dom, runtime) = installed(FETCH_FORM, transport);
	let form = dom.by_id("f").unwrap();
	let button = dom.by_id("b").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
	runtime.send_data(outcome.fetch.unwrap()).await.unwrap();

	// Assert
	let items = dom.select("li.success").unwrap();
	assert_eq!(items.len(), 1);
	assert_eq!(dom.text(&items[0]), "Thank you");
	assert_eq!(dom.next_element_sibling(&button), dom.select("ul.messages").unwrap().first().copied());
	assert!(!dom.is_disabled(&button));
	assert!(!dom.is_read_only(&button));
	assert!(dom.select(".aldryn-forms-submit-msg").unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_previous_messages_are_replaced() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({"message": "Thank you", "status": "OK"}));
	let (dom, runtime) = installed(FETCH_FORM, transport);
	let form = dom.by_id("f").unwrap();

	// Act
	for _ in 0..2 {
		let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
		runtime.send_data(outcome.fetch.unwrap()).await.unwrap();
	}

	// Assert
	assert_eq!(dom.select("ul.aldryn-forms-post-message").unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_staged_files_are_posted() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({"status": "SUCCESS", "message": "ok"}));
	let (dom, runtime) = installed(
		r#"<form id="f" class="submit-by-fetch adjust-uploads" action="/up/">
			<input id="u" type="file" name="attachments" multiple data-enable_js accept=".pdf">
			<button type="submit">Send</button>
		</form>"#,
		transport.clone(),
	);
	let form = dom.by_id("f").unwrap();
	let input = dom.by_id("u").unwrap();
	let first = MemoryFile::new("a.pdf", 3, "application/pdf");
	let second = MemoryFile::new("b.pdf", 4, "application/pdf");
	dom.choose_files(&input, vec![first.clone()]);
	runtime.dispatch(&DomEvent::new(EventKind::Change, input)).unwrap();
	dom.choose_files(&input, vec![second.clone()]);
	runtime.dispatch(&DomEvent::new(EventKind::Change, input)).unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
	runtime.send_data(outcome.fetch.unwrap()).await.unwrap();

	// Assert
	let requests = transport.requests.borrow();
	assert_eq!(
		requests[0].entries,
		vec![
			FormEntry::file("attachments", first),
			FormEntry::file("attachments", second),
		]
	);
}

#[rstest]
#[tokio::test]
async fn test_plain_file_input_is_posted_next_to_widget() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({"status": "SUCCESS", "message": "ok"}));
	let (dom, runtime) = installed(
		r#"<form id="f" class="submit-by-fetch" action="/up/">
			<input id="u" type="file" name="attachments" multiple data-enable_js>
			<input id="cv" type="file" name="cv">
			<button type="submit">Send</button>
		</form>"#,
		transport.clone(),
	);
	let form = dom.by_id("f").unwrap();
	let input = dom.by_id("u").unwrap();
	let attachment = MemoryFile::new("a.pdf", 3, "application/pdf");
	let cv = MemoryFile::new("cv.pdf", 8, "application/pdf");
	dom.choose_files(&input, vec![attachment.clone()]);
	runtime.dispatch(&DomEvent::new(EventKind::Change, input)).unwrap();
	dom.choose_files(&dom.by_id("cv").unwrap(), vec![cv.clone()]);

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
	runtime.send_data(outcome.fetch.unwrap()).await.unwrap();

	// Assert
	assert!(dom.has_class(&form, "adjust-uploads"));
	let requests = transport.requests.borrow();
	assert_eq!(
		requests[0].entries,
		vec![
			FormEntry::file("cv", cv),
			FormEntry::file("attachments", attachment),
		]
	);
}

#[rstest]
fn test_native_submit_is_guarded_not_prevented() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({}));
	let (dom, runtime) = installed(
		r#"<form id="f" action="/native/"><button id="b" type="submit">Send</button></form>"#,
		transport.clone(),
	);
	let form = dom.by_id("f").unwrap();
	let button = dom.by_id("b").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert!(!outcome.default_prevented);
	assert_eq!(outcome.fetch, None);
	assert!(dom.is_disabled(&button));
	assert!(dom.is_read_only(&button));
	let message = dom.next_element_sibling(&button).unwrap();
	assert_eq!(dom.text(&message), "Please wait. Submitting form...");
	assert!(transport.requests.borrow().is_empty());
}

#[rstest]
fn test_skip_disable_submit_leaves_buttons_enabled() {
	// Arrange
	let transport = ScriptedTransport::replying(json!({}));
	let (dom, runtime) = installed(
		r#"<form id="f" class="skip-disable-submit"><button id="b" type="submit">Send</button></form>"#,
		transport,
	);
	let form = dom.by_id("f").unwrap();

	// Act
	runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert!(!dom.is_disabled(&dom.by_id("b").unwrap()));
}

#[rstest]
#[case(2, 0)]
#[case(2, 1)]
#[case(3, 2)]
fn test_checkbox_group_below_minimum_blocks_submit(#[case] minimum: usize, #[case] checked: usize) {
	// Arrange
	let boxes: String = (0..3)
		.map(|i| {
			let state = if i < checked { " checked" } else { "" };
			format!(r#"<input type="checkbox" name="c" value="{}"{}>"#, i, state)
		})
		.collect();
	let markup = format!(
		r#"<form id="f" class="submit-by-fetch"><div id="g" class="form-required" data-required_min="{}">{}</div><button type="submit">Send</button></form>"#,
		minimum, boxes
	);
	let (dom, runtime) = installed(&markup, ScriptedTransport::replying(json!({})));
	let form = dom.by_id("f").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert!(outcome.default_prevented);
	assert_eq!(outcome.fetch, None);
	let message = dom.next_element_sibling(&dom.by_id("g").unwrap()).unwrap();
	let text = dom.text(&message);
	assert!(text.contains(&format!("at least {} ", minimum)), "{}", text);
	assert!(text.contains(&format!("(chosen {})", checked)), "{}", text);
	let submit_messages = dom.select(".aldryn-forms-submit-msg").unwrap();
	assert_eq!(dom.text(&submit_messages[0]), "Correct the errors first, please.");
}

#[rstest]
#[case(1, 1)]
#[case(2, 3)]
fn test_checkbox_group_satisfied_submits(#[case] minimum: usize, #[case] checked: usize) {
	// Arrange
	let boxes: String = (0..3)
		.map(|i| {
			let state = if i < checked { " checked" } else { "" };
			format!(r#"<input type="checkbox" name="c" value="{}"{}>"#, i, state)
		})
		.collect();
	let markup = format!(
		r#"<form id="f" class="submit-by-fetch"><div class="form-required" data-required_min="{}">{}</div><button type="submit">Send</button></form>"#,
		minimum, boxes
	);
	let (dom, runtime) = installed(&markup, ScriptedTransport::replying(json!({})));
	let form = dom.by_id("f").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert_eq!(outcome.fetch, Some(form));
	assert!(dom.select(".aldryn-forms-required-msg").unwrap().is_empty());
}

#[rstest]
fn test_checkbox_click_clears_messages() {
	// Arrange
	let (dom, runtime) = installed(
		r#"<form id="f"><div class="form-required" data-required_min="1"><input id="c" type="checkbox" name="c"></div><button id="b" type="submit">Send</button></form>"#,
		ScriptedTransport::replying(json!({})),
	);
	let form = dom.by_id("f").unwrap();
	let checkbox = dom.by_id("c").unwrap();
	runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();
	assert!(dom.is_disabled(&dom.by_id("b").unwrap()));

	// Act
	dom.set_checked(&checkbox, true);
	runtime.dispatch(&DomEvent::new(EventKind::Click, checkbox)).unwrap();

	// Assert
	assert!(dom.select(".aldryn-forms-required-msg, .aldryn-forms-submit-msg").unwrap().is_empty());
	assert!(!dom.is_disabled(&dom.by_id("b").unwrap()));
}

#[rstest]
fn test_novalidate_checkbox_groups() {
	// Arrange
	let (dom, runtime) = installed(
		r#"<form id="f" novalidate-checkbox-groups="1"><div class="form-required" data-required_min="2"><input type="checkbox" name="c"></div><button type="submit">Send</button></form>"#,
		ScriptedTransport::replying(json!({})),
	);
	let form = dom.by_id("f").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert!(!outcome.default_prevented);
	assert!(dom.select(".aldryn-forms-required-msg, .aldryn-forms-submit-msg").unwrap().is_empty());
}
