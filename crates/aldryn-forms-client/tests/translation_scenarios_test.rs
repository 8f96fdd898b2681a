//! Pages keep working when a translation catalog has broken placeholders

mod common;

use std::rc::Rc;

use aldryn_forms_client::FormsRuntime;
use aldryn_forms_dom::{Dom, DomEvent, EventKind, MemoryDom};
use aldryn_forms_i18n::MessageCatalog;
use common::ScriptedTransport;
use rstest::{fixture, rstest};
use serde_json::json;

const PAGE: &str = r#"
<form id="f" class="submit-by-fetch" action="/forms/upload/">
	<input id="u" type="file" name="upload" class="drag-and-drop" multiple data-enable_js
		data-max_files="2" data-max_size="2048">
	<div class="form-required" data-required_min="2"><input type="checkbox" name="c"></div>
	<button id="b" type="submit">Send</button>
</form>"#;

#[fixture]
fn catalog() -> MessageCatalog {
	let mut catalog = MessageCatalog::new("de");
	catalog.add_plural(
		"Max. %s file with a total size of max. %s",
		vec!["Max. %s Datei (%s) %s", "Max. %s Dateien (%s) %s"],
	);
	catalog.add_plural(
		"You have to choose at least %(value)s option (chosen %(chosen)s).",
		vec![
			"Mindestens %(value)s Option (%(missing)s).",
			"Mindestens %(value)s Optionen (%(missing)s).",
		],
	);
	catalog
}

fn runtime(
	catalog: MessageCatalog,
	transport: Rc<ScriptedTransport>,
) -> (Rc<MemoryDom>, FormsRuntime<MemoryDom>) {
	let dom = Rc::new(MemoryDom::parse(PAGE).unwrap());
	let runtime = FormsRuntime::new(Rc::clone(&dom), transport).with_translator(Rc::new(catalog));
	(dom, runtime)
}

#[rstest]
fn test_extra_placeholder_still_enhances_upload(catalog: MessageCatalog) {
	// Arrange
	let (dom, runtime) = runtime(catalog, ScriptedTransport::replying(json!({})));

	// Act
	let installed = runtime.install();

	// Assert
	assert!(installed.is_ok());
	assert_eq!(dom.select("ul.upload-file-names").unwrap().len(), 1);
	let texts: Vec<String> = dom
		.select(".upload-files-frame div")
		.unwrap()
		.iter()
		.map(|node| dom.text(node))
		.collect();
	assert!(texts.iter().any(|text| text == "Max. 2 Dateien (2 kB) "));
}

#[rstest]
#[tokio::test]
async fn test_unknown_placeholder_still_blocks_short_group(catalog: MessageCatalog) {
	// Arrange
	let transport = ScriptedTransport::replying(json!({"status": "SUCCESS"}));
	let (dom, runtime) = runtime(catalog, transport.clone());
	runtime.install().unwrap();
	let form = dom.by_id("f").unwrap();

	// Act
	let outcome = runtime.dispatch(&DomEvent::new(EventKind::Submit, form)).unwrap();

	// Assert
	assert!(outcome.default_prevented);
	assert!(outcome.fetch.is_none());
	assert!(transport.requests.borrow().is_empty());
	let group = dom.select(".form-required").unwrap()[0];
	let message = dom.next_element_sibling(&group).unwrap();
	let text = dom.text(&message);
	assert!(text.contains("Mindestens 2 Optionen ()."), "{}", text);
}
