//! Browser tests for the `web_sys` backend
//!
//! Run with `wasm-pack test --headless --chrome crates/aldryn-forms-dom`.

#[cfg(target_arch = "wasm32")]
mod web_dom_tests {
	use aldryn_forms_dom::{Dom, Selector, WebDom};
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn fixture(dom: &WebDom, markup: &str) -> web_sys::Element {
		let body = dom.document().body().expect("document has a body");
		body.set_inner_html(markup);
		body.into()
	}

	#[wasm_bindgen_test]
	fn test_query_and_classes() {
		let dom = WebDom::new().unwrap();
		let body = fixture(&dom, r#"<form><button type="submit" class="btn">Go</button></form>"#);

		let buttons = dom.query_all(&body, &Selector::parse("[type=submit]").unwrap());

		assert_eq!(buttons.len(), 1);
		assert!(dom.has_class(&buttons[0], "btn"));
		assert!(dom.toggle_class(&buttons[0], "d-none").unwrap());
		assert!(dom.has_class(&buttons[0], "d-none"));
	}

	#[wasm_bindgen_test]
	fn test_insert_after_and_flags() {
		let dom = WebDom::new().unwrap();
		let body = fixture(&dom, r#"<button id="b" type="submit">Go</button>"#);
		let button = dom.query(&body, &Selector::parse("#b").unwrap()).unwrap();
		let message = dom.create_element("div").unwrap();

		dom.insert_after(&button, &message).unwrap();
		dom.set_disabled(&button, true).unwrap();
		dom.set_read_only(&button, true).unwrap();

		assert_eq!(dom.next_element_sibling(&button), Some(message));
		assert!(dom.is_disabled(&button));
		assert!(dom.is_read_only(&button));
	}

	#[wasm_bindgen_test]
	fn test_custom_validity_and_form_entries() {
		let dom = WebDom::new().unwrap();
		let body = fixture(
			&dom,
			r#"<form><input name="name" value="Ada"><input type="checkbox" name="opt" value="1" checked></form>"#,
		);
		let form = dom.query(&body, &Selector::parse("form").unwrap()).unwrap();
		let input = dom.query(&form, &Selector::parse("input[name=name]").unwrap()).unwrap();

		dom.set_custom_validity(&input, "broken").unwrap();
		let entries = dom.form_entries(&form).unwrap();

		assert!(!dom.check_validity(&input));
		assert_eq!(dom.validation_message(&input), "broken");
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].name, "name");
	}
}
