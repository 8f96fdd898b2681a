//! Browser document backed by `web_sys`

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	DataTransfer, Document, Element, File, FormData, HtmlButtonElement, HtmlElement,
	HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom::{Dom, FormEntry, FormValue};
use crate::error::{DomError, DomResult};
use crate::file::UploadFile;
use crate::selector::Selector;

impl UploadFile for File {
	fn name(&self) -> String {
		File::name(self)
	}

	fn size(&self) -> u64 {
		web_sys::Blob::size(self) as u64
	}

	fn mime_type(&self) -> String {
		self.type_()
	}
}

fn js_error(value: JsValue) -> DomError {
	DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// The page document
#[derive(Debug, Clone)]
pub struct WebDom {
	document: Document,
	root: Element,
}

impl WebDom {
	/// Wraps the document of the current window
	///
	/// # Errors
	///
	/// Returns [`DomError::Detached`] outside a browsing context.
	pub fn new() -> DomResult<Self> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| DomError::Detached("window.document".to_string()))?;
		Self::from_document(document)
	}

	/// Wraps a specific document
	pub fn from_document(document: Document) -> DomResult<Self> {
		let root = document
			.document_element()
			.ok_or_else(|| DomError::Detached("documentElement".to_string()))?;
		Ok(Self { document, root })
	}

	/// The wrapped document
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Builds a `FormData` body from form entries
	pub fn to_form_data(entries: &[FormEntry<File>]) -> DomResult<FormData> {
		let data = FormData::new().map_err(js_error)?;
		for entry in entries {
			let appended = match &entry.value {
				FormValue::Text(value) => data.append_with_str(&entry.name, value),
				FormValue::File(file) => {
					data.append_with_blob_and_filename(&entry.name, file, &file.name())
				}
			};
			appended.map_err(js_error)?;
		}
		Ok(data)
	}

	fn set_flag(node: &Element, property: &str, value: bool) -> DomResult<()> {
		Reflect::set(node, &JsValue::from_str(property), &JsValue::from_bool(value))
			.map(|_| ())
			.map_err(js_error)
	}

	fn flag(node: &Element, property: &str) -> bool {
		Reflect::get(node, &JsValue::from_str(property))
			.ok()
			.and_then(|value| value.as_bool())
			.unwrap_or(false)
	}

	fn unsupported(operation: &'static str, node: &Element) -> DomError {
		DomError::UnsupportedOperation {
			operation,
			tag: node.tag_name().to_ascii_lowercase(),
		}
	}
}

impl Dom for WebDom {
	type Node = Element;
	type File = File;

	fn root(&self) -> Element {
		self.root.clone()
	}

	fn query_all(&self, scope: &Element, selector: &Selector) -> Vec<Element> {
		let Ok(list) = scope.query_selector_all(selector.as_str()) else {
			crate::warn_log!("querySelectorAll rejected '{}'", selector);
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|index| list.item(index))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn closest(&self, node: &Element, selector: &Selector) -> Option<Element> {
		node.closest(selector.as_str()).ok().flatten()
	}

	fn matches(&self, node: &Element, selector: &Selector) -> bool {
		node.matches(selector.as_str()).unwrap_or(false)
	}

	fn tag_name(&self, node: &Element) -> String {
		node.tag_name().to_ascii_lowercase()
	}

	fn attribute(&self, node: &Element, name: &str) -> Option<String> {
		node.get_attribute(name)
	}

	fn set_attribute(&self, node: &Element, name: &str, value: &str) -> DomResult<()> {
		node.set_attribute(name, value).map_err(js_error)
	}

	fn remove_attribute(&self, node: &Element, name: &str) -> DomResult<()> {
		node.remove_attribute(name).map_err(js_error)
	}

	fn has_class(&self, node: &Element, class: &str) -> bool {
		node.class_list().contains(class)
	}

	fn add_class(&self, node: &Element, class: &str) -> DomResult<()> {
		node.class_list().add_1(class).map_err(js_error)
	}

	fn remove_class(&self, node: &Element, class: &str) -> DomResult<()> {
		node.class_list().remove_1(class).map_err(js_error)
	}

	fn set_style(&self, node: &Element, property: &str, value: &str) -> DomResult<()> {
		let element = node
			.dyn_ref::<HtmlElement>()
			.ok_or_else(|| Self::unsupported("set_style", node))?;
		element
			.style()
			.set_property(property, value)
			.map_err(js_error)
	}

	fn text(&self, node: &Element) -> String {
		node.text_content().unwrap_or_default()
	}

	fn set_text(&self, node: &Element, text: &str) -> DomResult<()> {
		node.set_text_content(Some(text));
		Ok(())
	}

	fn create_element(&self, tag: &str) -> DomResult<Element> {
		self.document.create_element(tag).map_err(js_error)
	}

	fn append_child(&self, parent: &Element, child: &Element) -> DomResult<()> {
		parent.append_child(child).map(|_| ()).map_err(js_error)
	}

	fn insert_before(&self, reference: &Element, node: &Element) -> DomResult<()> {
		reference.before_with_node_1(node).map_err(js_error)
	}

	fn insert_after(&self, reference: &Element, node: &Element) -> DomResult<()> {
		reference
			.insert_adjacent_element("afterend", node)
			.map(|_| ())
			.map_err(js_error)
	}

	fn remove(&self, node: &Element) -> DomResult<()> {
		node.remove();
		Ok(())
	}

	fn parent(&self, node: &Element) -> Option<Element> {
		node.parent_element()
	}

	fn next_element_sibling(&self, node: &Element) -> Option<Element> {
		node.next_element_sibling()
	}

	fn set_disabled(&self, node: &Element, disabled: bool) -> DomResult<()> {
		Self::set_flag(node, "disabled", disabled)
	}

	fn is_disabled(&self, node: &Element) -> bool {
		Self::flag(node, "disabled")
	}

	fn set_read_only(&self, node: &Element, read_only: bool) -> DomResult<()> {
		Self::set_flag(node, "readOnly", read_only)
	}

	fn is_read_only(&self, node: &Element) -> bool {
		Self::flag(node, "readOnly")
	}

	fn is_checked(&self, node: &Element) -> bool {
		Self::flag(node, "checked")
	}

	fn blur_active(&self) {
		if let Some(active) = self
			.document
			.active_element()
			.and_then(|element| element.dyn_into::<HtmlElement>().ok())
		{
			active.blur().ok();
		}
	}

	fn input_files(&self, input: &Element) -> Vec<File> {
		let Some(files) = input
			.dyn_ref::<HtmlInputElement>()
			.and_then(HtmlInputElement::files)
		else {
			return Vec::new();
		};
		(0..files.length()).filter_map(|index| files.get(index)).collect()
	}

	fn set_input_files(&self, input: &Element, files: &[File]) -> DomResult<()> {
		let element = input
			.dyn_ref::<HtmlInputElement>()
			.ok_or_else(|| Self::unsupported("set_input_files", input))?;
		let transfer = DataTransfer::new().map_err(js_error)?;
		let items = transfer.items();
		for file in files {
			items.add_with_file(file).map_err(js_error)?;
		}
		element.set_files(transfer.files().as_ref());
		Ok(())
	}

	fn set_custom_validity(&self, input: &Element, message: &str) -> DomResult<()> {
		if let Some(element) = input.dyn_ref::<HtmlInputElement>() {
			element.set_custom_validity(message);
		} else if let Some(element) = input.dyn_ref::<HtmlSelectElement>() {
			element.set_custom_validity(message);
		} else if let Some(element) = input.dyn_ref::<HtmlTextAreaElement>() {
			element.set_custom_validity(message);
		} else if let Some(element) = input.dyn_ref::<HtmlButtonElement>() {
			element.set_custom_validity(message);
		} else {
			return Err(Self::unsupported("set_custom_validity", input));
		}
		Ok(())
	}

	fn validation_message(&self, input: &Element) -> String {
		let message = if let Some(element) = input.dyn_ref::<HtmlInputElement>() {
			element.validation_message()
		} else if let Some(element) = input.dyn_ref::<HtmlSelectElement>() {
			element.validation_message()
		} else if let Some(element) = input.dyn_ref::<HtmlTextAreaElement>() {
			element.validation_message()
		} else if let Some(element) = input.dyn_ref::<HtmlButtonElement>() {
			element.validation_message()
		} else {
			return String::new();
		};
		message.unwrap_or_default()
	}

	fn check_validity(&self, control: &Element) -> bool {
		if let Some(element) = control.dyn_ref::<HtmlInputElement>() {
			element.check_validity()
		} else if let Some(element) = control.dyn_ref::<HtmlSelectElement>() {
			element.check_validity()
		} else if let Some(element) = control.dyn_ref::<HtmlTextAreaElement>() {
			element.check_validity()
		} else if let Some(element) = control.dyn_ref::<HtmlButtonElement>() {
			element.check_validity()
		} else {
			true
		}
	}

	fn form_entries(&self, form: &Element) -> DomResult<Vec<FormEntry<File>>> {
		let form = form
			.dyn_ref::<HtmlFormElement>()
			.ok_or_else(|| Self::unsupported("form_entries", form))?;
		let data = FormData::new_with_form(form).map_err(js_error)?;
		let Some(iterator) = js_sys::try_iter(&data).map_err(js_error)? else {
			return Ok(Vec::new());
		};
		let mut entries = Vec::new();
		for pair in iterator {
			let pair: js_sys::Array = pair.map_err(js_error)?.unchecked_into();
			let name = pair.get(0).as_string().unwrap_or_default();
			let value = pair.get(1);
			match value.dyn_into::<File>() {
				Ok(file) => entries.push(FormEntry::file(name, file)),
				Err(value) => entries.push(FormEntry::text(name, value.as_string().unwrap_or_default())),
			}
		}
		Ok(entries)
	}
}
