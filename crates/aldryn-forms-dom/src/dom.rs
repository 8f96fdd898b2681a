//! Backend-independent document access
//!
//! Components never touch `web_sys` directly. They receive a [`Dom`]
//! implementation and operate on its opaque node handles, which lets the whole
//! behavior layer run natively against [`MemoryDom`](crate::MemoryDom).

use std::fmt;

use crate::error::DomResult;
use crate::file::UploadFile;
use crate::selector::Selector;

/// Value of a multipart form entry
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<F> {
	/// Plain field value
	Text(String),
	/// Uploaded file
	File(F),
}

/// One `name=value` entry of a form submission, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct FormEntry<F> {
	/// Field name
	pub name: String,
	/// Field value
	pub value: FormValue<F>,
}

impl<F> FormEntry<F> {
	/// Creates a text entry
	pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: FormValue::Text(value.into()),
		}
	}

	/// Creates a file entry
	pub fn file(name: impl Into<String>, file: F) -> Self {
		Self {
			name: name.into(),
			value: FormValue::File(file),
		}
	}

	/// Whether this entry carries a file
	pub fn is_file(&self) -> bool {
		matches!(self.value, FormValue::File(_))
	}
}

/// Document operations used by the form components
///
/// Every method takes `&self`; backends rely on interior mutability (the
/// browser DOM is shared mutable state by nature).
pub trait Dom {
	/// Element handle
	type Node: Clone + PartialEq + fmt::Debug;
	/// File handle
	type File: UploadFile + fmt::Debug;

	/// The document element, scope of page-wide queries
	fn root(&self) -> Self::Node;

	/// Descendants of `scope` matching `selector`, in document order
	fn query_all(&self, scope: &Self::Node, selector: &Selector) -> Vec<Self::Node>;

	/// First descendant of `scope` matching `selector`
	fn query(&self, scope: &Self::Node, selector: &Selector) -> Option<Self::Node> {
		self.query_all(scope, selector).into_iter().next()
	}

	/// Nearest inclusive ancestor matching `selector`
	fn closest(&self, node: &Self::Node, selector: &Selector) -> Option<Self::Node>;

	/// Whether `node` matches `selector`
	fn matches(&self, node: &Self::Node, selector: &Selector) -> bool;

	/// Lowercase tag name
	fn tag_name(&self, node: &Self::Node) -> String;

	/// Attribute value
	fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

	/// Sets an attribute
	fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> DomResult<()>;

	/// Removes an attribute
	fn remove_attribute(&self, node: &Self::Node, name: &str) -> DomResult<()>;

	/// `dataset[key]`, i.e. the `data-{key}` attribute
	fn data(&self, node: &Self::Node, key: &str) -> Option<String> {
		self.attribute(node, &format!("data-{}", key))
	}

	/// Whether the class list contains `class`
	fn has_class(&self, node: &Self::Node, class: &str) -> bool;

	/// Adds a class
	fn add_class(&self, node: &Self::Node, class: &str) -> DomResult<()>;

	/// Removes a class
	fn remove_class(&self, node: &Self::Node, class: &str) -> DomResult<()>;

	/// Toggles a class, returning whether it is now present
	fn toggle_class(&self, node: &Self::Node, class: &str) -> DomResult<bool> {
		if self.has_class(node, class) {
			self.remove_class(node, class)?;
			Ok(false)
		} else {
			self.add_class(node, class)?;
			Ok(true)
		}
	}

	/// Sets an inline style property
	fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> DomResult<()>;

	/// Text content of the node and its descendants
	fn text(&self, node: &Self::Node) -> String;

	/// Replaces the children of `node` with a single text node
	fn set_text(&self, node: &Self::Node, text: &str) -> DomResult<()>;

	/// Creates a detached element
	fn create_element(&self, tag: &str) -> DomResult<Self::Node>;

	/// Appends `child` as the last child of `parent`, moving it if attached
	fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> DomResult<()>;

	/// Inserts `node` right before `reference` in the same parent
	fn insert_before(&self, reference: &Self::Node, node: &Self::Node) -> DomResult<()>;

	/// Inserts `node` right after `reference` (`insertAdjacentElement("afterend")`)
	fn insert_after(&self, reference: &Self::Node, node: &Self::Node) -> DomResult<()>;

	/// Detaches `node` from the document
	fn remove(&self, node: &Self::Node) -> DomResult<()>;

	/// Parent element
	fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

	/// Next sibling element
	fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

	/// Sets the `disabled` property
	fn set_disabled(&self, node: &Self::Node, disabled: bool) -> DomResult<()>;

	/// Reads the `disabled` property
	fn is_disabled(&self, node: &Self::Node) -> bool;

	/// Sets the `readOnly` property
	fn set_read_only(&self, node: &Self::Node, read_only: bool) -> DomResult<()>;

	/// Reads the `readOnly` property
	fn is_read_only(&self, node: &Self::Node) -> bool;

	/// Checkedness of checkboxes and radio buttons
	fn is_checked(&self, node: &Self::Node) -> bool;

	/// Removes focus from the focused element, if any
	fn blur_active(&self);

	/// Files currently selected in a file input
	fn input_files(&self, input: &Self::Node) -> Vec<Self::File>;

	/// Replaces the file selection of a file input
	fn set_input_files(&self, input: &Self::Node, files: &[Self::File]) -> DomResult<()>;

	/// `setCustomValidity()`; an empty message marks the control valid
	fn set_custom_validity(&self, input: &Self::Node, message: &str) -> DomResult<()>;

	/// Current `validationMessage`
	fn validation_message(&self, input: &Self::Node) -> String;

	/// `checkValidity()` without firing `invalid` handlers on failure paths
	fn check_validity(&self, control: &Self::Node) -> bool;

	/// Entries a native `new FormData(form)` would produce
	fn form_entries(&self, form: &Self::Node) -> DomResult<Vec<FormEntry<Self::File>>>;
}
