//! In-memory document
//!
//! A small arena-backed DOM that implements [`Dom`] for native builds and
//! tests. It models the parts of the HTML DOM the form components rely on:
//! the element tree, attributes, classes, text, form control state
//! (checkedness, file selection, custom validity) and focus.

use std::cell::{Cell, RefCell};

use crate::backend::html;
use crate::dom::{Dom, FormEntry};
use crate::error::{DomError, DomResult};
use crate::file::MemoryFile;
use crate::selector::{MatchTarget, Selector};

/// Handle to a node of a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const TEXT_TAG: &str = "#text";

#[derive(Debug, Default)]
struct NodeData {
	tag: String,
	attributes: Vec<(String, String)>,
	text: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	checked: bool,
	files: Vec<MemoryFile>,
	custom_validity: String,
}

impl NodeData {
	fn element(tag: &str) -> Self {
		Self {
			tag: tag.to_ascii_lowercase(),
			..Self::default()
		}
	}

	fn is_text(&self) -> bool {
		self.tag == TEXT_TAG
	}

	fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	fn set_attribute(&mut self, name: &str, value: &str) {
		match self.attributes.iter_mut().find(|(key, _)| key == name) {
			Some((_, current)) => *current = value.to_string(),
			None => self.attributes.push((name.to_string(), value.to_string())),
		}
	}

	fn remove_attribute(&mut self, name: &str) {
		self.attributes.retain(|(key, _)| key != name);
	}

	fn classes(&self) -> Vec<String> {
		self.attribute("class")
			.map(|value| value.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}
}

/// Arena-backed document implementing [`Dom`]
#[derive(Debug)]
pub struct MemoryDom {
	nodes: RefCell<Vec<NodeData>>,
	focused: Cell<Option<NodeId>>,
}

impl Default for MemoryDom {
	fn default() -> Self {
		Self::new()
	}
}

/// Borrowed view used for selector matching
struct NodeView<'a> {
	nodes: &'a [NodeData],
	id: NodeId,
}

impl MatchTarget for NodeView<'_> {
	fn tag(&self) -> String {
		self.nodes[self.id.0].tag.clone()
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.nodes[self.id.0].attribute(name).map(str::to_string)
	}

	fn checked(&self) -> bool {
		self.nodes[self.id.0].checked
	}

	fn parent_element(&self) -> Option<Self> {
		self.nodes[self.id.0].parent.map(|id| NodeView {
			nodes: self.nodes,
			id,
		})
	}
}

impl MemoryDom {
	/// Creates an empty document whose root is an `<html>` element
	pub fn new() -> Self {
		Self {
			nodes: RefCell::new(vec![NodeData::element("html")]),
			focused: Cell::new(None),
		}
	}

	/// Creates a document and appends the parsed `markup` to its root
	///
	/// # Errors
	///
	/// Returns [`DomError::Markup`] when closing tags do not match.
	pub fn parse(markup: &str) -> DomResult<Self> {
		let dom = Self::new();
		html::parse_into(&dom, &dom.root(), markup)?;
		Ok(dom)
	}

	/// Element with the given `id` attribute
	pub fn by_id(&self, id: &str) -> Option<NodeId> {
		let root = self.root();
		self.descendants(root)
			.into_iter()
			.find(|node| self.attribute(node, "id").as_deref() == Some(id))
	}

	/// Convenience wrapper around [`Dom::query_all`] on the whole document
	///
	/// # Errors
	///
	/// Returns [`DomError::Selector`] for an invalid selector.
	pub fn select(&self, selector: &str) -> DomResult<Vec<NodeId>> {
		let selector = Selector::parse(selector)?;
		Ok(self.query_all(&self.root(), &selector))
	}

	/// Appends a text node
	pub fn append_text(&self, parent: &NodeId, text: &str) -> DomResult<()> {
		let node = self.push(NodeData {
			tag: TEXT_TAG.to_string(),
			text: text.to_string(),
			..NodeData::default()
		});
		self.append_child(parent, &node)
	}

	/// Sets checkedness, as a user click would
	pub fn set_checked(&self, node: &NodeId, checked: bool) {
		self.nodes.borrow_mut()[node.0].checked = checked;
	}

	/// Replaces the selection of a file input, as the file picker would
	pub fn choose_files(&self, input: &NodeId, files: Vec<MemoryFile>) {
		self.nodes.borrow_mut()[input.0].files = files;
	}

	/// Sets the value of a text control
	pub fn set_value(&self, node: &NodeId, value: &str) {
		let mut nodes = self.nodes.borrow_mut();
		let data = &mut nodes[node.0];
		if data.tag == "textarea" {
			data.children.clear();
			data.text = value.to_string();
		} else {
			data.set_attribute("value", value);
		}
	}

	/// Focuses an element
	pub fn focus(&self, node: &NodeId) {
		self.focused.set(Some(*node));
	}

	/// The focused element, if any
	pub fn focused(&self) -> Option<NodeId> {
		self.focused.get()
	}

	/// Ordered class list
	pub fn classes(&self, node: &NodeId) -> Vec<String> {
		self.nodes.borrow()[node.0].classes()
	}

	/// Whether the node is connected to the document root
	pub fn is_connected(&self, node: &NodeId) -> bool {
		let nodes = self.nodes.borrow();
		let mut current = Some(*node);
		while let Some(id) = current {
			if id == self.root() {
				return true;
			}
			current = nodes[id.0].parent;
		}
		false
	}

	fn push(&self, data: NodeData) -> NodeId {
		let mut nodes = self.nodes.borrow_mut();
		nodes.push(data);
		NodeId(nodes.len() - 1)
	}

	fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
		let nodes = self.nodes.borrow();
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = nodes[scope.0].children.iter().rev().copied().collect();
		while let Some(id) = stack.pop() {
			if !nodes[id.0].is_text() {
				out.push(id);
			}
			stack.extend(nodes[id.0].children.iter().rev().copied());
		}
		out
	}

	fn detach(nodes: &mut [NodeData], node: NodeId) {
		if let Some(parent) = nodes[node.0].parent.take() {
			nodes[parent.0].children.retain(|child| *child != node);
		}
	}

	fn is_inclusive_ancestor(nodes: &[NodeData], ancestor: NodeId, node: NodeId) -> bool {
		let mut current = Some(node);
		while let Some(id) = current {
			if id == ancestor {
				return true;
			}
			current = nodes[id.0].parent;
		}
		false
	}

	fn insert_relative(&self, reference: &NodeId, node: &NodeId, offset: usize) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		let parent = nodes[reference.0]
			.parent
			.ok_or_else(|| DomError::Detached(nodes[reference.0].tag.clone()))?;
		if Self::is_inclusive_ancestor(&nodes, *node, parent) {
			return Err(DomError::UnsupportedOperation {
				operation: "insert",
				tag: nodes[node.0].tag.clone(),
			});
		}
		Self::detach(&mut nodes, *node);
		let index = nodes[parent.0]
			.children
			.iter()
			.position(|child| child == reference)
			.ok_or_else(|| DomError::Detached(nodes[reference.0].tag.clone()))?;
		nodes[parent.0].children.insert(index + offset, *node);
		nodes[node.0].parent = Some(parent);
		Ok(())
	}

	fn text_of(nodes: &[NodeData], node: NodeId, out: &mut String) {
		let data = &nodes[node.0];
		if data.is_text() || data.children.is_empty() {
			out.push_str(&data.text);
		}
		for child in &data.children {
			Self::text_of(nodes, *child, out);
		}
	}

	fn control_value(&self, node: NodeId) -> String {
		let tag = self.tag_name(&node);
		match tag.as_str() {
			"textarea" => self.text(&node),
			"select" => {
				let options = self.select_options(node);
				options
					.iter()
					.find(|option| self.attribute(option, "selected").is_some())
					.or_else(|| options.first())
					.map(|option| {
						self.attribute(option, "value")
							.unwrap_or_else(|| self.text(option))
					})
					.unwrap_or_default()
			}
			_ => self.attribute(&node, "value").unwrap_or_default(),
		}
	}

	fn select_options(&self, select: NodeId) -> Vec<NodeId> {
		self.descendants(select)
			.into_iter()
			.filter(|node| self.tag_name(node) == "option")
			.collect()
	}

	fn input_type(&self, node: &NodeId) -> String {
		self.attribute(node, "type")
			.map(|value| value.to_ascii_lowercase())
			.unwrap_or_else(|| "text".to_string())
	}
}

impl Dom for MemoryDom {
	type Node = NodeId;
	type File = MemoryFile;

	fn root(&self) -> NodeId {
		NodeId(0)
	}

	fn query_all(&self, scope: &NodeId, selector: &Selector) -> Vec<NodeId> {
		let candidates = self.descendants(*scope);
		let nodes = self.nodes.borrow();
		candidates
			.into_iter()
			.filter(|id| {
				selector.matches(&NodeView {
					nodes: &nodes,
					id: *id,
				})
			})
			.collect()
	}

	fn closest(&self, node: &NodeId, selector: &Selector) -> Option<NodeId> {
		let nodes = self.nodes.borrow();
		let mut current = Some(*node);
		while let Some(id) = current {
			if !nodes[id.0].is_text() && selector.matches(&NodeView { nodes: &nodes, id }) {
				return Some(id);
			}
			current = nodes[id.0].parent;
		}
		None
	}

	fn matches(&self, node: &NodeId, selector: &Selector) -> bool {
		let nodes = self.nodes.borrow();
		!nodes[node.0].is_text()
			&& selector.matches(&NodeView {
				nodes: &nodes,
				id: *node,
			})
	}

	fn tag_name(&self, node: &NodeId) -> String {
		self.nodes.borrow()[node.0].tag.clone()
	}

	fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
		self.nodes.borrow()[node.0]
			.attribute(name)
			.map(str::to_string)
	}

	fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> DomResult<()> {
		self.nodes.borrow_mut()[node.0].set_attribute(name, value);
		Ok(())
	}

	fn remove_attribute(&self, node: &NodeId, name: &str) -> DomResult<()> {
		self.nodes.borrow_mut()[node.0].remove_attribute(name);
		Ok(())
	}

	fn has_class(&self, node: &NodeId, class: &str) -> bool {
		self.nodes.borrow()[node.0]
			.classes()
			.iter()
			.any(|c| c == class)
	}

	fn add_class(&self, node: &NodeId, class: &str) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		let data = &mut nodes[node.0];
		let mut classes = data.classes();
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
			data.set_attribute("class", &classes.join(" "));
		}
		Ok(())
	}

	fn remove_class(&self, node: &NodeId, class: &str) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		let data = &mut nodes[node.0];
		let classes: Vec<String> = data.classes().into_iter().filter(|c| c != class).collect();
		if data.attribute("class").is_some() {
			data.set_attribute("class", &classes.join(" "));
		}
		Ok(())
	}

	fn set_style(&self, node: &NodeId, property: &str, value: &str) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		let data = &mut nodes[node.0];
		let mut declarations: Vec<(String, String)> = data
			.attribute("style")
			.unwrap_or_default()
			.split(';')
			.filter_map(|decl| decl.split_once(':'))
			.map(|(key, val)| (key.trim().to_string(), val.trim().to_string()))
			.filter(|(key, _)| key != property)
			.collect();
		declarations.push((property.to_string(), value.to_string()));
		let style = declarations
			.iter()
			.map(|(key, val)| format!("{}: {};", key, val))
			.collect::<Vec<_>>()
			.join(" ");
		data.set_attribute("style", &style);
		Ok(())
	}

	fn text(&self, node: &NodeId) -> String {
		let nodes = self.nodes.borrow();
		let mut out = String::new();
		Self::text_of(&nodes, *node, &mut out);
		out
	}

	fn set_text(&self, node: &NodeId, text: &str) -> DomResult<()> {
		{
			let mut nodes = self.nodes.borrow_mut();
			let children = std::mem::take(&mut nodes[node.0].children);
			for child in children {
				nodes[child.0].parent = None;
			}
			nodes[node.0].text.clear();
		}
		self.append_text(node, text)
	}

	fn create_element(&self, tag: &str) -> DomResult<NodeId> {
		Ok(self.push(NodeData::element(tag)))
	}

	fn append_child(&self, parent: &NodeId, child: &NodeId) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		if Self::is_inclusive_ancestor(&nodes, *child, *parent) {
			return Err(DomError::UnsupportedOperation {
				operation: "append_child",
				tag: nodes[child.0].tag.clone(),
			});
		}
		Self::detach(&mut nodes, *child);
		nodes[parent.0].children.push(*child);
		nodes[child.0].parent = Some(*parent);
		Ok(())
	}

	fn insert_before(&self, reference: &NodeId, node: &NodeId) -> DomResult<()> {
		self.insert_relative(reference, node, 0)
	}

	fn insert_after(&self, reference: &NodeId, node: &NodeId) -> DomResult<()> {
		self.insert_relative(reference, node, 1)
	}

	fn remove(&self, node: &NodeId) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		Self::detach(&mut nodes, *node);
		if let Some(focused) = self.focused.get()
			&& Self::is_inclusive_ancestor(&nodes, *node, focused)
		{
			self.focused.set(None);
		}
		Ok(())
	}

	fn parent(&self, node: &NodeId) -> Option<NodeId> {
		self.nodes.borrow()[node.0].parent
	}

	fn next_element_sibling(&self, node: &NodeId) -> Option<NodeId> {
		let nodes = self.nodes.borrow();
		let parent = nodes[node.0].parent?;
		let siblings = &nodes[parent.0].children;
		let index = siblings.iter().position(|child| child == node)?;
		siblings[index + 1..]
			.iter()
			.copied()
			.find(|sibling| !nodes[sibling.0].is_text())
	}

	fn set_disabled(&self, node: &NodeId, disabled: bool) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		if disabled {
			nodes[node.0].set_attribute("disabled", "");
		} else {
			nodes[node.0].remove_attribute("disabled");
		}
		Ok(())
	}

	fn is_disabled(&self, node: &NodeId) -> bool {
		self.nodes.borrow()[node.0].attribute("disabled").is_some()
	}

	fn set_read_only(&self, node: &NodeId, read_only: bool) -> DomResult<()> {
		let mut nodes = self.nodes.borrow_mut();
		if read_only {
			nodes[node.0].set_attribute("readonly", "");
		} else {
			nodes[node.0].remove_attribute("readonly");
		}
		Ok(())
	}

	fn is_read_only(&self, node: &NodeId) -> bool {
		self.nodes.borrow()[node.0].attribute("readonly").is_some()
	}

	fn is_checked(&self, node: &NodeId) -> bool {
		self.nodes.borrow()[node.0].checked
	}

	fn blur_active(&self) {
		self.focused.set(None);
	}

	fn input_files(&self, input: &NodeId) -> Vec<MemoryFile> {
		self.nodes.borrow()[input.0].files.clone()
	}

	fn set_input_files(&self, input: &NodeId, files: &[MemoryFile]) -> DomResult<()> {
		if self.tag_name(input) != "input" || self.input_type(input) != "file" {
			return Err(DomError::UnsupportedOperation {
				operation: "set_input_files",
				tag: self.tag_name(input),
			});
		}
		self.nodes.borrow_mut()[input.0].files = files.to_vec();
		Ok(())
	}

	fn set_custom_validity(&self, input: &NodeId, message: &str) -> DomResult<()> {
		self.nodes.borrow_mut()[input.0].custom_validity = message.to_string();
		Ok(())
	}

	fn validation_message(&self, input: &NodeId) -> String {
		self.nodes.borrow()[input.0].custom_validity.clone()
	}

	fn check_validity(&self, control: &NodeId) -> bool {
		if !self.validation_message(control).is_empty() {
			return false;
		}
		if self.is_disabled(control) || self.attribute(control, "required").is_none() {
			return true;
		}
		match (self.tag_name(control).as_str(), self.input_type(control).as_str()) {
			("input", "checkbox") | ("input", "radio") => self.is_checked(control),
			("input", "file") => !self.input_files(control).is_empty(),
			_ => !self.control_value(*control).is_empty(),
		}
	}

	fn form_entries(&self, form: &NodeId) -> DomResult<Vec<FormEntry<MemoryFile>>> {
		let mut entries = Vec::new();
		for node in self.descendants(*form) {
			let tag = self.tag_name(&node);
			if !matches!(tag.as_str(), "input" | "select" | "textarea") || self.is_disabled(&node) {
				continue;
			}
			let Some(name) = self.attribute(&node, "name").filter(|name| !name.is_empty()) else {
				continue;
			};
			match (tag.as_str(), self.input_type(&node).as_str()) {
				("input", "submit" | "button" | "reset" | "image") => {}
				("input", "checkbox" | "radio") => {
					if self.is_checked(&node) {
						let value = self
							.attribute(&node, "value")
							.unwrap_or_else(|| "on".to_string());
						entries.push(FormEntry::text(name, value));
					}
				}
				("input", "file") => {
					for file in self.input_files(&node) {
						entries.push(FormEntry::file(name.clone(), file));
					}
				}
				_ => entries.push(FormEntry::text(name, self.control_value(node))),
			}
		}
		Ok(entries)
	}
}

impl MemoryDom {
	pub(crate) fn push_parsed(&self, tag: &str, attributes: Vec<(String, String)>) -> NodeId {
		let checked = attributes.iter().any(|(key, _)| key == "checked");
		self.push(NodeData {
			tag: tag.to_ascii_lowercase(),
			attributes,
			checked,
			..NodeData::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sel(source: &str) -> Selector {
		Selector::parse(source).unwrap()
	}

	#[rstest]
	fn test_parse_and_query() {
		// Arrange
		let dom = MemoryDom::parse(
			r#"<form id="f"><input type="text" name="a"><button type="submit">Go</button></form>"#,
		)
		.unwrap();

		// Act
		let form = dom.by_id("f").unwrap();
		let buttons = dom.query_all(&form, &sel("[type=submit]"));

		// Assert
		assert_eq!(buttons.len(), 1);
		assert_eq!(dom.text(&buttons[0]), "Go");
	}

	#[rstest]
	fn test_insert_after_and_remove() {
		// Arrange
		let dom = MemoryDom::parse(r#"<div id="p"><span id="a"></span><span id="c"></span></div>"#)
			.unwrap();
		let a = dom.by_id("a").unwrap();
		let b = dom.create_element("em").unwrap();

		// Act
		dom.insert_after(&a, &b).unwrap();

		// Assert
		assert_eq!(dom.next_element_sibling(&a), Some(b));
		dom.remove(&b).unwrap();
		assert_eq!(dom.next_element_sibling(&a), dom.by_id("c"));
		assert!(!dom.is_connected(&b));
	}

	#[rstest]
	fn test_class_operations() {
		// Arrange
		let dom = MemoryDom::parse(r#"<p id="p" class="more"></p>"#).unwrap();
		let p = dom.by_id("p").unwrap();

		// Act
		let added = dom.toggle_class(&p, "d-none").unwrap();
		let removed = dom.toggle_class(&p, "d-none").unwrap();

		// Assert
		assert!(added);
		assert!(!removed);
		assert_eq!(dom.classes(&p), vec!["more".to_string()]);
	}

	#[rstest]
	fn test_set_style_replaces_property() {
		// Arrange
		let dom = MemoryDom::parse(r#"<p id="p" style="color: red;"></p>"#).unwrap();
		let p = dom.by_id("p").unwrap();

		// Act
		dom.set_style(&p, "cursor", "pointer").unwrap();
		dom.set_style(&p, "color", "blue").unwrap();

		// Assert
		assert_eq!(
			dom.attribute(&p, "style").as_deref(),
			Some("cursor: pointer; color: blue;")
		);
	}

	#[rstest]
	fn test_append_child_rejects_cycles() {
		// Arrange
		let dom = MemoryDom::parse(r#"<div id="outer"><div id="inner"></div></div>"#).unwrap();
		let outer = dom.by_id("outer").unwrap();
		let inner = dom.by_id("inner").unwrap();

		// Act
		let result = dom.append_child(&inner, &outer);

		// Assert
		assert!(matches!(result, Err(DomError::UnsupportedOperation { .. })));
	}

	#[rstest]
	fn test_check_validity() {
		// Arrange
		let dom = MemoryDom::parse(
			r#"<input id="t" required><input id="c" type="checkbox" required><input id="f" type="file" required>"#,
		)
		.unwrap();
		let t = dom.by_id("t").unwrap();
		let c = dom.by_id("c").unwrap();
		let f = dom.by_id("f").unwrap();

		// Act / Assert
		assert!(!dom.check_validity(&t));
		dom.set_value(&t, "x");
		assert!(dom.check_validity(&t));
		assert!(!dom.check_validity(&c));
		dom.set_checked(&c, true);
		assert!(dom.check_validity(&c));
		dom.choose_files(&f, vec![MemoryFile::new("a.txt", 1, "text/plain")]);
		assert!(dom.check_validity(&f));
		dom.set_custom_validity(&f, "too big").unwrap();
		assert!(!dom.check_validity(&f));
	}

	#[rstest]
	fn test_form_entries() {
		// Arrange
		let dom = MemoryDom::parse(
			r#"<form id="f">
				<input name="name" value="Ada">
				<input type="checkbox" name="opt" value="1" checked>
				<input type="checkbox" name="opt" value="2">
				<input type="file" name="upload">
				<textarea name="msg">Hi</textarea>
				<select name="pick"><option value="a">A</option><option value="b" selected>B</option></select>
				<input name="off" value="x" disabled>
				<button type="submit" name="send">Send</button>
			</form>"#,
		)
		.unwrap();
		let form = dom.by_id("f").unwrap();
		let upload = dom.select("input[type=file]").unwrap()[0];
		let file = MemoryFile::new("cv.pdf", 10, "application/pdf");
		dom.choose_files(&upload, vec![file.clone()]);

		// Act
		let entries = dom.form_entries(&form).unwrap();

		// Assert
		assert_eq!(
			entries,
			vec![
				FormEntry::text("name", "Ada"),
				FormEntry::text("opt", "1"),
				FormEntry::file("upload", file),
				FormEntry::text("msg", "Hi"),
				FormEntry::text("pick", "b"),
			]
		);
	}

	#[rstest]
	fn test_blur_active() {
		// Arrange
		let dom = MemoryDom::parse(r#"<button id="b"></button>"#).unwrap();
		let button = dom.by_id("b").unwrap();
		dom.focus(&button);

		// Act
		dom.blur_active();

		// Assert
		assert_eq!(dom.focused(), None);
	}

	proptest::proptest! {
		#[test]
		fn prop_toggle_class_twice_restores_class_list(
			initial in proptest::collection::vec("[a-z]{1,6}", 0..5),
			toggled in "[a-z]{1,6}",
		) {
			let mut unique = initial.clone();
			unique.dedup();
			let dom = MemoryDom::new();
			let node = dom.create_element("div").unwrap();
			for class in &unique {
				dom.add_class(&node, class).unwrap();
			}
			let before = dom.has_class(&node, &toggled);

			dom.toggle_class(&node, &toggled).unwrap();
			proptest::prop_assert_eq!(dom.has_class(&node, &toggled), !before);
			dom.toggle_class(&node, &toggled).unwrap();

			proptest::prop_assert_eq!(dom.has_class(&node, &toggled), before);
		}
	}
}
