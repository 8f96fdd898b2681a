//! Drag-and-drop markup and rendering of the staged list

use aldryn_forms_dom::{Dom, UploadFile};
use aldryn_forms_i18n::{Translator, interpolate_positional};

use crate::error::FormsResult;
use crate::markup;
use crate::options::{FormOptions, Icons};
use crate::settings::FormsSettings;
use crate::upload::accept::AcceptRules;
use crate::upload::size::human_file_size;
use crate::upload::staging::{StagedFiles, UploadLimits};

const MAX_FILES_SINGULAR: &str = "Max. %s file with a total size of max. %s";
const MAX_FILES_PLURAL: &str = "Max. %s files with a total size of max. %s";

/// An enhanced file input and its staged list
#[derive(Debug)]
pub struct UploadWidget<D: Dom> {
	input: D::Node,
	list: D::Node,
	items: Vec<D::Node>,
	staged: StagedFiles<D::File>,
	icons: Icons,
	multiple: bool,
}

fn limits<D: Dom>(dom: &D, input: &D::Node) -> UploadLimits {
	UploadLimits {
		max_files: dom
			.data(input, "max_files")
			.and_then(|value| value.trim().parse().ok()),
		max_size: dom
			.data(input, "max_size")
			.and_then(|value| value.trim().parse().ok()),
	}
}

/// Drop-zone description built from the limits
pub fn describe_limits(i18n: &dyn Translator, limits: &UploadLimits) -> Option<String> {
	match (limits.max_files, limits.max_size) {
		(Some(files), Some(size)) => {
			let template = i18n.ngettext(MAX_FILES_SINGULAR, MAX_FILES_PLURAL, files);
			let files = files.to_string();
			let size = human_file_size(size);
			Some(interpolate_positional(&template, &[&files, &size]))
		}
		(None, Some(size)) => Some(format!(
			"{} {}",
			i18n.gettext("Max. size"),
			human_file_size(size)
		)),
		_ => None,
	}
}

impl<D: Dom> UploadWidget<D> {
	/// Wraps `input` in the drag-and-drop frame
	pub fn enhance(
		dom: &D,
		i18n: &dyn Translator,
		settings: &FormsSettings,
		input: D::Node,
	) -> FormsResult<Self> {
		let form = dom.closest(&input, &markup::FORM);
		let icons = match &form {
			Some(form) => FormOptions::from_form(dom, form, settings).icons,
			None => Icons::from(settings),
		};
		let limits = limits(dom, &input);
		let drag_and_drop = dom.has_class(&input, markup::DRAG_AND_DROP);

		dom.add_class(&input, markup::CHECK_VALIDITY)?;
		let frame = dom.create_element("div")?;
		dom.add_class(&frame, markup::UPLOAD_FILES_FRAME)?;
		if drag_and_drop {
			dom.add_class(&frame, markup::DRAG_AND_DROP)?;
		}
		let zone = dom.create_element("div")?;
		dom.add_class(&zone, markup::DRAG_AND_DROP)?;
		dom.append_child(&frame, &zone)?;

		if drag_and_drop {
			let label = dom.create_element("div")?;
			dom.add_class(&label, "label")?;
			let icon = dom.create_element("img")?;
			dom.set_attribute(&icon, "src", &icons.upload)?;
			dom.append_child(&label, &icon)?;
			if let Some(placeholder) = dom.attribute(&input, "placeholder").filter(|p| !p.is_empty()) {
				let title = dom.create_element("h4")?;
				dom.set_text(&title, &placeholder)?;
				dom.append_child(&label, &title)?;
			}
			if let Some(text) = describe_limits(i18n, &limits) {
				let description = dom.create_element("div")?;
				dom.set_text(&description, &text)?;
				dom.append_child(&label, &description)?;
			}
			dom.append_child(&zone, &label)?;
		}

		let help_text = dom
			.next_element_sibling(&input)
			.filter(|node| dom.has_class(node, markup::HELP_TEXT));
		if let Some(help_text) = &help_text {
			dom.remove(help_text)?;
		}
		dom.insert_before(&input, &frame)?;
		dom.append_child(&zone, &input)?;
		if let Some(help_text) = &help_text {
			dom.append_child(&frame, help_text)?;
		}

		let list = dom.create_element("ul")?;
		dom.add_class(&list, markup::UPLOAD_FILE_NAMES)?;
		dom.append_child(&frame, &list)?;

		if let Some(form) = &form {
			dom.add_class(form, markup::ADJUST_UPLOADS)?;
		}

		let accept = AcceptRules::parse(&dom.attribute(&input, "accept").unwrap_or_default());
		let multiple = dom.attribute(&input, "multiple").is_some();
		aldryn_forms_dom::debug_log!("upload widget enhanced: {:?}", limits);
		Ok(Self {
			input,
			list,
			items: Vec::new(),
			staged: StagedFiles::new(accept, limits),
			icons,
			multiple,
		})
	}

	/// The file input
	pub fn input(&self) -> &D::Node {
		&self.input
	}

	/// The `ul.upload-file-names` list
	pub fn list(&self) -> &D::Node {
		&self.list
	}

	/// The staged files
	pub fn staged(&self) -> &StagedFiles<D::File> {
		&self.staged
	}

	/// Whether `item` is one of the rendered list items
	pub fn owns_item(&self, item: &D::Node) -> bool {
		self.items.contains(item)
	}

	/// `change` on the input: stages the newly chosen files
	///
	/// A single-file input replaces its staged file instead of appending.
	pub fn stage_selection(&mut self, dom: &D, i18n: &dyn Translator) -> FormsResult<()> {
		let chosen = dom.input_files(&self.input);
		if !self.multiple {
			self.staged.clear();
		}
		self.staged.add_batch(chosen);
		self.refresh(dom, i18n)
	}

	/// Trash click on `item`: drops its file; returns whether the item belonged here
	pub fn remove_item(&mut self, dom: &D, i18n: &dyn Translator, item: &D::Node) -> FormsResult<bool> {
		let Some(index) = self.items.iter().position(|node| node == item) else {
			return Ok(false);
		};
		self.staged.remove(index);
		self.refresh(dom, i18n)?;
		Ok(true)
	}

	fn refresh(&mut self, dom: &D, i18n: &dyn Translator) -> FormsResult<()> {
		self.render(dom, i18n)?;
		let message = self
			.staged
			.entries()
			.iter()
			.flat_map(|entry| entry.errors())
			.last()
			.map(|error| error.message(i18n))
			.unwrap_or_default();
		dom.set_custom_validity(&self.input, &message)?;
		dom.set_input_files(&self.input, &self.staged.files())?;
		Ok(())
	}

	fn render(&mut self, dom: &D, i18n: &dyn Translator) -> FormsResult<()> {
		for item in self.items.drain(..) {
			dom.remove(&item)?;
		}
		for entry in self.staged.entries() {
			let file = entry.file();
			let item = dom.create_element("li")?;

			let status = dom.create_element("div")?;
			dom.add_class(&status, "status")?;
			let icon = dom.create_element("img")?;
			let src = if entry.is_valid() {
				&self.icons.attach
			} else {
				&self.icons.error
			};
			dom.set_attribute(&icon, "src", src)?;
			dom.append_child(&status, &icon)?;
			dom.append_child(&item, &status)?;

			let content = dom.create_element("div")?;
			dom.add_class(&content, "content")?;
			let name = dom.create_element("div")?;
			dom.add_class(&name, "file-name")?;
			let title = format!("{} {}", i18n.gettext("File size"), human_file_size(file.size()));
			dom.set_attribute(&name, "title", &title)?;
			dom.set_text(&name, &file.name())?;
			dom.append_child(&content, &name)?;
			let errors = dom.create_element("div")?;
			dom.add_class(&errors, markup::ERROR)?;
			for error in entry.errors() {
				let line = dom.create_element("div")?;
				dom.add_class(&line, error.tag())?;
				dom.set_text(&line, &error.message(i18n))?;
				dom.append_child(&errors, &line)?;
				dom.add_class(&item, markup::ERROR)?;
				dom.add_class(&item, error.tag())?;
			}
			dom.append_child(&content, &errors)?;
			dom.append_child(&item, &content)?;

			let remove = dom.create_element("div")?;
			dom.add_class(&remove, "remove")?;
			let trash = dom.create_element("img")?;
			let remove_text = i18n.gettext("Remove file.");
			dom.set_attribute(&trash, "src", &self.icons.trash)?;
			dom.add_class(&trash, "trash")?;
			dom.set_style(&trash, "cursor", "pointer")?;
			dom.set_attribute(&trash, "alt", &remove_text)?;
			dom.set_attribute(&trash, "title", &remove_text)?;
			dom.append_child(&remove, &trash)?;
			dom.append_child(&item, &remove)?;

			dom.append_child(&self.list, &item)?;
			self.items.push(item);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use aldryn_forms_dom::{MemoryDom, MemoryFile};
	use aldryn_forms_i18n::MessageCatalog;
	use rstest::{fixture, rstest};

	#[fixture]
	fn dom() -> MemoryDom {
		MemoryDom::parse(
			r#"<form id="f" data-icon_trash="/t.svg">
				<input id="u" type="file" name="upload" class="drag-and-drop" multiple data-enable_js
					data-max_files="2" data-max_size="1048576" accept=".pdf" placeholder="Drop files">
				<div class="help-text">PDF only</div>
			</form>"#,
		)
		.unwrap()
	}

	fn widget(dom: &MemoryDom) -> UploadWidget<MemoryDom> {
		let input = dom.by_id("u").unwrap();
		UploadWidget::enhance(dom, &MessageCatalog::default(), &FormsSettings::default(), input)
			.unwrap()
	}

	#[rstest]
	#[case(Some(1), Some(2048), Some("Max. 1 file with a total size of max. 2 kB"))]
	#[case(Some(3), Some(2048), Some("Max. 3 files with a total size of max. 2 kB"))]
	#[case(None, Some(1536), Some("Max. size 1.5 kB"))]
	#[case(Some(3), None, None)]
	fn test_describe_limits(
		#[case] max_files: Option<usize>,
		#[case] max_size: Option<u64>,
		#[case] expected: Option<&str>,
	) {
		// Arrange
		let limits = UploadLimits {
			max_files,
			max_size,
		};

		// Act
		let text = describe_limits(&MessageCatalog::default(), &limits);

		// Assert
		assert_eq!(text.as_deref(), expected);
	}

	#[rstest]
	fn test_enhance_markup(dom: MemoryDom) {
		// Act
		let widget = widget(&dom);

		// Assert
		let frame = dom.select(".upload-files-frame.drag-and-drop").unwrap()[0];
		let zone = dom.select(".upload-files-frame div.drag-and-drop").unwrap()[0];
		assert_eq!(dom.parent(widget.input()), Some(zone));
		assert!(dom.has_class(widget.input(), "check-validity"));
		assert_eq!(dom.text(&dom.select(".upload-files-frame h4").unwrap()[0]), "Drop files");
		assert_eq!(dom.parent(&dom.select(".help-text").unwrap()[0]), Some(frame));
		assert_eq!(dom.parent(widget.list()), Some(frame));
		assert!(dom.has_class(&dom.by_id("f").unwrap(), "adjust-uploads"));
	}

	#[rstest]
	fn test_stage_and_remove(dom: MemoryDom) {
		// Arrange
		let mut widget = widget(&dom);
		let i18n = MessageCatalog::default();
		let input = *widget.input();
		dom.choose_files(&input, vec![MemoryFile::new("a.pdf", 10, "application/pdf")]);
		widget.stage_selection(&dom, &i18n).unwrap();
		dom.choose_files(&input, vec![MemoryFile::new("b.txt", 10, "text/plain")]);

		// Act
		widget.stage_selection(&dom, &i18n).unwrap();

		// Assert
		assert_eq!(widget.staged().len(), 2);
		assert_eq!(dom.input_files(&input).len(), 2);
		assert_eq!(
			dom.validation_message(&input),
			"The file type is not among the accpeted types."
		);
		let items = dom.select("ul.upload-file-names li").unwrap();
		assert!(dom.has_class(&items[1], "file-type"));
		let trash = dom.select("li.file-type img.trash").unwrap()[0];
		assert_eq!(dom.attribute(&trash, "src").as_deref(), Some("/t.svg"));

		assert!(widget.remove_item(&dom, &i18n, &items[1]).unwrap());
		assert_eq!(dom.validation_message(&input), "");
		assert_eq!(dom.select("ul.upload-file-names li").unwrap().len(), 1);
		assert_eq!(dom.input_files(&input).len(), 1);
	}
}
