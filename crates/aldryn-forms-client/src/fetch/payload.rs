//! Multipart payload of a fetch submission

use aldryn_forms_dom::{Dom, FormEntry};

use crate::error::FormsResult;
use crate::markup;
use crate::upload::UploadWidget;

/// Form entries to send for `form`
///
/// With `adjust-uploads` the files collected for a field bound to an upload
/// widget are replaced by the widget's staged files, appended after the other
/// entries. File fields without a widget keep their collected files.
pub fn build<D: Dom>(
	dom: &D,
	form: &D::Node,
	widgets: &[UploadWidget<D>],
) -> FormsResult<Vec<FormEntry<D::File>>> {
	let mut entries = dom.form_entries(form)?;
	if !dom.has_class(form, markup::ADJUST_UPLOADS) {
		return Ok(entries);
	}

	let inputs = dom.query_all(form, &markup::INPUTS);
	let staged: Vec<(String, &UploadWidget<D>)> = widgets
		.iter()
		.filter(|widget| inputs.contains(widget.input()))
		.filter_map(|widget| {
			let name = dom.attribute(widget.input(), "name").filter(|name| !name.is_empty())?;
			Some((name, widget))
		})
		.collect();

	entries.retain(|entry| {
		!(entry.is_file() && staged.iter().any(|(name, _)| *name == entry.name))
	});
	for (name, widget) in staged {
		entries.extend(
			widget
				.staged()
				.files()
				.into_iter()
				.map(|file| FormEntry::file(name.clone(), file)),
		);
	}
	Ok(entries)
}
