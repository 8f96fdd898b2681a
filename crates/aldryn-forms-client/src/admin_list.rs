//! Show more/less toggle of the admin change list
//!
//! Rows rendered with class `aldryn-forms-data` hide their `.more` parts on
//! click. The `display_data` column header gets an icon toggling all rows.

use aldryn_forms_dom::Dom;

use crate::error::FormsResult;
use crate::markup;
use crate::settings::FormsSettings;

/// Prepares rows and the column header
pub fn install<D: Dom>(dom: &D, settings: &FormsSettings) -> FormsResult<()> {
	let root = dom.root();
	for row in dom.query_all(&root, &markup::ADMIN_ROWS) {
		dom.set_style(&row, "cursor", "pointer")?;
		dom.set_attribute(&row, "title", &settings.display_less)?;
	}

	if let Some(column) = dom.query(&root, &markup::ADMIN_COLUMN) {
		let node = dom.create_element("span")?;
		let icon = dom.create_element("img")?;
		dom.set_attribute(&icon, "src", &settings.icon_view_link)?;
		dom.set_attribute(&icon, "title", &settings.toggle_more_less)?;
		dom.append_child(&node, &icon)?;
		dom.set_style(&node, "cursor", "pointer")?;
		dom.add_class(&node, markup::ITEM_AFTER)?;
		dom.append_child(&column, &node)?;
	}
	Ok(())
}

/// Toggles the `.more` parts of one row and updates its title
pub fn toggle_row<D: Dom>(dom: &D, settings: &FormsSettings, row: &D::Node) -> FormsResult<()> {
	let mut hidden = None;
	for item in dom.query_all(row, &markup::ADMIN_MORE) {
		hidden = Some(dom.toggle_class(&item, markup::HIDDEN)?);
	}
	if let Some(hidden) = hidden {
		let title = if hidden {
			&settings.display_more
		} else {
			&settings.display_less
		};
		dom.set_attribute(row, "title", title)?;
	}
	Ok(())
}

/// Toggles every row of the page
pub fn toggle_all<D: Dom>(dom: &D, settings: &FormsSettings) -> FormsResult<()> {
	for row in dom.query_all(&dom.root(), &markup::ADMIN_ROWS) {
		toggle_row(dom, settings, &row)?;
	}
	Ok(())
}

/// Routes a click; returns whether it belonged to the admin list
pub fn handle_click<D: Dom>(dom: &D, settings: &FormsSettings, target: &D::Node) -> FormsResult<bool> {
	if dom.closest(target, &markup::ADMIN_TOGGLE_ALL).is_some() {
		toggle_all(dom, settings)?;
		return Ok(true);
	}
	match dom.closest(target, &markup::ADMIN_ROWS) {
		Some(row) => {
			toggle_row(dom, settings, &row)?;
			Ok(true)
		}
		None => Ok(false),
	}
}
