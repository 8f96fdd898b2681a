//! Class names, attributes and selectors of the markup contract
//!
//! The server-side form templates emit these names; the components only
//! read and write what is listed here.

use std::sync::LazyLock;

use aldryn_forms_dom::Selector;

// Form classes and attributes
pub const SKIP_DISABLE_SUBMIT: &str = "skip-disable-submit";
pub const TOGGLE_SUBMIT: &str = "toggle-submit";
pub const SUBMIT_BY_FETCH: &str = "submit-by-fetch";
pub const ADJUST_UPLOADS: &str = "adjust-uploads";
pub const NOVALIDATE_CHECKBOX_GROUPS: &str = "novalidate-checkbox-groups";

// Inserted messages
pub const MESSAGE_CLASSES: [&str; 2] = ["text-danger", "aldryn-forms"];
pub const SUBMIT_MSG: &str = "aldryn-forms-submit-msg";
pub const REQUIRED_MSG: &str = "aldryn-forms-required-msg";
pub const POST_MESSAGE: &str = "aldryn-forms-post-message";
pub const MESSAGES_LIST: &str = "messages";

// Upload widget
pub const UPLOAD_FILES_FRAME: &str = "upload-files-frame";
pub const DRAG_AND_DROP: &str = "drag-and-drop";
pub const UPLOAD_FILE_NAMES: &str = "upload-file-names";
pub const CHECK_VALIDITY: &str = "check-validity";
pub const HELP_TEXT: &str = "help-text";
pub const ERROR: &str = "error";

// Admin list
pub const ADMIN_DATA_ROW: &str = "aldryn-forms-data";
pub const MORE: &str = "more";
pub const HIDDEN: &str = "d-none";
pub const ITEM_AFTER: &str = "item-after";

macro_rules! selector {
	($name:ident, $source:expr) => {
		pub static $name: LazyLock<Selector> = LazyLock::new(|| {
			Selector::parse($source).expect(concat!(stringify!($name), ": invalid selector"))
		});
	};
}

selector!(FORM, "form");
selector!(SUBMIT_BUTTONS, "[type=submit]");
selector!(INPUTS, "input");
selector!(REQUIRED_GROUP, ".form-required");
selector!(CHECKED_CHECKBOXES, "input[type=checkbox]:checked");
selector!(REQUIRED_GROUP_CHECKBOX, ".form-required input[type=checkbox]");
selector!(CYCLE_MESSAGES, ".aldryn-forms-required-msg, .aldryn-forms-submit-msg");
selector!(SUBMIT_MESSAGES, ".aldryn-forms-submit-msg");
selector!(POST_MESSAGES, ".aldryn-forms-post-message");
selector!(TOGGLE_SUBMIT_FORMS, "form.toggle-submit");
selector!(
	TOGGLE_CONTROLS,
	"input[required], select[required], textarea[required], input[type=file]"
);
selector!(ENHANCEABLE_UPLOADS, "input[type=file][data-enable_js]");
selector!(FILE_INPUT, "input[type=file]");
selector!(TRASH_ICON, "ul.upload-file-names img.trash");
selector!(LIST_ITEM, "li");
selector!(ADMIN_ROWS, ".aldryn-forms-data");
selector!(ADMIN_MORE, ".more");
selector!(ADMIN_COLUMN, "#result_list th.column-display_data div.text");
selector!(ADMIN_TOGGLE_ALL, "#result_list th.column-display_data span.item-after");
selector!(SETTINGS_SCRIPT, "script#aldryn-forms-settings");
