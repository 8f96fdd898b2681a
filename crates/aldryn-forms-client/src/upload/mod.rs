//! Drag-and-drop file upload
//!
//! File inputs carrying `data-enable_js` are wrapped in a drop zone with a
//! list of the staged files. Every file is checked against the input's
//! `accept`, `data-max_files` and `data-max_size`; violations are listed per
//! file and block submission through the input's custom validity.

pub mod accept;
pub mod size;
pub mod staging;
pub mod widget;

pub use accept::AcceptRules;
pub use size::human_file_size;
pub use staging::{StagedFile, StagedFiles, UploadError, UploadLimits};
pub use widget::{UploadWidget, describe_limits};
