//! Uploaded file handles

/// Metadata every backend file handle exposes
///
/// The web backend implements this for `web_sys::File`; the in-memory backend
/// uses [`MemoryFile`].
pub trait UploadFile: Clone {
	/// File name as chosen by the user (no path)
	fn name(&self) -> String;
	/// Size in bytes
	fn size(&self) -> u64;
	/// MIME type reported by the browser, empty when unknown
	fn mime_type(&self) -> String;
}

/// A file selected in the in-memory backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
	/// File name
	pub name: String,
	/// Size in bytes
	pub size: u64,
	/// MIME type
	pub mime_type: String,
}

impl MemoryFile {
	/// Creates a file handle
	///
	/// # Example
	///
	/// ```
	/// use aldryn_forms_dom::{MemoryFile, UploadFile};
	///
	/// let file = MemoryFile::new("report.pdf", 2048, "application/pdf");
	/// assert_eq!(file.size(), 2048);
	/// ```
	pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			size,
			mime_type: mime_type.into(),
		}
	}
}

impl UploadFile for MemoryFile {
	fn name(&self) -> String {
		self.name.clone()
	}

	fn size(&self) -> u64 {
		self.size
	}

	fn mime_type(&self) -> String {
		self.mime_type.clone()
	}
}
