//! Staged file list of an upload widget
//!
//! Files chosen in several rounds accumulate in a [`StagedFiles`] list. Count,
//! type and size rules are re-evaluated over the whole list after every
//! addition or removal, so removing a file clears the errors it caused.

use std::collections::BTreeSet;

use aldryn_forms_dom::UploadFile;
use aldryn_forms_i18n::Translator;

use crate::upload::accept::AcceptRules;

/// Rule violated by a staged file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UploadError {
	/// Position beyond `data-max_files`
	FilesLimit,
	/// Not matched by the `accept` rules
	FileType,
	/// Running total beyond `data-max_size`
	FileSize,
}

impl UploadError {
	/// Class name used on the list item and its message
	pub fn tag(&self) -> &'static str {
		match self {
			Self::FilesLimit => "files-limit",
			Self::FileType => "file-type",
			Self::FileSize => "file-size",
		}
	}

	/// Localized message
	pub fn message(&self, i18n: &dyn Translator) -> String {
		i18n.gettext(match self {
			Self::FilesLimit => "This file exceeds the uploaded files limit.",
			Self::FileType => "The file type is not among the accpeted types.",
			Self::FileSize => "The total size of all files has exceeded the specified limit.",
		})
	}
}

/// `data-max_files` and `data-max_size` of a file input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadLimits {
	/// Maximum number of files
	pub max_files: Option<usize>,
	/// Maximum total size in bytes
	pub max_size: Option<u64>,
}

/// A file in the staged list
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile<F> {
	file: F,
	errors: BTreeSet<UploadError>,
}

impl<F: UploadFile> StagedFile<F> {
	/// File handle
	pub fn file(&self) -> &F {
		&self.file
	}

	/// Violated rules, in check order
	pub fn errors(&self) -> impl Iterator<Item = UploadError> + '_ {
		self.errors.iter().copied()
	}

	/// Whether the file passes every rule
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}
}

/// Ordered list of staged files
#[derive(Debug, Clone)]
pub struct StagedFiles<F> {
	entries: Vec<StagedFile<F>>,
	accept: AcceptRules,
	limits: UploadLimits,
}

impl<F: UploadFile> StagedFiles<F> {
	/// Creates an empty list
	pub fn new(accept: AcceptRules, limits: UploadLimits) -> Self {
		Self {
			entries: Vec::new(),
			accept,
			limits,
		}
	}

	/// Appends `files` in order
	///
	/// Staging stops after the first file beyond the count limit. Returns the
	/// number of files staged.
	pub fn add_batch(&mut self, files: impl IntoIterator<Item = F>) -> usize {
		let mut staged = 0;
		for file in files {
			self.entries.push(StagedFile {
				file,
				errors: BTreeSet::new(),
			});
			staged += 1;
			if self
				.limits
				.max_files
				.is_some_and(|max| self.entries.len() > max)
			{
				break;
			}
		}
		self.recompute();
		staged
	}

	/// Removes the file at `index`
	pub fn remove(&mut self, index: usize) -> Option<StagedFile<F>> {
		if index >= self.entries.len() {
			return None;
		}
		let removed = self.entries.remove(index);
		self.recompute();
		Some(removed)
	}

	/// Drops every file
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Re-evaluates the rules over the whole list
	pub fn recompute(&mut self) {
		let mut total = 0u64;
		for (position, entry) in self.entries.iter_mut().enumerate() {
			entry.errors.clear();
			if self.limits.max_files.is_some_and(|max| position + 1 > max) {
				entry.errors.insert(UploadError::FilesLimit);
			}
			if !self
				.accept
				.matches(&entry.file.name(), &entry.file.mime_type())
			{
				entry.errors.insert(UploadError::FileType);
			}
			total = total.saturating_add(entry.file.size());
			if self.limits.max_size.is_some_and(|max| total > max) {
				entry.errors.insert(UploadError::FileSize);
			}
		}
	}

	/// Staged entries, in order
	pub fn entries(&self) -> &[StagedFile<F>] {
		&self.entries
	}

	/// Staged file handles, in order
	pub fn files(&self) -> Vec<F> {
		self.entries.iter().map(|entry| entry.file.clone()).collect()
	}

	/// Number of staged files
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing is staged
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of the staged file sizes
	pub fn total_size(&self) -> u64 {
		self.entries.iter().map(|entry| entry.file.size()).sum()
	}

	/// Whether any entry violates a rule
	pub fn has_errors(&self) -> bool {
		self.entries.iter().any(|entry| !entry.is_valid())
	}
}
