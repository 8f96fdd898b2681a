//! Events routed from the document to the form runtime

use std::fmt;

/// Event types the form runtime reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// `click`
	Click,
	/// `change`
	Change,
	/// `input`
	Input,
	/// `submit`
	Submit,
}

impl EventKind {
	/// All kinds, in the order listeners are installed
	pub const ALL: [EventKind; 4] = [Self::Click, Self::Change, Self::Input, Self::Submit];

	/// DOM event name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Change => "change",
			Self::Input => "input",
			Self::Submit => "submit",
		}
	}
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A DOM event delivered to the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent<N> {
	/// Event type
	pub kind: EventKind,
	/// Element the event was dispatched on
	pub target: N,
}

impl<N> DomEvent<N> {
	/// Creates an event
	pub fn new(kind: EventKind, target: N) -> Self {
		Self { kind, target }
	}
}
