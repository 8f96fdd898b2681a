//! Markup reader for [`MemoryDom`](super::memory::MemoryDom) fixtures
//!
//! Understands start/end tags, quoted, unquoted and boolean attributes, void
//! elements, comments and text. Whitespace-only text is dropped.

use crate::backend::memory::{MemoryDom, NodeId};
use crate::dom::Dom;
use crate::error::{DomError, DomResult};

const VOID_ELEMENTS: &[&str] = &["input", "img", "br", "hr", "meta", "link"];

fn decode_entities(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&nbsp;", "\u{a0}")
		.replace("&amp;", "&")
}

struct Reader<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> Reader<'a> {
	fn rest(&self) -> &'a str {
		&self.input[self.pos..]
	}

	fn error(&self, reason: impl Into<String>) -> DomError {
		DomError::Markup {
			offset: self.pos,
			reason: reason.into(),
		}
	}

	fn skip_whitespace(&mut self) {
		let rest = self.rest();
		self.pos += rest.len() - rest.trim_start().len();
	}

	fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
		let rest = self.rest();
		let end = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
		self.pos += end;
		&rest[..end]
	}

	fn eat(&mut self, prefix: &str) -> bool {
		if self.rest().starts_with(prefix) {
			self.pos += prefix.len();
			true
		} else {
			false
		}
	}

	fn attributes(&mut self) -> DomResult<(Vec<(String, String)>, bool)> {
		let mut attributes = Vec::new();
		loop {
			self.skip_whitespace();
			if self.eat("/>") {
				return Ok((attributes, true));
			}
			if self.eat(">") {
				return Ok((attributes, false));
			}
			let name = self.take_while(|c| !c.is_whitespace() && !matches!(c, '=' | '>' | '/'));
			if name.is_empty() {
				return Err(self.error("unterminated start tag"));
			}
			self.skip_whitespace();
			let value = if self.eat("=") {
				self.skip_whitespace();
				self.attribute_value()?
			} else {
				String::new()
			};
			attributes.push((name.to_ascii_lowercase(), value));
		}
	}

	fn attribute_value(&mut self) -> DomResult<String> {
		for quote in ['"', '\''] {
			if self.rest().starts_with(quote) {
				self.pos += 1;
				let end = self
					.rest()
					.find(quote)
					.ok_or_else(|| self.error("unterminated attribute value"))?;
				let value = decode_entities(&self.rest()[..end]);
				self.pos += end + 1;
				return Ok(value);
			}
		}
		Ok(decode_entities(
			self.take_while(|c| !c.is_whitespace() && c != '>'),
		))
	}
}

/// Parses `markup` and appends the resulting nodes to `parent`
pub(crate) fn parse_into(dom: &MemoryDom, parent: &NodeId, markup: &str) -> DomResult<()> {
	let mut reader = Reader {
		input: markup,
		pos: 0,
	};
	let mut stack: Vec<(String, NodeId)> = vec![(String::new(), *parent)];

	while reader.pos < markup.len() {
		let current = stack.last().map(|(_, node)| *node).unwrap_or(*parent);
		if reader.eat("<!--") {
			let end = reader
				.rest()
				.find("-->")
				.ok_or_else(|| reader.error("unterminated comment"))?;
			reader.pos += end + 3;
		} else if reader.eat("</") {
			let tag = reader.take_while(|c| c != '>').trim().to_ascii_lowercase();
			if !reader.eat(">") {
				return Err(reader.error("unterminated end tag"));
			}
			match stack.last() {
				Some((open, _)) if *open == tag && stack.len() > 1 => {
					stack.pop();
				}
				_ => return Err(reader.error(format!("unexpected </{}>", tag))),
			}
		} else if reader.eat("<") {
			let tag = reader
				.take_while(|c| c.is_alphanumeric() || c == '-')
				.to_ascii_lowercase();
			if tag.is_empty() {
				return Err(reader.error("expected tag name"));
			}
			let (attributes, self_closing) = reader.attributes()?;
			let node = dom.push_parsed(&tag, attributes);
			dom.append_child(&current, &node)?;
			if !self_closing && !VOID_ELEMENTS.contains(&tag.as_str()) {
				stack.push((tag, node));
			}
		} else {
			let text = reader.take_while(|c| c != '<');
			if !text.trim().is_empty() {
				dom.append_text(&current, &decode_entities(text))?;
			}
		}
	}

	if let Some((open, _)) = stack.get(1) {
		return Err(reader.error(format!("unclosed <{}>", open)));
	}
	Ok(())
}
