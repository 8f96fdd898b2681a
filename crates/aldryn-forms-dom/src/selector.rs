//! CSS selector subset
//!
//! The markup contract of the form plugin only needs a small part of CSS:
//! type, id, class and attribute selectors, the `:checked` pseudo-class,
//! descendant combinators and selector lists. [`Selector`] keeps the source
//! text (handed as-is to `querySelectorAll` by the web backend) next to a
//! parsed form used by the in-memory backend.
//!
//! ```
//! use aldryn_forms_dom::Selector;
//!
//! let selector = Selector::parse(".form-required input[type=checkbox]:checked").unwrap();
//! assert_eq!(selector.as_str(), ".form-required input[type=checkbox]:checked");
//! ```

use std::fmt;

use crate::error::SelectorError;

/// Attribute condition inside `[...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeMatch {
	/// `[name]`
	Exists(String),
	/// `[name=value]`
	Equals(String, String),
}

/// A compound selector such as `input.check-validity[type=file]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
	/// Lowercase tag name, `None` for the universal selector
	pub tag: Option<String>,
	/// `#id`
	pub id: Option<String>,
	/// `.class` list
	pub classes: Vec<String>,
	/// `[attr]` and `[attr=value]` conditions
	pub attributes: Vec<AttributeMatch>,
	/// `:checked`
	pub checked: bool,
}

/// Read access needed to test an element against a selector
pub trait MatchTarget: Sized {
	/// Lowercase tag name
	fn tag(&self) -> String;
	/// Attribute value
	fn attribute(&self, name: &str) -> Option<String>;
	/// Checkedness of checkboxes and radio buttons
	fn checked(&self) -> bool;
	/// Parent element, if any
	fn parent_element(&self) -> Option<Self>;

	/// Whether the `class` attribute contains `class`
	fn has_class(&self, class: &str) -> bool {
		self.attribute("class")
			.is_some_and(|value| value.split_whitespace().any(|c| c == class))
	}
}

impl Compound {
	/// Tests a single element against this compound selector
	pub fn matches<T: MatchTarget>(&self, target: &T) -> bool {
		if let Some(tag) = &self.tag
			&& target.tag() != *tag
		{
			return false;
		}
		if let Some(id) = &self.id
			&& target.attribute("id").as_deref() != Some(id.as_str())
		{
			return false;
		}
		if !self.classes.iter().all(|class| target.has_class(class)) {
			return false;
		}
		let attributes_match = self.attributes.iter().all(|condition| match condition {
			AttributeMatch::Exists(name) => target.attribute(name).is_some(),
			AttributeMatch::Equals(name, value) => {
				target.attribute(name).as_deref() == Some(value.as_str())
			}
		});
		attributes_match && (!self.checked || target.checked())
	}
}

/// One selector of a selector list: compounds joined by descendant combinators
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chain {
	compounds: Vec<Compound>,
}

impl Chain {
	fn matches<T: MatchTarget>(&self, target: &T) -> bool {
		let Some((subject, ancestors)) = self.compounds.split_last() else {
			return false;
		};
		if !subject.matches(target) {
			return false;
		}
		// Greedy right-to-left walk is exact for descendant-only chains.
		let mut remaining = ancestors.iter().rev().peekable();
		let mut current = target.parent_element();
		while let Some(&compound) = remaining.peek() {
			let Some(element) = current else {
				return false;
			};
			if compound.matches(&element) {
				remaining.next();
			}
			current = element.parent_element();
		}
		true
	}
}

/// A parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	source: String,
	chains: Vec<Chain>,
}

impl Selector {
	/// Parses a selector list
	///
	/// # Errors
	///
	/// Returns [`SelectorError`] for empty selectors, unsupported syntax
	/// (other combinators, pseudo-classes besides `:checked`) and unterminated
	/// attribute selectors.
	pub fn parse(source: &str) -> Result<Self, SelectorError> {
		let chains = source
			.split(',')
			.map(|group| parse_chain(group.trim(), source))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self {
			source: source.trim().to_string(),
			chains,
		})
	}

	/// The selector text, suitable for `querySelectorAll`
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Whether `target` matches any selector of the list
	pub fn matches<T: MatchTarget>(&self, target: &T) -> bool {
		self.chains.iter().any(|chain| chain.matches(target))
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

fn parse_chain(group: &str, source: &str) -> Result<Chain, SelectorError> {
	if group.is_empty() {
		return Err(SelectorError::Empty(source.to_string()));
	}
	if group.contains(['>', '+', '~']) {
		return Err(SelectorError::Unsupported {
			selector: source.to_string(),
			detail: "only descendant combinators are supported".to_string(),
		});
	}
	let compounds = split_compounds(group)
		.into_iter()
		.map(|text| parse_compound(text, source))
		.collect::<Result<Vec<_>, _>>()?;
	Ok(Chain { compounds })
}

/// Splits on whitespace that is not inside `[...]`
fn split_compounds(group: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut start = None;
	for (index, ch) in group.char_indices() {
		match ch {
			'[' => depth += 1,
			']' => depth = depth.saturating_sub(1),
			c if c.is_whitespace() && depth == 0 => {
				if let Some(begin) = start.take() {
					parts.push(&group[begin..index]);
				}
				continue;
			}
			_ => {}
		}
		start.get_or_insert(index);
	}
	if let Some(begin) = start {
		parts.push(&group[begin..]);
	}
	parts
}

fn is_ident_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
	let begin = *pos;
	while *pos < chars.len() && is_ident_char(chars[*pos]) {
		*pos += 1;
	}
	chars[begin..*pos].iter().collect()
}

fn parse_compound(text: &str, source: &str) -> Result<Compound, SelectorError> {
	let unsupported = |detail: &str| SelectorError::Unsupported {
		selector: source.to_string(),
		detail: detail.to_string(),
	};
	let chars: Vec<char> = text.chars().collect();
	let mut pos = 0;
	let mut compound = Compound::default();

	if chars.first() == Some(&'*') {
		pos += 1;
	} else if chars.first().is_some_and(|c| is_ident_char(*c)) {
		compound.tag = Some(take_ident(&chars, &mut pos).to_ascii_lowercase());
	}

	while pos < chars.len() {
		let marker = chars[pos];
		pos += 1;
		match marker {
			'#' => compound.id = Some(take_ident(&chars, &mut pos)),
			'.' => compound.classes.push(take_ident(&chars, &mut pos)),
			':' => {
				let pseudo = take_ident(&chars, &mut pos);
				if pseudo != "checked" {
					return Err(unsupported(&format!("pseudo-class ':{}'", pseudo)));
				}
				compound.checked = true;
			}
			'[' => {
				let close = chars[pos..]
					.iter()
					.position(|c| *c == ']')
					.ok_or_else(|| SelectorError::Unterminated(source.to_string()))?;
				let body: String = chars[pos..pos + close].iter().collect();
				pos += close + 1;
				compound.attributes.push(parse_attribute(&body));
			}
			other => return Err(unsupported(&format!("unexpected '{}'", other))),
		}
	}

	if compound == Compound::default() && text != "*" {
		return Err(SelectorError::Empty(source.to_string()));
	}
	Ok(compound)
}

fn parse_attribute(body: &str) -> AttributeMatch {
	match body.split_once('=') {
		Some((name, value)) => {
			let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
			AttributeMatch::Equals(name.trim().to_string(), value.to_string())
		}
		None => AttributeMatch::Exists(body.trim().to_string()),
	}
}
