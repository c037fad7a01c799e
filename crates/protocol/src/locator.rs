//! Element location strategies.

use serde::Serialize;

/// Strategy and value used to locate elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
	/// Element id attribute. Emulated through CSS on W3C remote ends.
	Id(String),
	/// Element name attribute. Emulated through CSS on W3C remote ends.
	Name(String),
	XPath(String),
	LinkText(String),
	PartialLinkText(String),
	TagName(String),
	/// Not part of the W3C locator set, still accepted by most drivers.
	ClassName(String),
	CssSelector(String),
}

impl By {
	pub fn id(value: impl Into<String>) -> Self {
		Self::Id(value.into())
	}

	pub fn name(value: impl Into<String>) -> Self {
		Self::Name(value.into())
	}

	pub fn xpath(value: impl Into<String>) -> Self {
		Self::XPath(value.into())
	}

	pub fn link_text(value: impl Into<String>) -> Self {
		Self::LinkText(value.into())
	}

	pub fn partial_link_text(value: impl Into<String>) -> Self {
		Self::PartialLinkText(value.into())
	}

	pub fn tag_name(value: impl Into<String>) -> Self {
		Self::TagName(value.into())
	}

	pub fn class_name(value: impl Into<String>) -> Self {
		Self::ClassName(value.into())
	}

	pub fn css(value: impl Into<String>) -> Self {
		Self::CssSelector(value.into())
	}

	/// Wire name of the strategy.
	pub fn strategy(&self) -> &'static str {
		match self {
			Self::Id(_) => "id",
			Self::Name(_) => "name",
			Self::XPath(_) => "xpath",
			Self::LinkText(_) => "link text",
			Self::PartialLinkText(_) => "partial link text",
			Self::TagName(_) => "tag name",
			Self::ClassName(_) => "class name",
			Self::CssSelector(_) => "css selector",
		}
	}

	pub fn value(&self) -> &str {
		match self {
			Self::Id(v)
			| Self::Name(v)
			| Self::XPath(v)
			| Self::LinkText(v)
			| Self::PartialLinkText(v)
			| Self::TagName(v)
			| Self::ClassName(v)
			| Self::CssSelector(v) => v,
		}
	}

	/// Builds the request body for a find command.
	///
	/// W3C remote ends have no `id` or `name` strategy, so those are
	/// rewritten into CSS selectors when `modern` is set.
	pub fn to_locator(&self, modern: bool) -> Locator {
		match self {
			Self::Id(v) if modern => Locator::new("css selector", format!("#{v}")),
			Self::Name(v) if modern => Locator::new("css selector", format!("input[name={}]", quote(v))),
			other => Locator::new(other.strategy(), other.value().to_string()),
		}
	}
}

/// Body of a find element request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locator {
	pub using: &'static str,
	pub value: String,
}

impl Locator {
	fn new(using: &'static str, value: String) -> Self {
		Self { using, value }
	}
}

fn quote(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	out.push('"');
	for c in s.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}
