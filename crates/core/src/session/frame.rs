//! Frame switching methods for [`Session`].

use serde_json::{Value, json};
use wd_protocol::{By, Command, ElementRef};

use super::Session;
use crate::element::Element;
use crate::error::Result;

/// Browsing context to switch to with [`Session::switch_frame`].
#[derive(Debug, Clone, Copy)]
pub enum FrameTarget<'a> {
	/// The top-level browsing context
	Top,
	/// Child frame by position in `window.frames`
	Index(u16),
	/// The frame or iframe element
	Element(&'a Element<'a>),
	/// Frame by name or id.
	///
	/// W3C remote ends cannot switch by name, so the element with that id
	/// is looked up first. An empty name selects the top-level context.
	Name(&'a str),
}

impl Session {
	pub fn switch_frame(&self, target: FrameTarget<'_>) -> Result<()> {
		let id = match target {
			FrameTarget::Top | FrameTarget::Name("") => Value::Null,
			FrameTarget::Index(index) => json!(index),
			FrameTarget::Element(element) => serde_json::to_value(ElementRef(element.id()))?,
			FrameTarget::Name(name) if self.is_modern() => {
				let element = self.find_element(&By::id(name))?;
				serde_json::to_value(ElementRef(element.id()))?
			}
			FrameTarget::Name(name) => json!(name),
		};
		self.void(Command::SwitchToFrame, Some(json!({ "id": id })))
	}

	pub fn switch_to_parent_frame(&self) -> Result<()> {
		self.void(Command::SwitchToParentFrame, None)
	}
}
