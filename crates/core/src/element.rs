//! [`Element`] and [`ShadowRoot`] handles.
//!
//! Both borrow the [`Session`] that produced them, so a handle can never be
//! used with a different or closed session.

use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use wd_protocol::{By, Command, ElementRef, PathArgs, Point, Rect, Size, element_id_from_value, shadow_id_from_value};

use crate::decoder;
use crate::error::{Error, Result};
use crate::session::Session;

/// Submits the form owning `arguments[0]`, firing its submit event first.
const SUBMIT_SCRIPT: &str = "var form = arguments[0];\n\
	while (form.nodeName != 'FORM' && form.parentNode) { form = form.parentNode; }\n\
	if (!form || form.nodeName != 'FORM') { throw Error('Unable to find containing form element'); }\n\
	var e = form.ownerDocument.createEvent('Event');\n\
	e.initEvent('submit', true, true);\n\
	if (form.dispatchEvent(e)) { HTMLFormElement.prototype.submit.call(form); }";

/// A DOM element held by the remote end.
#[derive(Debug, Clone)]
pub struct Element<'s> {
	session: &'s Session,
	id: String,
}

/// Serializes as an element reference understood by both dialects, so
/// elements can be passed as script arguments.
impl Serialize for Element<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		ElementRef(&self.id).serialize(serializer)
	}
}

impl PartialEq for Element<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.session, other.session) && self.id == other.id
	}
}

impl Session {
	/// Wraps an element id obtained elsewhere, e.g. from a script result.
	pub fn element(&self, id: impl Into<String>) -> Element<'_> {
		Element {
			session: self,
			id: id.into(),
		}
	}

	pub fn find_element(&self, by: &By) -> Result<Element<'_>> {
		let reply = self.locate(Command::FindElement, &self.args()?, by)?;
		self.element_from_reply(&reply)
	}

	pub fn find_elements(&self, by: &By) -> Result<Vec<Element<'_>>> {
		let reply = self.locate(Command::FindElements, &self.args()?, by)?;
		self.elements_from_reply(&reply)
	}

	/// Element that currently has focus.
	pub fn active_element(&self) -> Result<Element<'_>> {
		let command = if self.is_firefox() && self.major_version() < 47 {
			Command::LegacyGetActiveElement
		} else {
			Command::GetActiveElement
		};
		let reply = self.execute(command, &self.args()?, None)?;
		self.element_from_reply(&reply)
	}

	fn locate(&self, command: Command, args: &PathArgs<'_>, by: &By) -> Result<Vec<u8>> {
		let locator = by.to_locator(self.is_modern());
		self.execute(command, args, Some(serde_json::to_value(locator)?))
	}

	pub(crate) fn element_from_reply(&self, reply: &[u8]) -> Result<Element<'_>> {
		let value: Value = decoder::value(reply)?;
		self.element_from_value(&value)
	}

	/// Resolves every entry; one invalid entry fails the whole batch.
	pub(crate) fn elements_from_reply(&self, reply: &[u8]) -> Result<Vec<Element<'_>>> {
		let values: Vec<Value> = decoder::value::<Option<Vec<Value>>>(reply)?.unwrap_or_default();
		values.iter().map(|value| self.element_from_value(value)).collect()
	}

	fn element_from_value(&self, value: &Value) -> Result<Element<'_>> {
		value
			.as_object()
			.and_then(element_id_from_value)
			.map(|id| self.element(id))
			.ok_or_else(|| Error::InvalidElement(value.to_string()))
	}
}

impl<'s> Element<'s> {
	/// Opaque id assigned by the remote end.
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn session(&self) -> &'s Session {
		self.session
	}

	fn args(&self) -> Result<PathArgs<'_>> {
		Ok(self.session.args()?.element(&self.id))
	}

	fn execute(&self, command: Command, body: Option<Value>) -> Result<Vec<u8>> {
		self.session.execute(command, &self.args()?, body)
	}

	fn query<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
		decoder::value(&self.execute(command, None)?)
	}

	fn query_required<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
		decoder::required_value(&self.execute(command, None)?)
	}

	fn query_named<T: DeserializeOwned>(&self, command: Command, name: &str) -> Result<T> {
		let reply = self.session.execute(command, &self.args()?.name(name), None)?;
		decoder::value(&reply)
	}

	/// Finds the first descendant matching `by`.
	pub fn find_element(&self, by: &By) -> Result<Element<'s>> {
		let reply = self.session.locate(Command::FindElementFromElement, &self.args()?, by)?;
		self.session.element_from_reply(&reply)
	}

	pub fn find_elements(&self, by: &By) -> Result<Vec<Element<'s>>> {
		let reply = self.session.locate(Command::FindElementsFromElement, &self.args()?, by)?;
		self.session.elements_from_reply(&reply)
	}

	/// Shadow root attached to this element.
	pub fn shadow_root(&self) -> Result<ShadowRoot<'s>> {
		let value: Value = self.query(Command::GetShadowRoot)?;
		value
			.as_object()
			.and_then(shadow_id_from_value)
			.map(|id| ShadowRoot {
				session: self.session,
				id: id.to_string(),
			})
			.ok_or_else(|| Error::InvalidElement(value.to_string()))
	}

	pub fn click(&self) -> Result<()> {
		self.execute(Command::ElementClick, None).map(drop)
	}

	pub fn clear(&self) -> Result<()> {
		self.execute(Command::ElementClear, None).map(drop)
	}

	/// Types `keys` into the element.
	pub fn send_keys(&self, keys: &str) -> Result<()> {
		let body = self.session.element_keys_payload(keys);
		self.execute(Command::ElementSendKeys, Some(body)).map(drop)
	}

	/// Submits the form this element belongs to.
	///
	/// W3C remote ends have no submit endpoint; the form is submitted by
	/// script instead.
	pub fn submit(&self) -> Result<()> {
		if self.session.is_modern() {
			return self
				.session
				.execute_script(SUBMIT_SCRIPT, &[serde_json::to_value(self)?])
				.map(drop);
		}
		self.execute(Command::LegacyElementSubmit, None).map(drop)
	}

	/// Moves the mouse to an offset from the element's top-left corner.
	/// Legacy only.
	pub fn move_to(&self, x_offset: i64, y_offset: i64) -> Result<()> {
		self.session.void(
			Command::LegacyMoveTo,
			Some(json!({ "element": self.id, "xoffset": x_offset, "yoffset": y_offset })),
		)
	}

	/// Rendered text of the element.
	pub fn text(&self) -> Result<String> {
		self.query_required(Command::GetElementText)
	}

	pub fn tag_name(&self) -> Result<String> {
		self.query_required(Command::GetElementTagName)
	}

	/// Value of the attribute `name`, `None` if it is not set.
	pub fn attribute(&self, name: &str) -> Result<Option<String>> {
		self.query_named(Command::GetElementAttribute, name)
	}

	/// Value of the DOM property `name`.
	pub fn property(&self, name: &str) -> Result<Value> {
		self.query_named(Command::GetElementProperty, name)
	}

	/// Computed value of the CSS property `name`.
	pub fn css_value(&self, name: &str) -> Result<String> {
		let value: Option<String> = self.query_named(Command::GetElementCssValue, name)?;
		Ok(value.unwrap_or_default())
	}

	pub fn is_selected(&self) -> Result<bool> {
		self.query_required(Command::IsElementSelected)
	}

	pub fn is_enabled(&self) -> Result<bool> {
		self.query_required(Command::IsElementEnabled)
	}

	pub fn is_displayed(&self) -> Result<bool> {
		self.query_required(Command::LegacyIsElementDisplayed)
	}

	pub fn computed_role(&self) -> Result<String> {
		self.query_required(Command::GetComputedRole)
	}

	pub fn computed_label(&self) -> Result<String> {
		self.query_required(Command::GetComputedLabel)
	}

	/// Position of the top-left corner relative to the document.
	pub fn location(&self) -> Result<Point> {
		if self.session.is_modern() {
			return Ok(self.rect()?.location());
		}
		let rect: Rect = self.query_required(Command::LegacyElementLocation)?;
		Ok(rect.location())
	}

	/// Position after scrolling the element into view.
	pub fn location_in_view(&self) -> Result<Point> {
		if self.session.is_modern() {
			return Ok(self.rect()?.location());
		}
		let rect: Rect = self.query_required(Command::LegacyElementLocationInView)?;
		Ok(rect.location())
	}

	pub fn size(&self) -> Result<Size> {
		if self.session.is_modern() {
			return Ok(self.rect()?.size());
		}
		let rect: Rect = self.query_required(Command::LegacyElementSize)?;
		Ok(rect.size())
	}

	/// Unrounded position and size. The legacy dialect needs two requests.
	pub fn rect(&self) -> Result<Rect> {
		if self.session.is_modern() {
			return self.query_required(Command::GetElementRect);
		}
		let location: Rect = self.query_required(Command::LegacyElementLocation)?;
		let size: Rect = self.query_required(Command::LegacyElementSize)?;
		Ok(Rect {
			x: location.x,
			y: location.y,
			width: size.width,
			height: size.height,
		})
	}

	/// PNG screenshot of the element's bounding box.
	pub fn screenshot(&self) -> Result<Vec<u8>> {
		let data: String = self.query_required(Command::TakeElementScreenshot)?;
		decode_base64(&data)
	}
}

/// A shadow root attached to an [`Element`].
#[derive(Debug, Clone)]
pub struct ShadowRoot<'s> {
	session: &'s Session,
	id: String,
}

impl<'s> ShadowRoot<'s> {
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn find_element(&self, by: &By) -> Result<Element<'s>> {
		let args = self.session.args()?.shadow(&self.id);
		let reply = self.session.locate(Command::FindElementFromShadow, &args, by)?;
		self.session.element_from_reply(&reply)
	}

	pub fn find_elements(&self, by: &By) -> Result<Vec<Element<'s>>> {
		let args = self.session.args()?.shadow(&self.id);
		let reply = self.session.locate(Command::FindElementsFromShadow, &args, by)?;
		self.session.elements_from_reply(&reply)
	}
}

/// Decodes base64 image data, ignoring line breaks some drivers insert.
pub(crate) fn decode_base64(data: &str) -> Result<Vec<u8>> {
	let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
	Ok(base64::prelude::BASE64_STANDARD.decode(compact)?)
}
