//! Element and shadow root reference encodings.
//!
//! Before W3C WebDriver, remote ends returned elements as a JSON
//! object with the literal key `ELEMENT`. W3C WebDriver replaced it
//! with a UUID-shaped key. Readers accept either, writers emit both.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key used by the legacy JSON wire protocol.
pub const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

/// Key defined by W3C WebDriver for element references.
pub const WEB_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Key defined by W3C WebDriver for shadow root references.
pub const SHADOW_ROOT_KEY: &str = "shadow-6066-11e4-a52e-4f735466cecf";

/// Extracts an element id from a decoded reference object.
///
/// The W3C key is checked first. Keys holding an empty string or a
/// non-string value are skipped.
pub fn element_id_from_value(value: &Map<String, Value>) -> Option<&str> {
	[WEB_ELEMENT_KEY, LEGACY_ELEMENT_KEY]
		.into_iter()
		.filter_map(|key| value.get(key).and_then(Value::as_str))
		.find(|id| !id.is_empty())
}

/// Extracts a shadow root id from a decoded reference object.
pub fn shadow_id_from_value(value: &Map<String, Value>) -> Option<&str> {
	value
		.get(SHADOW_ROOT_KEY)
		.and_then(Value::as_str)
		.filter(|id| !id.is_empty())
}

/// Wire form of an element reference.
///
/// Serializes under both keys so either dialect understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRef<'a>(pub &'a str);

impl Serialize for ElementRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(2))?;
		map.serialize_entry(LEGACY_ELEMENT_KEY, self.0)?;
		map.serialize_entry(WEB_ELEMENT_KEY, self.0)?;
		map.end()
	}
}
