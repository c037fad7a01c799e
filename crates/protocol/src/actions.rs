//! Input action sources for the actions endpoint.
//!
//! See <https://www.w3.org/TR/webdriver/#actions>.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// A single step of a key input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum KeyAction {
	#[serde(rename = "pause")]
	Pause {
		#[serde(serialize_with = "millis")]
		duration: Duration,
	},
	#[serde(rename = "keyDown")]
	KeyDown { value: String },
	#[serde(rename = "keyUp")]
	KeyUp { value: String },
}

impl KeyAction {
	pub fn pause(duration: Duration) -> Self {
		Self::Pause { duration }
	}

	/// Presses and holds `key`.
	pub fn down(key: impl Into<String>) -> Self {
		Self::KeyDown { value: key.into() }
	}

	pub fn up(key: impl Into<String>) -> Self {
		Self::KeyUp { value: key.into() }
	}
}

/// Mouse button numbering used by both dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
	#[default]
	Left,
	Middle,
	Right,
}

impl MouseButton {
	pub fn code(self) -> u8 {
		match self {
			Self::Left => 0,
			Self::Middle => 1,
			Self::Right => 2,
		}
	}
}

impl Serialize for MouseButton {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u8(self.code())
	}
}

/// Kind of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
	#[default]
	Mouse,
	Pen,
	Touch,
}

/// Reference point of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMoveOrigin {
	#[default]
	Viewport,
	/// Relative to the current pointer position
	Pointer,
}

/// A single step of a pointer input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PointerAction {
	#[serde(rename = "pause")]
	Pause {
		#[serde(serialize_with = "millis")]
		duration: Duration,
	},
	#[serde(rename = "pointerMove")]
	Move {
		#[serde(serialize_with = "millis")]
		duration: Duration,
		origin: PointerMoveOrigin,
		x: i64,
		y: i64,
	},
	#[serde(rename = "pointerDown")]
	Down { button: MouseButton },
	#[serde(rename = "pointerUp")]
	Up { button: MouseButton },
}

impl PointerAction {
	pub fn pause(duration: Duration) -> Self {
		Self::Pause { duration }
	}

	pub fn move_to(duration: Duration, x: i64, y: i64, origin: PointerMoveOrigin) -> Self {
		Self::Move {
			duration,
			origin,
			x,
			y,
		}
	}

	pub fn down(button: MouseButton) -> Self {
		Self::Down { button }
	}

	pub fn up(button: MouseButton) -> Self {
		Self::Up { button }
	}
}

/// One input source with its queued steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ActionSource {
	#[serde(rename = "key")]
	Key { id: String, actions: Vec<KeyAction> },
	#[serde(rename = "pointer")]
	Pointer {
		id: String,
		parameters: PointerParameters,
		actions: Vec<PointerAction>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerParameters {
	#[serde(rename = "pointerType")]
	pub pointer_type: PointerType,
}

impl ActionSource {
	pub fn key(id: impl Into<String>, actions: Vec<KeyAction>) -> Self {
		Self::Key {
			id: id.into(),
			actions,
		}
	}

	pub fn pointer(id: impl Into<String>, pointer_type: PointerType, actions: Vec<PointerAction>) -> Self {
		Self::Pointer {
			id: id.into(),
			parameters: PointerParameters { pointer_type },
			actions,
		}
	}
}

fn millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_key_source_shape() {
		let source = ActionSource::key(
			"default keyboard",
			vec![KeyAction::down("a"), KeyAction::pause(Duration::from_millis(20)), KeyAction::up("a")],
		);
		assert_eq!(
			serde_json::to_value(source).unwrap(),
			json!({
				"type": "key",
				"id": "default keyboard",
				"actions": [
					{"type": "keyDown", "value": "a"},
					{"type": "pause", "duration": 20},
					{"type": "keyUp", "value": "a"},
				]
			})
		);
	}

	#[test]
	fn test_pointer_source_shape() {
		let source = ActionSource::pointer(
			"mouse",
			PointerType::Mouse,
			vec![
				PointerAction::move_to(Duration::from_millis(5), 10, -3, PointerMoveOrigin::Pointer),
				PointerAction::down(MouseButton::Right),
				PointerAction::up(MouseButton::Right),
			],
		);
		assert_eq!(
			serde_json::to_value(source).unwrap(),
			json!({
				"type": "pointer",
				"id": "mouse",
				"parameters": {"pointerType": "mouse"},
				"actions": [
					{"type": "pointerMove", "duration": 5, "origin": "pointer", "x": 10, "y": -3},
					{"type": "pointerDown", "button": 2},
					{"type": "pointerUp", "button": 2},
				]
			})
		);
	}
}
