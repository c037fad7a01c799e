//! Core protocol types used across the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rounds half away from zero, the way element geometry is reported.
pub fn round_coordinate(f: f64) -> i64 {
	f.round() as i64
}

/// Element or window position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
	pub x: i64,
	pub y: i64,
}

/// Element or window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
	pub width: i64,
	pub height: i64,
}

/// Rectangle as reported by the remote end.
///
/// Legacy location and size replies only carry half of the fields, so all
/// of them default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	#[serde(default)]
	pub x: f64,
	#[serde(default)]
	pub y: f64,
	#[serde(default)]
	pub width: f64,
	#[serde(default)]
	pub height: f64,
}

impl Rect {
	pub fn location(&self) -> Point {
		Point {
			x: round_coordinate(self.x),
			y: round_coordinate(self.y),
		}
	}

	pub fn size(&self) -> Size {
		Size {
			width: round_coordinate(self.width),
			height: round_coordinate(self.height),
		}
	}
}

/// Remote end readiness as returned by `GET /status`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Status {
	/// Only reported by W3C remote ends
	#[serde(default)]
	pub ready: Option<bool>,
	#[serde(default)]
	pub message: String,
	/// Selenium specific build information
	#[serde(default)]
	pub build: Option<Value>,
	#[serde(default)]
	pub os: Option<Value>,
}

/// Session timeouts in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeouts {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub script: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_load: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub implicit: Option<u64>,
}

/// Kind of top-level browsing context to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
	#[default]
	Tab,
	Window,
}

/// Reply of `POST /window/new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewWindow {
	pub handle: String,
	#[serde(rename = "type")]
	pub kind: WindowKind,
}

/// Window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowRect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Log buffer names accepted by the legacy log endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
	Server,
	Browser,
	Client,
	Driver,
	Performance,
	Profiler,
}

/// Entry returned by the legacy log endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
	/// Milliseconds since the Unix epoch
	pub timestamp: i64,
	pub level: String,
	pub message: String,
}

/// Page orientation for `POST /print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
	#[default]
	Portrait,
	Landscape,
}

/// Parameters of `POST /print`. Unset fields use the remote end defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub orientation: Option<Orientation>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scale: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub background: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shrink_to_fit: Option<bool>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub page_ranges: Vec<String>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_rounding_is_half_away_from_zero() {
		assert_eq!(round_coordinate(2.5), 3);
		assert_eq!(round_coordinate(-2.5), -3);
		assert_eq!(round_coordinate(2.49), 2);
		assert_eq!(round_coordinate(-0.4), 0);
	}

	#[test]
	fn test_rect_from_partial_legacy_reply() {
		let rect: Rect = serde_json::from_value(json!({"x": 10.6, "y": 20.4})).unwrap();
		assert_eq!(rect.location(), Point { x: 11, y: 20 });
		assert_eq!(rect.size(), Size::default());
	}

	#[test]
	fn test_timeouts_serialize_only_set_fields() {
		let timeouts = Timeouts {
			page_load: Some(3000),
			..Timeouts::default()
		};
		assert_eq!(serde_json::to_value(timeouts).unwrap(), json!({"pageLoad": 3000}));
	}

	#[test]
	fn test_status_tolerates_missing_fields() {
		let status: Status = serde_json::from_value(json!({"build": {"version": "3.141"}})).unwrap();
		assert_eq!(status.ready, None);
		assert_eq!(status.build.unwrap()["version"], "3.141");
	}
}
