//! Keyboard, mouse and action methods for [`Session`].

use serde_json::{Value, json};
use wd_protocol::{ActionSource, Command, KeyAction, MouseButton, PointerAction, PointerType};

use super::Session;
use crate::error::Result;

/// Input source id used for key events sent through the actions endpoint.
const DEFAULT_KEYBOARD: &str = "default keyboard";

/// First Firefox major version whose legacy remote end accepts actions.
const FIREFOX_ACTIONS_MIN_MAJOR: u64 = 48;

impl Session {
	/// Payload of a key string: one entry per character for the legacy
	/// dialect, the plain text for W3C.
	pub(crate) fn element_keys_payload(&self, keys: &str) -> Value {
		if self.is_modern() {
			return json!({ "text": keys });
		}
		let chars: Vec<String> = keys.chars().map(String::from).collect();
		json!({ "value": chars })
	}

	/// Whether key events go to the legacy `keys` endpoint.
	fn uses_legacy_keys(&self) -> bool {
		!self.is_modern() && !(self.is_firefox() && self.major_version() >= FIREFOX_ACTIONS_MIN_MAJOR)
	}

	/// Presses and holds every character of `keys`.
	pub fn key_down(&self, keys: &str) -> Result<()> {
		if self.uses_legacy_keys() {
			return self.void(Command::LegacySendKeys, Some(self.element_keys_payload(keys)));
		}
		self.key_actions(keys.chars().map(|c| KeyAction::down(c.to_string())).collect())
	}

	/// Releases every character of `keys`.
	///
	/// The legacy `keys` endpoint toggles modifiers, so releasing sends the
	/// same payload as pressing.
	pub fn key_up(&self, keys: &str) -> Result<()> {
		if self.uses_legacy_keys() {
			return self.key_down(keys);
		}
		self.key_actions(keys.chars().map(|c| KeyAction::up(c.to_string())).collect())
	}

	/// Presses or releases a modifier key such as [`keys::SHIFT`](crate::keys::SHIFT).
	pub fn send_modifier(&self, modifier: &str, down: bool) -> Result<()> {
		if down { self.key_down(modifier) } else { self.key_up(modifier) }
	}

	fn key_actions(&self, actions: Vec<KeyAction>) -> Result<()> {
		let source = ActionSource::key(DEFAULT_KEYBOARD, actions);
		self.void(Command::PerformActions, Some(json!({ "actions": [source] })))
	}

	/// Queues a key input source for [`perform_actions`](Self::perform_actions).
	pub fn store_key_actions(&self, input_id: &str, actions: Vec<KeyAction>) {
		self.actions.lock().push(ActionSource::key(input_id, actions));
	}

	/// Queues a pointer input source for [`perform_actions`](Self::perform_actions).
	pub fn store_pointer_actions(&self, input_id: &str, pointer: PointerType, actions: Vec<PointerAction>) {
		self.actions
			.lock()
			.push(ActionSource::pointer(input_id, pointer, actions));
	}

	/// Sends every queued input source. The queue is emptied even if the
	/// remote end rejects the actions.
	pub fn perform_actions(&self) -> Result<()> {
		let actions = std::mem::take(&mut *self.actions.lock());
		self.void(Command::PerformActions, Some(json!({ "actions": actions })))
	}

	/// Releases all keys and buttons currently held.
	pub fn release_actions(&self) -> Result<()> {
		self.void(Command::ReleaseActions, None)
	}

	/// Clicks at the current mouse position. Legacy only.
	pub fn click(&self, button: MouseButton) -> Result<()> {
		self.void(Command::LegacyClick, Some(json!({ "button": button })))
	}

	/// Legacy only.
	pub fn double_click(&self) -> Result<()> {
		self.void(Command::LegacyDoubleClick, None)
	}

	/// Legacy only.
	pub fn button_down(&self) -> Result<()> {
		self.void(Command::LegacyButtonDown, None)
	}

	/// Legacy only.
	pub fn button_up(&self) -> Result<()> {
		self.void(Command::LegacyButtonUp, None)
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use serde_json::json;
	use wd_protocol::{KeyAction, MouseButton, PointerAction, PointerMoveOrigin, PointerType};

	use crate::negotiate::Dialect;
	use crate::session::fixtures;
	use crate::testing::MockTransport;

	#[test]
	fn test_legacy_key_down_posts_keys() {
		let mock = MockTransport::new();
		let session = fixtures::legacy(&mock);
		mock.push_value(json!(null));
		mock.push_value(json!(null));

		session.key_down("ab").unwrap();
		session.key_up("ab").unwrap();
		assert_eq!(mock.paths(), ["POST /session/sid/keys", "POST /session/sid/keys"]);
		assert_eq!(mock.last_request().json(), Some(json!({"value": ["a", "b"]})));
	}

	#[test]
	fn test_modern_key_events_are_actions() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!(null));
		mock.push_value(json!(null));

		session.key_down("ab").unwrap();
		session.key_up("a").unwrap();

		assert_eq!(mock.paths(), ["POST /session/sid/actions", "POST /session/sid/actions"]);
		let requests = mock.requests();
		assert_eq!(
			requests[0].json(),
			Some(json!({"actions": [{
				"type": "key",
				"id": "default keyboard",
				"actions": [{"type": "keyDown", "value": "a"}, {"type": "keyDown", "value": "b"}],
			}]}))
		);
		assert_eq!(requests[1].json().unwrap()["actions"][0]["actions"][0]["type"], "keyUp");
	}

	#[test]
	fn test_legacy_firefox_above_47_uses_actions() {
		let mock = MockTransport::new();
		let session = fixtures::session(&mock, Dialect::Legacy, "firefox", "52.0");
		mock.push_value(json!(null));
		session.key_down("x").unwrap();
		assert_eq!(mock.paths(), ["POST /session/sid/actions"]);

		let mock = MockTransport::new();
		let session = fixtures::session(&mock, Dialect::Legacy, "firefox", "47.0.1");
		mock.push_value(json!(null));
		session.key_down("x").unwrap();
		assert_eq!(mock.paths(), ["POST /session/sid/keys"]);
	}

	#[test]
	fn test_stored_actions_are_sent_and_cleared() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		session.store_key_actions(
			"kb",
			vec![KeyAction::down("a"), KeyAction::pause(Duration::from_millis(50)), KeyAction::up("a")],
		);
		session.store_pointer_actions(
			"mouse",
			PointerType::Mouse,
			vec![
				PointerAction::move_to(Duration::ZERO, 10, 20, PointerMoveOrigin::Viewport),
				PointerAction::down(MouseButton::Left),
				PointerAction::up(MouseButton::Left),
			],
		);
		mock.push_error(400, "invalid argument", "bad action");
		mock.push_value(json!(null));

		assert!(session.perform_actions().is_err());
		let body = mock.last_request().json().unwrap();
		assert_eq!(body["actions"][0]["id"], "kb");
		assert_eq!(body["actions"][0]["actions"][1], json!({"type": "pause", "duration": 50}));
		assert_eq!(body["actions"][1]["parameters"], json!({"pointerType": "mouse"}));
		assert_eq!(
			body["actions"][1]["actions"][0],
			json!({"type": "pointerMove", "duration": 0, "origin": "viewport", "x": 10, "y": 20})
		);

		session.perform_actions().unwrap();
		assert_eq!(mock.last_request().json(), Some(json!({"actions": []})));
	}

	#[test]
	fn test_legacy_mouse_commands() {
		let mock = MockTransport::new();
		let session = fixtures::legacy(&mock);
		for _ in 0..5 {
			mock.push_value(json!(null));
		}

		session.click(MouseButton::Right).unwrap();
		session.double_click().unwrap();
		session.button_down().unwrap();
		session.button_up().unwrap();
		session.release_actions().unwrap();

		assert_eq!(
			mock.paths(),
			[
				"POST /session/sid/click",
				"POST /session/sid/doubleclick",
				"POST /session/sid/buttondown",
				"POST /session/sid/buttonup",
				"DELETE /session/sid/actions",
			]
		);
		assert_eq!(mock.requests()[0].json(), Some(json!({"button": 2})));
	}
}
