//! User prompt methods for [`Session`].

use serde_json::json;
use wd_protocol::Command;

use super::Session;
use crate::error::Result;

impl Session {
	pub fn accept_alert(&self) -> Result<()> {
		self.void(Command::AcceptAlert, None)
	}

	pub fn dismiss_alert(&self) -> Result<()> {
		self.void(Command::DismissAlert, None)
	}

	/// Message of the open prompt.
	pub fn alert_text(&self) -> Result<String> {
		let text: Option<String> = self.query(Command::GetAlertText)?;
		Ok(text.unwrap_or_default())
	}

	/// Fills the input field of a `window.prompt`.
	pub fn set_alert_text(&self, text: &str) -> Result<()> {
		self.void(Command::SendAlertText, Some(json!({ "text": text })))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::session::fixtures;
	use crate::testing::MockTransport;

	#[test]
	fn test_alert_round() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("Are you sure?"));
		mock.push_value(json!(null));
		mock.push_value(json!(null));
		mock.push_value(json!(null));

		assert_eq!(session.alert_text().unwrap(), "Are you sure?");
		session.set_alert_text("yes").unwrap();
		session.accept_alert().unwrap();
		session.dismiss_alert().unwrap();

		assert_eq!(
			mock.paths(),
			[
				"GET /session/sid/alert/text",
				"POST /session/sid/alert/text",
				"POST /session/sid/alert/accept",
				"POST /session/sid/alert/dismiss",
			]
		);
		assert_eq!(mock.requests()[1].json(), Some(json!({"text": "yes"})));
	}

	#[test]
	fn test_no_alert_open() {
		let mock = MockTransport::new();
		let session = fixtures::legacy(&mock);
		mock.push_json(500, json!({"status": 27, "value": {"message": "No alert is present"}}));

		let err = session.accept_alert().unwrap_err();
		assert_eq!(err.kind(), Some("no alert open"));
		assert_eq!(err.legacy_code(), Some(27));
	}
}
