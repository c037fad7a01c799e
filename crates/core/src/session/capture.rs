//! Screenshot, print and log methods for [`Session`].

use serde_json::json;
use wd_protocol::{Command, LogEntry, LogType, PrintOptions};

use super::Session;
use crate::decoder;
use crate::element::decode_base64;
use crate::error::Result;

impl Session {
	/// PNG screenshot of the current viewport.
	pub fn screenshot(&self) -> Result<Vec<u8>> {
		let data: String = self.query_required(Command::TakeScreenshot)?;
		decode_base64(&data)
	}

	/// Renders the current page as PDF.
	pub fn print_page(&self, options: &PrintOptions) -> Result<Vec<u8>> {
		let reply = self.execute(Command::PrintPage, &self.args()?, Some(serde_json::to_value(options)?))?;
		let data: String = decoder::required_value(&reply)?;
		decode_base64(&data)
	}

	/// Drains the log buffer `kind`. Only legacy remote ends and
	/// ChromeDriver implement this.
	pub fn log(&self, kind: LogType) -> Result<Vec<LogEntry>> {
		let reply = self.execute(Command::LegacyGetLog, &self.args()?, Some(json!({ "type": kind })))?;
		let entries: Option<Vec<LogEntry>> = decoder::value(&reply)?;
		Ok(entries.unwrap_or_default())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use wd_protocol::{LogType, Orientation, PrintOptions};

	use crate::error::Error;
	use crate::session::fixtures;
	use crate::testing::MockTransport;

	#[test]
	fn test_screenshot_is_decoded() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("iVBORw=="));
		mock.push_value(json!("not base64!"));

		assert_eq!(session.screenshot().unwrap(), b"\x89PNG");
		assert!(matches!(session.screenshot(), Err(Error::Base64(_))));
		assert_eq!(mock.paths()[0], "GET /session/sid/screenshot");
	}

	#[test]
	fn test_print_page() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("JVBERi0="));

		let options = PrintOptions {
			orientation: Some(Orientation::Landscape),
			..PrintOptions::default()
		};
		assert_eq!(session.print_page(&options).unwrap(), b"%PDF-");
		assert_eq!(mock.last_request().json(), Some(json!({"orientation": "landscape"})));
	}

	#[test]
	fn test_log_entries() {
		let mock = MockTransport::new();
		let session = fixtures::legacy(&mock);
		mock.push_value(json!([
			{"timestamp": 1700000000123i64, "level": "SEVERE", "message": "Uncaught TypeError"},
		]));

		let entries = session.log(LogType::Browser).unwrap();
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].level, "SEVERE");
		assert_eq!(mock.paths(), ["POST /session/sid/log"]);
		assert_eq!(mock.last_request().json(), Some(json!({"type": "browser"})));
	}
}
