//! Timeout methods for [`Session`].
//!
//! The legacy dialect sets each kind through its own endpoint with an `ms`
//! field; the W3C dialect sets any combination on `timeouts`.

use std::time::Duration;

use serde_json::json;
use wd_protocol::{Command, Timeouts};

use super::Session;
use crate::error::Result;

fn millis(timeout: Duration) -> u64 {
	u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

impl Session {
	/// Time an asynchronous script may run before it is aborted.
	pub fn set_script_timeout(&self, timeout: Duration) -> Result<()> {
		let ms = millis(timeout);
		if self.is_modern() {
			return self.void(Command::SetTimeouts, Some(json!({ "script": ms })));
		}
		self.legacy_timeout("async_script", ms)
	}

	/// Time element lookups keep retrying before they fail.
	pub fn set_implicit_wait_timeout(&self, timeout: Duration) -> Result<()> {
		let ms = millis(timeout);
		if self.is_modern() {
			return self.void(Command::SetTimeouts, Some(json!({ "implicit": ms })));
		}
		self.legacy_timeout("implicit_wait", ms)
	}

	pub fn set_page_load_timeout(&self, timeout: Duration) -> Result<()> {
		let ms = millis(timeout);
		let body = if self.is_modern() {
			json!({ "pageLoad": ms })
		} else {
			json!({ "type": "page load", "ms": ms })
		};
		self.void(Command::SetTimeouts, Some(body))
	}

	/// Sets every timeout present in `timeouts`.
	pub fn set_timeouts(&self, timeouts: Timeouts) -> Result<()> {
		if self.is_modern() {
			return self.void(Command::SetTimeouts, Some(serde_json::to_value(timeouts)?));
		}
		if let Some(ms) = timeouts.script {
			self.legacy_timeout("async_script", ms)?;
		}
		if let Some(ms) = timeouts.implicit {
			self.legacy_timeout("implicit_wait", ms)?;
		}
		if let Some(ms) = timeouts.page_load {
			self.void(Command::SetTimeouts, Some(json!({ "type": "page load", "ms": ms })))?;
		}
		Ok(())
	}

	/// Current timeouts. Only W3C remote ends implement this.
	pub fn timeouts(&self) -> Result<Timeouts> {
		self.query_required(Command::GetTimeouts)
	}

	fn legacy_timeout(&self, kind: &str, ms: u64) -> Result<()> {
		let args = self.args()?.name(kind);
		self.execute(Command::LegacySetTimeout, &args, Some(json!({ "ms": ms })))
			.map(drop)
	}
}
