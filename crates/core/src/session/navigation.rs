//! Navigation and document methods for [`Session`].

use serde_json::json;
use wd_protocol::Command;

use super::Session;
use crate::error::Result;

impl Session {
	/// Loads `url` in the current top-level browsing context.
	pub fn get(&self, url: &str) -> Result<()> {
		self.void(Command::NavigateTo, Some(json!({ "url": url })))
	}

	pub fn current_url(&self) -> Result<String> {
		self.query_required(Command::GetCurrentUrl)
	}

	pub fn back(&self) -> Result<()> {
		self.void(Command::Back, None)
	}

	pub fn forward(&self) -> Result<()> {
		self.void(Command::Forward, None)
	}

	pub fn refresh(&self) -> Result<()> {
		self.void(Command::Refresh, None)
	}

	pub fn title(&self) -> Result<String> {
		self.query_required(Command::GetTitle)
	}

	/// Serialized DOM of the current page.
	pub fn page_source(&self) -> Result<String> {
		self.query_required(Command::GetPageSource)
	}
}
