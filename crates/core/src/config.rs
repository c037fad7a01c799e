//! Client configuration.

use std::time::Duration;

/// Default HTTP endpoint offering the WebDriver API.
pub const DEFAULT_URL_PREFIX: &str = "http://127.0.0.1:4444/wd/hub";

/// Default polling interval of the wait engine.
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_millis(100);

/// Default timeout of the wait engine.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings shared by every session created through one [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Base URL of the remote end, without trailing slash
	base_url: String,
	/// Per-request HTTP timeout; `None` waits forever
	pub request_timeout: Option<Duration>,
	pub wait_timeout: Duration,
	pub wait_interval: Duration,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_URL_PREFIX.to_string(),
			request_timeout: None,
			wait_timeout: DEFAULT_WAIT_TIMEOUT,
			wait_interval: DEFAULT_WAIT_INTERVAL,
		}
	}
}

impl Config {
	/// Configuration for the given base URL. An empty URL selects
	/// [`DEFAULT_URL_PREFIX`].
	pub fn new(base_url: impl Into<String>) -> Self {
		Self::default().with_base_url(base_url)
	}

	/// Base URL of the remote end, never ending in `/`.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		let trimmed = base_url.trim_end_matches('/');
		self.base_url = if trimmed.is_empty() {
			DEFAULT_URL_PREFIX.to_string()
		} else {
			trimmed.to_string()
		};
		self
	}

	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	pub fn wait_timeout(mut self, timeout: Duration) -> Self {
		self.wait_timeout = timeout;
		self
	}

	pub fn wait_interval(mut self, interval: Duration) -> Self {
		self.wait_interval = interval;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_url_uses_default() {
		assert_eq!(Config::new("").base_url(), DEFAULT_URL_PREFIX);
	}

	#[test]
	fn test_trailing_slash_is_trimmed() {
		assert_eq!(Config::new("http://grid:4444/").base_url(), "http://grid:4444");
	}

	#[test]
	fn test_replacing_base_url_trims_again() {
		let config = Config::new("http://a:4444").with_base_url("http://b:4444/wd/hub//");
		assert_eq!(config.base_url(), "http://b:4444/wd/hub");
		assert_eq!(config.with_base_url("").base_url(), DEFAULT_URL_PREFIX);
	}
}
