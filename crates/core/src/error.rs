//! Error types for the WebDriver client.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a remote end.
#[derive(Debug, Error)]
pub enum Error {
	/// The HTTP request could not be sent or its body could not be read.
	#[error("HTTP transport error: {0}")]
	Http(#[from] reqwest::Error),

	/// The remote end answered with something other than JSON.
	#[error("got content type {got:?}, expected {expected:?}")]
	ContentType { got: String, expected: &'static str },

	/// The reply could not be decoded and the HTTP status was not OK.
	#[error("bad server reply status: {status}")]
	BadStatus { status: u16 },

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Error reported by the remote end.
	#[error("{0}")]
	Remote(Box<RemoteError>),

	/// A reply that should hold an element reference did not.
	#[error("invalid element returned: {0}")]
	InvalidElement(String),

	/// A wait condition was not satisfied in time.
	#[error("timeout after {elapsed:?}")]
	Timeout { elapsed: Duration },

	/// The session was deleted and has not been renegotiated.
	#[error("session has been closed")]
	SessionClosed,

	/// The reply was well formed but carried no value.
	#[error("nil return value")]
	MissingValue,

	#[error("cookie not found: {0}")]
	CookieNotFound(String),

	#[error("invalid URL: {0}")]
	Url(#[from] url::ParseError),

	#[error("base64 decode error: {0}")]
	Base64(#[from] base64::DecodeError),

	/// Invalid argument provided to a method.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

impl From<RemoteError> for Error {
	fn from(error: RemoteError) -> Self {
		Error::Remote(Box::new(error))
	}
}

impl Error {
	/// Returns the remote error if this is one.
	pub fn remote(&self) -> Option<&RemoteError> {
		match self {
			Error::Remote(remote) => Some(remote),
			_ => None,
		}
	}

	/// Returns the symbolic error kind reported by the remote end.
	pub fn kind(&self) -> Option<&str> {
		self.remote().map(|r| r.kind.as_str())
	}

	/// Returns the legacy numeric status if the remote end sent one.
	pub fn legacy_code(&self) -> Option<i64> {
		self.remote().and_then(|r| r.legacy_code)
	}

	/// Returns true for wait timeouts and remote timeout errors.
	pub fn is_timeout(&self) -> bool {
		match self {
			Error::Timeout { .. } => true,
			Error::Remote(r) => matches!(r.kind.as_str(), "timeout" | "script timeout"),
			_ => false,
		}
	}

	/// Returns true if the remote end could not find the element.
	pub fn is_no_such_element(&self) -> bool {
		self.kind() == Some("no such element")
	}

	/// Returns true if the element reference went stale.
	pub fn is_stale_element(&self) -> bool {
		self.kind() == Some("stale element reference")
	}
}

/// Failure of a command as classified from the remote end's reply.
///
/// See the table of kinds at <https://www.w3.org/TR/webdriver/#errors>.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteError {
	/// Short symbolic kind, e.g. `no such element`
	pub kind: String,
	/// Detailed, human-readable message
	pub message: String,
	/// Server-side stack trace, if any
	pub stacktrace: Option<String>,
	/// HTTP status code of the reply
	pub http_status: u16,
	/// Status code of the legacy JSON wire protocol
	pub legacy_code: Option<i64>,
}

impl fmt::Display for RemoteError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.kind, self.message)
	}
}

impl std::error::Error for RemoteError {}
