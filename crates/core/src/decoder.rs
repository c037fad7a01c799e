//! Reply decoding and error classification.
//!
//! Remote ends report failures in three shapes, checked in this order:
//!
//! 1. A top-level `error` field next to `value` (early W3C drivers)
//! 2. An error object embedded in `value` (W3C WebDriver)
//! 3. A non-zero numeric `status` (legacy JSON wire protocol)
//!
//! Anything else is a success and the raw body is handed back to the caller.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, RemoteError, Result};
use crate::transport::{HttpResponse, JSON_CONTENT_TYPE};

/// Error kinds of the legacy JSON wire protocol, keyed by status code.
const LEGACY_ERRORS: &[(i64, &str)] = &[
	(6, "invalid session ID"),
	(7, "no such element"),
	(8, "no such frame"),
	(9, "unknown command"),
	(10, "stale element reference"),
	(11, "element not visible"),
	(12, "invalid element state"),
	(13, "unknown error"),
	(15, "element is not selectable"),
	(17, "javascript error"),
	(19, "xpath lookup error"),
	(21, "timeout"),
	(23, "no such window"),
	(24, "invalid cookie domain"),
	(25, "unable to set cookie"),
	(26, "unexpected alert open"),
	(27, "no alert open"),
	(28, "script timeout"),
	(29, "invalid element coordinates"),
	(32, "invalid selector"),
];

/// Maps a legacy status code to its symbolic error kind.
pub fn legacy_error_kind(code: i64) -> String {
	LEGACY_ERRORS
		.iter()
		.find(|(c, _)| *c == code)
		.map(|(_, kind)| (*kind).to_string())
		.unwrap_or_else(|| format!("unknown error - {code}"))
}

/// Decoded shape of any remote end reply.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReplyEnvelope {
	#[serde(rename = "sessionId", default)]
	pub session_id: Option<String>,
	#[serde(default)]
	pub value: Option<Value>,
	#[serde(default)]
	pub status: i64,
	/// Legacy human-readable status, informational only
	#[serde(default)]
	#[allow(dead_code)]
	pub state: Option<String>,
	#[serde(flatten)]
	pub error: ErrorObject,
}

/// Error triple as defined by W3C WebDriver.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorObject {
	#[serde(default, deserialize_with = "lenient_string")]
	pub error: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub message: String,
	#[serde(default, deserialize_with = "lenient_string")]
	pub stacktrace: String,
}

impl ErrorObject {
	fn into_remote(self, http_status: u16, legacy_code: Option<i64>) -> RemoteError {
		RemoteError {
			kind: self.error,
			message: self.message,
			stacktrace: (!self.stacktrace.is_empty()).then_some(self.stacktrace),
			http_status,
			legacy_code,
		}
	}
}

/// Selenium sends structured stack traces; keep them as JSON text.
fn lenient_string<'de, D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	Ok(match Value::deserialize(deserializer)? {
		Value::Null => String::new(),
		Value::String(s) => s,
		other => other.to_string(),
	})
}

/// Classifies a raw reply.
///
/// Returns the untouched body on success, or exactly one error.
pub fn decode(response: &HttpResponse) -> Result<Vec<u8>> {
	check_content_type(response.content_type.as_deref())?;

	let reply: ReplyEnvelope = match serde_json::from_slice(&response.body) {
		Ok(reply) => reply,
		Err(_) if response.status != 200 => {
			return Err(Error::BadStatus {
				status: response.status,
			});
		}
		Err(err) => return Err(Error::Json(err)),
	};

	if !reply.error.error.is_empty() {
		return Err(reply.error.into_remote(response.status, None).into());
	}

	if let Some(value @ Value::Object(_)) = &reply.value {
		if let Ok(embedded) = ErrorObject::deserialize(value) {
			if !embedded.error.is_empty() {
				return Err(embedded.into_remote(response.status, None).into());
			}
		}
	}

	if reply.status != 0 {
		let message = reply
			.value
			.as_ref()
			.and_then(|v| v.get("message").or_else(|| v.get("Message")))
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();
		return Err(RemoteError {
			kind: legacy_error_kind(reply.status),
			message,
			stacktrace: None,
			http_status: response.status,
			legacy_code: Some(reply.status),
		}
		.into());
	}

	Ok(response.body.clone())
}

fn check_content_type(content_type: Option<&str>) -> Result<()> {
	let got = content_type.unwrap_or_default();
	let mime: mime::Mime = got.parse().map_err(|_| Error::ContentType {
		got: got.to_string(),
		expected: JSON_CONTENT_TYPE,
	})?;
	if mime.essence_str() != JSON_CONTENT_TYPE {
		return Err(Error::ContentType {
			got: mime.essence_str().to_string(),
			expected: JSON_CONTENT_TYPE,
		});
	}
	Ok(())
}

/// Parses the envelope of a successful reply.
pub(crate) fn envelope(body: &[u8]) -> Result<ReplyEnvelope> {
	Ok(serde_json::from_slice(body)?)
}

/// Extracts and deserializes the `value` field of a successful reply.
pub fn value<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
	#[derive(Deserialize)]
	struct Reply<T> {
		value: T,
	}
	let reply: Reply<T> = serde_json::from_slice(body)?;
	Ok(reply.value)
}

/// Like [`value`], but treats a missing or null value as an error.
pub fn required_value<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
	value::<Option<T>>(body)?.ok_or(Error::MissingValue)
}
