//! Session negotiation.
//!
//! Remote ends disagree about where the requested capabilities belong in
//! the `POST /session` body. Each [`CapabilityAttempt`] is one placement;
//! they are tried newest first until one is accepted. The shape of the
//! accepted reply decides the [`Dialect`] of the session.

use semver::Version;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use wd_protocol::{Capabilities, Command, PathArgs};

use crate::decoder;
use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};

/// Protocol generation spoken by the remote end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
	/// JSON wire protocol with numeric status codes
	#[default]
	Legacy,
	/// W3C WebDriver
	Modern,
}

impl Dialect {
	pub fn is_modern(self) -> bool {
		self == Self::Modern
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Legacy => "legacy",
			Self::Modern => "w3c",
		}
	}
}

impl std::fmt::Display for Dialect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Placement of the capabilities in a new session request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityAttempt {
	/// W3C `alwaysMatch` next to the legacy `desiredCapabilities`
	Combined,
	/// Legacy capabilities nested under `capabilities`
	Wrapped,
	/// Bare legacy `desiredCapabilities`
	Legacy,
}

impl CapabilityAttempt {
	/// Attempts in the order they are tried.
	pub const ORDER: [Self; 3] = [Self::Combined, Self::Wrapped, Self::Legacy];

	pub fn body(self, capabilities: &Capabilities) -> Value {
		match self {
			Self::Combined => json!({
				"capabilities": capabilities.to_w3c(),
				"desiredCapabilities": capabilities,
			}),
			Self::Wrapped => json!({
				"capabilities": {"desiredCapabilities": capabilities},
			}),
			Self::Legacy => json!({"desiredCapabilities": capabilities}),
		}
	}
}

/// Outcome of a successful negotiation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Negotiated {
	pub id: String,
	pub dialect: Dialect,
	pub browser: String,
	pub version: Option<Version>,
	/// Capabilities as returned by the remote end
	pub capabilities: Map<String, Value>,
}

/// Creates a session, trying every [`CapabilityAttempt`] in order.
///
/// Only the outcome of the final attempt is authoritative.
pub(crate) fn negotiate(dispatcher: &Dispatcher, capabilities: &Capabilities) -> Result<Negotiated> {
	let mut outcome = Err(Error::MissingValue);
	for attempt in CapabilityAttempt::ORDER {
		let body = attempt.body(capabilities);
		outcome = dispatcher
			.execute(Command::NewSession, &PathArgs::default(), Some(&body))
			.and_then(|reply| accept(&reply, capabilities));

		match &outcome {
			Ok(negotiated) => {
				debug!(
					?attempt,
					session_id = %negotiated.id,
					dialect = ?negotiated.dialect,
					browser = %negotiated.browser,
					"session created"
				);
				break;
			}
			Err(err) if falls_through(err) => {
				debug!(?attempt, error = %err, "new session attempt rejected");
			}
			Err(_) => break,
		}
	}
	outcome
}

/// Whether a failed attempt may be followed by the next one.
///
/// Transport failures and non-JSON replies would fail the same way again.
fn falls_through(err: &Error) -> bool {
	matches!(err, Error::Remote(_) | Error::BadStatus { .. } | Error::Json(_))
}

fn accept(reply: &[u8], requested: &Capabilities) -> Result<Negotiated> {
	let envelope = decoder::envelope(reply)?;
	let value = match envelope.value {
		Some(Value::Object(value)) => value,
		_ => Map::new(),
	};

	let id = envelope
		.session_id
		.filter(|id| !id.is_empty())
		.or_else(|| value.get("sessionId").and_then(Value::as_str).map(str::to_string))
		.filter(|id| !id.is_empty())
		.ok_or(Error::MissingValue)?;

	let (dialect, returned) = match value.get("capabilities") {
		Some(Value::Object(capabilities)) => (Dialect::Modern, capabilities.clone()),
		_ => (Dialect::Legacy, value),
	};

	let mut version = None;
	for field in ["version", "browserVersion"] {
		let Some(raw) = returned.get(field).and_then(Value::as_str).filter(|s| !s.is_empty()) else {
			continue;
		};
		match parse_version(raw) {
			Some(parsed) => version = Some(parsed),
			None => warn!(field, version = raw, "unparseable browser version"),
		}
	}

	let browser = requested
		.browser_name()
		.filter(|name| !name.is_empty())
		.or_else(|| returned.get("browserName").and_then(Value::as_str))
		.unwrap_or_default()
		.to_string();

	Ok(Negotiated {
		id,
		dialect,
		browser,
		version,
		capabilities: returned,
	})
}

/// Parses a browser version permissively.
///
/// A leading `v` is ignored and missing minor/patch components are filled
/// with zero. Trailing dot-separated components are dropped until the rest
/// parses, so `61.0.3116.0` yields `61.0.3116`.
pub fn parse_version(raw: &str) -> Option<Version> {
	let raw = raw.trim();
	let raw = raw.strip_prefix('v').unwrap_or(raw);
	let parts: Vec<&str> = raw.split('.').collect();
	(1..=parts.len()).rev().find_map(|n| parse_tolerant(&parts[..n]))
}

fn parse_tolerant(parts: &[&str]) -> Option<Version> {
	let mut parts: Vec<String> = parts
		.iter()
		.map(|part| {
			let digits = part.trim_start_matches('0');
			if part.chars().all(|c| c.is_ascii_digit()) && !part.is_empty() {
				if digits.is_empty() { "0".to_string() } else { digits.to_string() }
			} else {
				(*part).to_string()
			}
		})
		.collect();
	while parts.len() < 3 {
		parts.push("0".to_string());
	}
	Version::parse(&parts.join(".")).ok()
}
