//! Cookie wire type.
//!
//! Remote ends disagree on how they encode cookie expiry: GeckoDriver sends
//! an integer, ChromeDriver a float. Both are normalized to whole seconds.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// SameSite cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SameSite {
	/// Cookie is sent with same-site and cross-site requests
	None,
	/// Cookie is sent with same-site requests and cross-site top-level navigations
	#[default]
	Lax,
	/// Cookie is only sent with same-site requests
	Strict,
}

impl SameSite {
	/// Parses a same-site policy case-insensitively.
	///
	/// Empty input means the attribute is unset. Unrecognized values fall
	/// back to [`SameSite::Lax`].
	pub fn parse(s: &str) -> Option<Self> {
		if s.is_empty() {
			return None;
		}
		[Self::None, Self::Lax, Self::Strict]
			.into_iter()
			.find(|v| v.as_str().eq_ignore_ascii_case(s))
			.or(Some(Self::Lax))
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "None",
			Self::Lax => "Lax",
			Self::Strict => "Strict",
		}
	}
}

/// A browser cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
	pub name: String,

	pub value: String,

	#[serde(default, deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
	pub path: String,

	#[serde(default, deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
	pub domain: String,

	#[serde(default, deserialize_with = "nullable_bool")]
	pub secure: bool,

	/// Unix timestamp in seconds, 0 for session cookies
	#[serde(default, deserialize_with = "expiry_seconds", skip_serializing_if = "is_zero")]
	pub expiry: u64,

	#[serde(rename = "httpOnly", default, deserialize_with = "nullable_bool")]
	pub http_only: bool,

	#[serde(
		rename = "sameSite",
		default,
		deserialize_with = "same_site",
		skip_serializing_if = "Option::is_none"
	)]
	pub same_site: Option<SameSite>,
}

impl Cookie {
	/// Creates a session cookie with the given name and value.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			..Self::default()
		}
	}

	pub fn domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = domain.into();
		self
	}

	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	pub fn expiry(mut self, expiry: u64) -> Self {
		self.expiry = expiry;
		self
	}

	pub fn secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}

	pub fn http_only(mut self, http_only: bool) -> Self {
		self.http_only = http_only;
		self
	}

	pub fn same_site(mut self, same_site: SameSite) -> Self {
		self.same_site = Some(same_site);
		self
	}
}

fn is_zero(v: &u64) -> bool {
	*v == 0
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn expiry_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
	let expiry = match Value::deserialize(deserializer)? {
		Value::Number(n) => n
			.as_u64()
			.or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
			.unwrap_or(0),
		_ => 0,
	};
	Ok(expiry)
}

fn same_site<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SameSite>, D::Error> {
	Ok(Option::<String>::deserialize(deserializer)?
		.as_deref()
		.and_then(SameSite::parse))
}
