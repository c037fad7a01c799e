//! Cookie methods for [`Session`].

use serde_json::{Value, json};
use wd_protocol::{Command, Cookie};

use super::Session;
use crate::decoder;
use crate::error::{Error, Result};

impl Session {
	/// Every cookie visible to the current page.
	pub fn cookies(&self) -> Result<Vec<Cookie>> {
		let cookies: Option<Vec<Cookie>> = self.query(Command::GetAllCookies)?;
		Ok(cookies.unwrap_or_default())
	}

	/// The cookie called `name`.
	///
	/// ChromeDriver is asked for all cookies, which are filtered locally.
	/// GeckoDriver may answer with a list instead of a single cookie.
	pub fn cookie(&self, name: &str) -> Result<Cookie> {
		if self.browser() == "chrome" {
			return self
				.cookies()?
				.into_iter()
				.find(|cookie| cookie.name == name)
				.ok_or_else(|| Error::CookieNotFound(name.to_string()));
		}

		let reply = self.execute(Command::GetNamedCookie, &self.args()?.name(cookie_name(name)?), None)?;
		let value: Value = decoder::value(&reply)?;
		let cookie = match value {
			Value::Array(list) => list.into_iter().next(),
			Value::Null => None,
			single => Some(single),
		};
		match cookie {
			Some(cookie) => Ok(serde_json::from_value(cookie)?),
			None => Err(Error::CookieNotFound(name.to_string())),
		}
	}

	pub fn add_cookie(&self, cookie: &Cookie) -> Result<()> {
		self.void(Command::AddCookie, Some(json!({ "cookie": cookie })))
	}

	pub fn delete_cookie(&self, name: &str) -> Result<()> {
		self.execute(Command::DeleteCookie, &self.args()?.name(cookie_name(name)?), None)
			.map(drop)
	}

	pub fn delete_all_cookies(&self) -> Result<()> {
		self.void(Command::DeleteAllCookies, None)
	}
}

/// An empty name would address the whole cookie collection.
fn cookie_name(name: &str) -> Result<&str> {
	if name.is_empty() {
		return Err(Error::InvalidArgument("cookie name must not be empty".to_string()));
	}
	Ok(name)
}
