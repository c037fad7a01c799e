//! Session capabilities and vendor extensions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vendor key holding [`ChromeOptions`].
pub const CHROME_OPTIONS_KEY: &str = "goog:chromeOptions";

/// Vendor key holding [`FirefoxOptions`].
pub const FIREFOX_OPTIONS_KEY: &str = "moz:firefoxOptions";

/// Legacy location of a base64 encoded Firefox profile.
pub const LEGACY_FIREFOX_PROFILE_KEY: &str = "firefox_profile";

/// Top-level capability names defined by W3C WebDriver.
///
/// See <https://www.w3.org/TR/webdriver/#capabilities>.
pub const W3C_CAPABILITY_NAMES: &[&str] = &[
	"acceptInsecureCerts",
	"browserName",
	"browserVersion",
	"platformName",
	"pageLoadStrategy",
	"proxy",
	"setWindowRect",
	"timeouts",
	"unhandledPromptBehavior",
];

/// Non-standard top-level names ChromeDriver still expects.
pub const CHROME_CAPABILITY_NAMES: &[&str] = &["loggingPrefs"];

/// Unordered map of capability name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(pub Map<String, Value>);

impl Capabilities {
	pub fn new() -> Self {
		Self::default()
	}

	/// Capabilities requesting the given browser.
	pub fn browser(name: impl Into<String>) -> Self {
		let mut caps = Self::new();
		caps.set("browserName", Value::String(name.into()));
		caps
	}

	pub fn set(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
		self.0.insert(name.into(), value);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	pub fn browser_name(&self) -> Option<&str> {
		self.get("browserName").and_then(Value::as_str)
	}

	/// Stores Chrome specific options under [`CHROME_OPTIONS_KEY`].
	pub fn add_chrome(&mut self, options: ChromeOptions) -> &mut Self {
		self.set(CHROME_OPTIONS_KEY, to_object(&options))
	}

	/// Stores Firefox specific options under [`FIREFOX_OPTIONS_KEY`].
	pub fn add_firefox(&mut self, options: FirefoxOptions) -> &mut Self {
		self.set(FIREFOX_OPTIONS_KEY, to_object(&options))
	}

	/// Builds the `alwaysMatch` object sent to W3C remote ends.
	///
	/// Only standard names, vendor-prefixed names (containing `:`) and, for
	/// Chrome, [`CHROME_CAPABILITY_NAMES`] are kept. A legacy
	/// `firefox_profile` is moved into the Firefox options unless those
	/// already carry a profile.
	pub fn to_w3c(&self) -> Value {
		let chrome = self.browser_name() == Some("chrome");
		let allowed = |name: &str| {
			W3C_CAPABILITY_NAMES.contains(&name)
				|| name.contains(':')
				|| (chrome && CHROME_CAPABILITY_NAMES.contains(&name))
		};

		let mut always_match: Map<String, Value> = self
			.0
			.iter()
			.filter(|(name, _)| allowed(name))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect();

		if let Some(profile) = self.get(LEGACY_FIREFOX_PROFILE_KEY).and_then(Value::as_str) {
			let firefox = always_match
				.entry(FIREFOX_OPTIONS_KEY)
				.or_insert_with(|| Value::Object(Map::new()));
			if let Value::Object(firefox) = firefox {
				let has_profile = firefox
					.get("profile")
					.and_then(Value::as_str)
					.is_some_and(|p| !p.is_empty());
				if !has_profile {
					firefox.insert("profile".to_string(), Value::String(profile.to_string()));
				}
			}
		}

		let mut wrapper = Map::new();
		wrapper.insert("alwaysMatch".to_string(), Value::Object(always_match));
		Value::Object(wrapper)
	}
}

impl From<Map<String, Value>> for Capabilities {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

fn to_object<T: Serialize>(value: &T) -> Value {
	// Plain structs of strings, vectors and JSON values always serialize.
	serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Options understood by ChromeDriver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChromeOptions {
	/// Path to the browser binary
	#[serde(rename = "binary", skip_serializing_if = "String::is_empty", default)]
	pub path: String,
	#[serde(skip_serializing_if = "Vec::is_empty", default)]
	pub args: Vec<String>,
	#[serde(skip_serializing_if = "Map::is_empty", default)]
	pub prefs: Map<String, Value>,
	#[serde(skip_serializing_if = "Vec::is_empty", default)]
	pub extensions: Vec<String>,
}

/// Options understood by GeckoDriver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirefoxOptions {
	#[serde(skip_serializing_if = "String::is_empty", default)]
	pub binary: String,
	/// Base64 encoded zip of a profile directory
	#[serde(skip_serializing_if = "String::is_empty", default)]
	pub profile: String,
	#[serde(skip_serializing_if = "Vec::is_empty", default)]
	pub args: Vec<String>,
	#[serde(skip_serializing_if = "Map::is_empty", default)]
	pub prefs: Map<String, Value>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn caps(value: Value) -> Capabilities {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn test_w3c_filters_unknown_names() {
		let caps = caps(json!({
			"browserName": "firefox",
			"platformName": "linux",
			"javascriptEnabled": true,
			"moz:firefoxOptions": {"args": ["-headless"]},
			"loggingPrefs": {"browser": "ALL"},
		}));

		let always = &caps.to_w3c()["alwaysMatch"];
		assert_eq!(always["browserName"], "firefox");
		assert_eq!(always["platformName"], "linux");
		assert_eq!(always["moz:firefoxOptions"]["args"][0], "-headless");
		assert!(always.get("javascriptEnabled").is_none());
		assert!(always.get("loggingPrefs").is_none());
	}

	#[test]
	fn test_chrome_keeps_logging_prefs() {
		let caps = caps(json!({"browserName": "chrome", "loggingPrefs": {"browser": "ALL"}}));
		assert_eq!(caps.to_w3c()["alwaysMatch"]["loggingPrefs"]["browser"], "ALL");
	}

	#[test]
	fn test_firefox_profile_is_migrated() {
		let caps = caps(json!({"browserName": "firefox", "firefox_profile": "UEsDBA=="}));
		let always = &caps.to_w3c()["alwaysMatch"];
		assert_eq!(always[FIREFOX_OPTIONS_KEY]["profile"], "UEsDBA==");
		assert!(always.get(LEGACY_FIREFOX_PROFILE_KEY).is_none());
	}

	#[test]
	fn test_existing_firefox_profile_wins() {
		let caps = caps(json!({
			"firefox_profile": "legacy",
			"moz:firefoxOptions": {"profile": "modern", "args": ["-headless"]},
		}));
		let firefox = &caps.to_w3c()["alwaysMatch"][FIREFOX_OPTIONS_KEY];
		assert_eq!(firefox["profile"], "modern");
		assert_eq!(firefox["args"][0], "-headless");
	}

	#[test]
	fn test_empty_firefox_profile_is_filled() {
		let mut caps = Capabilities::browser("firefox");
		caps.add_firefox(FirefoxOptions {
			binary: "/usr/bin/firefox".into(),
			..FirefoxOptions::default()
		});
		caps.set(LEGACY_FIREFOX_PROFILE_KEY, json!("legacy"));

		let firefox = &caps.to_w3c()["alwaysMatch"][FIREFOX_OPTIONS_KEY];
		assert_eq!(firefox["profile"], "legacy");
		assert_eq!(firefox["binary"], "/usr/bin/firefox");
	}

	#[test]
	fn test_chrome_options_shape() {
		let mut caps = Capabilities::browser("chrome");
		caps.add_chrome(ChromeOptions {
			path: "/opt/chrome".into(),
			args: vec!["--headless".into()],
			..ChromeOptions::default()
		});
		let chrome = caps.get(CHROME_OPTIONS_KEY).unwrap();
		assert_eq!(chrome["binary"], "/opt/chrome");
		assert_eq!(chrome["args"][0], "--headless");
		assert!(chrome.get("prefs").is_none());
	}
}
