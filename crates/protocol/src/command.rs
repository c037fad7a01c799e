//! Command table mapping abstract command names to HTTP endpoints.
//!
//! Each [`Command`] resolves to an HTTP [`Method`] and a path template
//! relative to the remote end's base URL. Templates may contain the
//! placeholders `{session id}`, `{element id}`, `{shadow id}` and `{name}`,
//! which [`PathArgs::render`] substitutes positionally.
//!
//! The W3C commands follow <https://www.w3.org/TR/webdriver/#endpoints>.
//! Commands prefixed with `Legacy` only exist in the JSON wire protocol and
//! are used by the dialect shims when talking to older remote ends.

use std::fmt;
use std::str::FromStr;

/// HTTP method of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
	Get,
	Post,
	Delete,
}

impl Method {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Delete => "DELETE",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

macro_rules! commands {
	($( $(#[$meta:meta])* $variant:ident => $name:literal, $method:ident, $path:literal; )*) => {
		/// Abstract command name.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Command {
			$( $(#[$meta])* $variant, )*
		}

		impl Command {
			/// Every command in table order.
			pub const ALL: &'static [Command] = &[$( Command::$variant, )*];

			/// Returns the HTTP method and path template of this command.
			pub const fn spec(self) -> (Method, &'static str) {
				match self {
					$( Command::$variant => (Method::$method, $path), )*
				}
			}

			/// Returns the abstract name of this command.
			pub const fn name(self) -> &'static str {
				match self {
					$( Command::$variant => $name, )*
				}
			}
		}

		impl FromStr for Command {
			type Err = UnknownCommand;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$( $name => Ok(Command::$variant), )*
					other => Err(UnknownCommand(other.to_string())),
				}
			}
		}
	};
}

commands! {
	NewSession => "newSession", Post, "/session";
	DeleteSession => "delSession", Delete, "/session/{session id}";
	GetStatus => "getStatus", Get, "/status";
	GetCapabilities => "getCapabilities", Get, "/session/{session id}";
	GetTimeouts => "getTimeout", Get, "/session/{session id}/timeouts";
	SetTimeouts => "setTimeout", Post, "/session/{session id}/timeouts";
	NavigateTo => "openUrl", Post, "/session/{session id}/url";
	GetCurrentUrl => "getUrl", Get, "/session/{session id}/url";
	Back => "back", Post, "/session/{session id}/back";
	Forward => "forward", Post, "/session/{session id}/forward";
	Refresh => "refresh", Post, "/session/{session id}/refresh";
	GetTitle => "getTitle", Get, "/session/{session id}/title";
	GetWindowHandle => "getWindowHandle", Get, "/session/{session id}/window";
	CloseWindow => "closeWindow", Delete, "/session/{session id}/window";
	SwitchToWindow => "switchToWindow", Post, "/session/{session id}/window";
	GetWindowHandles => "getWindowHandles", Get, "/session/{session id}/window/handles";
	NewWindow => "newWindow", Post, "/session/{session id}/window/new";
	SwitchToFrame => "switchToFrame", Post, "/session/{session id}/frame";
	SwitchToParentFrame => "switchToParentFrame", Post, "/session/{session id}/frame/parent";
	GetWindowRect => "getWindowRect", Get, "/session/{session id}/window/rect";
	SetWindowRect => "setWindowRect", Post, "/session/{session id}/window/rect";
	MaximizeWindow => "maximizeWindow", Post, "/session/{session id}/window/maximize";
	MinimizeWindow => "minimizeWindow", Post, "/session/{session id}/window/minimize";
	FullscreenWindow => "fullscreenWindow", Post, "/session/{session id}/window/fullscreen";
	GetActiveElement => "getActiveElement", Get, "/session/{session id}/element/active";
	GetShadowRoot => "getShadowRoot", Get, "/session/{session id}/element/{element id}/shadow";
	FindElement => "findElement", Post, "/session/{session id}/element";
	FindElements => "findElements", Post, "/session/{session id}/elements";
	FindElementFromElement => "findElementFromElement", Post, "/session/{session id}/element/{element id}/element";
	FindElementsFromElement => "findElementsFromElement", Post, "/session/{session id}/element/{element id}/elements";
	FindElementFromShadow => "findElementFromShadow", Post, "/session/{session id}/shadow/{shadow id}/element";
	FindElementsFromShadow => "findElementsFromShadow", Post, "/session/{session id}/shadow/{shadow id}/elements";
	IsElementSelected => "isElementSelected", Get, "/session/{session id}/element/{element id}/selected";
	GetElementAttribute => "getElementAttribute", Get, "/session/{session id}/element/{element id}/attribute/{name}";
	GetElementProperty => "getElementProperty", Get, "/session/{session id}/element/{element id}/property/{name}";
	GetElementCssValue => "getElementCSSValue", Get, "/session/{session id}/element/{element id}/css/{name}";
	GetElementText => "getElementText", Get, "/session/{session id}/element/{element id}/text";
	GetElementTagName => "getElementName", Get, "/session/{session id}/element/{element id}/name";
	GetElementRect => "getElementRect", Get, "/session/{session id}/element/{element id}/rect";
	IsElementEnabled => "getElementEnabled", Get, "/session/{session id}/element/{element id}/enabled";
	GetComputedRole => "getComputedRole", Get, "/session/{session id}/element/{element id}/computedrole";
	GetComputedLabel => "getComputedLabel", Get, "/session/{session id}/element/{element id}/computedlabel";
	ElementClick => "isElementClicked", Post, "/session/{session id}/element/{element id}/click";
	ElementClear => "setElementClear", Post, "/session/{session id}/element/{element id}/clear";
	ElementSendKeys => "setElementValue", Post, "/session/{session id}/element/{element id}/value";
	GetPageSource => "getElementSource", Get, "/session/{session id}/source";
	ExecuteScript => "executeScriptSync", Post, "/session/{session id}/execute/sync";
	ExecuteAsyncScript => "executeScriptAsync", Post, "/session/{session id}/execute/async";
	GetAllCookies => "getCookies", Get, "/session/{session id}/cookie";
	GetNamedCookie => "getCookie", Get, "/session/{session id}/cookie/{name}";
	AddCookie => "addCookie", Post, "/session/{session id}/cookie";
	DeleteCookie => "delCookie", Delete, "/session/{session id}/cookie/{name}";
	DeleteAllCookies => "delCookies", Delete, "/session/{session id}/cookie";
	PerformActions => "addActions", Post, "/session/{session id}/actions";
	ReleaseActions => "delActions", Delete, "/session/{session id}/actions";
	DismissAlert => "dismissAlert", Post, "/session/{session id}/alert/dismiss";
	AcceptAlert => "acceptAlert", Post, "/session/{session id}/alert/accept";
	GetAlertText => "getAlertText", Get, "/session/{session id}/alert/text";
	SendAlertText => "setAlertText", Post, "/session/{session id}/alert/text";
	TakeScreenshot => "screenshot", Get, "/session/{session id}/screenshot";
	TakeElementScreenshot => "elementScreenshot", Get, "/session/{session id}/element/{element id}/screenshot";
	PrintPage => "print", Post, "/session/{session id}/print";

	/// `{name}` is the timeout kind, e.g. `implicit_wait`.
	LegacySetTimeout => "legacySetTimeout", Post, "/session/{session id}/timeouts/{name}";
	/// `{name}` is the window handle, or `current`.
	LegacyMaximizeWindow => "legacyMaximizeWindow", Post, "/session/{session id}/window/{name}/maximize";
	LegacyMinimizeWindow => "legacyMinimizeWindow", Post, "/session/{session id}/window/{name}/minimize";
	LegacySetWindowSize => "legacySetWindowSize", Post, "/session/{session id}/window/{name}/size";
	LegacyGetActiveElement => "legacyGetActiveElement", Post, "/session/{session id}/element/active";
	LegacySendKeys => "legacySendKeys", Post, "/session/{session id}/keys";
	LegacyExecuteScript => "legacyExecuteScript", Post, "/session/{session id}/execute";
	LegacyExecuteAsyncScript => "legacyExecuteAsyncScript", Post, "/session/{session id}/execute_async";
	LegacyElementLocation => "legacyElementLocation", Get, "/session/{session id}/element/{element id}/location";
	LegacyElementLocationInView => "legacyElementLocationInView", Get, "/session/{session id}/element/{element id}/location_in_view";
	LegacyElementSize => "legacyElementSize", Get, "/session/{session id}/element/{element id}/size";
	LegacyIsElementDisplayed => "legacyIsElementDisplayed", Get, "/session/{session id}/element/{element id}/displayed";
	LegacyElementSubmit => "legacyElementSubmit", Post, "/session/{session id}/element/{element id}/submit";
	LegacyMoveTo => "legacyMoveTo", Post, "/session/{session id}/moveto";
	LegacyClick => "legacyClick", Post, "/session/{session id}/click";
	LegacyDoubleClick => "legacyDoubleClick", Post, "/session/{session id}/doubleclick";
	LegacyButtonDown => "legacyButtonDown", Post, "/session/{session id}/buttondown";
	LegacyButtonUp => "legacyButtonUp", Post, "/session/{session id}/buttonup";
	LegacyGetLog => "legacyGetLog", Post, "/session/{session id}/log";
}

impl Command {
	pub fn method(self) -> Method {
		self.spec().0
	}

	pub fn path_template(self) -> &'static str {
		self.spec().1
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when parsing a command name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown command name: {}", self.0)
	}
}

impl std::error::Error for UnknownCommand {}

/// Values substituted into a path template.
///
/// Placeholders without a value render as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathArgs<'a> {
	pub session_id: &'a str,
	pub element_id: &'a str,
	pub shadow_id: &'a str,
	pub name: &'a str,
}

impl<'a> PathArgs<'a> {
	/// Arguments for a session-scoped command.
	pub fn session(session_id: &'a str) -> Self {
		Self {
			session_id,
			..Self::default()
		}
	}

	pub fn element(mut self, element_id: &'a str) -> Self {
		self.element_id = element_id;
		self
	}

	pub fn shadow(mut self, shadow_id: &'a str) -> Self {
		self.shadow_id = shadow_id;
		self
	}

	pub fn name(mut self, name: &'a str) -> Self {
		self.name = name;
		self
	}

	/// Substitutes the placeholders of `template`.
	///
	/// Each value is percent-encoded as a single path segment, so `/`, `?`
	/// and `#` inside a value never change the addressed resource.
	pub fn render(&self, template: &str) -> String {
		template
			.replace("{session id}", &urlencoding::encode(self.session_id))
			.replace("{element id}", &urlencoding::encode(self.element_id))
			.replace("{shadow id}", &urlencoding::encode(self.shadow_id))
			.replace("{name}", &urlencoding::encode(self.name))
	}
}
