//! [`Session`] handle representing one remote browser session.

mod alert;
mod capture;
mod cookies;
mod frame;
mod input;
mod navigation;
mod script;
mod timeouts;
mod window;

use std::time::Duration;

use parking_lot::Mutex;
use semver::Version;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;
use wd_protocol::{ActionSource, Capabilities, Command, Method, PathArgs, Status};

pub use self::frame::FrameTarget;
use crate::config::Config;
use crate::decoder;
use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};
use crate::negotiate::{self, Dialect, Negotiated};
use crate::wait;

/// A negotiated session on a remote end.
///
/// Created by [`Session::new`]. The dialect, browser name and version are
/// fixed for the lifetime of the session id. Operations take `&self`;
/// only [`quit`](Self::quit) and [`reconnect`](Self::reconnect) change the
/// id, so outstanding [`Element`](crate::Element) borrows never outlive it.
#[derive(Debug)]
pub struct Session {
	dispatcher: Dispatcher,
	/// Empty once the session has been deleted
	id: String,
	requested: Capabilities,
	returned: Map<String, Value>,
	dialect: Dialect,
	browser: String,
	version: Option<Version>,
	/// Input sources queued by `store_*_actions`
	actions: Mutex<Vec<ActionSource>>,
	/// Handle of the current window, when known
	current_window: Mutex<Option<String>>,
}

impl Session {
	/// Negotiates a new session with the remote end behind `dispatcher`.
	pub fn new(dispatcher: Dispatcher, capabilities: Capabilities) -> Result<Self> {
		let negotiated = negotiate::negotiate(&dispatcher, &capabilities)?;
		let mut session = Self {
			dispatcher,
			id: String::new(),
			requested: capabilities,
			returned: Map::new(),
			dialect: Dialect::default(),
			browser: String::new(),
			version: None,
			actions: Mutex::new(Vec::new()),
			current_window: Mutex::new(None),
		};
		session.adopt(negotiated);
		Ok(session)
	}

	/// Connects to [`Config::base_url`] over HTTP and negotiates a session.
	pub fn connect(config: Config, capabilities: Capabilities) -> Result<Self> {
		Self::new(Dispatcher::new(config)?, capabilities)
	}

	fn adopt(&mut self, negotiated: Negotiated) {
		self.id = negotiated.id;
		self.dialect = negotiated.dialect;
		self.browser = negotiated.browser;
		self.version = negotiated.version;
		self.returned = negotiated.capabilities;
		self.actions.get_mut().clear();
		*self.current_window.get_mut() = None;
	}

	/// Session id, empty after [`quit`](Self::quit).
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn dialect(&self) -> Dialect {
		self.dialect
	}

	pub fn is_modern(&self) -> bool {
		self.dialect.is_modern()
	}

	/// Browser name as requested, or as reported by the remote end.
	pub fn browser(&self) -> &str {
		&self.browser
	}

	pub fn browser_version(&self) -> Option<&Version> {
		self.version.as_ref()
	}

	/// Capabilities the session was requested with.
	pub fn requested_capabilities(&self) -> &Capabilities {
		&self.requested
	}

	/// Capabilities reported when the session was created.
	pub fn negotiated_capabilities(&self) -> &Map<String, Value> {
		&self.returned
	}

	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	pub fn config(&self) -> &Config {
		self.dispatcher.config()
	}

	/// Deletes the remote session.
	///
	/// Does nothing if the session is already closed. On success the id is
	/// cleared and further commands fail with [`Error::SessionClosed`].
	pub fn quit(&mut self) -> Result<()> {
		if self.id.is_empty() {
			return Ok(());
		}
		self.execute(Command::DeleteSession, &PathArgs::session(&self.id), None)?;
		debug!(session_id = %self.id, "session deleted");
		self.id.clear();
		Ok(())
	}

	/// Negotiates a fresh session with the original capabilities.
	///
	/// A live session is deleted first; if that fails the session is kept
	/// and no new one is created.
	pub fn reconnect(&mut self) -> Result<()> {
		self.quit()?;
		let negotiated = negotiate::negotiate(&self.dispatcher, &self.requested)?;
		self.adopt(negotiated);
		Ok(())
	}

	/// Queries the remote end for the capabilities of this session.
	pub fn capabilities(&self) -> Result<Map<String, Value>> {
		self.query(Command::GetCapabilities)
	}

	/// Readiness of the remote end.
	pub fn status(&self) -> Result<Status> {
		self.dispatcher.status()
	}

	/// Polls `condition` with the configured timeout and interval.
	pub fn wait<F>(&self, condition: F) -> Result<()>
	where
		F: FnMut(&Session) -> Result<bool>,
	{
		let config = self.config();
		self.wait_with_timeout_and_interval(condition, config.wait_timeout, config.wait_interval)
	}

	pub fn wait_with_timeout<F>(&self, condition: F, timeout: Duration) -> Result<()>
	where
		F: FnMut(&Session) -> Result<bool>,
	{
		self.wait_with_timeout_and_interval(condition, timeout, self.config().wait_interval)
	}

	pub fn wait_with_timeout_and_interval<F>(&self, mut condition: F, timeout: Duration, interval: Duration) -> Result<()>
	where
		F: FnMut(&Session) -> Result<bool>,
	{
		wait::poll(timeout, interval, || condition(self))
	}

	/// Path arguments of a command scoped to this session.
	pub(crate) fn args(&self) -> Result<PathArgs<'_>> {
		if self.id.is_empty() {
			return Err(Error::SessionClosed);
		}
		Ok(PathArgs::session(&self.id))
	}

	/// Sends `command`. POST commands without a body send `{}`.
	pub(crate) fn execute(&self, command: Command, args: &PathArgs<'_>, body: Option<Value>) -> Result<Vec<u8>> {
		let body = match (command.method(), body) {
			(Method::Post, None) => Some(json!({})),
			(_, body) => body,
		};
		self.dispatcher.execute(command, args, body.as_ref())
	}

	/// Sends a session-scoped command and discards the reply value.
	pub(crate) fn void(&self, command: Command, body: Option<Value>) -> Result<()> {
		self.execute(command, &self.args()?, body).map(drop)
	}

	/// Sends a session-scoped command without body and decodes its value.
	pub(crate) fn query<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
		let reply = self.execute(command, &self.args()?, None)?;
		decoder::value(&reply)
	}

	/// Like [`query`](Self::query), but a null value is an error.
	pub(crate) fn query_required<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
		let reply = self.execute(command, &self.args()?, None)?;
		decoder::required_value(&reply)
	}

	pub(crate) fn is_firefox(&self) -> bool {
		self.browser == "firefox"
	}

	/// Major browser version, zero when unknown.
	pub(crate) fn major_version(&self) -> u64 {
		self.version.as_ref().map_or(0, |v| v.major)
	}
}
