//! Window management methods for [`Session`].
//!
//! The legacy dialect addresses any window by handle in the path. W3C
//! remote ends only act on the current window, so operations on another
//! window switch to it first and switch back afterwards.

use serde_json::json;
use tracing::debug;
use wd_protocol::{Command, NewWindow, WindowKind, WindowRect};

use super::Session;
use crate::error::Result;

/// Path segment addressing the current window in the legacy dialect.
const CURRENT_WINDOW: &str = "current";

impl Session {
	/// Handle of the current window.
	pub fn window_handle(&self) -> Result<String> {
		let handle: String = self.query_required(Command::GetWindowHandle)?;
		*self.current_window.lock() = Some(handle.clone());
		Ok(handle)
	}

	pub fn window_handles(&self) -> Result<Vec<String>> {
		self.query_required(Command::GetWindowHandles)
	}

	/// Makes `handle` the current window.
	pub fn switch_window(&self, handle: &str) -> Result<()> {
		let body = if self.is_modern() {
			json!({ "handle": handle })
		} else {
			json!({ "name": handle })
		};
		self.void(Command::SwitchToWindow, Some(body))?;
		*self.current_window.lock() = Some(handle.to_string());
		Ok(())
	}

	/// Opens a new tab or window without switching to it.
	pub fn new_window(&self, kind: WindowKind) -> Result<NewWindow> {
		let reply = self.execute(Command::NewWindow, &self.args()?, Some(json!({ "type": kind })))?;
		crate::decoder::required_value(&reply)
	}

	/// Closes the current window.
	pub fn close(&self) -> Result<()> {
		self.void(Command::CloseWindow, None)?;
		*self.current_window.lock() = None;
		Ok(())
	}

	/// Closes the window `handle`, keeping the current window if it is a
	/// different one.
	pub fn close_window(&self, handle: &str) -> Result<()> {
		self.on_window(Some(handle), || self.close())
	}

	/// Maximizes `handle`, or the current window when `None`.
	///
	/// On W3C remote ends another window is maximized by switching to it,
	/// maximizing and switching back. The window to return to comes from the
	/// last [`switch_window`](Self::switch_window) or
	/// [`window_handle`](Self::window_handle); without one, a `GET window`
	/// request precedes the switch. The same applies to
	/// [`minimize_window`](Self::minimize_window),
	/// [`resize_window`](Self::resize_window) and
	/// [`close_window`](Self::close_window).
	pub fn maximize_window(&self, handle: Option<&str>) -> Result<()> {
		if !self.is_modern() {
			return self.legacy_window(Command::LegacyMaximizeWindow, handle, None);
		}
		self.on_window(handle, || self.void(Command::MaximizeWindow, None))
	}

	pub fn minimize_window(&self, handle: Option<&str>) -> Result<()> {
		if !self.is_modern() {
			return self.legacy_window(Command::LegacyMinimizeWindow, handle, None);
		}
		self.on_window(handle, || self.void(Command::MinimizeWindow, None))
	}

	pub fn resize_window(&self, handle: Option<&str>, width: u32, height: u32) -> Result<()> {
		if !self.is_modern() {
			let body = json!({ "width": width, "height": height });
			return self.legacy_window(Command::LegacySetWindowSize, handle, Some(body));
		}
		let body = json!({ "width": f64::from(width), "height": f64::from(height) });
		self.on_window(handle, || self.void(Command::SetWindowRect, Some(body)))
	}

	/// Makes the current window fill the screen. W3C only.
	pub fn fullscreen_window(&self) -> Result<()> {
		self.void(Command::FullscreenWindow, None)
	}

	pub fn window_rect(&self) -> Result<WindowRect> {
		self.query_required(Command::GetWindowRect)
	}

	/// Moves and resizes the current window, returning the resulting rect.
	pub fn set_window_rect(&self, rect: WindowRect) -> Result<WindowRect> {
		let reply = self.execute(Command::SetWindowRect, &self.args()?, Some(serde_json::to_value(rect)?))?;
		crate::decoder::required_value(&reply)
	}

	/// Current window handle, from the last switch if there was one.
	fn cached_window_handle(&self) -> Result<String> {
		let cached = self.current_window.lock().clone();
		match cached {
			Some(handle) => Ok(handle),
			None => self.window_handle(),
		}
	}

	/// Runs `op` with `handle` as the current window.
	///
	/// The previous window is restored even if `op` fails; an error from
	/// `op` takes precedence over one from restoring.
	fn on_window<T>(&self, handle: Option<&str>, op: impl FnOnce() -> Result<T>) -> Result<T> {
		let Some(target) = handle.filter(|h| !h.is_empty()) else {
			return op();
		};
		let start = self.cached_window_handle()?;
		if start == target {
			return op();
		}

		debug!(from = %start, to = %target, "switching window temporarily");
		self.switch_window(target)?;
		let outcome = op();
		let restored = self.switch_window(&start);
		let value = outcome?;
		restored?;
		Ok(value)
	}

	fn legacy_window(&self, command: Command, handle: Option<&str>, body: Option<serde_json::Value>) -> Result<()> {
		let handle = handle.filter(|h| !h.is_empty()).unwrap_or(CURRENT_WINDOW);
		let args = self.args()?.name(handle);
		self.execute(command, &args, body).map(drop)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use wd_protocol::{WindowKind, WindowRect};

	use crate::session::fixtures;
	use crate::testing::MockTransport;

	#[test]
	fn test_maximize_other_window_switches_and_restores() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!(null));
		session.switch_window("tab-1").unwrap();
		mock.clear_requests();

		for _ in 0..3 {
			mock.push_value(json!(null));
		}
		session.maximize_window(Some("tab-2")).unwrap();

		assert_eq!(
			mock.paths(),
			[
				"POST /session/sid/window",
				"POST /session/sid/window/maximize",
				"POST /session/sid/window",
			]
		);
		let requests = mock.requests();
		assert_eq!(requests[0].json(), Some(json!({"handle": "tab-2"})));
		assert_eq!(requests[1].json(), Some(json!({})));
		assert_eq!(requests[2].json(), Some(json!({"handle": "tab-1"})));
	}

	#[test]
	fn test_unknown_current_window_is_queried_once() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("tab-1"));
		for _ in 0..6 {
			mock.push_value(json!(null));
		}

		session.maximize_window(Some("tab-2")).unwrap();
		session.maximize_window(Some("tab-2")).unwrap();

		let paths = mock.paths();
		assert_eq!(paths.len(), 7);
		assert_eq!(paths[0], "GET /session/sid/window");
		assert_eq!(
			paths[4..],
			[
				"POST /session/sid/window",
				"POST /session/sid/window/maximize",
				"POST /session/sid/window",
			]
		);
		assert_eq!(mock.last_request().json(), Some(json!({"handle": "tab-1"})));
	}

	#[test]
	fn test_window_restored_after_failure() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("tab-1"));
		mock.push_value(json!(null));
		mock.push_error(500, "unsupported operation", "cannot minimize");
		mock.push_value(json!(null));

		let err = session.minimize_window(Some("tab-2")).unwrap_err();
		assert_eq!(err.kind(), Some("unsupported operation"));
		assert_eq!(
			mock.paths(),
			[
				"GET /session/sid/window",
				"POST /session/sid/window",
				"POST /session/sid/window/minimize",
				"POST /session/sid/window",
			]
		);
		assert_eq!(mock.last_request().json(), Some(json!({"handle": "tab-1"})));
	}

	#[test]
	fn test_current_window_needs_no_switch() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("tab-1"));
		mock.push_value(json!(null));
		mock.push_value(json!(null));

		session.maximize_window(Some("tab-1")).unwrap();
		session.maximize_window(None).unwrap();
		assert_eq!(
			mock.paths(),
			[
				"GET /session/sid/window",
				"POST /session/sid/window/maximize",
				"POST /session/sid/window/maximize",
			]
		);
	}

	#[test]
	fn test_legacy_window_paths() {
		let mock = MockTransport::new();
		let session = fixtures::legacy(&mock);
		for _ in 0..4 {
			mock.push_value(json!(null));
		}

		session.maximize_window(Some("w-7")).unwrap();
		session.minimize_window(None).unwrap();
		session.resize_window(Some("w-7"), 800, 600).unwrap();
		session.switch_window("w-8").unwrap();

		assert_eq!(
			mock.paths(),
			[
				"POST /session/sid/window/w-7/maximize",
				"POST /session/sid/window/current/minimize",
				"POST /session/sid/window/w-7/size",
				"POST /session/sid/window",
			]
		);
		let requests = mock.requests();
		assert_eq!(requests[2].json(), Some(json!({"width": 800, "height": 600})));
		assert_eq!(requests[3].json(), Some(json!({"name": "w-8"})));
	}

	#[test]
	fn test_modern_resize_sends_floats() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!(null));

		session.resize_window(None, 800, 600).unwrap();
		let body = mock.last_request().json().unwrap();
		assert_eq!(mock.paths(), ["POST /session/sid/window/rect"]);
		assert!(body["width"].is_f64());
		assert_eq!(body["height"].as_f64(), Some(600.0));
	}

	#[test]
	fn test_close_other_window() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!("main"));
		mock.push_value(json!(null));
		mock.push_value(json!(["main"]));
		mock.push_value(json!(null));

		session.close_window("popup").unwrap();
		assert_eq!(
			mock.paths(),
			[
				"GET /session/sid/window",
				"POST /session/sid/window",
				"DELETE /session/sid/window",
				"POST /session/sid/window",
			]
		);
	}

	#[test]
	fn test_window_queries() {
		let mock = MockTransport::new();
		let session = fixtures::modern(&mock);
		mock.push_value(json!(["a", "b"]));
		mock.push_value(json!({"handle": "c", "type": "tab"}));
		mock.push_value(json!({"x": 0, "y": 10, "width": 1024, "height": 768}));
		mock.push_value(json!({"x": 5.0, "y": 5.0, "width": 640.0, "height": 480.0}));

		assert_eq!(session.window_handles().unwrap(), ["a", "b"]);
		let created = session.new_window(WindowKind::Tab).unwrap();
		assert_eq!(created.handle, "c");
		assert_eq!(mock.last_request().json(), Some(json!({"type": "tab"})));
		assert_eq!(session.window_rect().unwrap().width, 1024.0);

		let rect = WindowRect {
			x: 5.0,
			y: 5.0,
			width: 640.0,
			height: 480.0,
		};
		assert_eq!(session.set_window_rect(rect).unwrap(), rect);
	}
}
