//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::transport::{HttpRequest, HttpResponse, Transport};

pub(crate) const BASE_URL: &str = "http://wd.test";

/// Replays scripted responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
	responses: Arc<Mutex<VecDeque<HttpResponse>>>,
	requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn dispatcher(&self) -> Dispatcher {
		let config = Config::new(BASE_URL)
			.wait_timeout(Duration::from_millis(200))
			.wait_interval(Duration::from_millis(10));
		Dispatcher::with_transport(config, Arc::new(self.clone()))
	}

	pub fn push_raw(&self, status: u16, content_type: &str, body: &str) {
		self.responses.lock().push_back(HttpResponse {
			status,
			content_type: Some(content_type.to_string()),
			body: body.as_bytes().to_vec(),
		});
	}

	pub fn push_json(&self, status: u16, body: Value) {
		self.push_raw(status, "application/json; charset=utf-8", &body.to_string());
	}

	/// Queues a successful W3C reply carrying `value`.
	pub fn push_value(&self, value: Value) {
		self.push_json(200, json!({ "value": value }));
	}

	/// Queues a W3C error reply.
	pub fn push_error(&self, status: u16, kind: &str, message: &str) {
		self.push_json(
			status,
			json!({"value": {"error": kind, "message": message, "stacktrace": ""}}),
		);
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests.lock().clone()
	}

	pub fn last_request(&self) -> HttpRequest {
		self.requests
			.lock()
			.last()
			.cloned()
			.expect("no request was sent")
	}

	/// Path of every request relative to the base URL.
	pub fn paths(&self) -> Vec<String> {
		self.requests
			.lock()
			.iter()
			.map(|r| format!("{} {}", r.method, r.url.trim_start_matches(BASE_URL)))
			.collect()
	}

	pub fn clear_requests(&self) {
		self.requests.lock().clear();
	}
}

impl Transport for MockTransport {
	fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
		self.requests.lock().push(request.clone());
		let response = self
			.responses
			.lock()
			.pop_front()
			.unwrap_or_else(|| panic!("no scripted response for {} {}", request.method, request.url));
		Ok(response)
	}
}

impl HttpRequest {
	/// Decoded request body.
	pub fn json(&self) -> Option<Value> {
		self.body
			.as_deref()
			.map(|b| serde_json::from_slice(b).expect("request body is JSON"))
	}
}
