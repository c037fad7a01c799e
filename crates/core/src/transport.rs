//! HTTP transport layer.
//!
//! The [`Transport`] trait is the seam between the dispatcher and the
//! network. [`HttpTransport`] implements it with a blocking `reqwest`
//! client; tests substitute an in-memory implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use wd_protocol::Method;

use crate::error::Result;

/// JSON media type expected on both sides of the wire.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully rendered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
	pub method: Method,
	pub url: String,
	pub body: Option<Vec<u8>>,
}

/// Raw reply of the remote end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	/// Value of the `Content-Type` header, if present
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}

/// Sends one request and returns the raw reply.
///
/// Implementations are shared between sessions and must be safe for
/// concurrent use.
pub trait Transport: Send + Sync {
	fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::blocking::Client,
}

impl HttpTransport {
	pub fn new(timeout: Option<Duration>) -> Result<Self> {
		let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
		Ok(Self { client })
	}

	/// Wraps an already configured client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self { client }
	}
}

impl Transport for HttpTransport {
	fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
		let method = match request.method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Delete => reqwest::Method::DELETE,
		};

		let mut builder = self
			.client
			.request(method, &request.url)
			.header(ACCEPT, JSON_CONTENT_TYPE);
		if let Some(body) = request.body {
			builder = builder
				.header(CONTENT_TYPE, "application/json;charset=utf-8")
				.body(body);
		}

		let response = builder.send()?;
		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(str::to_string);
		let body = response.bytes()?.to_vec();

		Ok(HttpResponse {
			status,
			content_type,
			body,
		})
	}
}
