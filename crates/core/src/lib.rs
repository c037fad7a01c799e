//! WebDriver client - session negotiation, command dispatch and reply decoding
//!
//! This crate drives a remote browser through the HTTP+JSON WebDriver
//! protocol. It speaks both the legacy JSON wire protocol and W3C
//! WebDriver, picking the dialect when the session is created:
//!
//! - **Dispatch**: Abstract commands rendered into HTTP requests
//! - **Decoding**: Replies classified into values or one [`Error`]
//! - **Negotiation**: Capability payloads tried newest first
//! - **Shims**: Per-operation branches where the dialects differ
//! - **Waiting**: Blocking condition polling
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Session   │  Operations, dialect shims, Element handles
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Dispatcher  │  Command table lookup, path rendering
//! │  ┌────────┐ │
//! │  │Decoder │ │  Error classification
//! │  └────────┘ │
//! └──────┬──────┘
//!        │ Transport trait
//! ┌──────▼──────┐
//! │  reqwest    │  Blocking HTTP
//! └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use wd::{By, Capabilities, Config, Session};
//!
//! let mut session = Session::connect(Config::default(), Capabilities::browser("chrome"))?;
//! session.get("https://example.com")?;
//! let heading = session.find_element(&By::css("h1"))?.text()?;
//! session.quit()?;
//! ```

pub mod config;
pub mod decoder;
pub mod dispatcher;
pub mod element;
pub mod error;
pub mod negotiate;
pub mod session;
pub mod transport;
pub mod wait;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root
pub use config::{Config, DEFAULT_URL_PREFIX, DEFAULT_WAIT_INTERVAL, DEFAULT_WAIT_TIMEOUT};
pub use dispatcher::{Dispatcher, masked_url};
pub use element::{Element, ShadowRoot};
pub use error::{Error, RemoteError, Result};
pub use negotiate::{CapabilityAttempt, Dialect, parse_version};
pub use session::{FrameTarget, Session};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
pub use wd_protocol::{
	By, Capabilities, ChromeOptions, Cookie, FirefoxOptions, KeyAction, LogEntry, LogType, MouseButton,
	NewWindow, Orientation, Point, PointerAction, PointerMoveOrigin, PointerType, PrintOptions, Rect, SameSite, Size,
	Status, Timeouts, WindowKind, WindowRect, keys,
};
