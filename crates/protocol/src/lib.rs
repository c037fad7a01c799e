//! Wire types for the WebDriver HTTP protocol.
//!
//! This crate contains the serde-serializable types exchanged with a
//! WebDriver remote end. Two generations of the protocol are covered: the
//! legacy JSON wire protocol (numeric status codes, `ELEMENT` references)
//! and W3C WebDriver.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No I/O, only serialization and small pure helpers
//! - **1:1 with the wire**: Field names match what remote ends send
//! - **Dialect-aware**: Where the dialects differ, both encodings are accepted
//!
//! The dispatch engine built on top of these types lives in `wd-rs`.

pub mod actions;
pub mod capabilities;
pub mod command;
pub mod cookie;
pub mod element;
pub mod keys;
pub mod locator;
pub mod types;

pub use actions::*;
pub use capabilities::*;
pub use command::*;
pub use cookie::*;
pub use element::*;
pub use locator::*;
pub use types::*;
