//! Condition polling.

use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::{Error, Result};

/// Evaluates `condition` until it holds.
///
/// The first evaluation happens immediately. Between evaluations the
/// calling thread sleeps for `interval`. Once `timeout` has elapsed since
/// the first evaluation without the condition holding, returns
/// [`Error::Timeout`]. An error from the condition is returned as is.
pub fn poll<F>(timeout: Duration, interval: Duration, mut condition: F) -> Result<()>
where
	F: FnMut() -> Result<bool>,
{
	let start = Instant::now();
	let mut attempts = 0u32;
	loop {
		attempts += 1;
		if condition()? {
			trace!(attempts, elapsed = ?start.elapsed(), "wait condition satisfied");
			return Ok(());
		}

		let elapsed = start.elapsed();
		if elapsed >= timeout {
			trace!(attempts, ?elapsed, "wait condition timed out");
			return Err(Error::Timeout { elapsed });
		}

		thread::sleep(interval);
	}
}
