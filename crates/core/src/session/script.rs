//! Script execution methods for [`Session`].

use serde_json::{Value, json};
use wd_protocol::Command;

use super::Session;
use crate::decoder;
use crate::error::Result;

impl Session {
	/// Runs `script` as the body of a function called with `args` and
	/// returns its result.
	///
	/// Elements can be passed by serializing them with
	/// `serde_json::to_value(&element)`.
	pub fn execute_script(&self, script: &str, args: &[Value]) -> Result<Value> {
		decoder::value(&self.execute_script_raw(script, args)?)
	}

	/// Runs `script` asynchronously; it signals completion by calling the
	/// callback passed as its last argument.
	pub fn execute_script_async(&self, script: &str, args: &[Value]) -> Result<Value> {
		decoder::value(&self.execute_script_async_raw(script, args)?)
	}

	/// Like [`execute_script`](Self::execute_script), returning the raw reply.
	pub fn execute_script_raw(&self, script: &str, args: &[Value]) -> Result<Vec<u8>> {
		let command = if self.is_modern() {
			Command::ExecuteScript
		} else {
			Command::LegacyExecuteScript
		};
		self.run_script(command, script, args)
	}

	pub fn execute_script_async_raw(&self, script: &str, args: &[Value]) -> Result<Vec<u8>> {
		let command = if self.is_modern() {
			Command::ExecuteAsyncScript
		} else {
			Command::LegacyExecuteAsyncScript
		};
		self.run_script(command, script, args)
	}

	fn run_script(&self, command: Command, script: &str, args: &[Value]) -> Result<Vec<u8>> {
		let body = json!({ "script": script, "args": args });
		self.execute(command, &self.args()?, Some(body))
	}
}
