//! JSON output on stdout.

use std::io::Write;

use serde_json::Value;

/// Writes `value` as pretty JSON followed by a newline.
pub fn print_json(value: &Value) -> anyhow::Result<()> {
	let mut stdout = std::io::stdout().lock();
	serde_json::to_writer_pretty(&mut stdout, value)?;
	writeln!(stdout)?;
	Ok(())
}
