use serde_json::{Value, json};
use wd::{Config, Dispatcher};

pub fn execute(config: Config) -> anyhow::Result<Value> {
	let status = Dispatcher::new(config)?.status()?;
	Ok(json!({
		"ready": status.ready,
		"message": status.message,
		"build": status.build,
		"os": status.os,
	}))
}
