use anyhow::Context;
use serde_json::{Value, json};
use wd::Session;

pub fn execute(session: &Session, url: &str, script: &str) -> anyhow::Result<Value> {
	super::open(session, url)?;
	let result = session
		.execute_script(script, &[])
		.context("javascript evaluation failed")?;
	Ok(json!({ "url": url, "result": result }))
}
