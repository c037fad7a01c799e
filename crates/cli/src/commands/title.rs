use serde_json::{Value, json};
use wd::Session;

pub fn execute(session: &Session, url: &str) -> anyhow::Result<Value> {
	super::open(session, url)?;
	let title = session.title()?;
	Ok(json!({ "url": session.current_url()?, "title": title }))
}
