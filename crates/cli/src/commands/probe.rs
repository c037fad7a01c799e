use serde_json::{Value, json};
use wd::Session;

/// Negotiated session facts, including the capabilities the remote end returned.
pub fn execute(session: &Session) -> anyhow::Result<Value> {
	Ok(json!({
		"sessionId": session.id(),
		"dialect": session.dialect().as_str(),
		"browser": session.browser(),
		"version": session.browser_version().map(ToString::to_string),
		"capabilities": session.negotiated_capabilities(),
	}))
}
