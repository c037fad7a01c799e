mod eval;
mod probe;
mod status;
mod title;

use anyhow::Context;
use tracing::{info, warn};
use wd::Session;

use crate::cli::{Cli, Commands, SessionCommand};
use crate::output::print_json;

pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
	let config = cli.config();
	let capabilities = cli.capabilities();

	let report = match cli.command {
		Commands::Status => status::execute(config)?,
		Commands::Session(command) => {
			let mut session = Session::connect(config, capabilities).with_context(|| {
				format!("creating a {} session at {}", cli.browser, wd::masked_url(&cli.url))
			})?;
			info!(id = session.id(), dialect = %session.dialect(), "session created");
			let outcome = run_in_session(&session, command);
			if let Err(err) = session.quit() {
				warn!(error = %err, "failed to quit session");
			}
			outcome?
		}
	};

	print_json(&report)
}

fn run_in_session(session: &Session, command: SessionCommand) -> anyhow::Result<serde_json::Value> {
	match command {
		SessionCommand::Probe => probe::execute(session),
		SessionCommand::Title { url } => title::execute(session, &url),
		SessionCommand::Eval { url, script } => eval::execute(session, &url, &script),
	}
}

fn open(session: &Session, url: &str) -> anyhow::Result<()> {
	session.get(url).with_context(|| format!("navigating to {url}"))
}
