use std::time::Duration;

use clap::{Parser, Subcommand};
use wd::{Capabilities, Config, DEFAULT_URL_PREFIX};

use crate::styles::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "wd")]
#[command(about = "WebDriver CLI - Probe and drive a remote end from the command line")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug, -vvv wire traffic)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Base URL of the remote end
	#[arg(long, global = true, env = "WD_URL", default_value = DEFAULT_URL_PREFIX)]
	pub url: String,

	/// Browser name requested when a session is created
	#[arg(short, long, global = true, default_value = "chrome")]
	pub browser: String,

	/// Per-request HTTP timeout in seconds (0 waits forever)
	#[arg(long, global = true, value_name = "SECS", default_value_t = 60)]
	pub timeout: u64,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
	/// Report whether the remote end is ready
	Status,

	#[command(flatten)]
	Session(SessionCommand),
}

/// Commands run inside a freshly negotiated session.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
	/// Create a session, report the negotiated dialect and capabilities, then quit
	Probe,

	/// Print the title of a page
	Title {
		/// Page to open
		url: String,
	},

	/// Run a script in a page and print its result
	Eval {
		/// Page to open
		url: String,
		/// Function body; `return` a value to print it
		script: String,
	},
}

impl Cli {
	pub fn config(&self) -> Config {
		let config = Config::new(&self.url);
		match self.timeout {
			0 => config,
			secs => config.request_timeout(Duration::from_secs(secs)),
		}
	}

	pub fn capabilities(&self) -> Capabilities {
		Capabilities::browser(&self.browser)
	}
}
