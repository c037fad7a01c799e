use clap::Parser;
use wd_cli::{cli::Cli, commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli) {
		eprintln!("error: {err:#}");
		std::process::exit(1);
	}
}
