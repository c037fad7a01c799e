use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

pub fn init_logging(verbosity: u8) {
	// 0 = errors only
	// 1 (-v) = info for the CLI, negotiation steps from the client
	// 2 (-vv) = debug for everything
	// 3+ (-vvv) = every request and reply on the wire
	let filter = filter_for(verbosity);

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.compact()
		.init();
}

fn filter_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "error",
		1 => "info,wd=debug",
		2 => "debug",
		_ => "debug,wd::wire=trace",
	}
}
