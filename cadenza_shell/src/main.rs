// CLI entry point for cadenza.
//
// Parses arguments (see `cli.rs` for the command list), runs the command and
// prints its page to stdout. Logs go to stderr, filtered by `RUST_LOG`
// (default `cadenza_shell=info`).

use cadenza_shell::cli::{parse_args, run, usage};
use cadenza_shell::error::ShellError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cadenza_shell=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|parsed| run(&parsed));

    match result {
        Ok(output) => print!("{output}"),
        Err(ShellError::Usage(message)) => {
            eprintln!("{message}\n\n{}", usage());
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
