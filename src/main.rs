mod config;
mod error;
mod report;
mod summary;

use clap::Parser;
use config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    if args.verbose && !args.ignored.is_empty() {
        eprintln!("Ignoring arguments: {}", args.ignored.join(" "));
    }

    let config = Config::from_args(args);

    let result = summary::run(&config, &mut std::io::stdout().lock());

    // Failures are reported on stdout and the process still exits 0.
    if let Err(e) = result {
        summary::report_failure(&e, &mut std::io::stdout().lock());
    }
}
