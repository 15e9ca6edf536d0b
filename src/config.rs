use clap::Parser;
use std::path::PathBuf;

/// Report file read from the working directory.
pub const INPUT_PATH: &str = "lint.json";

#[derive(Parser, Debug)]
#[command(
    name = "lint-summary",
    version,
    about = "Print error and warning counts for every file with errors in lint.json"
)]
pub struct CliArgs {
    /// Print diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Self {
        Config {
            verbose: args.verbose,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(INPUT_PATH),
            verbose: false,
        }
    }
}
