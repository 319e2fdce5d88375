//! csvcheck CLI
//!
//! Bare invocation (the action entrypoint) validates using `INPUT_*`
//! variables. `csvcheck inventory` runs the inventory demo.

use clap::Parser;

use csvcheck::cli::{init_logging, run, Cli, LogFormat, EXIT_FAILURE};

fn main() {
    let cli = Cli::parse();

    let logging = LogFormat::from_env().and_then(init_logging);
    if let Err(e) = logging {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    let exit_code = run(cli.into_command());
    std::process::exit(exit_code);
}
