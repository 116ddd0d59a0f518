use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wingman_core::cli::{self, Cli};
use wingman_core::exit::WingmanExit;

fn main() -> WingmanExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(WingmanExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            WingmanExit::Error
        }
    }
}

/// Logs go to stderr so `map --json` and `prompt` output stay clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "wingman_core=debug" } else { "wingman_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
