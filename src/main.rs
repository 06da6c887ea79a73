use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;

use seoprompt::cli::root::{exit_code, EXIT_INTERRUPTED, EXIT_MISSING_INPUT};
use seoprompt::cli::{Args, RootCommand};

fn default_log_level(args: &Args) -> &'static str {
    match (args.debug, args.verbosity) {
        (true, _) | (_, 2..) => "debug",
        (_, 1) => "info",
        _ => "warn",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(&args)),
    )
    .init();

    // Handle Ctrl+C gracefully
    let result = tokio::select! {
        result = RootCommand::execute(args) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted by user");
            std::process::exit(EXIT_INTERRUPTED);
        }
    };

    if let Err(e) = &result {
        let code = exit_code(&result);
        // Blank fields were already reported by the generate command.
        if code != EXIT_MISSING_INPUT {
            eprintln!("Error: {:?}", e);
        }
        std::process::exit(code);
    }
    Ok(())
}
