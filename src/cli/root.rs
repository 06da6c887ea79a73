use anyhow::Result;

use seoprompt_core::ValidationError;

use crate::cli::args::{validate_generate_args, Args, Commands, GenerateArgs};
use crate::cli::commands::{run_config_command, run_generate_command};

/// Process exit statuses.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// A required form field was blank.
pub const EXIT_MISSING_INPUT: i32 = 2;
pub const EXIT_INTERRUPTED: i32 = 130;

/// Map the outcome of a command to the process exit status.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) if e.downcast_ref::<ValidationError>().is_some() => EXIT_MISSING_INPUT,
        Err(_) => EXIT_FAILURE,
    }
}

pub struct RootCommand;

impl RootCommand {
    pub async fn execute(args: Args) -> Result<()> {
        log::debug!("seoprompt v{}", env!("CARGO_PKG_VERSION"));

        match &args.command {
            Commands::Generate {
                source,
                source_file,
                audience,
                keyword,
                tone,
                output_dir,
                format,
                file_stem,
                json,
                quiet,
            } => {
                let generate_args = GenerateArgs {
                    source: source.clone(),
                    source_file: source_file.clone(),
                    audience: audience.clone(),
                    keyword: keyword.clone(),
                    tone: tone.clone(),
                    output_dir: output_dir.clone(),
                    format: format.clone(),
                    file_stem: file_stem.clone(),
                    json: *json,
                    quiet: *quiet,
                    verbosity: args.verbosity,
                    debug: args.debug,
                    config: args.config.clone(),
                };

                validate_generate_args(&generate_args)?;
                run_generate_command(generate_args).await
            }
            Commands::Config { init } => run_config_command(args.config.as_deref(), *init).await,
        }
    }
}
