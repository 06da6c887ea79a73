use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file merged over the user and project configs
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the SEO blog prompt from the four form fields
    Generate {
        /// Source content (원문 내용)
        #[arg(short, long, conflicts_with = "source_file")]
        source: Option<String>,

        /// Read source content from a file, or "-" for stdin
        #[arg(long)]
        source_file: Option<PathBuf>,

        /// Target audience (타겟 독자)
        #[arg(short, long)]
        audience: Option<String>,

        /// Target keyword (목표 키워드); left blank, the model is asked to recommend one
        #[arg(short, long)]
        keyword: Option<String>,

        /// Tone and manner (톤앤매너)
        #[arg(short, long)]
        tone: Option<String>,

        /// Directory the download files are written into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Download files to write: both, md, txt or none
        #[arg(short, long)]
        format: Option<String>,

        /// File name for the downloads, without extension
        #[arg(long)]
        file_stem: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Print only the prompt text
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the default user config if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub source: Option<String>,
    pub source_file: Option<PathBuf>,
    pub audience: Option<String>,
    pub keyword: Option<String>,
    pub tone: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<String>,
    pub file_stem: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub verbosity: u8,
    pub debug: bool,
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Whether source content should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        match (&self.source, &self.source_file) {
            (Some(_), _) => false,
            (None, Some(path)) => path.as_os_str() == "-",
            (None, None) => true,
        }
    }
}

pub fn validate_generate_args(args: &GenerateArgs) -> Result<()> {
    if let Some(path) = &args.source_file {
        if path.as_os_str() != "-" && !path.is_file() {
            return Err(anyhow::anyhow!(
                "Source file not found: {}",
                path.display()
            ));
        }
    }

    if args.json && args.quiet {
        return Err(anyhow::anyhow!("--json and --quiet cannot be combined"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "seoprompt",
            "generate",
            "--source",
            "본문",
            "--audience",
            "독자",
            "--tone",
            "어조",
            "--format",
            "md",
        ])
        .unwrap();

        match args.command {
            Commands::Generate {
                source,
                keyword,
                format,
                ..
            } => {
                assert_eq!(source.as_deref(), Some("본문"));
                assert_eq!(keyword, None);
                assert_eq!(format.as_deref(), Some("md"));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_source_conflicts_with_source_file() {
        let result = Args::try_parse_from([
            "seoprompt",
            "generate",
            "--source",
            "a",
            "--source-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reads_stdin() {
        let mut args = GenerateArgs::default();
        assert!(args.reads_stdin());

        args.source_file = Some(PathBuf::from("-"));
        assert!(args.reads_stdin());

        args.source_file = Some(PathBuf::from("draft.txt"));
        assert!(!args.reads_stdin());

        args.source = Some("본문".to_string());
        args.source_file = None;
        assert!(!args.reads_stdin());
    }

    #[test]
    fn test_validate_generate_args() {
        let args = GenerateArgs {
            json: true,
            quiet: true,
            ..GenerateArgs::default()
        };
        assert!(validate_generate_args(&args).is_err());

        let missing = GenerateArgs {
            source_file: Some(PathBuf::from("/nonexistent/draft.txt")),
            ..GenerateArgs::default()
        };
        assert!(validate_generate_args(&missing).is_err());

        assert!(validate_generate_args(&GenerateArgs::default()).is_ok());
    }
}
