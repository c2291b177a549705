//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Nyay Saathi CLI - Turn model answers about court verdicts into structured records.
#[derive(Debug, Parser)]
#[command(name = "nyay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NYAY_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (case names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse model output into verdict records
    Parse(ParseArgs),

    /// Print the sanitized form of model output
    Sanitize(InputArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Where to read input text from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// File containing the text
    #[arg(short = 'i', long)]
    pub file: Option<String>,

    /// Read the text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Input is a generator response document: {"text": ..., "sources": [...]}
    #[arg(long)]
    pub json: bool,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_file() {
        let cli = Cli::try_parse_from(["nyay", "parse", "--file", "answer.txt"]).unwrap();
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.input.file.as_deref(), Some("answer.txt"));
                assert!(!args.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["nyay", "sanitize", "--stdin", "-vv", "--format", "json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["nyay", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }
}
