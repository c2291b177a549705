//! Nyay Saathi CLI - Parse model answers about court verdicts.

use clap::Parser;
use nyay_cli::cli::{ConfigAction, ConfigArgs};
use nyay_cli::commands;
use nyay_cli::{logging, Cli, Command, Config, Formatter};
use nyay_verdicts::VerdictParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> nyay_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    // An unreadable file must not block rewriting it
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(&config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Parse(args) => {
            let parser = VerdictParser::new(config.parser.clone())?;
            commands::execute_parse(args, &parser, &formatter)?;
        }
        Command::Sanitize(args) => {
            commands::execute_sanitize(args)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
