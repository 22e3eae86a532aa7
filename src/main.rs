use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use timereg_prompt::OutputFormat;
use timereg_prompt::commands;
use timereg_prompt::config;
use timereg_prompt::logging;

#[derive(Parser)]
#[command(name = "timereg-segment")]
#[command(about = "Prompt segment showing time tracked by timereg")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[arg(long, global = true, help = "Config file (default: XDG config dir)")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct RenderArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
    #[arg(long, help = "Read this state file instead of the XDG location")]
    state_file: Option<PathBuf>,
    #[arg(long, hide = true, value_parser = parse_now, help = "Override the current time (RFC 3339)")]
    now: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the segment (default)
    Render(RenderArgs),
    /// Print the resolved state file path
    Path {
        #[arg(long, help = "Override the state file")]
        state_file: Option<PathBuf>,
    },
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn parse_now(s: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp '{}', expected RFC 3339", s))?;
    Ok(parsed.with_timezone(&Utc))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Render(cli.render));

    match command {
        Commands::Render(args) => {
            // A broken config must not break the prompt
            let config = config::load(cli.config.as_deref()).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default config");
                config::Config::default()
            });
            commands::render::render(&config, args.state_file.as_deref(), args.format, args.now)?;
        }
        Commands::Path { state_file } => {
            let config = config::load(cli.config.as_deref())?;
            commands::path::path(&config, state_file.as_deref())?;
        }
        Commands::Config(args) => {
            let config = config::load(cli.config.as_deref())?;
            match &args.action {
                ConfigAction::List => commands::config::list(&config)?,
                ConfigAction::Get { key } => commands::config::get(key, &config)?,
            }
        }
    }

    Ok(())
}
