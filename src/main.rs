use clap::{Args, Parser, Subcommand, builder::styling};
use eyre::Result;
use glue_workflow_clone::cli::{copy_workflow, duplicate_workflow, load_env_file};
use owo_colors::OwoColorize;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Glue Workflow Clone: copy an AWS Glue workflow and its triggers under a new name
#[derive(Parser)]
#[command(name = "glue-clone", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source AWS settings from, if present
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CloneArgs {
    /// Path of the configuration file (JSON, JSON5 or YAML)
    #[arg(short, long)]
    conf: String,

    /// Named AWS profile to use instead of the default
    #[arg(short, long)]
    profile: Option<String>,

    /// Log the renamed workflow instead of deleting or creating anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a workflow from one region to another, renaming through the replacer
    Copy(CloneArgs),

    /// Duplicate a workflow in the same region under a prefixed name
    Duplicate(CloneArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env_loaded = load_env_file(&cli.env)?;

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    if env_loaded {
        log::debug!("Sourced {}", cli.env.bright_black());
    }

    match cli.command {
        Commands::Copy(args) => {
            log::info!(
                "Copying workflow described in {}",
                args.conf.bright_black()
            );
            copy_workflow(&args.conf, args.profile.as_deref(), args.dry_run).await?;
        }
        Commands::Duplicate(args) => {
            log::info!(
                "Duplicating workflow described in {}",
                args.conf.bright_black()
            );
            duplicate_workflow(&args.conf, args.profile.as_deref(), args.dry_run).await?;
        }
    }

    Ok(())
}
