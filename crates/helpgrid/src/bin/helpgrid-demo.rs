//! Demo CLI whose `--help` is rendered by helpgrid.
//!
//! ```text
//! helpgrid-demo --help
//! helpgrid-demo remote add --help --width 60
//! RUST_LOG=helpgrid=debug helpgrid-demo --help --styles styles.yaml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgMatches, Command, CommandFactory, Parser, Subcommand};
use helpgrid::{write_help, HelpConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "helpgrid-demo",
    version,
    about = "Shows off card-style help output",
    disable_help_flag = true,
    disable_help_subcommand = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    /// Number
    #[arg(required = true, value_name = "INT")]
    number: Option<i64>,

    /// Filepath
    #[arg(default_value = "-", value_name = "PATH")]
    filename: String,

    /// Set verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbosity: u8,

    /// Enum example flag (a, b, c)
    #[arg(short, long, value_parser = ["a", "b", "c"], default_value = "a")]
    default: String,

    #[arg(long, default_value = "test")]
    test: String,

    /// Print help
    #[arg(short, long, global = true, action = ArgAction::SetTrue, help_heading = "Help")]
    help: bool,

    /// Maximum help width (defaults to the terminal width)
    #[arg(long, global = true, value_name = "COLUMNS", help_heading = "Help")]
    width: Option<usize>,

    /// YAML file overriding help styles
    #[arg(long, global = true, value_name = "PATH", help_heading = "Help")]
    styles: Option<PathBuf>,

    /// Show BOOL type hints on switches
    #[arg(long, global = true, help_heading = "Help")]
    show_bool_types: bool,

    /// List options after commands
    #[arg(long, global = true, help_heading = "Help")]
    flags_last: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the current state
    Show,
    /// Manage remotes
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[derive(Subcommand, Debug)]
enum RemoteAction {
    /// Add a remote
    Add {
        /// Remote name
        name: String,
        /// Remote URL
        url: String,
    },
    /// Remove a remote
    Remove {
        /// Remote name
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Walks down to the deepest selected subcommand.
fn selected<'a>(
    mut cmd: &'a Command,
    mut matches: &'a ArgMatches,
) -> (&'a Command, &'a ArgMatches) {
    while let Some((name, sub_matches)) = matches.subcommand() {
        match cmd.find_subcommand(name) {
            Some(sub) => {
                cmd = sub;
                matches = sub_matches;
            }
            None => break,
        }
    }
    (cmd, matches)
}

/// Reads a switch from matches that may be incomplete after `ignore_errors`.
fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

fn help_config(matches: &ArgMatches) -> Result<HelpConfig> {
    let config = HelpConfig {
        width: matches.get_one::<usize>("width").copied(),
        show_bool_types: flag(matches, "show_bool_types"),
        flags_last: flag(matches, "flags_last"),
        default_command: Some("show".to_string()),
        ..Default::default()
    };

    match matches.get_one::<PathBuf>("styles") {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read styles from {}", path.display()))?;
            Ok(config.with_styles_yaml(&yaml)?)
        }
        None => Ok(config),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let mut cmd = Cli::command();
    cmd.build();

    // Look for --help before validating, so required arguments don't block it
    let matches = cmd.clone().ignore_errors(true).get_matches();
    let (target, target_matches) = selected(&cmd, &matches);
    if flag(target_matches, "help") {
        debug!(command = target.get_name(), "rendering help");
        let config = help_config(target_matches)?;
        write_help(target, Some(config), std::io::stdout().lock())?;
        return Ok(());
    }

    let cli = Cli::parse();
    info!(?cli, "parsed arguments");

    match cli.command {
        Some(Commands::Show) => println!("nothing to show"),
        Some(Commands::Remote { action }) => match action {
            RemoteAction::Add { name, url } => println!("added remote {name} -> {url}"),
            RemoteAction::Remove { name } => println!("removed remote {name}"),
        },
        None => println!(
            "number={} filename={} verbosity={} default={} test={}",
            cli.number.unwrap_or_default(),
            cli.filename,
            cli.verbosity,
            cli.default,
            cli.test
        ),
    }
    Ok(())
}
