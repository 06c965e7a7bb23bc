//! chatdeck - Entry Point

use chatdeck::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig,
};
use chatdeck::model::AppError;
use chatdeck::source::detect_data_source;
use chatdeck::state::{AppState, LayoutShell, ThreadMode};
use chatdeck::view::CliArgs;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// chatdeck - terminal chat client mockup
#[derive(Parser, Debug)]
#[command(name = "chatdeck")]
#[command(version)]
#[command(about = "Terminal chat client mockup with a conversation directory, thread and composer")]
pub struct Args {
    /// JSON data file with conversations and messages (built-in sample if omitted)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Start with the directory panel collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Message log sharing: "shared" or "per-conversation"
    #[arg(long, value_name = "MODE")]
    pub thread_mode: Option<ThreadMode>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for settings given on the command line. Flags that were
    /// not passed leave the lower layers alone.
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            sidebar_expanded: self.collapsed.then_some(false),
            thread_mode: self.thread_mode,
            data_file: self.data.clone(),
            mouse: self.no_mouse.then_some(false),
        }
    }
}

/// Resolve configuration: Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.cli_overrides()))
}

/// Everything before the terminal enters raw mode.
fn prepare(args: &Args) -> Result<(AppState, CliArgs), AppError> {
    let config = resolve_config(args)?;

    chatdeck::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let data = detect_data_source(config.data_file.clone()).load()?;
    info!(
        conversations = data.directory.len(),
        messages = data.messages.len(),
        "Chat data loaded"
    );

    let mut app_state = AppState::new(data.directory, data.messages, config.thread_mode);
    app_state.layout = LayoutShell::new(config.sidebar_expanded);

    let cli_args = CliArgs {
        no_color: args.no_color,
        mouse: config.mouse,
    };
    Ok((app_state, cli_args))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (app_state, cli_args) = prepare(&args)?;
    chatdeck::view::run_with_state(app_state, cli_args)?;

    info!("Exited cleanly");
    Ok(())
}
