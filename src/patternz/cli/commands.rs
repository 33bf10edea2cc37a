//! # CLI Layer
//!
//! One client of the patternz library. This is the only code that:
//! - Parses arguments
//! - Sets up logging
//! - Writes to stdout/stderr
//! - Waits on the terminal for a keypress
//!
//! Everything else is a call into [`PatternzApi`] followed by rendering the
//! returned [`CmdResult`](patternz::api::CmdResult).

use super::render::{print_config, print_messages, print_output};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::{debug, LevelFilter};
use patternz::api::{ConfigAction, PatternzApi};
use patternz::error::{PatternzError, Result};
use patternz::vehicles::VehicleKind;
use std::io::IsTerminal;
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "PATTERNZ_CONFIG_DIR";

struct AppContext {
    api: PatternzApi,
    wait: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Customers { group }) => {
            handle_customers(&ctx, group.as_deref())?;
            wait_for_key(&ctx);
        }
        Some(Commands::Vehicles { only }) => {
            handle_vehicles(&ctx, &only)?;
            wait_for_key(&ctx);
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
        None => {
            handle_customers(&ctx, None)?;
            handle_vehicles(&ctx, &[])?;
            wait_for_key(&ctx);
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    debug!("config dir: {}", config_dir.display());

    let api = PatternzApi::new(config_dir)?;
    let wait = api.settings().pause && !cli.no_wait && std::io::stdin().is_terminal();

    Ok(AppContext { api, wait })
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "patternz", "patternz")
        .ok_or_else(|| PatternzError::Config("Could not determine config dir".into()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

fn handle_customers(ctx: &AppContext, group: Option<&str>) -> Result<()> {
    let result = ctx.api.browse_customers(group)?;
    print_output(&result.output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_vehicles(ctx: &AppContext, kinds: &[VehicleKind]) -> Result<()> {
    let result = ctx.api.assemble_vehicles(kinds)?;
    print_output(&result.output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn wait_for_key(ctx: &AppContext) {
    if !ctx.wait {
        return;
    }
    if let Err(e) = Term::stdout().read_key() {
        debug!("keypress wait skipped: {}", e);
    }
}
