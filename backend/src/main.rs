#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::processing::processor::run_action_by_id;
use crate::repository::{EmptyVodSource, VodCatalog};
use crate::utils::{init_logger, read_settings};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use shared::error::{upstream_err, PluginError};
use shared::model::{ActionResult, PluginManifest, PluginSettingsDto};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vod2mlib")]
#[command(version)]
#[command(about = "Converts Dispatcharr VODs into a .strm/.nfo media library", long_about = None)]
struct Args {
    /// The settings file (yaml or json)
    #[arg(short = 's', long = "settings")]
    settings_file: Option<PathBuf>,

    /// Json export of the host vod tables
    #[arg(short = 'c', long = "catalog")]
    catalog_file: Option<PathBuf>,

    /// The action to run
    #[arg(short = 'a', long = "action")]
    action: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,

    /// Print the plugin manifest and exit
    #[arg(short = None, long = "manifest", default_value_t = false, default_missing_value = "true")]
    manifest: bool,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => exit!("Failed to serialize output: {err}"),
    }
}

fn print_info() {
    info!("Version: {VERSION}");
    if let Some(bts) = BUILD_TIMESTAMP
        .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()) {
        info!("Build time: {bts}");
    }
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
}

fn load_settings(args: &Args) -> Result<PluginSettingsDto, PluginError> {
    match args.settings_file.as_ref() {
        Some(path) => read_settings(path, true),
        None => Ok(PluginSettingsDto::default()),
    }
}

async fn execute(args: &Args, action: &str, settings: &PluginSettingsDto) -> ActionResult {
    match args.catalog_file.as_ref() {
        Some(path) => match VodCatalog::from_file(path).await {
            Ok(catalog) => run_action_by_id(&catalog, action, settings).await,
            Err(err) => {
                log::error!("{err}");
                upstream_err!("Database error: {err}").into()
            }
        },
        None => run_action_by_id(&EmptyVodSource::default(), action, settings).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if args.manifest {
        print_json(&PluginManifest::default());
        return;
    }

    let settings = load_settings(&args);
    init_logger(args.log_level.as_ref(), settings.as_ref().ok().and_then(|s| s.log_level.as_deref()));
    print_info();

    let Some(action) = args.action.as_deref() else {
        exit!("No action given, use --action <id> or --manifest");
    };

    let result = match settings {
        Ok(settings) => execute(&args, action, &settings).await,
        Err(err) => {
            log::error!("{err}");
            err.into()
        }
    };
    print_json(&result);
    if !result.is_ok() {
        std::process::exit(1);
    }
}
