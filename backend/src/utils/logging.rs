use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use shared::utils::{PLUGIN_NAME, PLUGIN_VERSION};

const LOG_ENV_VAR: &str = "VOD2MLIB_LOG";
const SEPARATOR_WIDTH: usize = 60;
const PROGRESS_HEAD: usize = 10;
const PROGRESS_INTERVAL: usize = 50;

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

// Accepts `info` as well as `debug,vod2mlib::repository=trace`.
fn apply_log_level(log_builder: &mut Builder, log_level: &str) -> Vec<String> {
    let mut log_levels = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((module, level)) = pair.split_once('=') {
            let level = get_log_level(level);
            log_levels.push(format!("{}={level}", module.trim()));
            log_builder.filter_module(module.trim(), level);
        } else {
            let level = get_log_level(pair);
            log_levels.push(level.to_string());
            log_builder.filter_level(level);
        }
    }
    log_levels
}

pub fn init_logger(user_log_level: Option<&String>, settings_log_level: Option<&str>) {
    let env_log_level = std::env::var(LOG_ENV_VAR).ok();

    let mut log_builder = Builder::new();
    log_builder.target(Target::Stdout);
    log_builder.filter_level(LevelFilter::Info);

    // priority  CLI-Argument, Env-Var, Settings, Default
    let log_level = user_log_level
        .map(ToString::to_string)
        .or(env_log_level)
        .or_else(|| settings_log_level.map(ToString::to_string))
        .unwrap_or_else(|| "info".to_string());

    let log_levels = apply_log_level(&mut log_builder, &log_level);
    // a second init (tests) keeps the first logger
    if log_builder.try_init().is_ok() {
        info!("Log Level {}", log_levels.join(", "));
    }
}

pub fn log_separator(ch: char) {
    info!("{}", ch.to_string().repeat(SEPARATOR_WIDTH));
}

pub fn log_banner(action: &str) {
    log_separator('=');
    info!("{PLUGIN_NAME} v{PLUGIN_VERSION}");
    info!("Action: {action}");
    log_separator('=');
}

/// Logs a titled block of `label: value` rows.
pub fn log_summary(title: &str, rows: &[(&str, usize)]) {
    info!("");
    log_separator('=');
    info!("{title}:");
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    for (label, value) in rows {
        info!("  {:<width$} {value}", format!("{label}:"), width = width);
    }
    log_separator('=');
}

/// Items are reported one by one for the head of a batch, then every 50th.
pub const fn is_progress_step(index: usize) -> bool {
    index <= PROGRESS_HEAD || index % PROGRESS_INTERVAL == 1
}
