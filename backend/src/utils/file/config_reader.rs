use crate::utils::{file_reader, open_file};
use log::error;
use shared::error::{config_err, PluginError};
use shared::model::PluginSettingsDto;
use shared::utils::CONSTANTS;
use std::env;
use std::io::Read;
use std::path::Path;

fn read_to_string(path: &Path) -> Result<String, PluginError> {
    let mut content = String::new();
    open_file(path)
        .and_then(|file| file_reader(file).read_to_string(&mut content))
        .map_err(|err| config_err!("Can't read the settings file: {}: {err}", path.display()))?;
    Ok(content)
}

/// Reads the plugin settings from a yaml or json file.
pub fn read_settings(path: &Path, resolve_env: bool) -> Result<PluginSettingsDto, PluginError> {
    let content = read_to_string(path)?;
    let content = if resolve_env { resolve_env_var(&content) } else { content };
    let mut settings: PluginSettingsDto = serde_saphyr::from_str(&content)
        .map_err(|err| config_err!("Can't parse the settings file: {}: {err}", path.display()))?;
    settings.prepare();
    Ok(settings)
}

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    CONSTANTS.re_env_var.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}
