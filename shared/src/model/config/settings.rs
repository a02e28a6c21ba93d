use crate::utils::{default_as_true, default_dispatcharr_url, default_movie_batch_size, default_movie_root_folder,
                   default_series_batch_size, default_series_root_folder, deserialize_as_bool, deserialize_as_string};

/// Plugin settings as the host stores them: a flat key/value map
/// filled from the plugin form.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PluginSettingsDto {
    #[serde(default = "default_movie_root_folder")]
    pub root_folder: String,
    #[serde(default = "default_series_root_folder")]
    pub series_root_folder: String,
    #[serde(default = "default_dispatcharr_url")]
    pub dispatcharr_url: String,
    #[serde(default = "default_movie_batch_size", deserialize_with = "deserialize_as_string")]
    pub batch_size: String,
    #[serde(default = "default_as_true", deserialize_with = "deserialize_as_bool")]
    pub generate_nfo: bool,
    #[serde(default = "default_series_batch_size", deserialize_with = "deserialize_as_string")]
    pub series_batch_size: String,
    #[serde(default = "default_as_true", deserialize_with = "deserialize_as_bool")]
    pub generate_series_nfo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for PluginSettingsDto {
    fn default() -> Self {
        Self {
            root_folder: default_movie_root_folder(),
            series_root_folder: default_series_root_folder(),
            dispatcharr_url: default_dispatcharr_url(),
            batch_size: default_movie_batch_size(),
            generate_nfo: true,
            series_batch_size: default_series_batch_size(),
            generate_series_nfo: true,
            log_level: None,
        }
    }
}

fn prepare_value(value: &mut String, default_value: fn() -> String) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        *value = default_value();
    } else if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

impl PluginSettingsDto {
    /// Empty form values fall back to their defaults.
    pub fn prepare(&mut self) {
        prepare_value(&mut self.root_folder, default_movie_root_folder);
        prepare_value(&mut self.series_root_folder, default_series_root_folder);
        prepare_value(&mut self.dispatcharr_url, default_dispatcharr_url);
        prepare_value(&mut self.batch_size, default_movie_batch_size);
        prepare_value(&mut self.series_batch_size, default_series_batch_size);
    }
}
