use serde::Serialize;
use crate::model::PluginAction;
use crate::utils::{PLUGIN_NAME, PLUGIN_VERSION};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginFieldType {
    String,
    Select,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginFieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PluginFieldDefault {
    Text(&'static str),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginField {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: PluginFieldType,
    pub default: PluginFieldDefault,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PluginFieldOption>,
    pub help_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginActionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// The declaration the host reads to render the settings form
/// and the action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginManifest {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub fields: Vec<PluginField>,
    pub actions: Vec<PluginActionInfo>,
}

const DESCRIPTION: &str = "Convert Dispatcharr VODs to media library format (.strm files). \
Configure the movie and series root folders, then scan for VODs and generate movies or series in batches. \
Episodes are fetched per series as needed. Repeat the generate actions until complete, existing folders are skipped.";

const fn option(value: &'static str, label: &'static str) -> PluginFieldOption {
    PluginFieldOption { value, label }
}

fn plugin_fields() -> Vec<PluginField> {
    vec![
        PluginField {
            id: "root_folder",
            label: "Root Folder for Movies",
            field_type: PluginFieldType::String,
            default: PluginFieldDefault::Text("/VODS/Movies"),
            options: vec![],
            help_text: "Path where movie folders will be created",
        },
        PluginField {
            id: "series_root_folder",
            label: "Root Folder for Series",
            field_type: PluginFieldType::String,
            default: PluginFieldDefault::Text("/VODS/Series"),
            options: vec![],
            help_text: "Path where series folders will be created",
        },
        PluginField {
            id: "dispatcharr_url",
            label: "Dispatcharr URL (IMPORTANT!)",
            field_type: PluginFieldType::String,
            default: PluginFieldDefault::Text("http://192.168.99.11:9191"),
            options: vec![],
            help_text: "Address of Dispatcharr as reachable from your media server. Do not use localhost or 127.0.0.1",
        },
        PluginField {
            id: "batch_size",
            label: "Batch Size (Movies)",
            field_type: PluginFieldType::Select,
            default: PluginFieldDefault::Text("250"),
            options: vec![
                option("10", "10 movies"),
                option("100", "100 movies"),
                option("200", "200 movies"),
                option("500", "500 movies"),
                option("1000", "1000 movies"),
                option("all", "All movies"),
            ],
            help_text: "Number of movies to process in this run",
        },
        PluginField {
            id: "generate_nfo",
            label: "Generate Movie NFO Files",
            field_type: PluginFieldType::Checkbox,
            default: PluginFieldDefault::Flag(true),
            options: vec![],
            help_text: "Create .nfo metadata files for movies",
        },
        PluginField {
            id: "series_batch_size",
            label: "Batch Size (Series)",
            field_type: PluginFieldType::Select,
            default: PluginFieldDefault::Text("10"),
            options: vec![
                option("1", "1 series (testing)"),
                option("5", "5 series"),
                option("10", "10 series"),
                option("25", "25 series"),
                option("all", "All series (slow!)"),
            ],
            help_text: "Series to process (episodes auto-fetched for each)",
        },
        PluginField {
            id: "generate_series_nfo",
            label: "Generate Series NFO Files",
            field_type: PluginFieldType::Checkbox,
            default: PluginFieldDefault::Flag(true),
            options: vec![],
            help_text: "Create .nfo metadata files for series and episodes",
        },
    ]
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            name: PLUGIN_NAME,
            version: PLUGIN_VERSION,
            description: DESCRIPTION,
            fields: plugin_fields(),
            actions: enum_iterator::all::<PluginAction>()
                .map(|action| PluginActionInfo {
                    id: action.id(),
                    label: action.label(),
                    description: action.description(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lists_all_actions() {
        let manifest = PluginManifest::default();
        let ids: Vec<&str> = manifest.actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["scan_all_vods", "generate_movies", "generate_series", "cleanup_movies", "cleanup_series"]);
    }

    #[test]
    fn test_manifest_json() {
        let json = serde_json::to_value(PluginManifest::default()).unwrap();
        assert_eq!(json["name"], "VOD2MLIB");
        assert_eq!(json["fields"][3]["type"], "select");
        assert_eq!(json["fields"][3]["options"][5]["value"], "all");
        assert_eq!(json["fields"][4]["default"], true);
        assert!(json["fields"][0].get("options").is_none());
    }
}
