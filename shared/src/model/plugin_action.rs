use std::fmt::{Display, Formatter};
use std::str::FromStr;
use enum_iterator::Sequence;
use crate::error::{PluginError, PluginErrorKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Sequence, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginAction {
    ScanAllVods,
    GenerateMovies,
    GenerateSeries,
    CleanupMovies,
    CleanupSeries,
}

impl PluginAction {
    pub const SCAN_ALL_VODS: &'static str = "scan_all_vods";
    pub const GENERATE_MOVIES: &'static str = "generate_movies";
    pub const GENERATE_SERIES: &'static str = "generate_series";
    pub const CLEANUP_MOVIES: &'static str = "cleanup_movies";
    pub const CLEANUP_SERIES: &'static str = "cleanup_series";

    pub const fn id(self) -> &'static str {
        match self {
            Self::ScanAllVods => Self::SCAN_ALL_VODS,
            Self::GenerateMovies => Self::GENERATE_MOVIES,
            Self::GenerateSeries => Self::GENERATE_SERIES,
            Self::CleanupMovies => Self::CLEANUP_MOVIES,
            Self::CleanupSeries => Self::CLEANUP_SERIES,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ScanAllVods => "Scan for VODs to Convert",
            Self::GenerateMovies => "Generate Movie .strm Files",
            Self::GenerateSeries => "Generate Series .strm Files",
            Self::CleanupMovies => "Clean Up Movies",
            Self::CleanupSeries => "Clean Up Series",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ScanAllVods => "Show total movies and series available in Dispatcharr",
            Self::GenerateMovies => "Process movies according to batch size",
            Self::GenerateSeries => "Fetch episodes + create .strm files (auto-fetch per series)",
            Self::CleanupMovies => "Remove all movie folders and .strm files",
            Self::CleanupSeries => "Remove all series folders and .strm files",
        }
    }
}

impl Display for PluginAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for PluginAction {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<PluginAction>()
            .find(|action| action.id() == s.trim())
            .ok_or_else(|| PluginError::new(PluginErrorKind::Config, format!("Unknown action: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_ids() {
        for action in enum_iterator::all::<PluginAction>() {
            assert_eq!(action.id().parse::<PluginAction>().unwrap(), action);
        }
        assert_eq!(enum_iterator::cardinality::<PluginAction>(), 5);
    }

    #[test]
    fn test_unknown_action() {
        let err = "rebuild_library".parse::<PluginAction>().unwrap_err();
        assert_eq!(err.message, "Unknown action: rebuild_library");
    }

    #[test]
    fn test_serde_id_matches() {
        let json = serde_json::to_string(&PluginAction::GenerateSeries).unwrap();
        assert_eq!(json, "\"generate_series\"");
    }
}
