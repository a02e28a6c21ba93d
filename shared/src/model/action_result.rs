use serde::Serialize;
use crate::error::PluginError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub movies: usize,
    pub series: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieGenerateStats {
    pub total_in_db: usize,
    pub processed: usize,
    pub created_strm: usize,
    pub created_nfo: usize,
    pub skipped: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesGenerateStats {
    pub total_in_db: usize,
    pub processed: usize,
    pub series_processed: usize,
    pub episodes_created: usize,
    pub nfo_created: usize,
    pub skipped: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieCleanupStats {
    pub deleted_folders: usize,
    pub deleted_strm: usize,
    pub deleted_nfo: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesCleanupStats {
    pub deleted: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionStats {
    Scan(ScanStats),
    MovieGenerate(MovieGenerateStats),
    SeriesGenerate(SeriesGenerateStats),
    MovieCleanup(MovieCleanupStats),
    SeriesCleanup(SeriesCleanupStats),
}

/// What the host receives after an action: a status, a message
/// shown to the user and the counters of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub status: ActionStatus,
    pub message: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ActionStats>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>, stats: ActionStats) -> Self {
        Self { status: ActionStatus::Ok, message: message.into(), stats: Some(stats) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ActionStatus::Error, message: message.into(), stats: None }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ActionStatus::Ok
    }
}

impl From<PluginError> for ActionResult {
    fn from(err: PluginError) -> Self {
        Self::error(err.message)
    }
}
