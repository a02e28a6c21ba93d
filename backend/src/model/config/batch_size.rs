use shared::error::{config_err, PluginError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const BATCH_SIZE_ALL: &str = "all";
// Candidates read per requested item, absorbs already generated items.
const OVER_FETCH_FACTOR: usize = 3;

/// How many new items one generate run creates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BatchSize {
    Limit(usize),
    All,
}

impl BatchSize {
    /// Number of candidates to read from the source for a batch.
    pub fn fetch_size(self, total: usize) -> usize {
        match self {
            BatchSize::Limit(limit) => limit.saturating_mul(OVER_FETCH_FACTOR).min(total),
            BatchSize::All => total,
        }
    }

    pub const fn is_reached(self, created: usize) -> bool {
        match self {
            BatchSize::Limit(limit) => created >= limit,
            BatchSize::All => false,
        }
    }
}

impl FromStr for BatchSize {
    type Err = PluginError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(BATCH_SIZE_ALL) {
            return Ok(BatchSize::All);
        }
        match value.parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(BatchSize::Limit(limit)),
            _ => Err(config_err!("Invalid batch size: {value}, expected a positive number or '{BATCH_SIZE_ALL}'")),
        }
    }
}

impl Display for BatchSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchSize::Limit(limit) => write!(f, "{limit}"),
            BatchSize::All => write!(f, "{BATCH_SIZE_ALL}"),
        }
    }
}
