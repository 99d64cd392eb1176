use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATASET_PATH: &str = "league_dataset.json";
const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
const MAX_LOAD_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Mock,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub source: DataSource,
    pub dataset_path: PathBuf,
    pub load_delay: Duration,
    pub mock_seed: Option<u64>,
    pub export_dir: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Mock,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            mock_seed: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key).and_then(|val| {
                let trimmed = val.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };
        let defaults = Self::default();

        let source = get("DATA_SOURCE")
            .map(|raw| parse_source(&raw))
            .unwrap_or(defaults.source);
        let dataset_path = get("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);
        let load_delay = get("LOAD_DELAY_MS")
            .and_then(|val| val.parse::<u64>().ok())
            .map(|ms| Duration::from_millis(ms.min(MAX_LOAD_DELAY_MS)))
            .unwrap_or(defaults.load_delay);
        let mock_seed = get("MOCK_SEED").and_then(|val| val.parse::<u64>().ok());
        let export_dir = get("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        Self {
            source,
            dataset_path,
            load_delay,
            mock_seed,
            export_dir,
        }
    }
}

pub fn parse_source(raw: &str) -> DataSource {
    match raw.trim().to_ascii_lowercase().as_str() {
        "file" | "json" => DataSource::File,
        _ => DataSource::Mock,
    }
}
