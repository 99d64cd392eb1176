use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::provider::DataProvider;
use crate::state::Country;

const DATASET_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct DatasetFile {
    version: u32,
    countries: Vec<Country>,
}

#[derive(Debug, Serialize)]
struct DatasetFileRef<'a> {
    version: u32,
    countries: &'a [Country],
}

/// Reads the hierarchy from a JSON dataset on disk.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataProvider for FileProvider {
    fn fetch_countries(&self) -> Result<Vec<Country>> {
        read_dataset(&self.path)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

pub fn read_dataset(path: &Path) -> Result<Vec<Country>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    parse_dataset_json(&raw).with_context(|| format!("load dataset {}", path.display()))
}

/// Statistics are not stored; they are rebuilt while deserializing.
pub fn parse_dataset_json(raw: &str) -> Result<Vec<Country>> {
    let file: DatasetFile = serde_json::from_str(raw).context("invalid dataset json")?;
    if file.version != DATASET_VERSION {
        return Err(anyhow!(
            "unsupported dataset version {} (expected {DATASET_VERSION})",
            file.version
        ));
    }
    validate_hierarchy(&file.countries)?;
    Ok(file.countries)
}

pub fn write_dataset(path: &Path, countries: &[Country]) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(&DatasetFileRef {
        version: DATASET_VERSION,
        countries,
    })
    .context("serialize dataset")?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("rename to {}", path.display()))?;
    Ok(())
}

/// Ids are looked up across the whole tree, so each kind must be unique.
fn validate_hierarchy(countries: &[Country]) -> Result<()> {
    let mut country_ids = HashSet::new();
    let mut league_ids = HashSet::new();
    let mut season_ids = HashSet::new();
    let mut match_ids = HashSet::new();

    for country in countries {
        if !country_ids.insert(country.id.as_str()) {
            return Err(anyhow!("duplicate country id {}", country.id));
        }
        for league in &country.leagues {
            if !league_ids.insert(league.id.as_str()) {
                return Err(anyhow!("duplicate league id {}", league.id));
            }
            if league.country_id != country.id {
                return Err(anyhow!(
                    "league {} points at country {}, but is listed under {}",
                    league.id,
                    league.country_id,
                    country.id
                ));
            }
            for season in &league.seasons {
                if !season_ids.insert(season.id.as_str()) {
                    return Err(anyhow!("duplicate season id {}", season.id));
                }
                if season.league_id != league.id {
                    return Err(anyhow!(
                        "season {} points at league {}, but is listed under {}",
                        season.id,
                        season.league_id,
                        league.id
                    ));
                }
                if season.start > season.end {
                    return Err(anyhow!("season {} ends before it starts", season.id));
                }
                if let Some(m) = season.matches.iter().find(|m| !match_ids.insert(m.id.as_str())) {
                    return Err(anyhow!("duplicate match id {}", m.id));
                }
                if let Some(m) = season.matches.iter().find(|m| m.season_id != season.id) {
                    return Err(anyhow!(
                        "match {} points at season {}, but is listed under {}",
                        m.id,
                        m.season_id,
                        season.id
                    ));
                }
            }
        }
    }
    Ok(())
}
