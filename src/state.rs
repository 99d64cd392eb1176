use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::provider::DataProvider;
use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Countries,
    Leagues,
    Seasons,
    Matches,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Team,
    DateFrom,
    DateTo,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadTier {
    Countries,
    Leagues,
    Seasons,
    Matches,
}

impl LoadTier {
    pub const ALL: [LoadTier; 4] = [
        LoadTier::Countries,
        LoadTier::Leagues,
        LoadTier::Seasons,
        LoadTier::Matches,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TierLoad {
    pub state: LoadState,
    // Id of the most recent request; completions for any other id are stale.
    pub request: u64,
}

#[derive(Debug, Clone, Default)]
pub struct LoadFlags {
    pub countries: TierLoad,
    pub leagues: TierLoad,
    pub seasons: TierLoad,
    pub matches: TierLoad,
}

impl LoadFlags {
    pub fn tier(&self, tier: LoadTier) -> &TierLoad {
        match tier {
            LoadTier::Countries => &self.countries,
            LoadTier::Leagues => &self.leagues,
            LoadTier::Seasons => &self.seasons,
            LoadTier::Matches => &self.matches,
        }
    }

    pub fn tier_mut(&mut self, tier: LoadTier) -> &mut TierLoad {
        match tier {
            LoadTier::Countries => &mut self.countries,
            LoadTier::Leagues => &mut self.leagues,
            LoadTier::Seasons => &mut self.seasons,
            LoadTier::Matches => &mut self.matches,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn total(self) -> u32 {
        u32::from(self.home) + u32::from(self.away)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub season_id: String,
    pub home: String,
    pub away: String,
    /// `None` until the match has been played.
    pub score: Option<Score>,
    pub date: NaiveDate,
    pub round: u32,
    pub venue: String,
    pub status: MatchStatus,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.score.is_some()
    }

    pub fn total_goals(&self) -> Option<u32> {
        self.score.map(Score::total)
    }

    /// Name of the winning side, `None` for draws and unplayed matches.
    pub fn winner(&self) -> Option<&str> {
        let score = self.score?;
        if score.home > score.away {
            Some(self.home.as_str())
        } else if score.away > score.home {
            Some(self.away.as_str())
        } else {
            None
        }
    }

    pub fn involves_team(&self, needle_lower: &str) -> bool {
        self.home.to_lowercase().contains(needle_lower)
            || self.away.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStatistics {
    pub total_matches: usize,
    pub finished_matches: usize,
    pub pending_matches: usize,
    pub total_goals: u32,
    pub avg_goals: f64,
    pub top_match: Option<Match>,
    pub team_count: usize,
}

impl SeasonStatistics {
    /// Share of matches already played, 0 for an empty season.
    pub fn completion_percent(&self) -> f64 {
        if self.total_matches == 0 {
            return 0.0;
        }
        self.finished_matches as f64 * 100.0 / self.total_matches as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueStatistics {
    pub total_seasons: usize,
    pub total_matches: usize,
    pub finished_matches: usize,
    pub total_goals: u32,
    pub avg_goals: f64,
    pub most_wins: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeasonRecord", into = "SeasonRecord")]
pub struct Season {
    pub id: String,
    pub name: String,
    pub league_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub matches: Vec<Match>,
    pub statistics: SeasonStatistics,
}

impl Season {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        league_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        matches: Vec<Match>,
    ) -> Self {
        let statistics = stats::compute_season_statistics(&matches);
        Self {
            id: id.into(),
            name: name.into(),
            league_id: league_id.into(),
            start,
            end,
            matches,
            statistics,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SeasonRecord {
    id: String,
    name: String,
    league_id: String,
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    matches: Vec<Match>,
}

impl From<SeasonRecord> for Season {
    fn from(rec: SeasonRecord) -> Self {
        Season::new(rec.id, rec.name, rec.league_id, rec.start, rec.end, rec.matches)
    }
}

impl From<Season> for SeasonRecord {
    fn from(season: Season) -> Self {
        SeasonRecord {
            id: season.id,
            name: season.name,
            league_id: season.league_id,
            start: season.start,
            end: season.end,
            matches: season.matches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LeagueRecord", into = "LeagueRecord")]
pub struct League {
    pub id: String,
    pub name: String,
    pub country_id: String,
    pub logo: String,
    pub seasons: Vec<Season>,
    pub statistics: LeagueStatistics,
}

impl League {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country_id: impl Into<String>,
        logo: impl Into<String>,
        seasons: Vec<Season>,
    ) -> Self {
        let statistics = stats::compute_league_statistics(&seasons);
        Self {
            id: id.into(),
            name: name.into(),
            country_id: country_id.into(),
            logo: logo.into(),
            seasons,
            statistics,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct LeagueRecord {
    id: String,
    name: String,
    country_id: String,
    #[serde(default)]
    logo: String,
    #[serde(default)]
    seasons: Vec<Season>,
}

impl From<LeagueRecord> for League {
    fn from(rec: LeagueRecord) -> Self {
        League::new(rec.id, rec.name, rec.country_id, rec.logo, rec.seasons)
    }
}

impl From<League> for LeagueRecord {
    fn from(league: League) -> Self {
        LeagueRecord {
            id: league.id,
            name: league.name,
            country_id: league.country_id,
            logo: league.logo,
            seasons: league.seasons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub leagues: Vec<League>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilters {
    pub team: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub round: Option<u32>,
}

impl MatchFilters {
    pub fn is_empty(&self) -> bool {
        self.team.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.round.is_none()
    }

    pub fn merge(&mut self, patch: MatchFilterPatch) {
        if let Some(team) = patch.team {
            self.team = team
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());
        }
        if let Some(from) = patch.date_from {
            self.date_from = from;
        }
        if let Some(to) = patch.date_to {
            self.date_to = to;
        }
        if let Some(round) = patch.round {
            self.round = round;
        }
    }

    pub fn apply<'a>(&self, matches: &'a [Match]) -> Vec<&'a Match> {
        let needle = self.team.as_ref().map(|t| t.to_lowercase());
        matches
            .iter()
            .filter(|m| needle.as_deref().is_none_or(|n| m.involves_team(n)))
            .filter(|m| self.date_from.is_none_or(|from| m.date >= from))
            .filter(|m| self.date_to.is_none_or(|to| m.date <= to))
            .filter(|m| self.round.is_none_or(|round| m.round == round))
            .collect()
    }
}

/// Partial update for [`MatchFilters`]. An outer `None` leaves the field as is,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilterPatch {
    pub team: Option<Option<String>>,
    pub date_from: Option<Option<NaiveDate>>,
    pub date_to: Option<Option<NaiveDate>>,
    pub round: Option<Option<u32>>,
}

impl MatchFilterPatch {
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(Some(team.into()));
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(Some(date));
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(Some(date));
        self
    }

    pub fn round(mut self, round: u32) -> Self {
        self.round = Some(Some(round));
        self
    }

    pub fn clear_all() -> Self {
        Self {
            team: Some(None),
            date_from: Some(None),
            date_to: Some(None),
            round: Some(None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub selected: usize,
    pub help_overlay: bool,
    pub countries: Vec<Country>,
    pub country_id: Option<String>,
    pub league_id: Option<String>,
    pub season_id: Option<String>,
    pub filters: MatchFilters,
    pub loads: LoadFlags,
    pub next_request: u64,
    pub input: Option<InputField>,
    pub input_buffer: String,
    pub last_export: Option<String>,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Countries,
            selected: 0,
            help_overlay: false,
            countries: Vec::new(),
            country_id: None,
            league_id: None,
            season_id: None,
            filters: MatchFilters::default(),
            loads: LoadFlags::default(),
            next_request: 0,
            input: None,
            input_buffer: String::new(),
            last_export: None,
            logs: VecDeque::with_capacity(200),
        }
    }

    /// Marks `tier` as loading and returns the id the completion must carry.
    pub fn begin_load(&mut self, tier: LoadTier) -> u64 {
        self.next_request += 1;
        let request = self.next_request;
        let load = self.loads.tier_mut(tier);
        load.request = request;
        load.state = LoadState::Loading;
        request
    }

    /// Settles `tier` for `request`. Returns `false` when a newer request has
    /// superseded this one, in which case nothing changes.
    pub fn finish_load(&mut self, tier: LoadTier, request: u64, outcome: Result<(), String>) -> bool {
        let load = self.loads.tier(tier);
        if load.request != request || !load.state.is_loading() {
            self.push_log(format!(
                "[INFO] Ignored stale {} load #{request}",
                tier_label(tier)
            ));
            return false;
        }
        self.loads.tier_mut(tier).state = match outcome {
            Ok(()) => LoadState::Ready,
            Err(msg) => LoadState::Failed(msg),
        };
        true
    }

    /// Blocking load through `provider`, for callers without a loader thread.
    pub fn load_countries(&mut self, provider: &dyn DataProvider) {
        let request = self.begin_load(LoadTier::Countries);
        let result = provider
            .fetch_countries()
            .map_err(|err| format!("{err:#}"));
        apply_delta(self, Delta::CountriesLoaded { request, result });
    }

    pub fn load_state(&self, tier: LoadTier) -> &LoadState {
        &self.loads.tier(tier).state
    }

    pub fn find_country(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    pub fn find_league(&self, id: &str) -> Option<&League> {
        self.countries
            .iter()
            .flat_map(|c| c.leagues.iter())
            .find(|l| l.id == id)
    }

    pub fn find_season(&self, id: &str) -> Option<&Season> {
        self.countries
            .iter()
            .flat_map(|c| c.leagues.iter())
            .flat_map(|l| l.seasons.iter())
            .find(|s| s.id == id)
    }

    pub fn current_country(&self) -> Option<&Country> {
        self.country_id.as_deref().and_then(|id| self.find_country(id))
    }

    pub fn current_league(&self) -> Option<&League> {
        self.league_id.as_deref().and_then(|id| self.find_league(id))
    }

    pub fn current_season(&self) -> Option<&Season> {
        self.season_id.as_deref().and_then(|id| self.find_season(id))
    }

    pub fn select_country(&mut self, id: &str) -> bool {
        if self.find_country(id).is_none() {
            return false;
        }
        self.country_id = Some(id.to_string());
        self.league_id = None;
        self.season_id = None;
        self.filters = MatchFilters::default();
        true
    }

    /// Also points the country selection at the league's parent, so the
    /// selected chain always lies on one path of the tree.
    pub fn select_league(&mut self, id: &str) -> bool {
        let Some(country_id) = self.find_league(id).map(|l| l.country_id.clone()) else {
            return false;
        };
        self.country_id = Some(country_id);
        self.league_id = Some(id.to_string());
        self.season_id = None;
        self.filters = MatchFilters::default();
        true
    }

    pub fn select_season(&mut self, id: &str) -> bool {
        let Some(league_id) = self.find_season(id).map(|s| s.league_id.clone()) else {
            return false;
        };
        if self.league_id.as_deref() != Some(league_id.as_str()) {
            self.country_id = self.find_league(&league_id).map(|l| l.country_id.clone());
            self.league_id = Some(league_id);
        }
        self.season_id = Some(id.to_string());
        self.filters = MatchFilters::default();
        true
    }

    pub fn update_match_filters(&mut self, patch: MatchFilterPatch) {
        self.filters.merge(patch);
        if self.screen == Screen::Matches {
            self.clamp_selection();
        }
    }

    pub fn clear_match_filters(&mut self) {
        self.update_match_filters(MatchFilterPatch::clear_all());
    }

    pub fn clear_selections(&mut self) {
        self.country_id = None;
        self.league_id = None;
        self.season_id = None;
        self.filters = MatchFilters::default();
    }

    pub fn filtered_matches(&self) -> Vec<&Match> {
        match self.current_season() {
            Some(season) => self.filters.apply(&season.matches),
            None => Vec::new(),
        }
    }

    pub fn league_statistics(&self, id: &str) -> Option<&LeagueStatistics> {
        self.find_league(id).map(|l| &l.statistics)
    }

    pub fn season_statistics(&self, id: &str) -> Option<&SeasonStatistics> {
        self.find_season(id).map(|s| &s.statistics)
    }

    /// Leagues listed on the leagues screen.
    pub fn visible_leagues(&self) -> &[League] {
        self.current_country()
            .map(|c| c.leagues.as_slice())
            .unwrap_or(&[])
    }

    pub fn visible_seasons(&self) -> &[Season] {
        self.current_league()
            .map(|l| l.seasons.as_slice())
            .unwrap_or(&[])
    }

    fn row_count(&self) -> usize {
        match self.screen {
            Screen::Countries => self.countries.len(),
            Screen::Leagues => self.visible_leagues().len(),
            Screen::Seasons => self.visible_seasons().len(),
            Screen::Matches => self.filtered_matches().len(),
        }
    }

    pub fn select_next(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.row_count();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    /// Selects the row under the cursor and moves one level down.
    pub fn drill_down(&mut self) -> bool {
        let idx = self.selected;
        let (id, next) = match self.screen {
            Screen::Countries => (
                self.countries.get(idx).map(|c| c.id.clone()),
                Screen::Leagues,
            ),
            Screen::Leagues => (
                self.visible_leagues().get(idx).map(|l| l.id.clone()),
                Screen::Seasons,
            ),
            Screen::Seasons => (
                self.visible_seasons().get(idx).map(|s| s.id.clone()),
                Screen::Matches,
            ),
            Screen::Matches => return false,
        };
        let Some(id) = id else {
            return false;
        };
        let selected = match self.screen {
            Screen::Countries => self.select_country(&id),
            Screen::Leagues => self.select_league(&id),
            Screen::Seasons => self.select_season(&id),
            Screen::Matches => false,
        };
        if selected {
            self.screen = next;
            self.selected = 0;
        }
        selected
    }

    /// Moves one level up and puts the cursor back on the current selection.
    pub fn go_back(&mut self) {
        let (screen, position) = match self.screen {
            Screen::Countries => return,
            Screen::Leagues => (
                Screen::Countries,
                self.country_id
                    .as_deref()
                    .and_then(|id| self.countries.iter().position(|c| c.id == id)),
            ),
            Screen::Seasons => (
                Screen::Leagues,
                self.league_id
                    .as_deref()
                    .and_then(|id| self.visible_leagues().iter().position(|l| l.id == id)),
            ),
            Screen::Matches => (
                Screen::Seasons,
                self.season_id
                    .as_deref()
                    .and_then(|id| self.visible_seasons().iter().position(|s| s.id == id)),
            ),
        };
        self.screen = screen;
        self.selected = position.unwrap_or(0);
        self.clamp_selection();
    }

    pub fn reset_navigation(&mut self) {
        self.clear_selections();
        self.screen = Screen::Countries;
        self.selected = 0;
    }

    pub fn begin_input(&mut self, field: InputField) {
        self.input_buffer = match field {
            InputField::Team => self.filters.team.clone().unwrap_or_default(),
            InputField::DateFrom => self.filters.date_from.map(format_date).unwrap_or_default(),
            InputField::DateTo => self.filters.date_to.map(format_date).unwrap_or_default(),
            InputField::Round => self
                .filters
                .round
                .map(|r| r.to_string())
                .unwrap_or_default(),
        };
        self.input = Some(field);
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
        self.input_buffer.clear();
    }

    /// Parses the input buffer into a filter patch. An empty buffer clears the
    /// field; unparsable input is logged and leaves filters unchanged.
    pub fn commit_input(&mut self) -> bool {
        let Some(field) = self.input.take() else {
            return false;
        };
        let raw = std::mem::take(&mut self.input_buffer);
        let raw = raw.trim();
        let patch = match field {
            InputField::Team => Ok(MatchFilterPatch {
                team: Some(Some(raw.to_string())),
                ..MatchFilterPatch::default()
            }),
            InputField::DateFrom => parse_optional_date(raw).map(|date| MatchFilterPatch {
                date_from: Some(date),
                ..MatchFilterPatch::default()
            }),
            InputField::DateTo => parse_optional_date(raw).map(|date| MatchFilterPatch {
                date_to: Some(date),
                ..MatchFilterPatch::default()
            }),
            InputField::Round => parse_optional_round(raw).map(|round| MatchFilterPatch {
                round: Some(round),
                ..MatchFilterPatch::default()
            }),
        };
        match patch {
            Ok(patch) => {
                self.update_match_filters(patch);
                true
            }
            Err(msg) => {
                self.push_log(format!("[WARN] {msg}"));
                false
            }
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn set_countries(&mut self, countries: Vec<Country>) {
        self.countries = countries;
        // Selections are ids into the tree; drop the ones the new tree lacks.
        if self.country_id.as_deref().is_some_and(|id| self.find_country(id).is_none()) {
            self.country_id = None;
        }
        if self.league_id.as_deref().is_some_and(|id| self.find_league(id).is_none()) {
            self.league_id = None;
        }
        if self.season_id.as_deref().is_some_and(|id| self.find_season(id).is_none()) {
            self.season_id = None;
            self.filters = MatchFilters::default();
        }
        if self.screen == Screen::Matches && self.season_id.is_none() {
            self.screen = Screen::Seasons;
        }
        if self.screen == Screen::Seasons && self.league_id.is_none() {
            self.screen = Screen::Leagues;
        }
        if self.screen == Screen::Leagues && self.country_id.is_none() {
            self.screen = Screen::Countries;
        }
        self.clamp_selection();
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    CountriesLoaded {
        request: u64,
        result: Result<Vec<Country>, String>,
    },
    ExportFinished {
        path: String,
        rows: usize,
    },
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    LoadCountries {
        request: u64,
    },
    ExportMatches {
        path: String,
        season: String,
        matches: Vec<Match>,
    },
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::CountriesLoaded { request, result } => {
            let outcome = match &result {
                Ok(_) => Ok(()),
                Err(err) => Err(format!("Error loading countries: {err}")),
            };
            if !state.finish_load(LoadTier::Countries, request, outcome) {
                return;
            }
            match result {
                Ok(countries) => {
                    let seasons = countries
                        .iter()
                        .flat_map(|c| c.leagues.iter())
                        .map(|l| l.seasons.len())
                        .sum::<usize>();
                    state.push_log(format!(
                        "[INFO] Loaded {} countries, {} seasons",
                        countries.len(),
                        seasons
                    ));
                    state.set_countries(countries);
                }
                Err(err) => {
                    state.push_log(format!("[WARN] Countries load failed: {err}"));
                }
            }
        }
        Delta::ExportFinished { path, rows } => {
            state.push_log(format!("[INFO] Exported {rows} matches to {path}"));
            state.last_export = Some(path);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

pub fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Scheduled => "Scheduled",
        MatchStatus::InProgress => "In progress",
        MatchStatus::Finished => "Finished",
        MatchStatus::Suspended => "Suspended",
    }
}

pub fn tier_label(tier: LoadTier) -> &'static str {
    match tier {
        LoadTier::Countries => "countries",
        LoadTier::Leagues => "leagues",
        LoadTier::Seasons => "seasons",
        LoadTier::Matches => "matches",
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

fn parse_optional_round(raw: &str) -> Result<Option<u32>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(format!("Invalid round '{raw}'")),
        Ok(round) => Ok(Some(round)),
    }
}
