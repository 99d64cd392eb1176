use std::sync::mpsc;
use std::time::Duration;

use anyhow::anyhow;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use league_history::mock_data::{self, MockProvider, MAX_GOALS};
use league_history::provider::{DataProvider, spawn_loader};
use league_history::state::{
    AppState, Country, Delta, LoadState, LoadTier, ProviderCommand, Screen, apply_delta,
};

struct FailingProvider;

impl DataProvider for FailingProvider {
    fn fetch_countries(&self) -> anyhow::Result<Vec<Country>> {
        Err(anyhow!("service unavailable"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn mock() -> MockProvider {
    MockProvider::new(Duration::ZERO, Some(42))
}

#[test]
fn load_moves_from_idle_through_loading_to_ready() {
    let mut state = AppState::new();
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Idle);

    let request = state.begin_load(LoadTier::Countries);
    assert!(state.load_state(LoadTier::Countries).is_loading());

    let countries = mock().fetch_countries().expect("mock data");
    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request,
            result: Ok(countries),
        },
    );
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Ready);
    assert_eq!(state.countries.len(), 3);
}

#[test]
fn failed_load_keeps_previous_data_and_reports_message() {
    let mut state = AppState::new();
    state.load_countries(&mock());
    let before = state.countries.clone();

    state.load_countries(&FailingProvider);
    let err = state
        .load_state(LoadTier::Countries)
        .error()
        .expect("failed state carries a message");
    assert!(err.contains("service unavailable"));
    assert_eq!(state.countries, before);
}

#[test]
fn failed_state_is_reset_by_next_attempt() {
    let mut state = AppState::new();
    state.load_countries(&FailingProvider);
    assert!(state.load_state(LoadTier::Countries).error().is_some());

    state.begin_load(LoadTier::Countries);
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Loading);

    state.load_countries(&mock());
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Ready);
}

#[test]
fn superseded_completion_is_ignored() {
    let mut state = AppState::new();
    let first = state.begin_load(LoadTier::Countries);
    let second = state.begin_load(LoadTier::Countries);
    assert_ne!(first, second);

    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request: first,
            result: Err("late failure".to_string()),
        },
    );
    assert!(state.load_state(LoadTier::Countries).is_loading());
    assert!(state.logs.iter().any(|l| l.contains("stale")));

    let countries = mock().fetch_countries().expect("mock data");
    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request: second,
            result: Ok(countries),
        },
    );
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Ready);

    // A duplicate delivery of a settled request changes nothing.
    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request: second,
            result: Ok(Vec::new()),
        },
    );
    assert_eq!(state.countries.len(), 3);
}

#[test]
fn tiers_are_independent() {
    let mut state = AppState::new();
    state.begin_load(LoadTier::Seasons);
    state.load_countries(&FailingProvider);

    assert!(state.load_state(LoadTier::Seasons).is_loading());
    assert!(state.load_state(LoadTier::Countries).error().is_some());
    assert_eq!(state.load_state(LoadTier::Leagues), &LoadState::Idle);
    assert_eq!(state.load_state(LoadTier::Matches), &LoadState::Idle);
}

#[test]
fn reload_keeps_selections_that_still_exist() {
    let mut state = AppState::new();
    state.load_countries(&mock());
    assert!(state.drill_down());
    assert!(state.drill_down());
    assert!(state.drill_down());
    assert_eq!(state.screen, Screen::Matches);
    assert_eq!(state.season_id.as_deref(), Some("laliga-2023"));

    state.load_countries(&MockProvider::new(Duration::ZERO, Some(1)));
    assert_eq!(state.screen, Screen::Matches);
    assert_eq!(state.season_id.as_deref(), Some("laliga-2023"));
}

#[test]
fn reload_drops_selections_missing_from_new_data() {
    let mut state = AppState::new();
    state.load_countries(&mock());
    assert!(state.drill_down());
    assert_eq!(state.screen, Screen::Leagues);

    let request = state.begin_load(LoadTier::Countries);
    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request,
            result: Ok(Vec::new()),
        },
    );
    assert!(state.country_id.is_none());
    assert_eq!(state.screen, Screen::Countries);
}

#[test]
fn loader_thread_answers_load_commands() {
    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let _handle = spawn_loader(Box::new(mock()), tx, cmd_rx);

    let mut state = AppState::new();
    let request = state.begin_load(LoadTier::Countries);
    cmd_tx
        .send(ProviderCommand::LoadCountries { request })
        .expect("loader is running");

    loop {
        let delta = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("loader replies in time");
        let done = matches!(delta, Delta::CountriesLoaded { .. });
        apply_delta(&mut state, delta);
        if done {
            break;
        }
    }
    assert_eq!(state.load_state(LoadTier::Countries), &LoadState::Ready);
    assert!(state.logs.iter().any(|l| l.contains("Data source: mock")));
}

fn next_non_log(rx: &mpsc::Receiver<Delta>, state: &mut AppState) -> Delta {
    loop {
        let delta = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("loader replies in time");
        match delta {
            Delta::Log(msg) if msg.contains("Data source") => state.push_log(msg),
            other => return other,
        }
    }
}

#[test]
fn loader_thread_exports_matches_and_reports_failures() {
    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let _handle = spawn_loader(Box::new(mock()), tx, cmd_rx);

    let countries = mock().fetch_countries().expect("mock data");
    let matches = countries[0].leagues[0].seasons[0].matches.clone();
    let dir = std::env::temp_dir().join(format!("league_history_loader_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    let path = dir.join("laliga-2023_matches.xlsx").display().to_string();

    let mut state = AppState::new();
    cmd_tx
        .send(ProviderCommand::ExportMatches {
            path: path.clone(),
            season: "La Liga 2023-24".to_string(),
            matches: matches.clone(),
        })
        .expect("loader is running");
    let delta = next_non_log(&rx, &mut state);
    assert!(matches!(
        &delta,
        Delta::ExportFinished { path: written, rows: 30 } if *written == path
    ));
    apply_delta(&mut state, delta);
    assert_eq!(state.last_export.as_deref(), Some(path.as_str()));

    let unreachable = dir.join("missing").join("nested").join("out.xlsx");
    cmd_tx
        .send(ProviderCommand::ExportMatches {
            path: unreachable.display().to_string(),
            season: "La Liga 2023-24".to_string(),
            matches,
        })
        .expect("loader is running");
    let delta = next_non_log(&rx, &mut state);
    apply_delta(&mut state, delta);
    assert!(
        state
            .logs
            .back()
            .is_some_and(|line| line.starts_with("[WARN] Export failed"))
    );
    assert_eq!(state.last_export.as_deref(), Some(path.as_str()));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn mock_dataset_has_fixed_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let countries = mock_data::generate_dataset(&mut rng).expect("mock data");

    let ids = countries.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, ["spain", "england", "italy"]);

    let seasons = countries
        .iter()
        .flat_map(|c| c.leagues.iter())
        .flat_map(|l| l.seasons.iter())
        .collect::<Vec<_>>();
    assert_eq!(seasons.len(), 4);

    for season in seasons {
        assert_eq!(season.matches.len(), 30);
        for m in &season.matches {
            let score = m.score.expect("mock matches are played");
            assert!(score.home <= MAX_GOALS && score.away <= MAX_GOALS);
            assert_eq!(m.season_id, season.id);
        }
        let rounds = season.matches.iter().filter(|m| m.round == 1).count();
        assert_eq!(rounds, 3);
    }
}

#[test]
fn mock_rounds_pair_teams_by_index_weekly() {
    let mut rng = StdRng::seed_from_u64(3);
    let countries = mock_data::generate_dataset(&mut rng).expect("mock data");
    let season = &countries[0].leagues[0].seasons[0];

    let first = &season.matches[0];
    assert_eq!(first.id, "laliga-2023-match-1");
    assert_eq!(first.home, "Real Madrid");
    assert_eq!(first.away, "Barcelona");
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 9, 7).expect("valid date"));

    let round_five = season
        .matches
        .iter()
        .find(|m| m.round == 5)
        .expect("round five");
    assert_eq!(round_five.date, NaiveDate::from_ymd_opt(2023, 10, 5).expect("valid date"));

    let older = &countries[0].leagues[0].seasons[1];
    assert_eq!(older.matches[0].date, NaiveDate::from_ymd_opt(2022, 9, 7).expect("valid date"));
}

#[test]
fn seeded_mock_is_deterministic() {
    let a = MockProvider::new(Duration::ZERO, Some(99))
        .fetch_countries()
        .expect("mock data");
    let b = MockProvider::new(Duration::ZERO, Some(99))
        .fetch_countries()
        .expect("mock data");
    assert_eq!(a, b);
}
