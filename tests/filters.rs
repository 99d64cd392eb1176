use chrono::NaiveDate;

use league_history::state::{
    AppState, Country, Delta, League, LoadTier, Match, MatchFilterPatch, MatchStatus, Score,
    Season, apply_delta,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).expect("valid date")
}

fn fixture(id: &str, round: u32, home: &str, away: &str, on: NaiveDate) -> Match {
    Match {
        id: id.to_string(),
        season_id: "liga-2023".to_string(),
        home: home.to_string(),
        away: away.to_string(),
        score: Some(Score { home: 1, away: 0 }),
        date: on,
        round,
        venue: format!("{home} Stadium"),
        status: MatchStatus::Finished,
    }
}

fn state_with_season() -> AppState {
    let matches = vec![
        fixture("m1", 1, "Real Madrid", "Barcelona", date(9, 7)),
        fixture("m2", 1, "Sevilla", "Real Sociedad", date(9, 7)),
        fixture("m3", 1, "Valencia", "Atlético Madrid", date(9, 7)),
        fixture("m4", 2, "Barcelona", "Real Madrid", date(9, 14)),
        fixture("m5", 2, "Valencia", "Sevilla", date(9, 14)),
        fixture("m6", 3, "Atlético Madrid", "Valencia", date(9, 21)),
    ];
    let season = Season::new("liga-2023", "2023-24", "liga", date(8, 1), date(12, 31), matches);
    let league = League::new("liga", "Liga", "spain", "⚽", vec![season]);
    let country = Country {
        id: "spain".to_string(),
        name: "Spain".to_string(),
        code: "ES".to_string(),
        flag: String::new(),
        leagues: vec![league],
    };

    let mut state = AppState::new();
    let request = state.begin_load(LoadTier::Countries);
    apply_delta(
        &mut state,
        Delta::CountriesLoaded {
            request,
            result: Ok(vec![country]),
        },
    );
    assert!(state.select_country("spain"));
    assert!(state.select_league("liga"));
    assert!(state.select_season("liga-2023"));
    state
}

fn ids(state: &AppState) -> Vec<String> {
    state
        .filtered_matches()
        .into_iter()
        .map(|m| m.id.clone())
        .collect()
}

#[test]
fn no_filters_returns_all_matches_in_order() {
    let state = state_with_season();
    assert_eq!(ids(&state), ["m1", "m2", "m3", "m4", "m5", "m6"]);
}

#[test]
fn round_and_team_filters_are_conjunctive() {
    let mut state = state_with_season();
    state.update_match_filters(MatchFilterPatch::default().round(1).team("Real"));
    assert_eq!(ids(&state), ["m1", "m2"]);
}

#[test]
fn team_filter_is_case_insensitive_on_both_sides() {
    let mut state = state_with_season();
    state.update_match_filters(MatchFilterPatch::default().team("SEVILLA"));
    assert_eq!(ids(&state), ["m2", "m5"]);

    state.update_match_filters(MatchFilterPatch::default().team("atlético"));
    assert_eq!(ids(&state), ["m3", "m6"]);
}

#[test]
fn blank_team_filter_is_inactive() {
    let mut state = state_with_season();
    state.update_match_filters(MatchFilterPatch::default().team("   "));
    assert!(state.filters.team.is_none());
    assert_eq!(state.filtered_matches().len(), 6);
}

#[test]
fn date_bounds_are_inclusive() {
    let mut state = state_with_season();
    state.update_match_filters(
        MatchFilterPatch::default()
            .date_from(date(9, 14))
            .date_to(date(9, 21)),
    );
    assert_eq!(ids(&state), ["m4", "m5", "m6"]);

    state.update_match_filters(MatchFilterPatch::default().date_to(date(9, 14)));
    assert_eq!(ids(&state), ["m4", "m5"]);
}

#[test]
fn filters_without_matches_return_empty() {
    let mut state = state_with_season();
    state.update_match_filters(MatchFilterPatch::default().round(3).team("Real"));
    assert!(state.filtered_matches().is_empty());
}

#[test]
fn clear_match_filters_restores_full_list() {
    let mut state = state_with_season();
    state.update_match_filters(MatchFilterPatch::default().round(2));
    assert_eq!(state.filtered_matches().len(), 2);
    state.clear_match_filters();
    assert!(state.filters.is_empty());
    assert_eq!(state.filtered_matches().len(), 6);
    assert_eq!(state.season_id.as_deref(), Some("liga-2023"));
}
