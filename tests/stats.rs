use chrono::NaiveDate;

use league_history::state::{Match, MatchStatus, Score, Season};
use league_history::stats::{
    compute_league_statistics, compute_season_statistics, most_wins, top_scoring_match,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, day).expect("valid date")
}

fn played(id: &str, home: &str, away: &str, goals: (u8, u8)) -> Match {
    Match {
        id: id.to_string(),
        season_id: "s1".to_string(),
        home: home.to_string(),
        away: away.to_string(),
        score: Some(Score {
            home: goals.0,
            away: goals.1,
        }),
        date: date(7),
        round: 1,
        venue: format!("{home} Stadium"),
        status: MatchStatus::Finished,
    }
}

fn unplayed(id: &str, home: &str, away: &str) -> Match {
    Match {
        score: None,
        status: MatchStatus::Scheduled,
        ..played(id, home, away, (0, 0))
    }
}

fn season(id: &str, matches: Vec<Match>) -> Season {
    Season::new(
        id,
        id,
        "league",
        NaiveDate::from_ymd_opt(2023, 8, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid date"),
        matches,
    )
}

#[test]
fn unplayed_matches_have_no_goals_and_no_top_match() {
    let matches = vec![
        unplayed("m1", "A", "B"),
        unplayed("m2", "C", "D"),
        unplayed("m3", "A", "C"),
    ];
    let stats = compute_season_statistics(&matches);
    assert_eq!(stats.total_matches, 3);
    assert_eq!(stats.finished_matches, 0);
    assert_eq!(stats.pending_matches, 3);
    assert_eq!(stats.total_goals, 0);
    assert_eq!(stats.avg_goals, 0.0);
    assert!(stats.top_match.is_none());
}

#[test]
fn empty_input_yields_zeroed_statistics() {
    let stats = compute_season_statistics(&[]);
    assert_eq!(stats.total_matches, 0);
    assert_eq!(stats.total_goals, 0);
    assert_eq!(stats.avg_goals, 0.0);
    assert_eq!(stats.team_count, 0);
    assert!(stats.top_match.is_none());
}

#[test]
fn totals_average_and_top_match_for_three_results() {
    let matches = vec![
        played("m1", "A", "B", (2, 1)),
        played("m2", "C", "D", (1, 1)),
        played("m3", "A", "C", (3, 0)),
    ];
    let stats = compute_season_statistics(&matches);
    assert_eq!(stats.total_goals, 8);
    assert_eq!(stats.avg_goals, 2.67);
    assert_eq!(stats.top_match.as_ref().map(|m| m.id.as_str()), Some("m3"));
    assert_eq!(stats.team_count, 4);
}

#[test]
fn top_match_tie_keeps_first_encountered() {
    let matches = vec![
        played("m1", "A", "B", (2, 1)),
        played("m2", "C", "D", (0, 3)),
        played("m3", "A", "C", (1, 0)),
    ];
    let top = top_scoring_match(&matches).expect("top match");
    assert_eq!(top.id, "m1");
}

#[test]
fn average_only_counts_finished_matches() {
    let matches = vec![played("m1", "A", "B", (2, 2)), unplayed("m2", "C", "D")];
    let stats = compute_season_statistics(&matches);
    assert_eq!(stats.total_matches, 2);
    assert_eq!(stats.finished_matches, 1);
    assert_eq!(stats.pending_matches, 1);
    assert_eq!(stats.avg_goals, 4.0);
}

#[test]
fn top_match_skips_unplayed_matches() {
    let matches = vec![unplayed("m1", "A", "B"), played("m2", "C", "D", (0, 0))];
    let top = top_scoring_match(&matches).expect("goalless finished match still counts");
    assert_eq!(top.id, "m2");
}

#[test]
fn league_statistics_match_flattened_seasons() {
    let first = vec![
        played("a1", "A", "B", (2, 1)),
        played("a2", "C", "D", (1, 1)),
    ];
    let second = vec![played("b1", "A", "C", (3, 0)), unplayed("b2", "B", "D")];
    let seasons = vec![season("s1", first.clone()), season("s2", second.clone())];

    let league = compute_league_statistics(&seasons);
    let flat = first.into_iter().chain(second).collect::<Vec<_>>();
    let flat_stats = compute_season_statistics(&flat);

    assert_eq!(league.total_seasons, 2);
    assert_eq!(league.total_matches, flat_stats.total_matches);
    assert_eq!(league.finished_matches, flat_stats.finished_matches);
    assert_eq!(league.total_goals, flat_stats.total_goals);
    assert_eq!(league.avg_goals, flat_stats.avg_goals);
}

#[test]
fn season_statistics_are_computed_on_construction() {
    let matches = vec![played("m1", "A", "B", (1, 0)), played("m2", "B", "A", (2, 2))];
    let season = season("s1", matches.clone());
    assert_eq!(season.statistics, compute_season_statistics(&matches));
}

#[test]
fn season_statistics_are_idempotent() {
    let matches = vec![
        played("m1", "A", "B", (2, 1)),
        unplayed("m2", "C", "D"),
        played("m3", "A", "C", (3, 0)),
    ];
    let first = compute_season_statistics(&matches);
    let second = compute_season_statistics(&matches);
    assert_eq!(first, second);
}

#[test]
fn most_wins_counts_wins_across_home_and_away() {
    let matches = vec![
        played("m1", "A", "B", (1, 0)),
        played("m2", "B", "C", (2, 0)),
        played("m3", "C", "B", (0, 1)),
        played("m4", "A", "C", (1, 1)),
    ];
    assert_eq!(most_wins(&matches).as_deref(), Some("B"));
}

#[test]
fn most_wins_tie_goes_to_first_winner() {
    let matches = vec![
        played("m1", "C", "D", (0, 2)),
        played("m2", "A", "B", (1, 0)),
    ];
    assert_eq!(most_wins(&matches).as_deref(), Some("D"));
}

#[test]
fn most_wins_is_none_without_decided_matches() {
    let matches = vec![played("m1", "A", "B", (1, 1)), unplayed("m2", "C", "D")];
    assert_eq!(most_wins(&matches), None);

    let seasons = vec![season("s1", matches)];
    assert_eq!(compute_league_statistics(&seasons).most_wins, None);
}

#[test]
fn completion_percent_counts_played_share() {
    let matches = vec![
        played("m1", "A", "B", (1, 0)),
        unplayed("m2", "C", "D"),
        unplayed("m3", "A", "C"),
        played("m4", "B", "D", (2, 2)),
    ];
    assert!(matches[0].is_finished());
    assert!(!matches[1].is_finished());

    let stats = compute_season_statistics(&matches);
    assert_eq!(stats.completion_percent(), 50.0);
    assert_eq!(compute_season_statistics(&[]).completion_percent(), 0.0);
    assert_eq!(
        compute_season_statistics(&[unplayed("m1", "A", "B")]).completion_percent(),
        0.0
    );
}
