use std::collections::{HashMap, HashSet};

use crate::state::{LeagueStatistics, Match, Season, SeasonStatistics};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct GoalTotals {
    matches: usize,
    finished: usize,
    goals: u32,
}

impl GoalTotals {
    fn average(self) -> f64 {
        average_goals(self.goals, self.finished)
    }
}

pub fn compute_season_statistics(matches: &[Match]) -> SeasonStatistics {
    let totals = goal_totals(matches);
    let teams = matches
        .iter()
        .flat_map(|m| [m.home.as_str(), m.away.as_str()])
        .collect::<HashSet<_>>();

    SeasonStatistics {
        total_matches: totals.matches,
        finished_matches: totals.finished,
        pending_matches: totals.matches - totals.finished,
        total_goals: totals.goals,
        avg_goals: totals.average(),
        top_match: top_scoring_match(matches).cloned(),
        team_count: teams.len(),
    }
}

pub fn compute_league_statistics(seasons: &[Season]) -> LeagueStatistics {
    let all = || seasons.iter().flat_map(|s| s.matches.iter());
    let totals = goal_totals(all());

    LeagueStatistics {
        total_seasons: seasons.len(),
        total_matches: totals.matches,
        finished_matches: totals.finished,
        total_goals: totals.goals,
        avg_goals: totals.average(),
        most_wins: most_wins(all()),
    }
}

/// Goals per finished match, rounded to two decimals; 0 with nothing played.
pub fn average_goals(goals: u32, finished: usize) -> f64 {
    if finished == 0 {
        return 0.0;
    }
    round2(f64::from(goals) / finished as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Finished match with the most combined goals. Ties keep the earliest match.
pub fn top_scoring_match<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Option<&'a Match> {
    let mut best: Option<(&Match, u32)> = None;
    for m in matches {
        let Some(goals) = m.total_goals() else {
            continue;
        };
        if best.is_none_or(|(_, max)| goals > max) {
            best = Some((m, goals));
        }
    }
    best.map(|(m, _)| m)
}

/// Team with the most wins. Ties go to the team that first recorded a win.
pub fn most_wins<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Option<String> {
    let mut wins: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in matches {
        let Some(winner) = m.winner() else {
            continue;
        };
        let count = wins.entry(winner).or_insert_with(|| {
            order.push(winner);
            0
        });
        *count += 1;
    }

    let mut best: Option<(&str, u32)> = None;
    for team in order {
        let count = wins.get(team).copied().unwrap_or(0);
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((team, count));
        }
    }
    best.map(|(team, _)| team.to_string())
}

fn goal_totals<'a>(matches: impl IntoIterator<Item = &'a Match>) -> GoalTotals {
    matches
        .into_iter()
        .fold(GoalTotals::default(), |mut acc, m| {
            acc.matches += 1;
            if let Some(goals) = m.total_goals() {
                acc.finished += 1;
                acc.goals += goals;
            }
            acc
        })
}
