use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::provider::DataProvider;
use crate::state::{Country, League, Match, MatchStatus, Score, Season};

pub const ROUNDS: u32 = 10;
pub const MAX_GOALS: u8 = 3;

pub const SPAIN_TEAMS: [&str; 6] = [
    "Real Madrid",
    "Barcelona",
    "Atlético Madrid",
    "Sevilla",
    "Valencia",
    "Real Sociedad",
];
pub const ENGLAND_TEAMS: [&str; 6] = [
    "Manchester City",
    "Liverpool",
    "Chelsea",
    "Arsenal",
    "Manchester United",
    "Tottenham",
];
pub const ITALY_TEAMS: [&str; 6] = ["Juventus", "Inter Milan", "AC Milan", "Napoli", "Roma", "Lazio"];

struct SeasonSeed {
    id: &'static str,
    name: &'static str,
    start_year: i32,
}

struct CountrySeed {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    flag: &'static str,
    league_id: &'static str,
    league_name: &'static str,
    teams: &'static [&'static str],
    seasons: &'static [SeasonSeed],
}

const SEEDS: [CountrySeed; 3] = [
    CountrySeed {
        id: "spain",
        name: "Spain",
        code: "ES",
        flag: "🇪🇸",
        league_id: "laliga",
        league_name: "La Liga",
        teams: &SPAIN_TEAMS,
        seasons: &[
            SeasonSeed {
                id: "laliga-2023",
                name: "2023-24",
                start_year: 2023,
            },
            SeasonSeed {
                id: "laliga-2022",
                name: "2022-23",
                start_year: 2022,
            },
        ],
    },
    CountrySeed {
        id: "england",
        name: "England",
        code: "GB",
        flag: "🇬🇧",
        league_id: "premier",
        league_name: "Premier League",
        teams: &ENGLAND_TEAMS,
        seasons: &[SeasonSeed {
            id: "premier-2023",
            name: "2023-24",
            start_year: 2023,
        }],
    },
    CountrySeed {
        id: "italy",
        name: "Italy",
        code: "IT",
        flag: "🇮🇹",
        league_id: "seriea",
        league_name: "Serie A",
        teams: &ITALY_TEAMS,
        seasons: &[SeasonSeed {
            id: "seriea-2023",
            name: "2023-24",
            start_year: 2023,
        }],
    },
];

/// In-memory stand-in for a real data service.
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
    seed: Option<u64>,
}

impl MockProvider {
    pub fn new(delay: Duration, seed: Option<u64>) -> Self {
        Self { delay, seed }
    }
}

impl DataProvider for MockProvider {
    fn fetch_countries(&self) -> Result<Vec<Country>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_dataset(&mut rng)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn generate_dataset<R: Rng>(rng: &mut R) -> Result<Vec<Country>> {
    let mut countries = Vec::with_capacity(SEEDS.len());
    for seed in &SEEDS {
        let mut seasons = Vec::with_capacity(seed.seasons.len());
        for season in seed.seasons {
            let start = ymd(season.start_year, 8, 1)?;
            let end = ymd(season.start_year + 1, 5, 31)?;
            let matches = generate_matches(seed.teams, season.id, season.start_year, rng)?;
            seasons.push(Season::new(
                season.id,
                season.name,
                seed.league_id,
                start,
                end,
                matches,
            ));
        }
        let league = League::new(seed.league_id, seed.league_name, seed.id, "⚽", seasons);
        countries.push(Country {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
            flag: seed.flag.to_string(),
            leagues: vec![league],
        });
    }
    Ok(countries)
}

/// Every round pairs teams by index: 0 v 1, 2 v 3, ... An odd team out sits
/// the round out.
pub fn generate_matches<R: Rng>(
    teams: &[&str],
    season_id: &str,
    start_year: i32,
    rng: &mut R,
) -> Result<Vec<Match>> {
    let base = ymd(start_year, 8, 31)?;
    let mut matches = Vec::with_capacity(teams.len() / 2 * ROUNDS as usize);
    let mut next_id = 1;

    for round in 1..=ROUNDS {
        let date = base
            .checked_add_days(Days::new(u64::from(round) * 7))
            .with_context(|| format!("round {round} date out of range"))?;
        for pair in teams.chunks_exact(2) {
            let (home, away) = (pair[0], pair[1]);
            matches.push(Match {
                id: format!("{season_id}-match-{next_id}"),
                season_id: season_id.to_string(),
                home: home.to_string(),
                away: away.to_string(),
                score: Some(Score {
                    home: rng.gen_range(0..=MAX_GOALS),
                    away: rng.gen_range(0..=MAX_GOALS),
                }),
                date,
                round,
                venue: format!("{home} Stadium"),
                status: MatchStatus::Finished,
            });
            next_id += 1;
        }
    }

    Ok(matches)
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month}-{day}"))
}
