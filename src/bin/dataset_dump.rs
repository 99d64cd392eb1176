use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use league_history::config::ProviderConfig;
use league_history::{dataset_file, mock_data};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let cfg = ProviderConfig::from_env();

    let out = parse_path_arg("--out").unwrap_or(cfg.dataset_path);
    let seed = parse_seed_arg().or(cfg.mock_seed);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let countries = mock_data::generate_dataset(&mut rng).context("generate mock dataset")?;
    dataset_file::write_dataset(&out, &countries)?;

    println!("Dataset written");
    println!("Path: {}", out.display());
    match seed {
        Some(seed) => println!("Seed: {seed}"),
        None => println!("Seed: random"),
    }
    for country in &countries {
        for league in &country.leagues {
            println!(
                "{} / {}: seasons={} matches={} goals={}",
                country.name,
                league.name,
                league.statistics.total_seasons,
                league.statistics.total_matches,
                league.statistics.total_goals
            );
        }
    }

    Ok(())
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    arg_value(flag).map(PathBuf::from)
}

fn parse_seed_arg() -> Option<u64> {
    arg_value("--seed").and_then(|raw| raw.parse::<u64>().ok())
}

fn arg_value(flag: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
