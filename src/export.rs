use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::state::{Match, format_date, status_label};
use crate::stats;

/// Writes `matches` to an xlsx workbook and returns the number of match rows.
pub fn export_matches(path: &Path, season: &str, matches: &[Match]) -> Result<usize> {
    let mut match_rows = vec![vec![
        "Date".to_string(),
        "Round".to_string(),
        "Home".to_string(),
        "Away".to_string(),
        "Score".to_string(),
        "Status".to_string(),
        "Venue".to_string(),
    ]];
    for m in matches {
        match_rows.push(vec![
            format_date(m.date),
            m.round.to_string(),
            m.home.clone(),
            m.away.clone(),
            score_text(m),
            status_label(m.status).to_string(),
            m.venue.clone(),
        ]);
    }

    let summary = stats::compute_season_statistics(matches);
    let top = summary
        .top_match
        .as_ref()
        .map(|m| format!("{} {} {}", m.home, score_text(m), m.away))
        .unwrap_or_default();
    let summary_rows = vec![
        vec!["Season".to_string(), season.to_string()],
        vec!["Matches".to_string(), summary.total_matches.to_string()],
        vec!["Played".to_string(), summary.finished_matches.to_string()],
        vec!["Pending".to_string(), summary.pending_matches.to_string()],
        vec!["Goals".to_string(), summary.total_goals.to_string()],
        vec!["Goals per match".to_string(), format!("{:.2}", summary.avg_goals)],
        vec!["Top scoring match".to_string(), top],
        vec!["Teams".to_string(), summary.team_count.to_string()],
    ];

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Matches")?;
        write_rows(sheet, &match_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary")?;
        write_rows(sheet, &summary_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(match_rows.len().saturating_sub(1))
}

/// `<dir>/<season_id>_matches.xlsx`
pub fn export_path(dir: &Path, season_id: &str) -> PathBuf {
    let stem = season_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect::<String>();
    dir.join(format!("{stem}_matches.xlsx"))
}

pub fn score_text(m: &Match) -> String {
    match m.score {
        Some(score) => format!("{}-{}", score.home, score.away),
        None => "-".to_string(),
    }
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
