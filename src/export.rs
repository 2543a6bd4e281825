use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::aggregate;
use crate::dataset::FinalRecord;
use crate::state::format_attendance;

pub struct ExportReport {
    pub path: PathBuf,
    pub finals: usize,
    pub countries: usize,
}

/// Write the finals table and both derived tables to a timestamped
/// workbook in the working directory.
pub fn export_workbook(finals: &[FinalRecord]) -> Result<ExportReport> {
    let path = PathBuf::from(format!(
        "wc_atlas_{}.xlsx",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    export_workbook_to(&path, finals)
}

pub fn export_workbook_to(path: &Path, finals: &[FinalRecord]) -> Result<ExportReport> {
    let mut workbook = Workbook::new();

    let mut finals_rows = vec![vec![
        "Year".to_string(),
        "Winner".to_string(),
        "Runner-up".to_string(),
        "Score".to_string(),
        "Venue".to_string(),
        "Attendance".to_string(),
    ]];
    for record in finals {
        finals_rows.push(vec![
            record.year.to_string(),
            record.winner.clone(),
            record.runner_up.clone(),
            record.score.clone(),
            record.venue.clone(),
            format_attendance(record.attendance),
        ]);
    }

    let counts = aggregate::win_counts(finals);
    let mut count_entries: Vec<(&String, &u32)> = counts.iter().collect();
    count_entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let mut counts_rows = vec![vec!["Country".to_string(), "Wins".to_string()]];
    for (country, wins) in count_entries {
        counts_rows.push(vec![country.clone(), wins.to_string()]);
    }

    let profiles = aggregate::win_profiles(finals);
    let mut profile_entries: Vec<_> = profiles.iter().collect();
    profile_entries.sort_by(|a, b| a.0.cmp(b.0));
    let mut profile_rows = vec![vec![
        "Country".to_string(),
        "Win Years".to_string(),
        "Avg Attendance".to_string(),
    ]];
    for (country, profile) in profile_entries {
        let years = profile
            .win_years
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        profile_rows.push(vec![
            country.clone(),
            years,
            format!("{:.0}", profile.avg_attendance),
        ]);
    }

    write_sheet(workbook.add_worksheet(), "Finals", &finals_rows)?;
    write_sheet(workbook.add_worksheet(), "Win Counts", &counts_rows)?;
    write_sheet(workbook.add_worksheet(), "Win Profiles", &profile_rows)?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        finals: finals.len(),
        countries: counts.len(),
    })
}

fn write_sheet(sheet: &mut Worksheet, name: &str, rows: &[Vec<String>]) -> Result<()> {
    sheet
        .set_name(name)
        .with_context(|| format!("name sheet {name}"))?;
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .write_string(r as u32, c as u16, value)
                .context("write cell")?;
        }
    }
    sheet.autofit();
    Ok(())
}
