use std::collections::HashMap;

use thiserror::Error;

use crate::dataset::FinalRecord;

/// Win years plus average final attendance for one country, computed only
/// over the finals that country won.
#[derive(Debug, Clone, PartialEq)]
pub struct WinProfile {
    pub win_years: Vec<u16>,
    pub avg_attendance: f64,
}

/// One reference-list country ready for map coloring, zero-filled when the
/// country never won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub country: String,
    pub wins: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalRole {
    Winner,
    RunnerUp,
}

/// Per-country classification for a selected year. Score/venue/attendance
/// are carried only on the two labeled rows; the rest keep empty
/// placeholders so downstream joins stay uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct YearStatusRow {
    pub country: String,
    pub role: Option<FinalRole>,
    pub score: String,
    pub venue: String,
    pub attendance: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinalLookupError {
    #[error("no final recorded for {0}")]
    YearMissing(u16),
    #[error("{count} finals recorded for {year}; the year column must be unique")]
    YearDuplicated { year: u16, count: usize },
}

/// Count finals won per country. Spellings are not normalized: a country
/// appearing under two names counts as two countries.
pub fn win_counts(finals: &[FinalRecord]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::with_capacity(finals.len());
    for record in finals {
        *counts.entry(record.winner.clone()).or_insert(0) += 1;
    }
    counts
}

/// Win count for an open-ended selection. Unknown names mean zero wins,
/// never an error.
pub fn wins_for(counts: &HashMap<String, u32>, country: &str) -> u32 {
    counts.get(country).copied().unwrap_or(0)
}

pub fn win_profiles(finals: &[FinalRecord]) -> HashMap<String, WinProfile> {
    struct Acc {
        years: Vec<u16>,
        attendance_sum: u64,
    }

    let mut groups: HashMap<String, Acc> = HashMap::new();
    for record in finals {
        let acc = groups.entry(record.winner.clone()).or_insert_with(|| Acc {
            years: Vec::new(),
            attendance_sum: 0,
        });
        acc.years.push(record.year);
        acc.attendance_sum += u64::from(record.attendance);
    }

    groups
        .into_iter()
        .map(|(country, mut acc)| {
            acc.years.sort_unstable();
            let avg_attendance = acc.attendance_sum as f64 / acc.years.len() as f64;
            (
                country,
                WinProfile {
                    win_years: acc.years,
                    avg_attendance,
                },
            )
        })
        .collect()
}

/// Outer-join the win counts against the fixed reference list, filling
/// zero for non-winners. Winners absent from the reference list are
/// dropped from the output; that mismatch is reported once at startup,
/// not patched here.
pub fn map_universe<'a, I>(reference: I, counts: &HashMap<String, u32>) -> Vec<MapEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    reference
        .into_iter()
        .map(|name| MapEntry {
            country: name.to_string(),
            wins: wins_for(counts, name),
        })
        .collect()
}

/// Classify every country of the win universe (plus the selected final's
/// two sides, which may include a never-winning runner-up) for one year.
/// Exactly one final must carry that year; zero and duplicates are both
/// recoverable lookup errors, never an arbitrary row.
pub fn classify_year(
    finals: &[FinalRecord],
    year: u16,
) -> Result<Vec<YearStatusRow>, FinalLookupError> {
    let mut matched = finals.iter().filter(|record| record.year == year);
    let Some(record) = matched.next() else {
        return Err(FinalLookupError::YearMissing(year));
    };
    let extra = matched.count();
    if extra > 0 {
        return Err(FinalLookupError::YearDuplicated {
            year,
            count: extra + 1,
        });
    }

    let mut universe: Vec<String> = win_counts(finals).into_keys().collect();
    for side in [&record.winner, &record.runner_up] {
        if !universe.iter().any(|name| name == side.as_str()) {
            universe.push(side.clone());
        }
    }
    universe.sort_unstable();

    Ok(universe
        .into_iter()
        .map(|country| {
            let role = if country == record.winner {
                Some(FinalRole::Winner)
            } else if country == record.runner_up {
                Some(FinalRole::RunnerUp)
            } else {
                None
            };
            if role.is_some() {
                YearStatusRow {
                    country,
                    role,
                    score: record.score.clone(),
                    venue: record.venue.clone(),
                    attendance: Some(record.attendance),
                }
            } else {
                YearStatusRow {
                    country,
                    role: None,
                    score: String::new(),
                    venue: String::new(),
                    attendance: None,
                }
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u16, winner: &str, runner_up: &str) -> FinalRecord {
        FinalRecord {
            year,
            winner: winner.to_string(),
            runner_up: runner_up.to_string(),
            score: "1-0".to_string(),
            venue: "Somewhere".to_string(),
            attendance: 50_000,
        }
    }

    #[test]
    fn counts_attribute_one_win_per_final() {
        let finals = vec![
            record(1998, "France", "Brazil"),
            record(2018, "France", "Croatia"),
            record(2022, "Argentina", "France"),
        ];
        let counts = win_counts(&finals);
        assert_eq!(counts.values().sum::<u32>() as usize, finals.len());
        assert_eq!(wins_for(&counts, "France"), 2);
        assert_eq!(wins_for(&counts, "Croatia"), 0);
    }

    #[test]
    fn distinct_spellings_stay_distinct() {
        let finals = vec![
            record(1954, "West Germany", "Hungary"),
            record(2014, "Germany", "Argentina"),
        ];
        let counts = win_counts(&finals);
        assert_eq!(wins_for(&counts, "Germany"), 1);
        assert_eq!(wins_for(&counts, "West Germany"), 1);
    }
}
