use wc_atlas::aggregate::{
    FinalLookupError, FinalRole, classify_year, map_universe, win_counts, win_profiles, wins_for,
};
use wc_atlas::countries;
use wc_atlas::dataset::FinalRecord;

fn record(year: u16, winner: &str, runner_up: &str, attendance: u32) -> FinalRecord {
    FinalRecord {
        year,
        winner: winner.to_string(),
        runner_up: runner_up.to_string(),
        score: "4-2".to_string(),
        venue: "Luzhniki Stadium, Moscow".to_string(),
        attendance,
    }
}

fn sample_finals() -> Vec<FinalRecord> {
    vec![
        record(2018, "France", "Croatia", 78_011),
        record(2022, "Argentina", "France", 75_000),
    ]
}

#[test]
fn win_counts_sum_to_final_count() {
    let finals = sample_finals();
    let counts = win_counts(&finals);
    assert_eq!(counts.values().sum::<u32>() as usize, finals.len());
    assert_eq!(counts.get("France"), Some(&1));
    assert_eq!(counts.get("Argentina"), Some(&1));
    assert_eq!(counts.get("Croatia"), None);
}

#[test]
fn lookup_returns_zero_for_unknown_countries() {
    let counts = win_counts(&sample_finals());
    assert_eq!(wins_for(&counts, "France"), 1);
    assert_eq!(wins_for(&counts, "Brazil"), 0);
    assert_eq!(wins_for(&counts, ""), 0);
}

#[test]
fn profiles_agree_with_counts() {
    let finals = vec![
        record(1998, "France", "Brazil", 80_000),
        record(2018, "France", "Croatia", 78_011),
        record(2022, "Argentina", "France", 88_966),
    ];
    let counts = win_counts(&finals);
    let profiles = win_profiles(&finals);
    assert_eq!(profiles.len(), counts.len());
    for (country, profile) in &profiles {
        assert_eq!(profile.win_years.len() as u32, wins_for(&counts, country));
    }

    let france = &profiles["France"];
    assert_eq!(france.win_years, vec![1998, 2018]);
    assert!((france.avg_attendance - 79_005.5).abs() < f64::EPSILON);
}

#[test]
fn profile_average_covers_only_winning_years() {
    let finals = sample_finals();
    let profiles = win_profiles(&finals);
    let france = &profiles["France"];
    assert_eq!(france.win_years, vec![2018]);
    assert!((france.avg_attendance - 78_011.0).abs() < f64::EPSILON);
}

#[test]
fn map_universe_covers_every_reference_country_once() {
    let counts = win_counts(&sample_finals());
    let entries = map_universe(countries::reference_names(), &counts);
    assert_eq!(entries.len(), countries::REFERENCE_COUNTRIES.len());

    let france = entries.iter().find(|e| e.country == "France").unwrap();
    assert_eq!(france.wins, 1);
    let brazil = entries.iter().find(|e| e.country == "Brazil").unwrap();
    assert_eq!(brazil.wins, 0);
}

#[test]
fn map_universe_drops_winners_outside_the_reference_list() {
    let finals = vec![record(1966, "England", "West Germany", 96_924)];
    let counts = win_counts(&finals);
    let entries = map_universe(countries::reference_names(), &counts);
    assert!(entries.iter().all(|e| e.country != "England"));
    assert!(entries.iter().all(|e| e.wins == 0));
}

#[test]
fn classify_year_labels_winner_and_runner_up() {
    let finals = sample_finals();
    let rows = classify_year(&finals, 2018).unwrap();

    let france = rows.iter().find(|r| r.country == "France").unwrap();
    assert_eq!(france.role, Some(FinalRole::Winner));
    assert_eq!(france.score, "4-2");
    assert_eq!(france.venue, "Luzhniki Stadium, Moscow");
    assert_eq!(france.attendance, Some(78_011));

    // Croatia never won but still gets its runner-up row.
    let croatia = rows.iter().find(|r| r.country == "Croatia").unwrap();
    assert_eq!(croatia.role, Some(FinalRole::RunnerUp));
    assert_eq!(croatia.attendance, Some(78_011));

    let argentina = rows.iter().find(|r| r.country == "Argentina").unwrap();
    assert_eq!(argentina.role, None);
    assert!(argentina.score.is_empty());
    assert!(argentina.venue.is_empty());
    assert_eq!(argentina.attendance, None);
}

#[test]
fn classify_year_rejects_missing_years() {
    let finals = sample_finals();
    assert_eq!(
        classify_year(&finals, 1930),
        Err(FinalLookupError::YearMissing(1930))
    );
}

#[test]
fn classify_year_rejects_duplicate_years() {
    let mut finals = sample_finals();
    finals.push(record(2018, "Brazil", "Italy", 60_000));
    assert_eq!(
        classify_year(&finals, 2018),
        Err(FinalLookupError::YearDuplicated {
            year: 2018,
            count: 2
        })
    );
}

#[test]
fn lookup_error_messages_are_user_facing() {
    assert_eq!(
        FinalLookupError::YearMissing(1931).to_string(),
        "no final recorded for 1931"
    );
}
