use std::fs;
use std::path::PathBuf;

use wc_atlas::dataset::{load_finals, parse_finals};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn parses_finals_fixture() {
    let raw = fs::read_to_string(fixture_path("finals_sample.csv"))
        .expect("fixture file should be readable");
    let finals = parse_finals(&raw).expect("fixture should parse");
    assert_eq!(finals.len(), 3);

    assert_eq!(finals[0].year, 2010);
    assert_eq!(finals[0].winner, "Spain");
    assert_eq!(finals[0].runner_up, "Netherlands");
    assert_eq!(finals[0].venue, "Soccer City, Johannesburg");
    assert_eq!(finals[0].attendance, 84_490);

    assert_eq!(finals[2].score, "4-2");
    assert_eq!(finals[2].attendance, 78_011);
}

#[test]
fn loads_bundled_dataset() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data");
    path.push("world_cup_finals.csv");
    let finals = load_finals(&path).expect("bundled dataset should load");

    assert_eq!(finals.len(), 22);
    assert_eq!(finals.first().map(|f| f.year), Some(1930));
    assert_eq!(finals.last().map(|f| f.year), Some(2022));

    let brazil_wins = finals.iter().filter(|f| f.winner == "Brazil").count();
    assert_eq!(brazil_wins, 5);
}

#[test]
fn reordered_columns_still_parse() {
    let raw = "Winner,Year,Attendance,Runner-up,Score,Venue\nFrance,2018,\"78,011\",Croatia,4-2,Moscow\n";
    let finals = parse_finals(raw).expect("column order should not matter");
    assert_eq!(finals[0].year, 2018);
    assert_eq!(finals[0].winner, "France");
    assert_eq!(finals[0].attendance, 78_011);
}

#[test]
fn missing_column_reports_its_name() {
    let raw = "Year,Winner,Runner-up,Score,Venue\n2018,France,Croatia,4-2,Moscow\n";
    let err = parse_finals(raw).unwrap_err();
    assert!(err.to_string().contains("Attendance"));
}

#[test]
fn bad_year_reports_row_and_value() {
    let raw =
        "Year,Winner,Runner-up,Score,Venue,Attendance\nMMXVIII,France,Croatia,4-2,Moscow,\"78,011\"\n";
    let err = parse_finals(raw).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 2"));
    assert!(msg.contains("MMXVIII"));
}
