use wc_atlas::dataset::FinalRecord;
use wc_atlas::state::{AppState, MapMode, Screen, SelectorFocus};

fn record(year: u16, winner: &str, runner_up: &str) -> FinalRecord {
    FinalRecord {
        year,
        winner: winner.to_string(),
        runner_up: runner_up.to_string(),
        score: "1-0".to_string(),
        venue: "Somewhere".to_string(),
        attendance: 60_000,
    }
}

fn sample_state() -> AppState {
    AppState::with_finals(
        vec![
            record(1958, "Brazil", "Sweden"),
            record(1998, "France", "Brazil"),
            record(2018, "France", "Croatia"),
            record(2022, "Argentina", "France"),
        ],
        "test".to_string(),
    )
}

#[test]
fn defaults_point_at_brazil_and_latest_year() {
    let state = sample_state();
    assert_eq!(state.selected_country_name(), Some("Brazil"));
    assert_eq!(state.selected_year_value(), Some(2022));
    assert_eq!(state.screen, Screen::Atlas);
    assert_eq!(state.map_mode, MapMode::TotalWins);
}

#[test]
fn selector_navigation_clamps_at_both_ends() {
    let mut state = sample_state();
    assert_eq!(state.focus, SelectorFocus::Country);

    state.select_prev();
    assert_eq!(state.selected_country, 0);

    for _ in 0..10 {
        state.select_next();
    }
    assert_eq!(state.selected_country, state.country_options.len() - 1);

    state.toggle_focus();
    assert_eq!(state.focus, SelectorFocus::Year);
    state.select_prev();
    state.select_prev();
    assert_eq!(state.selected_year_value(), Some(1958));
    state.select_prev();
    assert_eq!(state.selected_year_value(), Some(1958));
}

#[test]
fn country_summary_matches_dashboard_text() {
    let state = sample_state();
    assert_eq!(
        state.country_summary(),
        "Brazil has won the World Cup 1 times."
    );
}

#[test]
fn year_summary_names_both_finalists() {
    let state = sample_state();
    assert_eq!(
        state.year_summary(),
        "In 2022, the winner was Argentina and the runner-up was France."
    );
}

#[test]
fn year_summary_surfaces_duplicate_years_as_message() {
    let mut state = sample_state();
    state.finals.push(record(2022, "Brazil", "Italy"));
    let summary = state.year_summary();
    assert!(summary.contains("2022"));
    assert!(summary.contains("unique"));
}

#[test]
fn finals_row_adoption_jumps_to_year_map() {
    let mut state = sample_state();
    state.screen = Screen::Finals;
    state.select_next();
    state.select_next();
    state.adopt_finals_row();

    assert_eq!(state.screen, Screen::Atlas);
    assert_eq!(state.map_mode, MapMode::YearFinal);
    assert_eq!(state.selected_year_value(), Some(2018));
}

#[test]
fn log_ring_is_bounded() {
    let mut state = sample_state();
    for i in 0..500 {
        state.push_log(format!("[INFO] message {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] message 499"));
}
