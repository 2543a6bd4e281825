use std::collections::VecDeque;

use crate::aggregate::{self, FinalRole};
use crate::dataset::FinalRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Atlas,
    Finals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    TotalWins,
    YearFinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorFocus {
    Country,
    Year,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub map_mode: MapMode,
    pub focus: SelectorFocus,
    pub finals: Vec<FinalRecord>,
    pub dataset_source: String,
    pub country_options: Vec<String>,
    pub year_options: Vec<u16>,
    pub selected_country: usize,
    pub selected_year: usize,
    pub finals_row: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Atlas,
            map_mode: MapMode::TotalWins,
            focus: SelectorFocus::Country,
            finals: Vec::new(),
            dataset_source: String::new(),
            country_options: Vec::new(),
            year_options: Vec::new(),
            selected_country: 0,
            selected_year: 0,
            finals_row: 0,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
        }
    }

    pub fn with_finals(finals: Vec<FinalRecord>, dataset_source: String) -> Self {
        let mut country_options: Vec<String> =
            aggregate::win_counts(&finals).into_keys().collect();
        country_options.sort_unstable();

        let mut year_options: Vec<u16> = finals.iter().map(|record| record.year).collect();
        year_options.sort_unstable();
        year_options.dedup();

        // Dashboard defaults: Brazil and the most recent final.
        let selected_country = country_options
            .iter()
            .position(|name| name == "Brazil")
            .unwrap_or(0);
        let selected_year = year_options.len().saturating_sub(1);

        let mut state = Self::new();
        state.finals = finals;
        state.dataset_source = dataset_source;
        state.country_options = country_options;
        state.year_options = year_options;
        state.selected_country = selected_country;
        state.selected_year = selected_year;
        state
    }

    pub fn selected_country_name(&self) -> Option<&str> {
        self.country_options
            .get(self.selected_country)
            .map(String::as_str)
    }

    pub fn selected_year_value(&self) -> Option<u16> {
        self.year_options.get(self.selected_year).copied()
    }

    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Finals => bump(&mut self.finals_row, self.finals.len()),
            Screen::Atlas => match self.focus {
                SelectorFocus::Country => {
                    bump(&mut self.selected_country, self.country_options.len())
                }
                SelectorFocus::Year => bump(&mut self.selected_year, self.year_options.len()),
            },
        }
    }

    pub fn select_prev(&mut self) {
        let slot = match self.screen {
            Screen::Finals => &mut self.finals_row,
            Screen::Atlas => match self.focus {
                SelectorFocus::Country => &mut self.selected_country,
                SelectorFocus::Year => &mut self.selected_year,
            },
        };
        *slot = slot.saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SelectorFocus::Country => SelectorFocus::Year,
            SelectorFocus::Year => SelectorFocus::Country,
        };
    }

    pub fn toggle_map_mode(&mut self) {
        self.map_mode = match self.map_mode {
            MapMode::TotalWins => MapMode::YearFinal,
            MapMode::YearFinal => MapMode::TotalWins,
        };
        self.push_log(format!(
            "[INFO] Map mode: {}",
            map_mode_label(self.map_mode)
        ));
    }

    /// Enter on the finals table: pin the year selector to the highlighted
    /// final and jump back to the yearly map.
    pub fn adopt_finals_row(&mut self) {
        let Some(record) = self.finals.get(self.finals_row) else {
            return;
        };
        if let Some(pos) = self
            .year_options
            .iter()
            .position(|year| *year == record.year)
        {
            self.selected_year = pos;
        }
        self.map_mode = MapMode::YearFinal;
        self.screen = Screen::Atlas;
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    /// The country selector's callback line.
    pub fn country_summary(&self) -> String {
        let Some(name) = self.selected_country_name() else {
            return "No winner selected".to_string();
        };
        let counts = aggregate::win_counts(&self.finals);
        format!(
            "{name} has won the World Cup {} times.",
            aggregate::wins_for(&counts, name)
        )
    }

    /// The year selector's callback line. A failed lookup renders as the
    /// recoverable message, never an arbitrary final.
    pub fn year_summary(&self) -> String {
        let Some(year) = self.selected_year_value() else {
            return "No year selected".to_string();
        };
        match aggregate::classify_year(&self.finals, year) {
            Ok(rows) => {
                let winner = rows.iter().find(|row| row.role == Some(FinalRole::Winner));
                let runner_up = rows
                    .iter()
                    .find(|row| row.role == Some(FinalRole::RunnerUp));
                match (winner, runner_up) {
                    (Some(winner), Some(runner_up)) => format!(
                        "In {year}, the winner was {} and the runner-up was {}.",
                        winner.country, runner_up.country
                    ),
                    _ => format!("no final data for {year}"),
                }
            }
            Err(err) => err.to_string(),
        }
    }

    /// Score/venue/attendance line for the selected year's final.
    pub fn year_detail(&self) -> Option<String> {
        let year = self.selected_year_value()?;
        let rows = aggregate::classify_year(&self.finals, year).ok()?;
        let winner = rows
            .iter()
            .find(|row| row.role == Some(FinalRole::Winner))?;
        let attendance = winner
            .attendance
            .map(format_attendance)
            .unwrap_or_else(|| "-".to_string());
        Some(format!("{} | {} | {attendance}", winner.score, winner.venue))
    }
}

fn bump(idx: &mut usize, len: usize) {
    if len != 0 && *idx + 1 < len {
        *idx += 1;
    }
}

pub fn map_mode_label(mode: MapMode) -> &'static str {
    match mode {
        MapMode::TotalWins => "WINS",
        MapMode::YearFinal => "YEAR",
    }
}

pub fn format_attendance(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_attendance;

    #[test]
    fn attendance_formats_with_separators() {
        assert_eq!(format_attendance(500), "500");
        assert_eq!(format_attendance(78_011), "78,011");
        assert_eq!(format_attendance(173_850), "173,850");
    }
}
