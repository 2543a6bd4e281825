use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use wc_atlas::aggregate::{self, FinalRole};
use wc_atlas::countries;
use wc_atlas::dataset;
use wc_atlas::export;
use wc_atlas::state::{
    AppState, MapMode, Screen, SelectorFocus, format_attendance, map_mode_label,
};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Atlas,
            KeyCode::Char('2') => self.state.screen = Screen::Finals,
            KeyCode::Char('b') | KeyCode::Esc => self.state.screen = Screen::Atlas,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Tab => {
                if self.state.screen == Screen::Atlas {
                    self.state.toggle_focus();
                }
            }
            KeyCode::Char('m') | KeyCode::Char('M') => self.state.toggle_map_mode(),
            KeyCode::Enter => {
                if self.state.screen == Screen::Finals {
                    self.state.adopt_finals_row();
                }
            }
            KeyCode::Char('e') | KeyCode::Char('E') => self.run_export(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn run_export(&mut self) {
        match export::export_workbook(&self.state.finals) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exported {} finals across {} winners to {}",
                report.finals,
                report.countries,
                report.path.display()
            )),
            Err(err) => self.state.push_log(format!("[WARN] Export failed: {err:#}")),
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    // Schema violations abort here, before the terminal is taken over.
    let (finals, source) = dataset::load_startup()?;
    let mut state = AppState::with_finals(finals, source);
    state.push_log(format!(
        "[INFO] Loaded {} finals from {}",
        state.finals.len(),
        state.dataset_source
    ));
    let dropped = countries::missing_winners(&aggregate::win_counts(&state.finals));
    if !dropped.is_empty() {
        state.push_log(format!(
            "[WARN] Winners not on the reference map: {}",
            dropped.join(", ")
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(state);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Atlas => render_atlas(frame, chunks[1], &app.state),
        Screen::Finals => render_finals(frame, chunks[1], &app.state),
    }

    let footer = Paragraph::new(footer_text(&app.state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::Atlas => format!(
            "WC ATLAS | Map: {} | Data: {}",
            map_mode_label(state.map_mode),
            state.dataset_source
        ),
        Screen::Finals => format!(
            "WC FINALS | {} recorded | Data: {}",
            state.finals.len(),
            state.dataset_source
        ),
    };
    let line1 = format!("  ___  {title}");
    let line2 = " (___)".to_string();
    let line3 = "  |_|".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Atlas => {
            "1 Atlas | 2 Finals | Tab Focus | j/k/↑/↓ Select | m Mode | e Export | ? Help | q Quit"
                .to_string()
        }
        Screen::Finals => {
            "1 Atlas | j/k/↑/↓ Move | Enter Year map | e Export | b/Esc Back | ? Help | q Quit"
                .to_string()
        }
    }
}

fn render_atlas(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);

    render_map(frame, columns[0], state);

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Min(6),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(5),
        ])
        .split(columns[1]);

    render_selector(
        frame,
        panel[0],
        "Country",
        &state.country_options,
        state.selected_country,
        state.focus == SelectorFocus::Country,
    );
    let years: Vec<String> = state.year_options.iter().map(u16::to_string).collect();
    render_selector(
        frame,
        panel[1],
        "Year",
        &years,
        state.selected_year,
        state.focus == SelectorFocus::Year,
    );
    render_summary(frame, panel[2], state);
    render_legend(frame, panel[3], state);
    render_console(frame, panel[4], state);
}

fn render_map(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.map_mode {
        MapMode::TotalWins => "World Cup wins by country".to_string(),
        MapMode::YearFinal => match state.selected_year_value() {
            Some(year) => format!("World Cup final {year}"),
            None => "World Cup final".to_string(),
        },
    };

    let points = map_points(state);
    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            for (lon, lat, color) in &points {
                ctx.print(*lon, *lat, Span::styled("●", Style::default().fg(*color)));
            }
        });
    frame.render_widget(canvas, area);
}

fn map_points(state: &AppState) -> Vec<(f64, f64, Color)> {
    match state.map_mode {
        MapMode::TotalWins => {
            let counts = aggregate::win_counts(&state.finals);
            aggregate::map_universe(countries::reference_names(), &counts)
                .into_iter()
                .filter_map(|entry| {
                    countries::centroid(&entry.country)
                        .map(|(lon, lat)| (lon, lat, bucket_color(entry.wins)))
                })
                .collect()
        }
        MapMode::YearFinal => {
            let Some(year) = state.selected_year_value() else {
                return Vec::new();
            };
            // Lookup failures render through the summary line instead.
            let Ok(rows) = aggregate::classify_year(&state.finals, year) else {
                return Vec::new();
            };
            rows.into_iter()
                .filter_map(|row| {
                    countries::centroid(&row.country)
                        .map(|(lon, lat)| (lon, lat, role_color(row.role)))
                })
                .collect()
        }
    }
}

// The aggregate view's fixed discrete palette, white for zero then light
// to dark red, bucketed at 5+.
fn bucket_color(wins: u32) -> Color {
    match wins {
        0 => Color::White,
        1 => Color::Rgb(0xfe, 0xe5, 0xd9),
        2 => Color::Rgb(0xfc, 0xae, 0x91),
        3 => Color::Rgb(0xfb, 0x6a, 0x4a),
        4 => Color::Rgb(0xde, 0x2d, 0x26),
        _ => Color::Rgb(0xa5, 0x0f, 0x15),
    }
}

fn role_color(role: Option<FinalRole>) -> Color {
    match role {
        Some(FinalRole::Winner) => Color::Green,
        Some(FinalRole::RunnerUp) => Color::Red,
        None => Color::DarkGray,
    }
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    selected: usize,
    focused: bool,
) {
    let heading = if focused {
        format!("{title} *")
    } else {
        title.to_string()
    };
    let block = Block::default().title(heading).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if items.is_empty() {
        let empty = Paragraph::new("No entries").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let (start, end) = visible_range(selected, items.len(), visible);
    let mut lines = Vec::new();
    for idx in start..end {
        let prefix = if idx == selected { "> " } else { "  " };
        let style = if idx == selected && focused {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else if idx == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("{prefix}{}", items[idx]), style));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Selection").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![state.country_summary(), state.year_summary()];
    if state.map_mode == MapMode::YearFinal
        && let Some(detail) = state.year_detail()
    {
        lines.push(detail);
    }
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

fn render_legend(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Legend").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match state.map_mode {
        MapMode::TotalWins => (0..=5u32)
            .map(|wins| {
                let label = match wins {
                    1 => "1 win".to_string(),
                    5 => "5+ wins".to_string(),
                    _ => format!("{wins} wins"),
                };
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(bucket_color(wins))),
                    Span::raw(label),
                ])
            })
            .collect(),
        MapMode::YearFinal => vec![
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Green)),
                Span::raw("Winner"),
            ]),
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Red)),
                Span::raw("Runner-up"),
            ]),
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::DarkGray)),
                Span::raw("No final"),
            ]),
        ],
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Console").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if state.logs.is_empty() {
        "No messages yet".to_string()
    } else {
        let take = inner.height.max(1) as usize;
        let mut recent: Vec<String> = state.logs.iter().rev().take(take).cloned().collect();
        recent.reverse();
        recent.join("\n")
    };
    frame.render_widget(Paragraph::new(text), inner);
}

fn finals_columns() -> [Constraint; 6] {
    [
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(13),
        Constraint::Min(24),
        Constraint::Length(11),
    ]
}

fn render_finals(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = finals_columns();
    render_finals_header(frame, sections[0], &widths);

    let list_area = sections[1];
    if state.finals.is_empty() {
        let empty = Paragraph::new("No finals loaded").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.finals_row, state.finals.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected = idx == state.finals_row;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let record = &state.finals[idx];
        render_cell_text(frame, cols[0], &record.year.to_string(), row_style);
        render_cell_text(frame, cols[1], &record.winner, row_style);
        render_cell_text(frame, cols[2], &record.runner_up, row_style);
        render_cell_text(frame, cols[3], &record.score, row_style);
        render_cell_text(frame, cols[4], &record.venue, row_style);
        render_cell_text(frame, cols[5], &format_attendance(record.attendance), row_style);
    }
}

fn render_finals_header(frame: &mut Frame, area: Rect, widths: &[Constraint]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "Year", style);
    render_cell_text(frame, cols[1], "Winner", style);
    render_cell_text(frame, cols[2], "Runner-up", style);
    render_cell_text(frame, cols[3], "Score", style);
    render_cell_text(frame, cols[4], "Venue", style);
    render_cell_text(frame, cols[5], "Attendance", style);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let paragraph = Paragraph::new(text.to_string()).style(style);
    frame.render_widget(paragraph, area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "WC Atlas - Help",
        "",
        "Global:",
        "  1            Atlas map",
        "  2            Finals table",
        "  b / Esc      Back to Atlas",
        "  m            Toggle wins/year map",
        "  e            Export workbook",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Atlas:",
        "  Tab          Switch country/year selector",
        "  j/k or ↑/↓   Move selection",
        "",
        "Finals:",
        "  j/k or ↑/↓   Move row",
        "  Enter        Show that final on the map",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
