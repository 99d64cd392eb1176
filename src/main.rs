use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use league_history::config::ProviderConfig;
use league_history::export::{self, score_text};
use league_history::provider;
use league_history::state::{
    self, apply_delta, format_date, status_label, tier_label, AppState, InputField, LoadState,
    LoadTier, ProviderCommand, Screen,
};

const MAX_INPUT_LEN: usize = 40;

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
    export_dir: PathBuf,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>, export_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
            export_dir,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.input.is_some() {
            self.on_input_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('d') | KeyCode::Enter => {
                self.state.drill_down();
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                if self.state.help_overlay {
                    self.state.help_overlay = false;
                } else {
                    self.state.go_back();
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('c') => {
                self.state.reset_navigation();
                self.state.push_log("[INFO] Selections cleared");
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_load(true),
            KeyCode::Char('/') => self.begin_filter_input(InputField::Team),
            KeyCode::Char('f') => self.begin_filter_input(InputField::DateFrom),
            KeyCode::Char('t') => self.begin_filter_input(InputField::DateTo),
            KeyCode::Char('g') => self.begin_filter_input(InputField::Round),
            KeyCode::Char('0') => {
                if self.state.screen == Screen::Matches {
                    self.state.clear_match_filters();
                }
            }
            KeyCode::Char('x') | KeyCode::Char('X') => self.request_export(),
            _ => {}
        }
    }

    fn on_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.state.commit_input();
            }
            KeyCode::Esc => self.state.cancel_input(),
            KeyCode::Backspace => {
                self.state.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                if self.state.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.state.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn begin_filter_input(&mut self, field: InputField) {
        if self.state.screen != Screen::Matches {
            return;
        }
        self.state.begin_input(field);
    }

    fn request_load(&mut self, announce: bool) {
        let Some(tx) = &self.cmd_tx else {
            if announce {
                self.state.push_log("[INFO] Data loader unavailable");
            }
            return;
        };
        let request = self.state.begin_load(LoadTier::Countries);
        if tx.send(ProviderCommand::LoadCountries { request }).is_err() {
            self.state.finish_load(
                LoadTier::Countries,
                request,
                Err("Error loading countries: loader stopped".to_string()),
            );
            self.state.push_log("[WARN] Countries request failed");
        } else if announce {
            self.state
                .push_log(format!("[INFO] Countries request #{request} sent"));
        }
    }

    fn request_export(&mut self) {
        if self.state.screen != Screen::Matches {
            return;
        }
        let Some(season) = self.state.current_season() else {
            self.state.push_log("[INFO] No season selected for export");
            return;
        };
        let path = export::export_path(&self.export_dir, &season.id);
        let label = season_label(&self.state);
        let matches = self
            .state
            .filtered_matches()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Export unavailable");
            return;
        };
        let cmd = ProviderCommand::ExportMatches {
            path: path.display().to_string(),
            season: label,
            matches,
        };
        if tx.send(cmd).is_err() {
            self.state.push_log("[WARN] Export request failed");
        } else {
            self.state
                .push_log(format!("[INFO] Exporting to {}", path.display()));
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let cfg = ProviderConfig::from_env();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    provider::spawn_loader(provider::provider_from_config(&cfg), tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx), cfg.export_dir.clone());
    app.request_load(false);
    let res = run_app(&mut terminal, &mut app, rx);

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

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

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
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let countries = app.state.load_state(LoadTier::Countries);
    if app.state.countries.is_empty() && !matches!(countries, LoadState::Ready) {
        render_load_status(frame, chunks[1], countries);
    } else {
        match app.state.screen {
            Screen::Countries => render_countries(frame, chunks[1], &app.state),
            Screen::Leagues => render_leagues(frame, chunks[1], &app.state),
            Screen::Seasons => render_seasons(frame, chunks[1], &app.state),
            Screen::Matches => render_matches(frame, chunks[1], &app.state),
        }
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let mut crumbs = vec!["Countries".to_string()];
    if let Some(country) = state.current_country() {
        crumbs.push(format!("{} {}", country.flag, country.name));
    }
    if let Some(league) = state.current_league() {
        crumbs.push(league.name.clone());
    }
    if let Some(season) = state.current_season() {
        crumbs.push(season.name.clone());
    }

    let loads = LoadTier::ALL
        .iter()
        .filter_map(|tier| match state.load_state(*tier) {
            LoadState::Loading => Some(format!("{} loading", tier_label(*tier))),
            LoadState::Failed(_) => Some(format!("{} failed", tier_label(*tier))),
            _ => None,
        })
        .collect::<Vec<_>>();
    let status = if loads.is_empty() {
        String::new()
    } else {
        format!(" | {}", loads.join(", "))
    };

    let line1 = format!("  LEAGUE HISTORY | {}{}", crumbs.join(" > "), status);
    let line2 = format!("  {}", screen_label(state.screen));
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    if let Some(field) = state.input {
        return format!(
            "{}: {}_   (Enter apply, empty clears | Esc cancel)",
            input_label(field),
            state.input_buffer
        );
    }
    match state.screen {
        Screen::Countries => {
            "Enter Open | j/k/↑/↓ Move | r Reload | c Clear | ? Help | q Quit".to_string()
        }
        Screen::Leagues | Screen::Seasons => {
            "Enter Open | b/Esc Back | j/k/↑/↓ Move | r Reload | c Clear | ? Help | q Quit"
                .to_string()
        }
        Screen::Matches => {
            "/ Team | f From | t To | g Round | 0 Reset filters | x Export | b Back | ? Help | q Quit"
                .to_string()
        }
    }
}

fn render_load_status(frame: &mut Frame, area: Rect, load: &LoadState) {
    let (text, style) = match load {
        LoadState::Failed(msg) => (
            format!("{msg}\n\nPress r to retry."),
            Style::default().fg(Color::Red),
        ),
        LoadState::Loading => (
            "Loading countries...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        _ => (
            "No data loaded. Press r to load.".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_countries(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.countries.is_empty() {
        let empty =
            Paragraph::new("No countries available").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const CARD_HEIGHT: u16 = 7;
    const COLUMNS: usize = 3;
    let cells = grid_cells(area, state.countries.len(), COLUMNS, CARD_HEIGHT, state.selected);

    for (idx, cell) in cells {
        let country = &state.countries[idx];
        let mut lines = vec![
            format!("Code: {}", country.code),
            format!("Leagues: {}", country.leagues.len()),
        ];
        for league in country.leagues.iter().take(3) {
            lines.push(format!("  {} {}", league.logo, league.name));
        }
        let card = Paragraph::new(lines.join("\n")).block(
            Block::default()
                .title(format!("{} {}", country.flag, country.name))
                .borders(Borders::ALL)
                .border_style(card_border(idx == state.selected)),
        );
        frame.render_widget(card, cell);
    }
}

fn render_leagues(frame: &mut Frame, area: Rect, state: &AppState) {
    let leagues = state.visible_leagues();
    if leagues.is_empty() {
        let empty = Paragraph::new("No leagues for this country")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    const CARD_HEIGHT: u16 = 8;
    const COLUMNS: usize = 2;
    let cells = grid_cells(area, leagues.len(), COLUMNS, CARD_HEIGHT, state.selected);

    for (idx, cell) in cells {
        let league = &leagues[idx];
        let stats = &league.statistics;
        let text = [
            format!("Seasons: {}", stats.total_seasons),
            format!("Matches: {}", stats.total_matches),
            format!("Goals: {}", stats.total_goals),
            format!("Goals/match: {:.2}", stats.avg_goals),
            format!(
                "Most wins: {}",
                stats.most_wins.as_deref().unwrap_or("-")
            ),
        ]
        .join("\n");
        let card = Paragraph::new(text).block(
            Block::default()
                .title(format!("{} {}", league.logo, league.name))
                .borders(Borders::ALL)
                .border_style(card_border(idx == state.selected)),
        );
        frame.render_widget(card, cell);
    }
}

fn render_seasons(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(32)])
        .split(area);

    let seasons = state.visible_seasons();
    let list_block = Block::default().title("Seasons").borders(Borders::ALL);
    let inner = list_block.inner(columns[0]);
    frame.render_widget(list_block, columns[0]);

    if seasons.is_empty() {
        let empty = Paragraph::new("No seasons for this league")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    } else {
        const ROW_HEIGHT: u16 = 2;
        let visible = (inner.height / ROW_HEIGHT).max(1) as usize;
        let (start, end) = visible_range(state.selected, seasons.len(), visible);
        for (i, idx) in (start..end).enumerate() {
            let row_area = Rect {
                x: inner.x,
                y: inner.y + (i as u16) * ROW_HEIGHT,
                width: inner.width,
                height: ROW_HEIGHT.min(inner.height.saturating_sub((i as u16) * ROW_HEIGHT)),
            };
            let season = &seasons[idx];
            let selected = idx == state.selected;
            let text = format!(
                "{} {}  ({} to {})\n   {} matches, {} goals, {:.2} per match",
                if selected { ">" } else { " " },
                season.name,
                format_date(season.start),
                format_date(season.end),
                season.statistics.total_matches,
                season.statistics.total_goals,
                season.statistics.avg_goals,
            );
            frame.render_widget(Paragraph::new(text).style(row_style(selected)), row_area);
        }
    }

    let league_text = match state.current_league() {
        Some(league) => league_stats_text(league),
        None => "No league selected".to_string(),
    };
    let panel = Paragraph::new(league_text)
        .block(Block::default().title("League").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, columns[1]);
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(columns[0]);

    let filters = Paragraph::new(filters_text(state)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(filters, left[0]);

    let widths = match_columns();
    render_match_header(frame, left[1], widths);

    let list_area = left[2];
    let matches = state.filtered_matches();
    if matches.is_empty() {
        let text = if state.current_season().is_none() {
            "No season selected"
        } else {
            "No matches match the current filters"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
    } else if list_area.height > 0 {
        let visible = list_area.height as usize;
        let (start, end) = visible_range(state.selected, matches.len(), visible);
        for (i, idx) in (start..end).enumerate() {
            let row_area = Rect {
                x: list_area.x,
                y: list_area.y + i as u16,
                width: list_area.width,
                height: 1,
            };
            let m = matches[idx];
            let selected = idx == state.selected;
            let mut style = row_style(selected);
            if !selected && !m.is_finished() {
                style = style.fg(Color::DarkGray);
            }
            if selected {
                frame.render_widget(Block::default().style(style), row_area);
            }
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(widths)
                .split(row_area);

            render_cell_text(frame, cols[0], &format_date(m.date), style);
            render_cell_text(frame, cols[1], &m.round.to_string(), style);
            render_cell_text(frame, cols[2], &m.home, style);
            render_cell_text(frame, cols[3], &score_text(m), style);
            render_cell_text(frame, cols[4], &m.away, style);
            render_cell_text(frame, cols[5], status_label(m.status), style);
            render_cell_text(frame, cols[6], &m.venue, style);
        }
    }

    let panel = Paragraph::new(season_stats_text(state))
        .block(Block::default().title("Statistics").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, columns[1]);
}

fn match_columns() -> [Constraint; 7] {
    [
        Constraint::Length(11),
        Constraint::Length(4),
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Min(10),
    ]
}

fn render_match_header(frame: &mut Frame, area: Rect, widths: [Constraint; 7]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "Date", style);
    render_cell_text(frame, cols[1], "Rd", style);
    render_cell_text(frame, cols[2], "Home", style);
    render_cell_text(frame, cols[3], "Score", style);
    render_cell_text(frame, cols[4], "Away", style);
    render_cell_text(frame, cols[5], "Status", style);
    render_cell_text(frame, cols[6], "Venue", style);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, text_area);
}

fn filters_text(state: &AppState) -> String {
    let f = &state.filters;
    if f.is_empty() {
        return "Filters: none".to_string();
    }
    let mut parts = Vec::new();
    if let Some(team) = &f.team {
        parts.push(format!("team~\"{team}\""));
    }
    if let Some(from) = f.date_from {
        parts.push(format!("from {}", format_date(from)));
    }
    if let Some(to) = f.date_to {
        parts.push(format!("to {}", format_date(to)));
    }
    if let Some(round) = f.round {
        parts.push(format!("round {round}"));
    }
    format!("Filters: {}", parts.join(", "))
}

fn season_stats_text(state: &AppState) -> String {
    let Some(season) = state.current_season() else {
        return "Select a season to see its statistics".to_string();
    };
    let stats = &season.statistics;
    let top = match &stats.top_match {
        Some(m) => format!(
            "{} {} {}\n  ({} goals, round {})",
            m.home,
            score_text(m),
            m.away,
            m.total_goals().unwrap_or(0),
            m.round
        ),
        None => "-".to_string(),
    };
    let shown = state.filtered_matches().len();
    [
        format!("Season {}", season.name),
        String::new(),
        format!("Matches: {}", stats.total_matches),
        format!("Played: {}", stats.finished_matches),
        format!("Pending: {}", stats.pending_matches),
        format!("Completed: {:.1}%", stats.completion_percent()),
        format!("Teams: {}", stats.team_count),
        format!("Goals: {}", stats.total_goals),
        format!("Goals/match: {:.2}", stats.avg_goals),
        "Top scoring match:".to_string(),
        format!("  {top}"),
        String::new(),
        format!("Showing {shown} of {}", stats.total_matches),
        format!(
            "Last export: {}",
            state.last_export.as_deref().unwrap_or("-")
        ),
    ]
    .join("\n")
}

fn league_stats_text(league: &state::League) -> String {
    let stats = &league.statistics;
    [
        format!("{} {}", league.logo, league.name),
        String::new(),
        format!("Seasons: {}", stats.total_seasons),
        format!("Matches: {}", stats.total_matches),
        format!("Played: {}", stats.finished_matches),
        format!("Goals: {}", stats.total_goals),
        format!("Goals/match: {:.2}", stats.avg_goals),
        format!("Most wins: {}", stats.most_wins.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lays out `total` cards in rows of `columns`, scrolled so the selected card
/// stays visible. Returns `(item index, area)` pairs.
fn grid_cells(
    area: Rect,
    total: usize,
    columns: usize,
    card_height: u16,
    selected: usize,
) -> Vec<(usize, Rect)> {
    if area.height < card_height || area.width == 0 || columns == 0 {
        return Vec::new();
    }
    let rows_total = total.div_ceil(columns);
    let rows_visible = (area.height / card_height) as usize;
    let (row_start, row_end) = visible_range(selected / columns, rows_total, rows_visible);
    let card_width = area.width / columns as u16;

    let mut cells = Vec::new();
    for (r, row) in (row_start..row_end).enumerate() {
        for col in 0..columns {
            let idx = row * columns + col;
            if idx >= total {
                break;
            }
            cells.push((
                idx,
                Rect {
                    x: area.x + col as u16 * card_width,
                    y: area.y + r as u16 * card_height,
                    width: card_width,
                    height: card_height,
                },
            ));
        }
    }
    cells
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
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

fn card_border(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn season_label(state: &AppState) -> String {
    match (state.current_league(), state.current_season()) {
        (Some(league), Some(season)) => format!("{} {}", league.name, season.name),
        (None, Some(season)) => season.name.clone(),
        _ => String::new(),
    }
}

fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Countries => "Choose a country",
        Screen::Leagues => "Choose a league",
        Screen::Seasons => "Choose a season",
        Screen::Matches => "Matches",
    }
}

fn input_label(field: InputField) -> &'static str {
    match field {
        InputField::Team => "Team contains",
        InputField::DateFrom => "From date (YYYY-MM-DD)",
        InputField::DateTo => "To date (YYYY-MM-DD)",
        InputField::Round => "Round",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "League History - Help",
        "",
        "Navigation:",
        "  Enter / d    Open selection",
        "  b / Esc      Back",
        "  j/k or ↑/↓   Move",
        "  c            Clear selections",
        "  r            Reload data",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Matches:",
        "  /            Team filter",
        "  f / t        Date from / to",
        "  g            Round filter",
        "  0            Reset filters",
        "  x            Export shown matches (xlsx)",
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
