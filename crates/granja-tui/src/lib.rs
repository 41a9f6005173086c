// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use granja_app::{
    AppCommand, AppEvent, AppState, FarmSnapshot, Field, FieldCondition, FieldId, OverviewCounts,
    PageKind, SidebarVisibility,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const CURSOR_PREFIX: &str = "> ";
const ACTIVE_MARK: &str = "●";
const WARNING_MARK: char = '!';
const YIELD_BAR_CELL: &str = "█";
const YIELD_BAR_MAX_WIDTH: usize = 24;
const SIDEBAR_WIDTH: u16 = 26;

/// Color tokens resolved from configuration. The variants map straight onto
/// terminal colors; widgets never hardcode anything beyond these four roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub ok: Color,
    pub warn: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            ok: Color::Green,
            warn: Color::Yellow,
            text: Color::White,
        }
    }
}

pub trait AppRuntime {
    fn load_farm(&mut self) -> Result<FarmSnapshot>;

    fn load_overview_counts(&mut self) -> Result<OverviewCounts> {
        Ok(self.load_farm()?.overview_counts())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct MapUiState {
    cursor: usize,
    selected: Option<FieldId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ListUiState {
    page: Option<PageKind>,
    selected_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct SidebarUiState {
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    farm: FarmSnapshot,
    counts: OverviewCounts,
    map: MapUiState,
    list: ListUiState,
    sidebar: SidebarUiState,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R, theme: Theme) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data, theme)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    if state.sidebar == SidebarVisibility::Visible {
        handle_sidebar_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    if view_data.map.selected.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            view_data.map.selected = None;
            emit_status(state, view_data, internal_tx, "details closed");
        }
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            view_data.help_visible = true;
            emit_status(state, view_data, internal_tx, "help open");
            return false;
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            view_data.sidebar.cursor = PageKind::ALL
                .iter()
                .position(|page| *page == state.page)
                .unwrap_or(0);
            dispatch_and_refresh(state, runtime, view_data, AppCommand::ToggleSidebar, internal_tx);
            return false;
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::NextPage, internal_tx);
            return false;
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::PrevPage, internal_tx);
            return false;
        }
        (KeyCode::Esc, _) => {
            state.dispatch(AppCommand::ClearStatus);
            return false;
        }
        _ => {}
    }

    match state.page {
        PageKind::Dashboard => handle_map_key(state, view_data, internal_tx, key),
        PageKind::Fields => handle_field_list_key(state, view_data, internal_tx, key),
        PageKind::Tasks => handle_task_list_key(view_data, key),
        PageKind::Planning => {}
    }

    false
}

fn handle_sidebar_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let last = PageKind::ALL.len().saturating_sub(1);
            view_data.sidebar.cursor = (view_data.sidebar.cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.sidebar.cursor = view_data.sidebar.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let page = PageKind::ALL[view_data.sidebar.cursor.min(PageKind::ALL.len() - 1)];
            dispatch_and_refresh(
                state,
                runtime,
                view_data,
                AppCommand::GoToPage(page),
                internal_tx,
            );
        }
        KeyCode::Esc | KeyCode::Char('m') => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::CloseSidebar, internal_tx);
        }
        _ => {}
    }
}

fn handle_map_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_map_cursor(view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_map_cursor(view_data, -1),
        KeyCode::Char('g') => view_data.map.cursor = 0,
        KeyCode::Char('G') => {
            view_data.map.cursor = view_data.farm.fields.len().saturating_sub(1);
        }
        KeyCode::Enter => {
            let cursor = view_data.map.cursor;
            open_field_details(state, view_data, internal_tx, cursor);
        }
        _ => {}
    }
}

fn handle_field_list_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let len = view_data.farm.fields.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_list_cursor(view_data, 1, len),
        KeyCode::Char('k') | KeyCode::Up => move_list_cursor(view_data, -1, len),
        KeyCode::Char('g') => view_data.list.selected_row = 0,
        KeyCode::Char('G') => view_data.list.selected_row = len.saturating_sub(1),
        KeyCode::Enter => {
            let row = view_data.list.selected_row;
            open_field_details(state, view_data, internal_tx, row);
        }
        _ => {}
    }
}

fn handle_task_list_key(view_data: &mut ViewData, key: KeyEvent) {
    let len = view_data.farm.tasks.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_list_cursor(view_data, 1, len),
        KeyCode::Char('k') | KeyCode::Up => move_list_cursor(view_data, -1, len),
        KeyCode::Char('g') => view_data.list.selected_row = 0,
        KeyCode::Char('G') => view_data.list.selected_row = len.saturating_sub(1),
        _ => {}
    }
}

// Selection is only ever set to a member of the fixed field list.
fn open_field_details(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    index: usize,
) {
    let Some(field) = view_data.farm.fields.get(index) else {
        emit_status(state, view_data, internal_tx, "no field selected");
        return;
    };
    let name = field.name.clone();
    view_data.map.selected = Some(field.id);
    emit_status(state, view_data, internal_tx, format!("details: {name}"));
}

fn move_map_cursor(view_data: &mut ViewData, delta: isize) {
    let len = view_data.farm.fields.len();
    if len == 0 {
        view_data.map.cursor = 0;
        return;
    }
    let next = view_data.map.cursor as isize + delta;
    view_data.map.cursor = next.clamp(0, len as isize - 1) as usize;
}

fn move_list_cursor(view_data: &mut ViewData, delta: isize, len: usize) {
    if len == 0 {
        view_data.list.selected_row = 0;
        return;
    }
    let next = view_data.list.selected_row as isize + delta;
    view_data.list.selected_row = next.clamp(0, len as isize - 1) as usize;
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    if should_refresh_view(&events)
        && let Err(error) = refresh_view_data(state, runtime, view_data)
    {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("load failed: {error}"),
        );
    }
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
}

fn should_refresh_view(events: &[AppEvent]) -> bool {
    events
        .iter()
        .any(|event| matches!(event, AppEvent::PageChanged(_)))
}

fn refresh_view_data<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.farm = runtime.load_farm()?;
    view_data.counts = runtime.load_overview_counts()?;

    if view_data.list.page != Some(state.page) {
        view_data.list = ListUiState {
            page: Some(state.page),
            selected_row: 0,
        };
    }
    let field_count = view_data.farm.fields.len();
    view_data.map.cursor = view_data.map.cursor.min(field_count.saturating_sub(1));
    let list_len = match state.page {
        PageKind::Tasks => view_data.farm.tasks.len(),
        _ => field_count,
    };
    view_data.list.selected_row = view_data.list.selected_row.min(list_len.saturating_sub(1));

    if let Some(id) = view_data.map.selected
        && view_data.farm.field(id).is_none()
    {
        view_data.map.selected = None;
    }
    Ok(())
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData, theme: Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = PageKind::ALL
        .iter()
        .position(|page| *page == state.page)
        .unwrap_or(0);
    let page_titles = PageKind::ALL
        .iter()
        .map(|page| page.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(page_titles)
        .block(Block::default().title("granja").borders(Borders::ALL))
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.page {
        PageKind::Dashboard => render_dashboard(frame, layout[1], view_data, theme),
        PageKind::Fields => render_field_table(frame, layout[1], view_data),
        PageKind::Tasks => render_task_table(frame, layout[1], view_data),
        PageKind::Planning => {
            let body = Paragraph::new(render_planning_text())
                .block(Block::default().borders(Borders::ALL).title("planning"));
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(theme.warn))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if state.sidebar == SidebarVisibility::Visible {
        let area = sidebar_rect(frame.area());
        frame.render_widget(Clear, area);
        let sidebar = Paragraph::new(render_sidebar_text(state, view_data.sidebar.cursor)).block(
            Block::default()
                .title("menu")
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.accent)),
        );
        frame.render_widget(sidebar, area);
    }

    if let Some(id) = view_data.map.selected
        && let Some(field) = view_data.farm.field(id)
    {
        let area = centered_rect(48, 42, frame.area());
        frame.render_widget(Clear, area);
        let detail = Paragraph::new(render_field_detail_text(field)).block(
            Block::default()
                .title("field details")
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.accent)),
        );
        frame.render_widget(detail, area);
    }

    if view_data.help_visible {
        let area = centered_rect(72, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_dashboard(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData, theme: Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(columns[1]);

    let crops = Paragraph::new(render_crop_status_text(&view_data.farm, view_data.counts))
        .block(Block::default().borders(Borders::ALL).title("crop status"));
    frame.render_widget(crops, left[0]);

    let tasks = Paragraph::new(render_tasks_text(&view_data.farm)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("upcoming tasks"),
    );
    frame.render_widget(tasks, left[1]);

    let map_area = right[0];
    let map = Paragraph::new(render_field_map_text(
        &view_data.farm,
        view_data.map,
        map_area.width.saturating_sub(2) as usize,
        map_area.height.saturating_sub(3) as usize,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("field map")
            .style(Style::default().fg(theme.ok)),
    );
    frame.render_widget(map, map_area);

    let chart = Paragraph::new(render_yield_chart_text(&view_data.farm)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("yield forecast"),
    );
    frame.render_widget(chart, right[1]);
}

fn render_field_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let columns = ["id", "name", "crop", "condition", "area ha", "yield t/ha", "moisture"];
    let rows = field_table_rows(&view_data.farm);
    render_list_table(frame, area, "fields", &columns, rows, view_data.list.selected_row);
}

fn render_task_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let columns = ["id", "due", "kind", "title"];
    let rows = task_table_rows(&view_data.farm);
    render_list_table(frame, area, "tasks", &columns, rows, view_data.list.selected_row);
}

fn render_list_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    columns: &[&str],
    rows: Vec<Vec<String>>,
    selected_row: usize,
) {
    let widths = vec![Constraint::Min(8); columns.len().max(1)];
    let header_cells = columns.iter().map(|label| {
        Cell::from(*label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let body = rows.into_iter().enumerate().map(|(row_index, cells)| {
        let mut style = Style::default();
        if row_index == selected_row {
            style = style.bg(Color::DarkGray);
        }
        Row::new(
            cells
                .into_iter()
                .map(|text| Cell::from(text).style(style))
                .collect::<Vec<_>>(),
        )
    });

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title(title.to_owned()).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn field_table_rows(farm: &FarmSnapshot) -> Vec<Vec<String>> {
    farm.fields
        .iter()
        .map(|field| {
            vec![
                field.id.get().to_string(),
                field.name.clone(),
                field.crop.clone(),
                field.condition.label().to_owned(),
                format!("{:.1}", field.area_ha),
                format!("{:.1}", field.expected_yield_t_ha),
                format!("{}%", field.soil_moisture_pct),
            ]
        })
        .collect()
}

fn task_table_rows(farm: &FarmSnapshot) -> Vec<Vec<String>> {
    farm.tasks
        .iter()
        .map(|task| {
            vec![
                task.id.get().to_string(),
                task.due.to_string(),
                format!("{} {}", task.kind.glyph(), task.kind.label()),
                task.title.clone(),
            ]
        })
        .collect()
}

fn render_crop_status_text(farm: &FarmSnapshot, counts: OverviewCounts) -> String {
    let mut lines = vec![
        format!(
            "fields: {} ({} warning) | open tasks: {}",
            counts.fields_total, counts.fields_warning, counts.tasks_open
        ),
        String::new(),
    ];
    let name_width = farm
        .crops
        .iter()
        .map(|status| status.crop.chars().count())
        .max()
        .unwrap_or(0);
    for status in &farm.crops {
        lines.push(format!(
            "{:<name_width$}  {:<8}  {}",
            status.crop,
            status.health.label(),
            status.forecast,
        ));
    }
    lines.join("\n")
}

fn render_tasks_text(farm: &FarmSnapshot) -> String {
    let mut lines = Vec::with_capacity(farm.tasks.len());
    for task in &farm.tasks {
        lines.push(format!("{} {}  {}", task.kind.glyph(), task.due, task.title));
    }
    lines.join("\n")
}

fn render_yield_chart_text(farm: &FarmSnapshot) -> String {
    let max = farm
        .yields
        .iter()
        .map(|sample| sample.tonnes_per_ha)
        .fold(0.0_f64, f64::max);
    let mut lines = Vec::with_capacity(farm.yields.len());
    for sample in &farm.yields {
        let bar_len = if max > 0.0 {
            ((sample.tonnes_per_ha / max) * YIELD_BAR_MAX_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "{:<3} {:<width$} {:>5.1} t/ha",
            sample.period,
            YIELD_BAR_CELL.repeat(bar_len),
            sample.tonnes_per_ha,
            width = YIELD_BAR_MAX_WIDTH,
        ));
    }
    lines.join("\n")
}

/// Place field markers into a character grid scaled from their percentage
/// positions. Warning fields carry a trailing marker, the cursor field is
/// bracketed.
fn field_map_lines(
    farm: &FarmSnapshot,
    cursor: usize,
    width: usize,
    height: usize,
) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut grid = vec![vec![' '; width]; height];
    for (index, field) in farm.fields.iter().enumerate() {
        let marker = field_marker(field, index == cursor);
        let row = (usize::from(field.row_pct) * height.saturating_sub(1)) / 100;
        let col = (usize::from(field.col_pct) * width.saturating_sub(1)) / 100;
        let start = col.min(width.saturating_sub(marker.chars().count()));
        for (offset, ch) in marker.chars().enumerate() {
            if let Some(cell) = grid.get_mut(row).and_then(|line| line.get_mut(start + offset)) {
                *cell = ch;
            }
        }
    }

    grid.into_iter().map(|line| line.into_iter().collect()).collect()
}

fn field_marker(field: &Field, is_cursor: bool) -> String {
    let mut marker = field.id.get().to_string();
    if field.condition == FieldCondition::Warning {
        marker.push(WARNING_MARK);
    }
    if is_cursor {
        format!("[{marker}]")
    } else {
        marker
    }
}

fn render_field_map_text(farm: &FarmSnapshot, map: MapUiState, width: usize, height: usize) -> String {
    let mut lines = field_map_lines(farm, map.cursor, width, height);
    let footer = farm
        .fields
        .get(map.cursor)
        .map(|field| {
            format!(
                "{CURSOR_PREFIX}{} | {} | {}",
                field.name,
                field.crop,
                field.condition.label()
            )
        })
        .unwrap_or_else(|| "no fields".to_owned());
    lines.push(footer);
    lines.join("\n")
}

fn render_field_detail_text(field: &Field) -> String {
    [
        field.name.clone(),
        String::new(),
        format!("crop:            {}", field.crop),
        format!("condition:       {}", field.condition.label()),
        format!("area:            {:.1} ha", field.area_ha),
        format!("expected yield:  {:.1} t/ha", field.expected_yield_t_ha),
        format!("soil moisture:   {}%", field.soil_moisture_pct),
        String::new(),
        "esc close".to_owned(),
    ]
    .join("\n")
}

fn render_sidebar_text(state: &AppState, cursor: usize) -> String {
    let mut lines = Vec::with_capacity(PageKind::ALL.len() + 2);
    for (index, page) in PageKind::ALL.iter().enumerate() {
        let prefix = if index == cursor { CURSOR_PREFIX } else { "  " };
        let active = if *page == state.page { ACTIVE_MARK } else { " " };
        lines.push(format!("{prefix}{active} {} {}", page.glyph(), page.label()));
    }
    lines.push(String::new());
    lines.push("j/k move | enter go | esc close".to_owned());
    lines.join("\n")
}

fn render_planning_text() -> &'static str {
    "Season planning is not available yet.\n\nUpcoming releases will cover rotation plans,\nseeding windows, and input budgeting."
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    if state.sidebar == SidebarVisibility::Visible {
        return "j/k move | enter go | esc close".to_owned();
    }
    if view_data.map.selected.is_some() {
        return "esc close details".to_owned();
    }
    match state.page {
        PageKind::Dashboard => "j/k field | enter details | m menu | f/b page | ? help".to_owned(),
        PageKind::Fields => "j/k row | enter details | m menu | f/b page | ? help".to_owned(),
        PageKind::Tasks => "j/k row | m menu | f/b page | ? help".to_owned(),
        PageKind::Planning => "m menu | f/b page | ? help | ctrl-q quit".to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "granja keys\n\n  m        open/close menu\n  f / b    next / previous page\n  j / k    move cursor\n  g / G    first / last entry\n  enter    open field details\n  esc      close overlay / clear status\n  ?        toggle this help\n  ctrl-q   quit"
}

fn sidebar_rect(area: Rect) -> Rect {
    let width = SIDEBAR_WIDTH.min(area.width);
    let height = area.height.saturating_sub(5);
    Rect::new(area.x, area.y + 3, width, height.max(1))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
