use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::debug;
use vex_inventory::{Catalog, Category, CategorySelector, Intent, Outcome, PartDefinition, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Inventory,
    Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub inventory_state: TableState,
    pub catalog_state: TableState,
    pub show_detail: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let session = Session::new(catalog);

        let mut catalog_state = TableState::default();
        if !session.visible_parts().is_empty() {
            catalog_state.select(Some(0));
        }

        Self {
            session,
            focus: Focus::Inventory,
            input_mode: InputMode::Normal,
            inventory_state: TableState::default(),
            catalog_state,
            show_detail: false,
        }
    }

    /// Apply one intent and keep both table selections in range
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let filter_change = matches!(intent, Intent::SetCategory(_) | Intent::SetSearchText(_));
        let outcome = self.session.dispatch(intent);
        debug!(?outcome, "intent applied");

        if filter_change {
            // Reset selection to first item
            self.catalog_state.select(None);
        }
        clamp_selection(&mut self.catalog_state, self.session.visible_parts().len());
        clamp_selection(&mut self.inventory_state, self.session.inventory().len());

        if !self.session.show_add_parts() {
            self.focus = Focus::Inventory;
        }

        outcome
    }

    pub fn selected_inventory_id(&self) -> Option<String> {
        self.inventory_state
            .selected()
            .and_then(|i| self.session.inventory().entries().get(i))
            .map(|entry| entry.id().to_string())
    }

    pub fn selected_catalog_id(&self) -> Option<String> {
        self.catalog_state
            .selected()
            .and_then(|i| self.session.visible_parts().get(i).map(|p| p.id.clone()))
    }

    fn selected_id(&self) -> Option<String> {
        match self.focus {
            Focus::Inventory => self.selected_inventory_id(),
            Focus::Catalog => self.selected_catalog_id(),
        }
    }

    /// Part shown in the detail panel
    pub fn selected_part(&self) -> Option<&PartDefinition> {
        match self.focus {
            Focus::Inventory => self
                .inventory_state
                .selected()
                .and_then(|i| self.session.inventory().entries().get(i))
                .map(|entry| &entry.part),
            Focus::Catalog => self
                .catalog_state
                .selected()
                .and_then(|i| self.session.visible_parts().get(i).copied()),
        }
    }

    pub fn toggle_add_panel(&mut self) {
        if let Outcome::PanelToggled { visible: true } = self.apply(Intent::ToggleAddPanel) {
            self.focus = Focus::Catalog;
        }
    }

    pub fn toggle_focus(&mut self) {
        if !self.session.show_add_parts() {
            return;
        }
        self.focus = match self.focus {
            Focus::Inventory => Focus::Catalog,
            Focus::Catalog => Focus::Inventory,
        };
    }

    pub fn add_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.apply(Intent::add_one(id));
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.apply(Intent::remove_one(id));
        }
    }

    pub fn next_category(&mut self) {
        let next = self.session.category().next();
        self.apply(Intent::SetCategory(next));
    }

    pub fn previous_category(&mut self) {
        let previous = self.session.category().previous();
        self.apply(Intent::SetCategory(previous));
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut text = self.session.search_text().to_string();
        text.push(c);
        self.apply(Intent::SetSearchText(text));
    }

    pub fn pop_search_char(&mut self) {
        let mut text = self.session.search_text().to_string();
        if text.pop().is_some() {
            self.apply(Intent::SetSearchText(text));
        }
    }

    pub fn clear_filters(&mut self) {
        self.apply(Intent::SetSearchText(String::new()));
        self.apply(Intent::SetCategory(CategorySelector::All));
    }

    pub fn start_search(&mut self) {
        if !self.session.show_add_parts() {
            self.toggle_add_panel();
        }
        self.focus = Focus::Catalog;
        self.input_mode = InputMode::Search;
    }

    fn focused_state(&mut self) -> (&mut TableState, usize) {
        match self.focus {
            Focus::Inventory => (&mut self.inventory_state, self.session.inventory().len()),
            Focus::Catalog => {
                let len = self.session.visible_parts().len();
                (&mut self.catalog_state, len)
            }
        }
    }

    pub fn next(&mut self) {
        let (state, len) = self.focused_state();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let (state, len) = self.focused_state();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn first(&mut self) {
        let (state, len) = self.focused_state();
        if len > 0 {
            state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        let (state, len) = self.focused_state();
        if len > 0 {
            state.select(Some(len - 1));
        }
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.input_mode == InputMode::Search {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => self.pop_search_char(),
                KeyCode::Down => self.next(),
                KeyCode::Up => self.previous(),
                KeyCode::Char(c) => self.push_search_char(c),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('a') => self.toggle_add_panel(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char('d') => self.show_detail = !self.show_detail,
            KeyCode::Char('+') | KeyCode::Char('=') => self.add_selected(),
            KeyCode::Char('-') => self.remove_selected(),
            KeyCode::Enter => match self.focus {
                Focus::Catalog => self.add_selected(),
                Focus::Inventory => self.show_detail = !self.show_detail,
            },
            KeyCode::Right | KeyCode::Char('l') if self.session.show_add_parts() => {
                self.next_category()
            }
            KeyCode::Left | KeyCode::Char('h') if self.session.show_add_parts() => {
                self.previous_category()
            }
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            _ => {}
        }

        false
    }
}

fn clamp_selection(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    match state.selected() {
        None => state.select(Some(0)),
        Some(i) if i >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Structure => Color::Blue,
        Category::Motion => Color::Green,
        Category::Electronics => Color::Magenta,
        Category::Pneumatics => Color::LightRed,
        Category::Hardware => Color::Red,
    }
}

fn pane_border(app: &App, pane: Focus) -> Style {
    if app.session.show_add_parts() && app.focus == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with totals
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    // Content area with optional detail panel on the right
    let content = if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        render_detail_panel(f, content_chunks[1], app);
        content_chunks[0]
    } else {
        chunks[1]
    };

    if app.session.show_add_parts() {
        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content);
        render_inventory(f, panes[0], app);
        render_add_parts(f, panes[1], app);
    } else {
        render_inventory(f, content, app);
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let panel_hint = if app.session.show_add_parts() {
        "Hide Parts"
    } else {
        "Add Parts"
    };

    let header_text = vec![Line::from(vec![
        Span::styled(
            "VEX Inventory",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} total parts", app.session.total_count()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", panel_hint)),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_inventory(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border(app, Focus::Inventory))
        .title(" Current Inventory ");

    if app.session.inventory().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No parts in inventory",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Start by adding some VEX parts to your inventory",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = table_header(&["Qty", "Name", "Part #", "Category"]);

    let rows = app.session.inventory().entries().iter().map(|entry| {
        let color = category_color(entry.part.category);
        Row::new(vec![
            Cell::from(format!("{:>4}", entry.quantity))
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Cell::from(truncate(&entry.part.name, 28)),
            Cell::from(entry.part.part_number.clone()).style(Style::default().fg(Color::LightBlue)),
            Cell::from(entry.part.category.as_str()).style(Style::default().fg(color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(30),
            Constraint::Length(10),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.inventory_state);
}

fn render_add_parts(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filters(f, chunks[0], app);
    render_catalog(f, chunks[1], app);
}

fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    let searching = app.input_mode == InputMode::Search;

    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.session.search_text().to_string(),
            Style::default().fg(Color::White),
        ),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if app.session.search_text().is_empty() {
        spans.push(Span::styled(
            "parts or part numbers...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }

    spans.push(Span::raw("   "));
    for (i, choice) in CategorySelector::ALL_CHOICES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }

        let style = if *choice == app.session.category() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            match choice {
                CategorySelector::All => Style::default().fg(Color::DarkGray),
                CategorySelector::Only(category) => Style::default().fg(category_color(*category)),
            }
        };
        spans.push(Span::styled(choice.label(), style));
    }

    let border = if searching { Color::Yellow } else { Color::White };
    let filters = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Add Parts to Inventory "),
    );

    f.render_widget(filters, area);
}

fn render_catalog(f: &mut Frame, area: Rect, app: &mut App) {
    let header = table_header(&["Name", "Part #", "Category", "Owned"]);

    let inventory = app.session.inventory();
    let visible = app.session.visible_parts();
    let count = visible.len();

    let rows = visible.iter().map(|part| {
        let owned = inventory.quantity_of(&part.id);
        let owned_cell = if owned > 0 {
            Cell::from(format!("{} owned", owned)).style(Style::default().fg(Color::Green))
        } else {
            Cell::from("")
        };

        Row::new(vec![
            Cell::from(truncate(&part.name, 28)),
            Cell::from(part.part_number.clone()).style(Style::default().fg(Color::LightBlue)),
            Cell::from(part.category.as_str()).style(Style::default().fg(category_color(part.category))),
            owned_cell,
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(30),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border(app, Focus::Catalog))
            .title(format!(" Parts ({}) ", count)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.catalog_state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Part Details ");

    let part = match app.selected_part() {
        Some(p) => p,
        None => {
            f.render_widget(Paragraph::new("No part selected").block(block), area);
            return;
        }
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let owned = app.session.inventory().quantity_of(&part.id);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            part.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Part #: ", label),
            Span::styled(part.part_number.clone(), Style::default().fg(Color::LightBlue)),
        ]),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::styled(part.category.as_str(), Style::default().fg(category_color(part.category))),
        ]),
        Line::from(vec![
            Span::styled("Owned: ", label),
            Span::raw(owned.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            part.description.clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press d to close",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let detail_panel = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(detail_panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);

    let status_spans = if app.input_mode == InputMode::Search {
        vec![
            Span::styled(" SEARCH ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" type to filter | "),
            Span::styled("Backspace", key),
            Span::raw(" Delete | "),
            Span::styled("Enter/Esc", key),
            Span::raw(" Done"),
        ]
    } else {
        let mut spans = vec![
            Span::styled("+/-", key),
            Span::raw(" Qty | "),
            Span::styled("a", key),
            Span::raw(" Parts | "),
        ];
        if app.session.show_add_parts() {
            spans.extend([
                Span::styled("Tab", key),
                Span::raw(" Focus | "),
                Span::styled("Enter", key),
                Span::raw(" Add | "),
                Span::styled("/", key),
                Span::raw(" Search | "),
                Span::styled("←/→", key),
                Span::raw(" Category | "),
                Span::styled("c", key),
                Span::raw(" Clear | "),
            ]);
        }
        spans.extend([
            Span::styled("d", key),
            Span::raw(" Details | "),
            Span::styled("↑/↓", key),
            Span::raw(" Nav | "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" Quit"),
        ]);
        spans
    };

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn table_header(titles: &[&'static str]) -> Row<'static> {
    let header_cells = titles.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_with_panel_hidden_and_catalog_selected() {
        let app = app();

        assert!(!app.session.show_add_parts());
        assert_eq!(app.focus, Focus::Inventory);
        assert_eq!(app.catalog_state.selected(), Some(0));
        assert_eq!(app.inventory_state.selected(), None);
    }

    #[test]
    fn test_toggle_panel_moves_focus() {
        let mut app = app();

        press(&mut app, KeyCode::Char('a'));
        assert!(app.session.show_add_parts());
        assert_eq!(app.focus, Focus::Catalog);

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.session.show_add_parts());
        assert_eq!(app.focus, Focus::Inventory);
    }

    #[test]
    fn test_add_from_catalog_then_adjust_in_inventory() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));

        // First catalog row is the C-Channel (id 1)
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.inventory().quantity_of("1"), 2);
        assert_eq!(app.inventory_state.selected(), Some(0));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Inventory);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.session.total_count(), 3);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert!(app.session.inventory().is_empty());
        assert_eq!(app.inventory_state.selected(), None);
    }

    #[test]
    fn test_search_mode_edits_search_text() {
        let mut app = app();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        assert!(app.session.show_add_parts());

        // 'q' is text while searching, not quit
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "omni");
        assert_eq!(app.session.search_text(), "omni");
        assert_eq!(app.session.visible_parts().len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.selected_catalog_id(), Some("6".to_string()));
    }

    #[test]
    fn test_category_keys_cycle_selector() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.category(), CategorySelector::Only(Category::Motion));
        assert_eq!(app.selected_catalog_id(), Some("6".to_string()));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.category(), CategorySelector::Only(Category::Hardware));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.category(), CategorySelector::All);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::End);
        assert_eq!(app.catalog_state.selected(), Some(23));

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        assert_eq!(app.catalog_state.selected(), None);
        assert_eq!(app.selected_catalog_id(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.catalog_state.selected(), Some(23));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.catalog_state.selected(), Some(0));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_detail_follows_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('d'));

        assert!(app.show_detail);
        assert_eq!(app.selected_part().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("2.75\" Traction Wheel", 10), "2.75\" T...");
        assert_eq!(truncate("↑↑↑↑↑↑", 5), "↑↑...");
    }
}
