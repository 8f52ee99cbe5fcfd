// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! A thin presentation adapter over the core: key presses become engine
//! commands, and each frame recomputes the narration and diagram projections
//! from the current state. The community feed runs on a worker thread and
//! reports back over a channel, so the single render loop never blocks.

use std::error::Error;
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::community::{self, CommunityRecipe};
use crate::engine;
use crate::layout::{self, CanvasSize};
use crate::model::{Catalog, SelectionState};
use crate::narrate;
use crate::render;

const ACTIVE_COLOR: Color = Color::LightGreen;
const DIM_COLOR: Color = Color::DarkGray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Randomize,
    Pick,
}

impl Mode {
    fn status(self) -> &'static str {
        match self {
            Self::Randomize => "Mode: Randomize",
            Self::Pick => "Mode: Pick your own",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Loaded(Vec<CommunityRecipe>),
    Failed(String),
}

pub struct App {
    catalog: Catalog,
    state: SelectionState,
    rng: StdRng,
    mode: Mode,
    focus_category: usize,
    focus_item: usize,
    feed: FeedState,
    feed_rx: Option<mpsc::Receiver<Result<Vec<CommunityRecipe>, String>>>,
    fetch_enabled: bool,
    should_quit: bool,
}

impl App {
    /// Builds the app and performs the initial randomize, exactly like the
    /// session lifecycle: start empty, populate immediately.
    pub fn new(catalog: Catalog, seed: Option<u64>, fetch_enabled: bool) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = SelectionState::new();
        engine::randomize_all(&mut state, &catalog, &mut rng);

        Self {
            catalog,
            state,
            rng,
            mode: Mode::Randomize,
            focus_category: 0,
            focus_item: 0,
            feed: FeedState::Idle,
            feed_rx: None,
            fetch_enabled,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                engine::randomize_all(&mut self.state, &self.catalog, &mut self.rng);
                self.mode = Mode::Randomize;
            }
            KeyCode::Char('a') => {
                engine::refresh_amounts(&mut self.state, &self.catalog, &mut self.rng);
            }
            KeyCode::Char('x') => engine::reset(&mut self.state),
            KeyCode::Char('m') => {
                self.mode = match self.mode {
                    Mode::Randomize => Mode::Pick,
                    Mode::Pick => Mode::Randomize,
                };
            }
            KeyCode::Left => self.focus_category_by(-1),
            KeyCode::Right | KeyCode::Tab => self.focus_category_by(1),
            KeyCode::Up => self.focus_item_by(-1),
            KeyCode::Down => self.focus_item_by(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_focused(),
            KeyCode::Char('c') => self.collapse_focused(),
            KeyCode::Char('s') => engine::toggle_style_collapse(&mut self.state),
            KeyCode::Char('f') => self.request_feed(),
            _ => {}
        }
    }

    fn focus_category_by(&mut self, delta: i32) {
        let count = self.catalog.categories().len();
        if count == 0 {
            return;
        }
        let next = (self.focus_category as i32 + delta).rem_euclid(count as i32);
        self.focus_category = next as usize;
        self.focus_item = 0;
    }

    fn focus_item_by(&mut self, delta: i32) {
        let Some(category) = self.catalog.categories().get(self.focus_category) else {
            return;
        };
        let count = category.items().len();
        if count == 0 {
            return;
        }
        let next = (self.focus_item as i32 + delta).rem_euclid(count as i32);
        self.focus_item = next as usize;
    }

    fn toggle_focused(&mut self) {
        let Some(category) = self.catalog.categories().get(self.focus_category) else {
            return;
        };
        let Some(item) = category.items().get(self.focus_item) else {
            return;
        };
        let category_id = category.id().as_str().to_owned();
        let item_id = item.id().as_str().to_owned();
        engine::toggle(&mut self.state, &self.catalog, &category_id, &item_id);
        self.mode = Mode::Pick;
    }

    fn collapse_focused(&mut self) {
        let Some(category) = self.catalog.categories().get(self.focus_category) else {
            return;
        };
        if category.is_style() {
            engine::toggle_style_collapse(&mut self.state);
        } else {
            let category_id = category.id().as_str().to_owned();
            engine::toggle_category_collapse(&mut self.state, &self.catalog, &category_id);
        }
    }

    pub fn request_feed(&mut self) {
        if !self.fetch_enabled || matches!(self.feed, FeedState::Loading) {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.feed = FeedState::Loading;
        self.feed_rx = Some(rx);
        thread::spawn(move || {
            let result = community::fetch_recipes().map_err(|err| err.to_string());
            let _ = tx.send(result);
        });
    }

    pub fn poll_feed(&mut self) {
        let Some(rx) = &self.feed_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(recipes)) => {
                self.feed = FeedState::Loaded(recipes);
                self.feed_rx = None;
            }
            Ok(Err(message)) => {
                tracing::warn!(%message, "community feed failed");
                self.feed = FeedState::Failed(message);
                self.feed_rx = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.feed = FeedState::Failed("feed worker went away".to_owned());
                self.feed_rx = None;
            }
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

/// Runs the interactive loop until quit.
pub fn run(mut app: App) -> Result<(), Box<dyn Error>> {
    let mut session = TerminalSession::new()?;
    if app.fetch_enabled {
        app.request_feed();
    }

    while !app.should_quit {
        app.poll_feed();
        session.terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = rows[0];
    let footer_area = rows[1];

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_area);
    let diagram_area = panes[0];
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(34),
            Constraint::Percentage(28),
        ])
        .split(panes[1]);

    draw_diagram(frame, diagram_area, app);
    draw_pantry(frame, sidebar[0], app);
    draw_steps(frame, sidebar[1], app);
    draw_community(frame, sidebar[2], app);
    draw_footer(frame, footer_area, app);
}

fn draw_diagram(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Cook flow");
    let inner = block.inner(area);
    let size = CanvasSize::new(i32::from(inner.width), i32::from(inner.height));
    let graph = layout::layout(app.state(), app.catalog(), size);
    let text = render::render_diagram(&graph);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_pantry(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(category) = app.catalog().categories().get(app.focus_category) else {
        return;
    };
    let collapsed = if category.is_style() {
        app.state().style_collapsed()
    } else {
        app.state().is_category_collapsed(category.id().as_str())
    };
    let title = if collapsed {
        format!("Pantry: {} (collapsed)", category.label())
    } else {
        format!("Pantry: {}", category.label())
    };

    let items = category
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let cursor = if idx == app.focus_item { '>' } else { ' ' };
            let mark = if app.state().is_selected(category.id().as_str(), item.id().as_str()) {
                "[x]"
            } else {
                "[ ]"
            };
            let line = match app.state().amount(item.id().as_str()) {
                Some(amount) => format!("{cursor} {mark} {} - {amount}", item.name()),
                None => format!("{cursor} {mark} {}", item.name()),
            };
            let style = if mark == "[x]" {
                Style::default().fg(ACTIVE_COLOR)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_steps(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let steps = narrate::narrate(app.state(), app.catalog());
    let lines = steps
        .iter()
        .enumerate()
        .map(|(idx, step)| Line::from(format!("{}. {step}", idx + 1)))
        .collect::<Vec<_>>();

    let title = match narrate::style_outline(app.state(), app.catalog()) {
        Some(_) => "Process",
        None => "Process (no style picked)",
    };
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_community(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let lines = match app.feed() {
        FeedState::Idle if !app.fetch_enabled => {
            vec![Line::from("Community feed disabled (--no-fetch).")]
        }
        FeedState::Idle => vec![Line::from("Press f to load community recipes.")],
        FeedState::Loading => vec![Line::from("Loading recipes...")],
        FeedState::Failed(_) => vec![Line::from("Could not load recipes. Try refresh.")],
        FeedState::Loaded(recipes) if recipes.is_empty() => {
            vec![Line::from("No recipes yet. Submit the first one!")]
        }
        FeedState::Loaded(recipes) => recipes
            .iter()
            .map(|recipe| {
                let details = recipe.details().lines().next().unwrap_or("");
                Line::from(vec![
                    Span::styled(recipe.name().to_owned(), Style::default().fg(ACTIVE_COLOR)),
                    Span::styled(format!("  {details}"), Style::default().fg(DIM_COLOR)),
                ])
            })
            .collect(),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Community recipes"));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let key = |text: &str| Span::styled(text.to_owned(), Style::default().fg(FOOTER_KEY_COLOR));
    let label = |text: &str| Span::raw(text.to_owned());
    let line = Line::from(vec![
        key("r"),
        label(" randomize  "),
        key("a"),
        label(" amounts  "),
        key("space"),
        label(" toggle  "),
        key("c"),
        label(" collapse  "),
        key("s"),
        label(" styles  "),
        key("x"),
        label(" reset  "),
        key("f"),
        label(" recipes  "),
        key("q"),
        label(" quit  "),
        Span::styled(app.mode().status().to_owned(), Style::default().fg(DIM_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::{App, FeedState, Mode};
    use crate::model::fixtures::small_catalog;

    fn app() -> App {
        App::new(small_catalog(), Some(42), false)
    }

    #[test]
    fn new_app_starts_populated_within_pick_bounds() {
        let app = app();
        for category in app.catalog().categories() {
            let count = app
                .state()
                .selected_in(category.id().as_str())
                .map(|items| items.len() as u32)
                .unwrap_or(0);
            assert!(category.min_pick() <= count && count <= category.max_pick());
        }
        assert!(app.state().single_selected_in("style").is_some());
        assert_eq!(app.mode(), Mode::Randomize);
        assert!(!app.should_quit());
    }

    #[test]
    fn same_seed_yields_the_same_initial_state() {
        let first = App::new(small_catalog(), Some(7), false);
        let second = App::new(small_catalog(), Some(7), false);
        assert_eq!(first.state(), second.state());
    }

    #[test]
    fn quit_keys_set_the_quit_flag() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = super::App::new(small_catalog(), Some(1), false);
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn reset_key_clears_the_selection() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));
        assert!(app.state().selected().is_empty());
        assert!(app.state().amounts().is_empty());
    }

    #[test]
    fn toggling_a_focused_item_switches_to_pick_mode() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));

        // Focus starts on the style category; toggle its first item twice.
        app.handle_key(KeyCode::Char(' '));
        assert!(app.state().has_selection_in("style"));
        assert_eq!(app.mode(), Mode::Pick);

        app.handle_key(KeyCode::Char(' '));
        assert!(!app.state().has_selection_in("style"));
    }

    #[test]
    fn style_picks_stay_exclusive_through_the_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));

        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char(' '));

        let selected = app.state().selected_in("style").expect("style set");
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn toggled_items_carry_no_amount_until_regenerated() {
        let mut app = app();
        app.handle_key(KeyCode::Char('x'));
        app.handle_key(KeyCode::Right); // proteins
        app.handle_key(KeyCode::Char(' '));

        let item_id = app
            .state()
            .single_selected_in("proteins")
            .expect("picked protein")
            .clone();
        assert_eq!(app.state().amount(item_id.as_str()), None);

        app.handle_key(KeyCode::Char('a'));
        assert!(app.state().amount(item_id.as_str()).is_some());
    }

    #[test]
    fn category_focus_wraps_in_both_directions() {
        let mut app = app();
        let count = app.catalog().categories().len();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.focus_category, count - 1);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.focus_category, 0);
        for _ in 0..count {
            app.handle_key(KeyCode::Tab);
        }
        assert_eq!(app.focus_category, 0);
    }

    #[test]
    fn collapse_key_hits_the_style_tier_on_the_style_category() {
        let mut app = app();
        // Focus is on the style category.
        app.handle_key(KeyCode::Char('c'));
        assert!(app.state().style_collapsed());
        assert!(app.state().collapsed_categories().is_empty());

        app.handle_key(KeyCode::Right); // proteins
        app.handle_key(KeyCode::Char('c'));
        assert!(app.state().is_category_collapsed("proteins"));
    }

    #[test]
    fn feed_requests_are_ignored_when_fetching_is_disabled() {
        let mut app = app();
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(*app.feed(), FeedState::Idle);
    }

    #[test]
    fn randomize_key_restores_randomize_mode() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.mode(), Mode::Pick);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.mode(), Mode::Randomize);
        assert!(app.state().single_selected_in("style").is_some());
    }
}
