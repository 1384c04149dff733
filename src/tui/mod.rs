//! TUI module - Terminal catalog browser and exercise tracker with ratatui

mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{prelude::*, widgets::ListState};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tracing::info;

use crate::catalog::{Catalog, PageParams};
use crate::exercises::ExerciseRecord;
use crate::session::{Action, ExerciseSession};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How long to wait for input before checking the rest timer again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Row in the browse list
struct Entry {
    params: PageParams,
    category_title: &'static str,
    title: &'static str,
}

/// Exercise page: one record plus the session tracking it.
/// Dropping it tears down the session and stops its rest timer.
struct ExerciseScreen {
    params: PageParams,
    record: ExerciseRecord,
    session: ExerciseSession,
    show_video: bool,
}

enum Screen {
    Browse,
    Exercise(ExerciseScreen),
}

/// App state for TUI
pub struct App {
    catalog: Catalog,
    entries: Vec<Entry>,
    list_state: ListState,
    screen: Screen,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let entries = catalog
            .categories()
            .flat_map(|c| {
                c.exercises().map(move |(key, record)| Entry {
                    params: PageParams {
                        category: c.key,
                        exercise: key,
                    },
                    category_title: c.title,
                    title: record.title,
                })
            })
            .collect();

        Self {
            catalog,
            entries,
            list_state: ListState::default().with_selected(Some(0)),
            screen: Screen::Browse,
            should_quit: false,
        }
    }

    /// Start directly on an exercise page
    pub fn open(catalog: Catalog, category: &str, exercise: &str) -> Result<Self> {
        let mut app = Self::new(catalog);
        app.open_exercise(category, exercise)?;
        if let Some(pos) = app
            .entries
            .iter()
            .position(|e| e.params.category == category && e.params.exercise == exercise)
        {
            app.list_state.select(Some(pos));
        }
        Ok(app)
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
            if let Screen::Exercise(screen) = &mut self.screen {
                screen.session.drain_ticks();
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            Screen::Browse => view::render_browse(frame, &self.entries, &mut self.list_state),
            Screen::Exercise(screen) => view::render_exercise(frame, screen),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    self.handle_key(key.code)?;
                }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match &mut self.screen {
            Screen::Browse => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Enter => {
                    if let Some(entry) = self.list_state.selected().and_then(|i| self.entries.get(i)) {
                        let PageParams { category, exercise } = entry.params;
                        self.open_exercise(category, exercise)?;
                    }
                }
                _ => {}
            },
            Screen::Exercise(screen) => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Char('b') => {
                    info!("Closed {}", screen.params.path());
                    self.screen = Screen::Browse;
                }
                KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Right => {
                    screen.session.apply(Action::IncrementRep);
                }
                KeyCode::Char('-') | KeyCode::Left => {
                    screen.session.apply(Action::DecrementRep);
                }
                KeyCode::Char('s') | KeyCode::Enter => {
                    screen.session.apply(Action::CompleteSet);
                }
                KeyCode::Char('p') => {
                    screen.session.apply(Action::ToggleRestTimer);
                }
                KeyCode::Char('r') => {
                    screen.session.apply(Action::Reset);
                }
                KeyCode::Char('m') => screen.show_video = !screen.show_video,
                _ => {}
            },
        }
        Ok(())
    }

    fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len() as isize;
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.list_state.select(Some(next as usize));
    }

    fn open_exercise(&mut self, category: &str, exercise: &str) -> Result<()> {
        let record = self.catalog.resolve(category, exercise)?.clone();
        let params = self
            .catalog
            .page_params()
            .find(|p| p.category == category && p.exercise == exercise)
            .ok_or_else(|| anyhow::anyhow!("no page for {}/{}", category, exercise))?;

        info!("Opened {}", params.path());
        self.screen = Screen::Exercise(ExerciseScreen {
            params,
            session: ExerciseSession::new(&record),
            record,
            show_video: true,
        });
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
