//! Terminal UI for playing a session.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Longest the loop blocks waiting for a key.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(opponent = ?settings.opponent()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = action_for(app.cursor(), key.code) {
                        app.handle(action, Instant::now());
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
