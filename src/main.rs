//! LifeFlow TUI - terminal registration client for the LifeFlow blood
//! donation service
//!
//! A Ratatui-based form for registering donor, donee and blood manager
//! accounts against the LifeFlow registration API.

mod app;
mod config;
mod platform;
mod registration;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifeflow_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load()?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    app.handle_resize(terminal.size()?.height);

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while something on screen is animating (toast progress, spinner)
        let animating = !app.state.toasts.is_empty() || app.state.is_submitting();
        let poll_duration = if animating {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        // crossterm polling blocks, so keep it off the async workers
        let next_event = tokio::task::block_in_place(|| -> Result<Option<Event>> {
            if event::poll(poll_duration)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })?;

        match next_event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key);
            }
            Some(Event::Resize(_width, height)) => app.handle_resize(height),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
