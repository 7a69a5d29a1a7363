mod app;
mod config;
mod logging;
mod quiz;
mod trivia;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::trivia::TriviaClient;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging)?;
    if let Some(ref path) = log_path {
        info!(path = %path.display(), "logging to file");
    }

    let client = TriviaClient::new(&cfg.provider).context("Failed to create trivia client")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, client).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    client: TriviaClient,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Categories are fetched once on startup; after a restart only on request
    let initial = state.session.load_categories();
    dispatch(Action::from(initial), &client, &event_tx, &mut state);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            dispatch(action, &client, &event_tx, &mut state);
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Carry out one action. Fetches run on their own task and report back
/// through the event channel; the loop never blocks on the network.
fn dispatch(
    action: Action,
    client: &TriviaClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    state: &mut AppState,
) {
    match action {
        Action::FetchCategories { generation } => {
            debug!(generation, "dispatching category fetch");
            let client = client.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_categories().await;
                let _ = tx.send(AppEvent::CategoriesLoaded { generation, result });
            });
        }
        Action::FetchQuestions {
            generation,
            category,
            amount,
        } => {
            debug!(generation, category, amount, "dispatching question fetch");
            let client = client.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_questions(category, amount).await;
                let _ = tx.send(AppEvent::QuestionsLoaded { generation, result });
            });
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}
