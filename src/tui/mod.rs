//! Interactive staff app
//!
//! Architecture:
//! - Input and tick tasks feed a single channel
//! - The loop draws, waits for the next event, and hands keys to `event_loop`
//! - All state lives in `App`; rendering only reads it

use crate::tui::app::App;
use crate::tui::event_loop::{handle_key_event, LoopAction};
use crate::tui::types::TuiEvent;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use daycare_core::{info_log, Config};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

pub mod app;
pub mod event_loop;
pub mod types;
pub mod ui;

/// Main entry point for the interactive session
pub async fn run_tui(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(16));
    let mut app = App::new(config);
    info_log!("[TUI] session started on {}", app.current_screen());

    // Channel for events
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Spawn Input listener
    let input_tx = event_tx.clone();
    tokio::spawn(async move {
        loop {
            if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if input_tx.send(TuiEvent::Input(ev)).is_err() {
                        break;
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    });

    // Spawn Tick listener
    let tick_tx = event_tx;
    tokio::spawn(async move {
        loop {
            if tick_tx.send(TuiEvent::Tick).is_err() {
                break;
            }
            tokio::time::sleep(tick_rate).await;
        }
    });

    let res = run_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info_log!("[TUI] session ended");
    res
}

async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<TuiEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let Some(event) = event_rx.recv().await else {
            break;
        };
        match event {
            TuiEvent::Input(Event::Key(key)) => {
                if handle_key_event(app, key) == LoopAction::Break {
                    break;
                }
            }
            // Redraw on the next pass
            TuiEvent::Input(_) | TuiEvent::Tick => {}
        }
    }
    Ok(())
}
