//! Manifest Scanner - terminal barcode scanning station
//!
//! A Ratatui-based TUI that adds shipment packages to a manifest by
//! scanning their barcodes and resolving them through the package
//! search service. With stdin redirected it scans one barcode per input
//! line and prints the matched sales invoices instead.

mod app;
mod batch;
mod config;
mod i18n;
mod scan;
mod search;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::ScannerConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use search::SearchClient;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manifest_scanner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ScannerConfig::load()?;

    // Piped input: scan each line without a UI
    if !io::stdin().is_terminal() {
        let search = SearchClient::new(&config.search_address())?;
        let form = batch::run(&config, &search, io::stdin().lock(), io::stdout().lock()).await?;
        tracing::info!("Scanned {} package(s)", form.items().len());
        return Ok(());
    }

    let mut app = App::new(config)?;

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

    if let Err(err) = app.save_settings() {
        tracing::warn!("Failed to save settings: {err:?}");
    }

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
    let mut redraw = ui::Redraw::new();

    loop {
        // Pick up finished lookups before drawing
        if app.tick() {
            redraw.mark_dirty();
        }

        if redraw.take(app.form.items_revision()) {
            terminal.draw(|frame| ui::draw(frame, app))?;
        }

        // Poll briefly so lookup results show up promptly
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    redraw.mark_dirty();
                }
                Event::Resize(_, _) => redraw.mark_dirty(),
                _ => {}
            }
        }

        // Let spawned lookups make progress
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
