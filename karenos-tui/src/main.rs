//! KarenOS TUI — the portfolio page in a terminal.
//!
//! The page scrolls as one long document:
//! hero, impact metrics, experience timeline, architecture, skills,
//! interactive modules, optimization sliders, contact.
//!
//! Mouse movement drives the cursor glow; `k` toggles neon mode and `r`
//! recruiter mode (remembered for the session).

mod app;
mod input;
mod layout;
mod persistence;
mod theme;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use karenos_core::{KarenConfig, Page};

use crate::app::AppState;
use crate::persistence::FileSessionStore;

#[derive(Parser)]
#[command(name = "karenos-tui", about = "KarenOS portfolio page in the terminal")]
struct Args {
    /// Config file (defaults to <config dir>/karenos/config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Paths
    let base_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("karenos");
    let config_path = args
        .config
        .or_else(|| Some(base_dir.join("config.toml")).filter(|p| p.exists()));
    let session_path = base_dir.join("session.json");

    init_logging(&base_dir)?;

    let config = KarenConfig::load_or_default(config_path.as_deref())
        .context("failed to load configuration")?;
    tracing::info!(config = ?config_path, "starting karenos-tui");

    let ttl = chrono::Duration::minutes(config.storage.session_ttl_minutes);
    let store = FileSessionStore::open(session_path, ttl);
    let page = Page::new(&config, Box::new(store));
    let mut app = AppState::new(page);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "karenos-tui exited with an error");
    }
    result
}

/// Log to a file under the config dir; the terminal belongs to the UI.
fn init_logging(base_dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(base_dir)
        .with_context(|| format!("failed to create {}", base_dir.display()))?;
    let log_path = base_dir.join("karenos-tui.log");
    let file = File::create(&log_path)
        .with_context(|| format!("failed to create {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// `RUST_LOG` when set and valid, else `info`.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &KarenConfig,
) -> Result<()> {
    let frame = config.animation.frame_interval();
    loop {
        // 1. Lay out the page for the current size and report the viewport
        let size = terminal.size()?;
        let body = ui::body_rect(Rect::new(0, 0, size.width, size.height));
        let now = app.now();
        let layout = ui::page::build(app);
        app.apply_layout(layout, body.width, body.height, now);

        // 2. Advance animations one frame
        app.page.tick(now);

        // 3. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 4. Poll for input events (one frame interval)
        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, body),
                _ => {}
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_the_default_filter() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().to_string(), "info");
        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(log_filter().to_string(), "debug");
        std::env::remove_var("RUST_LOG");
    }
}
