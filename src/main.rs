use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use paver::app::{
    config::AppConfig,
    r#loop::run_loop,
    state::{AppState, ErrorSeverity, ErrorState},
};
use paver::infrastructure::local_catalog::LocalCatalog;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn leave_terminal(out: &mut impl io::Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        out,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
}

fn enter_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal(&mut io::stdout());
        previous(info);
    }));
}

/// Opens the catalog, falling back to an empty one with a warning banner.
fn open_catalog(config: &AppConfig, state: &mut AppState<'_>) -> LocalCatalog {
    LocalCatalog::load(&config.catalog_path(), config.export_dir()).unwrap_or_else(|err| {
        warn!(%err, "starting with an empty catalog");
        state.last_error = Some(ErrorState::new(err.to_string(), ErrorSeverity::Warning));
        LocalCatalog::new(Vec::new(), Vec::new(), config.export_dir())
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_hook();

    // Runs without a log file if the state dir is unwritable
    let log_path = paver::logging::init().ok();

    let mut config = AppConfig::load();
    if let Some(path) = std::env::args_os().nth(1) {
        config.transcript_path = Some(PathBuf::from(path));
    }
    info!(log = ?log_path, transcript = ?config.transcript_path, "starting paver");

    let mut app_state = AppState::new(&config);
    let catalog = open_catalog(&config, &mut app_state);

    let mut terminal = enter_terminal()?;
    let outcome = run_loop(&mut terminal, app_state, Arc::new(catalog)).await;
    leave_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = outcome {
        error!(error = %format!("{err:#}"), "run loop failed");
        eprintln!("paver: {err:?}");
    }

    Ok(())
}
