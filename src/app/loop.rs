use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::catalog::SkillBackend;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const DEBOUNCE: Duration = Duration::from_millis(500);

type InputEvent = Result<Event, std::io::Error>;

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    backend: Arc<dyn SkillBackend>,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || read_terminal_events(&event_tx));

    run_loop_with_events(terminal, app_state, backend, event_rx).await
}

/// Forwards crossterm events until the receiver goes away or reading fails.
fn read_terminal_events(tx: &mpsc::Sender<InputEvent>) {
    loop {
        let event = event::read();
        let failed = event.is_err();
        if tx.blocking_send(event).is_err() || failed {
            return;
        }
    }
}

/// Watches the directory holding the transcript, so editors that save by
/// renaming a temp file over it (and files created after startup) are still
/// seen. Bursts of events for the file are collapsed into one
/// `ExternalChangeDetected` after `DEBOUNCE` of quiet.
fn watch_transcript(path: &Path, actions: mpsc::Sender<Action>) -> Result<RecommendedWatcher> {
    let name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (raw_tx, raw_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            if touches(&event, &name) {
                let _ = raw_tx.try_send(());
            }
        }
    })?;

    match watcher.watch(&dir, RecursiveMode::NonRecursive) {
        Ok(()) => info!(path = %path.display(), "watching transcript"),
        Err(e) => warn!(dir = %dir.display(), error = %e, "cannot watch transcript directory"),
    }

    tokio::spawn(debounce(raw_rx, actions));
    Ok(watcher)
}

/// Reads (including our own reloads) are not changes.
fn touches(event: &notify::Event, name: &OsStr) -> bool {
    !matches!(event.kind, EventKind::Access(_))
        && event.paths.iter().any(|p| p.file_name() == Some(name))
}

async fn debounce(mut raw: mpsc::Receiver<()>, actions: mpsc::Sender<Action>) {
    while raw.recv().await.is_some() {
        // Keep waiting while events keep arriving
        loop {
            match tokio::time::timeout(DEBOUNCE, raw.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }
        debug!("transcript changed on disk");
        if actions.send(Action::ExternalChangeDetected).await.is_err() {
            return;
        }
    }
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    backend: Arc<dyn SkillBackend>,
    mut event_rx: mpsc::Receiver<InputEvent>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut ticks = interval(TICK_RATE);

    // Held for the lifetime of the loop; dropping it stops the watch
    let _watcher = match app_state.transcript_path.as_deref() {
        Some(path) => Some(watch_transcript(path, action_tx.clone())?),
        None => None,
    };

    if let Some(path) = app_state.transcript_path.clone() {
        handle_command(
            Command::LoadTranscript(path),
            backend.clone(),
            action_tx.clone(),
        )?;
    }

    loop {
        terminal.draw(|f| ui::draw(f, &mut app_state))?;

        let next = tokio::select! {
            _ = ticks.tick() => Some(Action::Tick),
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("input closed");
                    break;
                }
            },
            Some(action) = action_rx.recv() => Some(action),
        };

        let Some(action) = next else {
            continue;
        };
        if action == Action::Quit {
            break;
        }

        let command = reducer::update(&mut app_state, action);
        if app_state.should_quit {
            break;
        }
        if let Some(command) = command {
            handle_command(command, backend.clone(), action_tx.clone())?;
        }
    }

    info!("shutting down");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    backend: Arc<dyn SkillBackend>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::skills::handle_command(command, backend, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
