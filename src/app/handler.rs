use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::fetch::loader::FetchOutcome;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::FetchFinished { handle, result } => {
            let applied = state
                .messages
                .complete(handle, result.map_err(|e| e.to_string()));
            if applied {
                state.last_refresh = Some(Local::now());
                state.scroll_offset = 0;
                state.dirty = true;
                match state.messages.outcome() {
                    FetchOutcome::Loaded(rows) => {
                        tracing::info!(rows = rows.len(), "fetch completed");
                    }
                    FetchOutcome::Failed(description) => {
                        tracing::warn!(error = %description, "fetch failed");
                    }
                    _ => {}
                }
            } else {
                tracing::debug!(?handle, "discarding stale fetch completion");
            }
            vec![]
        }
        AppEvent::Tick => {
            if state.messages.outcome().is_pending() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('r') => vec![Action::Refresh],
        KeyCode::Char('t') => {
            let mode = state.theme.toggle();
            tracing::info!(mode = mode.as_str(), "theme toggled");
            state.dirty = true;
            vec![]
        }
        KeyCode::Up => {
            state.scroll_up(1);
            vec![]
        }
        KeyCode::Down => {
            state.scroll_down(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.scroll_up(10);
            vec![]
        }
        KeyCode::PageDown => {
            state.scroll_down(10);
            vec![]
        }
        _ => vec![],
    }
}
