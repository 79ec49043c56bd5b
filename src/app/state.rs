use crate::config::AppConfig;
use crate::fetch::loader::{FetchOutcome, MessageLoader};
use crate::theme::{FileSettingStore, ThemeController};
use crate::ui::theme::Palette;
use chrono::{DateTime, Local};

/// The theme controller as wired in the running app: file-backed settings,
/// render palette as the visual target.
pub type AppTheme = ThemeController<FileSettingStore, Palette>;

pub struct AppState {
    pub config: AppConfig,
    pub theme: AppTheme,
    pub messages: MessageLoader,
    pub scroll_offset: usize,
    pub spinner_frame: usize,
    pub last_refresh: Option<DateTime<Local>>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, theme: AppTheme) -> Self {
        Self {
            config,
            theme,
            messages: MessageLoader::new(),
            scroll_offset: 0,
            spinner_frame: 0,
            last_refresh: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn palette(&self) -> &Palette {
        self.theme.target()
    }

    /// Summary for the status bar, derived from the current outcome.
    pub fn status_line(&self) -> String {
        match self.messages.outcome() {
            FetchOutcome::Idle | FetchOutcome::Loading => "Loading messages...".to_string(),
            FetchOutcome::Failed(_) => "Fetch failed".to_string(),
            FetchOutcome::Loaded(rows) => {
                let count = match rows.len() {
                    1 => "1 message".to_string(),
                    n => format!("{} messages", n),
                };
                match self.last_refresh {
                    Some(at) => format!("{} | refreshed {}", count, at.format("%H:%M:%S")),
                    None => count,
                }
            }
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.messages.outcome().rows().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::loader::MessageRow;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingStore::open(dir.path().join("settings.toml"));
        let theme = ThemeController::initialize(store, Palette::light());
        (dir, AppState::new(AppConfig::default(), theme))
    }

    #[test]
    fn test_status_line_tracks_outcome() {
        let (_dir, mut state) = test_state();
        assert_eq!(state.status_line(), "Loading messages...");

        let a = state.messages.start();
        state
            .messages
            .complete(a, Ok(vec![MessageRow::new("hi")]));
        assert_eq!(state.status_line(), "1 message");

        let b = state.messages.start();
        state.messages.complete(b, Err("boom".into()));
        assert_eq!(state.status_line(), "Fetch failed");
    }

    #[test]
    fn test_scroll_clamps_to_row_count() {
        let (_dir, mut state) = test_state();
        let a = state.messages.start();
        state.messages.complete(
            a,
            Ok(vec![
                MessageRow::new("one"),
                MessageRow::new("two"),
                MessageRow::new("three"),
            ]),
        );

        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 2);
        state.scroll_up(1);
        assert_eq!(state.scroll_offset, 1);
        state.scroll_up(10);
        assert_eq!(state.scroll_offset, 0);
    }
}
