use crate::app::state::AppState;
use crate::fetch::loader::FetchOutcome;
use crate::theme::ThemeMode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand line. When exactly one row is loaded its text becomes the brand,
/// mirroring the hosted page this replaces.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.palette();

    let brand = match state.messages.outcome() {
        FetchOutcome::Loaded(rows) if rows.len() == 1 && !rows[0].text.is_empty() => {
            rows[0].text.as_str()
        }
        _ => "msgboard",
    };

    // The hint names the mode the toggle switches to, not the current one.
    let toggle_hint = match state.theme.mode() {
        ThemeMode::Light => "[t] Dark Mode",
        ThemeMode::Dark => "[t] Light Mode",
    };

    let used = brand.chars().count() + toggle_hint.chars().count();
    let inner_width = area.width.saturating_sub(2) as usize;
    let padding = inner_width.saturating_sub(used + 2);

    let line = Line::from(vec![
        Span::styled(format!(" {}", brand), palette.brand()),
        Span::raw(" ".repeat(padding)),
        Span::styled(format!("{} ", toggle_hint), palette.muted()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(paragraph, area);
}
