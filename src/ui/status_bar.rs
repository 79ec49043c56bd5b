use crate::app::state::AppState;
use chrono::{Datelike, Local};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.palette();
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        palette.status_bar(),
    ));
    parts.push(Span::styled(
        " q quit | r refresh | t theme ",
        palette.status_bar(),
    ));

    let footer = format!(" (c) {} msgboard ", Local::now().year());

    // Pad to push the footer to the right edge.
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + footer.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), palette.status_bar()));
    parts.push(Span::styled(footer, palette.status_bar()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
