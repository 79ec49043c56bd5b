use crate::app::state::AppState;
use crate::ui::view::ContentView;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.palette();

    match ContentView::derive(state.messages.outcome()) {
        ContentView::Loading => {
            let frame_char = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            let lines = vec![
                Line::from(Span::styled(frame_char, palette.spinner())),
                Line::from(Span::styled("Loading messages...", palette.muted())),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(bordered(" msgboard ", palette));
            frame.render_widget(paragraph, centered(area, 4));
        }
        ContentView::Error(description) => {
            let paragraph = Paragraph::new(Span::styled(description, palette.error()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(bordered(" Error ", palette));
            frame.render_widget(paragraph, centered(area, 5));
        }
        ContentView::Empty => {
            let paragraph = Paragraph::new(Span::styled("No message found.", palette.notice()))
                .alignment(Alignment::Center)
                .block(bordered(" msgboard ", palette));
            frame.render_widget(paragraph, centered(area, 3));
        }
        ContentView::Heading(text) => {
            let lines = vec![
                Line::from(Span::styled(text, palette.heading())),
                Line::default(),
                Line::from(Span::styled(
                    format!("from table '{}'", state.config.source.table),
                    palette.muted(),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(bordered(" msgboard ", palette));
            frame.render_widget(paragraph, centered(area, 5));
        }
        ContentView::List(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .skip(state.scroll_offset)
                .map(|row| ListItem::new(Span::styled(row.text.clone(), palette.body())))
                .collect();
            let title = format!(" Messages ({}) ", rows.len());
            let list = List::new(items).block(bordered(&title, palette));
            frame.render_widget(list, area);
        }
    }
}

fn bordered(title: &str, palette: &crate::ui::theme::Palette) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border())
}

/// Shrink `area` to a vertically centered strip of `height` rows.
fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    Rect::new(area.x, top, area.width, height)
}
