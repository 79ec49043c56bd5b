mod layout;
mod message_panel;
mod status_bar;
pub mod theme;
mod title_bar;
pub mod view;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(Block::default().style(state.palette().background()), area);

    title_bar::render(frame, app_layout.title_bar, state);
    message_panel::render(frame, app_layout.content, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
