use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use super::layout::{Panel, PanelLayout};
use crate::core::system_monitor::MetricSnapshot;

/// Draw every panel of the layout from one snapshot
///
/// All panels go into the same frame, so the terminal is flushed once.
pub fn render_dashboard(frame: &mut Frame, layout: &PanelLayout, snapshot: &MetricSnapshot) {
    for panel in layout.panels() {
        render_panel(frame, panel, &snapshot.text(panel.resource));
    }
}

/// Clear a panel's region, draw its border and title, then its text
///
/// Lines past the last interior row and characters past the right border are
/// dropped. A panel reaching outside the frame is cut down to the frame.
pub fn render_panel(frame: &mut Frame, panel: &Panel, text: &str) {
    let area = panel.area.intersection(frame.area());
    if area.is_empty() {
        return;
    }

    let block = Block::bordered().title(format!(" {} ", panel.title));
    let paragraph = Paragraph::new(text.to_string()).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
