//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Turns the widget states into terminal cells once per frame and records
//! what ended up where: the page geometry the scroll spy needs and the hit
//! zones the mouse handler resolves clicks against.

pub mod layout;
pub mod menu;
pub mod navbar;
pub mod page;
pub mod smooth_scroll;
pub mod theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::state::{AppState, HitZones, InputMode};

use layout::AppLayout;
use theme::Palette;

pub fn render(frame: &mut Frame, state: &mut AppState, tick: u64) {
    let full = frame.area();
    let layout = AppLayout::from_area(full);
    let palette = Palette::for_mode(state.theme.mode());
    let narrow = layout.is_narrow();
    let buf = frame.buffer_mut();

    let mut hit = HitZones::default();

    navbar::render(layout.header_area, buf, state, &palette, narrow, &mut hit);
    let geometry = page::render(layout.page_area, buf, state, &palette, tick, &mut hit);
    render_status_bar(layout.status_area, buf, state, &palette);

    if state.menu.is_open() {
        menu::render(full, buf, state, &palette, &mut hit);
    }

    // Content edits can shrink the document under the scroll position.
    state.scroll = state
        .scroll
        .min(geometry.doc_height.saturating_sub(geometry.viewport));
    state.geometry = Some(geometry);
    state.hit = hit;
}

fn render_status_bar(area: Rect, buf: &mut Buffer, state: &AppState, palette: &Palette) {
    let hint = match state.mode {
        InputMode::Browse => "j/k scroll · 1-9 jump · h/l switch · m menu · t theme · q quit",
        InputMode::Edit => "type to fill the field · Tab next · Enter send · Esc done",
    };
    let text = match &state.status_message {
        Some(message) => format!(" {message}"),
        None => format!(" {hint}"),
    };
    Paragraph::new(text)
        .style(palette.status_bar)
        .render(area, buf);
}
