//! Navigation overlay for narrow terminals — the hamburger menu.
//!
//! Drawn over the page as a centred popup listing every section. The
//! keyboard cursor and the section the scroll spy currently marks active
//! are both highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::state::{AppState, HitZones};

use super::theme::Palette;

pub fn render(area: Rect, buf: &mut Buffer, state: &AppState, palette: &Palette, hit: &mut HitZones) {
    let sections = &state.content.sections;
    let longest = sections
        .iter()
        .map(|section| section.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = (longest.max(18) + 8) as u16;
    let height = sections.len() as u16 + 5;
    let popup = centered_fixed(width, height, area);

    Clear.render(popup, buf);
    let block = Block::default()
        .title(" Menu ")
        .title_style(palette.heading)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.dim)
        .style(palette.base);
    let inner = block.inner(popup);
    block.render(popup, buf);

    let active = state.spy.as_ref().and_then(|spy| spy.active());
    let mut lines = vec![Line::raw("")];
    for (index, section) in sections.iter().enumerate() {
        let selected = index == state.menu.selected;
        let prefix = if selected { " ▸ " } else { "   " };
        let style = if selected {
            palette.button_active
        } else if active == Some(index) {
            palette.nav_active
        } else {
            palette.nav
        };
        lines.push(Line::from(Span::styled(
            format!("{prefix}{}", section.label),
            style,
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  ↑↓ move · Enter go · Esc close",
        palette.dim,
    )));
    Paragraph::new(lines).render(inner, buf);

    hit.menu_panel = Some(popup);
    for index in 0..sections.len() {
        let y = inner.y + 1 + index as u16;
        if y < inner.y + inner.height {
            hit.menu_items.push((Rect::new(inner.x, y, inner.width, 1), index));
        }
    }
}

fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
