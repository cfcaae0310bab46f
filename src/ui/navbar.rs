//! Header bar — site title, section links, theme toggle, hamburger.
//!
//! Links render inline on wide terminals and collapse behind the hamburger
//! on narrow ones; the link for the active section is highlighted. Every
//! clickable element records a hit zone.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::state::{AppState, HitZones};

use super::theme::Palette;

pub fn render(
    area: Rect,
    buf: &mut Buffer,
    state: &AppState,
    palette: &Palette,
    narrow: bool,
    hit: &mut HitZones,
) {
    Block::default().style(palette.base).render(area, buf);
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = area.y;
    let active = state.spy.as_ref().and_then(|spy| spy.active());

    // Right-aligned icons first, so the links know where to stop.
    let icon_w: u16 = 3;
    let mut right = area.x + area.width;
    if area.width >= icon_w {
        right -= icon_w;
        let rect = Rect::new(right, row, icon_w, 1);
        let icon = Line::from(Span::styled(
            format!(" {} ", state.theme.mode().icon()),
            palette.nav,
        ));
        buf.set_line(rect.x, row, &icon, icon_w);
        hit.theme_toggle = Some(rect);
    }
    if narrow && area.width >= icon_w * 2 && !state.content.sections.is_empty() {
        right -= icon_w;
        let rect = Rect::new(right, row, icon_w, 1);
        let icon = Line::from(Span::styled(
            format!(" {} ", state.menu.icon()),
            palette.nav,
        ));
        buf.set_line(rect.x, row, &icon, icon_w);
        hit.hamburger = Some(rect);
    }

    // Site title on the left.
    let mut x = area.x + 1;
    let avail = right.saturating_sub(x);
    if avail > 0 {
        let title = Line::from(Span::styled(state.content.title.clone(), palette.heading));
        let (end, _) = buf.set_line(x, row, &title, avail);
        x = end + 3;
    }

    // Inline section links, one hit zone each.
    if !narrow {
        for (index, section) in state.content.sections.iter().enumerate() {
            let text = format!(" {} ", section.label);
            let width = text.chars().count() as u16;
            if x + width > right {
                break;
            }
            let style = if active == Some(index) {
                palette.nav_active
            } else {
                palette.nav
            };
            buf.set_line(x, row, &Line::from(Span::styled(text, style)), width);
            hit.nav_links.push((Rect::new(x, row, width, 1), index));
            x += width + 1;
        }
    }

    // Separator rule under the nav row.
    if area.height >= 2 {
        let rule: String = "─".repeat(area.width as usize);
        buf.set_line(
            area.x,
            area.y + 1,
            &Line::from(Span::styled(rule, palette.dim)),
            area.width,
        );
    }
}
