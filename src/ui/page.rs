//! Page body — lays the portfolio sections out as one long document and
//! draws the slice of it that the current scroll position puts on screen.
//!
//! Rendering happens in two steps: `build_document` turns the section list
//! plus the widget states into styled lines, recording the top row of each
//! section and the document-space position of every interactive element.
//! `render` then blits the visible window and converts the interactive
//! positions that fall inside it into screen-space hit zones.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::app::state::{AppState, HitZones, InputMode, PageGeometry};
use crate::core::contact::{FormStatus, WAITING_TEXT};
use crate::core::content::{ProjectItem, ResumeEntry, SectionKind, TabButton, TabPanel, Testimonial};
use crate::core::tabs;

use super::theme::Palette;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Interactive element at a document-space position.
struct Interactive {
    row: usize,
    col: u16,
    width: u16,
    kind: DocZone,
}

enum DocZone {
    ResumeTab(usize),
    Filter(usize),
    SliderPrev,
    SliderNext,
    FormField(usize),
    FormSend,
}

pub fn render(
    area: Rect,
    buf: &mut Buffer,
    state: &AppState,
    palette: &Palette,
    tick: u64,
    hit: &mut HitZones,
) -> PageGeometry {
    Block::default().style(palette.base).render(area, buf);

    // One column of padding on each side.
    let inner = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    let (lines, section_tops, zones) = build_document(state, inner.width as usize, palette, tick);

    let geometry = PageGeometry {
        section_tops,
        doc_height: lines.len(),
        viewport: inner.height as usize,
    };

    // The eased row offset shifts the visible window during animation; the
    // logical scroll position itself never leaves [0, max].
    let max = geometry.doc_height.saturating_sub(geometry.viewport);
    let logical = state.scroll.min(max) as i64;
    let start = (logical + state.smooth.row_offset()).clamp(0, max as i64) as usize;
    let end = (start + geometry.viewport).min(lines.len());

    let visible: Vec<Line<'_>> = lines[start..end].to_vec();
    Paragraph::new(visible).style(palette.base).render(inner, buf);

    for zone in zones {
        if zone.row < start || zone.row >= end || zone.col >= inner.width {
            continue;
        }
        let rect = Rect::new(
            inner.x + zone.col,
            inner.y + (zone.row - start) as u16,
            zone.width.min(inner.width - zone.col),
            1,
        );
        match zone.kind {
            DocZone::ResumeTab(index) => hit.resume_tabs.push((rect, index)),
            DocZone::Filter(index) => hit.filter_buttons.push((rect, index)),
            DocZone::SliderPrev => hit.slider_prev = Some(rect),
            DocZone::SliderNext => hit.slider_next = Some(rect),
            DocZone::FormField(index) => hit.form_fields.push((rect, index)),
            DocZone::FormSend => hit.form_send = Some(rect),
        }
    }

    geometry
}

fn build_document(
    state: &AppState,
    width: usize,
    palette: &Palette,
    tick: u64,
) -> (Vec<Line<'static>>, Vec<usize>, Vec<Interactive>) {
    let mut doc = DocBuilder {
        lines: Vec::new(),
        zones: Vec::new(),
        width: width.max(8),
        palette: *palette,
    };
    let mut tops = Vec::with_capacity(state.content.sections.len());

    for section in &state.content.sections {
        tops.push(doc.lines.len());
        match &section.kind {
            SectionKind::Hero { headline, intro, .. } => doc.hero(state, headline, intro),
            SectionKind::About { paragraphs } => doc.about(&section.label, paragraphs),
            SectionKind::Resume { tabs, panels } => {
                doc.resume(state, &section.label, tabs, panels)
            }
            SectionKind::Projects { items, .. } => doc.projects(state, &section.label, items),
            SectionKind::Testimonials { entries } => {
                doc.testimonials(state, &section.label, entries)
            }
            SectionKind::Contact { .. } => doc.contact(state, &section.label, tick),
        }
        doc.blank();
        doc.blank();
    }

    (doc.lines, tops, doc.zones)
}

struct DocBuilder {
    lines: Vec<Line<'static>>,
    zones: Vec<Interactive>,
    width: usize,
    palette: Palette,
}

impl DocBuilder {
    fn blank(&mut self) {
        self.lines.push(Line::raw(""));
    }

    fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn heading(&mut self, label: &str) {
        self.lines.push(Line::from(Span::styled(
            format!("▍ {label}"),
            self.palette.heading,
        )));
        self.blank();
    }

    fn wrapped(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.lines.push(Line::from(Span::styled(row, style)));
        }
    }

    fn wrapped_indent(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width.saturating_sub(2)) {
            self.lines
                .push(Line::from(Span::styled(format!("  {row}"), style)));
        }
    }

    /// A row of `[ label ]` buttons with one hit zone per button.
    fn button_row(&mut self, labels: &[(String, bool)], kind: fn(usize) -> DocZone) {
        let row = self.lines.len();
        let mut spans = Vec::new();
        let mut col: u16 = 0;
        for (index, (label, active)) in labels.iter().enumerate() {
            let text = format!("[ {label} ]");
            let width = text.chars().count() as u16;
            let style = if *active {
                self.palette.button_active
            } else {
                self.palette.button
            };
            self.zones.push(Interactive {
                row,
                col,
                width,
                kind: kind(index),
            });
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
            col += width + 2;
        }
        self.lines.push(Line::from(spans));
    }

    // ── sections ──────────────────────────────────────────────────────────

    fn hero(&mut self, state: &AppState, headline: &str, intro: &str) {
        self.blank();
        self.wrapped(headline, self.palette.heading.add_modifier(Modifier::BOLD));
        if !intro.is_empty() {
            self.blank();
            self.wrapped(intro, Style::default());
        }
        if let Some(typewriter) = &state.typewriter {
            self.blank();
            let shown: String = typewriter
                .display()
                .chars()
                .take(self.width.saturating_sub(4))
                .collect();
            self.line(Line::from(vec![
                Span::styled("❯ ", self.palette.dim),
                Span::styled(shown, self.palette.accent),
                Span::styled("▌", self.palette.accent),
            ]));
        }
    }

    fn about(&mut self, label: &str, paragraphs: &[String]) {
        self.heading(label);
        for (index, paragraph) in paragraphs.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.wrapped(paragraph, Style::default());
        }
    }

    fn resume(&mut self, state: &AppState, label: &str, tabs: &[TabButton], panels: &[TabPanel]) {
        self.heading(label);
        if let Some(strip) = &state.resume_tabs {
            let labels: Vec<(String, bool)> = tabs
                .iter()
                .enumerate()
                .map(|(index, tab)| (tab.label.clone(), index == strip.active_index()))
                .collect();
            self.button_row(&labels, DocZone::ResumeTab);
            self.blank();
        }
        // Without a tab strip the first panel stays visible, like a page
        // whose switcher never got wired up.
        let shown = match &state.resume_tabs {
            Some(strip) => {
                let id = tabs::panel_id(strip.active_key());
                panels.iter().find(|panel| panel.id == id)
            }
            None => panels.first(),
        };
        if let Some(panel) = shown {
            for (index, entry) in panel.entries.iter().enumerate() {
                if index > 0 {
                    self.blank();
                }
                self.resume_entry(entry);
            }
        }
    }

    fn resume_entry(&mut self, entry: &ResumeEntry) {
        self.line(Line::from(Span::styled(
            format!("• {}", entry.title),
            self.palette.accent,
        )));
        if !entry.period.is_empty() {
            self.line(Line::from(Span::styled(
                format!("  {}", entry.period),
                self.palette.dim,
            )));
        }
        if !entry.detail.is_empty() {
            self.wrapped_indent(&entry.detail, Style::default());
        }
    }

    fn projects(&mut self, state: &AppState, label: &str, items: &[ProjectItem]) {
        self.heading(label);
        if let Some(filter) = &state.project_filter {
            let labels: Vec<(String, bool)> = filter
                .keys()
                .iter()
                .enumerate()
                .map(|(index, key)| (key.clone(), index == filter.active_index()))
                .collect();
            self.button_row(&labels, DocZone::Filter);
            self.blank();
        }
        let active = state.project_filter.as_ref().map(|filter| filter.active_key());
        let mut first = true;
        for item in items {
            let visible = match active {
                Some(filter) => tabs::filter_shows(filter, &item.category),
                None => true,
            };
            if !visible {
                continue;
            }
            if !first {
                self.blank();
            }
            first = false;
            self.line(Line::from(vec![
                Span::styled(format!("▪ {}", item.name), self.palette.accent),
                Span::styled(format!("  ({})", item.category), self.palette.dim),
            ]));
            if !item.blurb.is_empty() {
                self.wrapped_indent(&item.blurb, Style::default());
            }
            if let Some(link) = &item.link {
                self.line(Line::from(Span::styled(
                    format!("  {link}"),
                    self.palette.dim,
                )));
            }
        }
    }

    fn testimonials(&mut self, state: &AppState, label: &str, entries: &[Testimonial]) {
        self.heading(label);
        let Some(slider) = &state.slider else {
            return;
        };
        let Some(entry) = entries.get(slider.current()) else {
            return;
        };
        self.wrapped(
            &format!("❝ {}", entry.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        );
        let byline = match &entry.role {
            Some(role) => format!("— {}, {}", entry.author, role),
            None => format!("— {}", entry.author),
        };
        self.line(Line::from(Span::styled(
            format!("  {byline}"),
            self.palette.dim,
        )));
        self.blank();

        let row = self.lines.len();
        let prev = "◀ prev";
        let counter = format!("  {} / {}  ", slider.current() + 1, slider.count());
        let next = "next ▶";
        let prev_w = prev.chars().count() as u16;
        let counter_w = counter.chars().count() as u16;
        self.zones.push(Interactive {
            row,
            col: 0,
            width: prev_w,
            kind: DocZone::SliderPrev,
        });
        self.zones.push(Interactive {
            row,
            col: prev_w + counter_w,
            width: next.chars().count() as u16,
            kind: DocZone::SliderNext,
        });
        self.line(Line::from(vec![
            Span::styled(prev, self.palette.button),
            Span::styled(counter, self.palette.dim),
            Span::styled(next, self.palette.button),
        ]));
    }

    fn contact(&mut self, state: &AppState, label: &str, tick: u64) {
        self.heading(label);
        let Some(form) = &state.form else {
            return;
        };
        let editing = state.mode == InputMode::Edit;

        for (index, field) in form.fields.iter().enumerate() {
            let focused = editing && form.focused == index;
            let row = self.lines.len();
            let marker = if focused { "▸" } else { " " };
            let label_cell = format!("{marker} {:<8} ", field.label);
            let cell_w = label_cell.chars().count();
            // Long values show their tail, where the cursor is.
            let value_w = self.width.saturating_sub(cell_w + 1);
            let glyphs = field.value.chars().count();
            let value: String = field
                .value
                .chars()
                .skip(glyphs.saturating_sub(value_w))
                .collect();
            let style = if focused {
                self.palette.field_focused
            } else {
                self.palette.field
            };
            self.zones.push(Interactive {
                row,
                col: 0,
                width: self.width as u16,
                kind: DocZone::FormField(index),
            });
            let mut spans = vec![
                Span::styled(label_cell, self.palette.dim),
                Span::styled(value, style),
            ];
            if focused {
                spans.push(Span::styled("▏", self.palette.accent));
            }
            self.line(Line::from(spans));
            self.blank();
        }

        let row = self.lines.len();
        let send = "[ Send Message ]";
        self.zones.push(Interactive {
            row,
            col: 0,
            width: send.chars().count() as u16,
            kind: DocZone::FormSend,
        });
        let hint = if editing {
            "  Enter sends · Esc stops editing"
        } else {
            "  press Enter here to type"
        };
        self.line(Line::from(vec![
            Span::styled(send, self.palette.button),
            Span::styled(hint, self.palette.dim),
        ]));

        match form.status() {
            FormStatus::Hidden => {}
            FormStatus::Waiting => {
                self.blank();
                let frame = SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()];
                self.line(Line::from(vec![
                    Span::styled(format!("{frame} "), self.palette.accent),
                    Span::styled(WAITING_TEXT, Style::default()),
                ]));
            }
            FormStatus::Done(outcome) => {
                self.blank();
                let style = if outcome.success {
                    self.palette.success
                } else {
                    self.palette.failure
                };
                self.line(Line::from(Span::styled(
                    format!("{} {}", outcome.icon(), outcome.message),
                    style,
                )));
            }
        }
    }
}

/// Greedy word wrap. Words longer than the width get hard-broken.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_w = 0usize;
    for word in text.split_whitespace() {
        let word_w = word.chars().count();
        if current_w > 0 && current_w + 1 + word_w > width {
            rows.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if word_w > width {
            // Hard-break an oversized word across rows.
            for ch in word.chars() {
                if current_w == width {
                    rows.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(ch);
                current_w += 1;
            }
            continue;
        }
        if current_w > 0 {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
