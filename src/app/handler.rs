//! Input handling — maps key/mouse events to state mutations.
//!
//! Keys are routed by input mode (browsing vs. editing the contact form),
//! with the open nav menu taking precedence over both. Mouse clicks resolve
//! against the hit zones recorded during the last render, the terminal
//! equivalent of event targets.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

use crate::core::contact::SubmitOutcome;

use super::state::{AppState, InputMode};

/// Process a key event, dispatching on menu state and input mode.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Only process Press events (ignore Release/Repeat on supported terminals).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of mode.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.menu.is_open() {
        handle_menu_key(state, key);
        return;
    }

    match state.mode {
        InputMode::Browse => handle_browse_key(state, key),
        InputMode::Edit => handle_edit_key(state, key),
    }
}

// ── Browse mode ─────────────────────────────────────────────────

fn handle_browse_key(state: &mut AppState, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char('t') => {
            toggle_theme(state);
        }
        KeyCode::Char('m') => {
            if !state.content.sections.is_empty() {
                state.menu.toggle();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_by(state, 1, now);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_by(state, -1, now);
        }
        KeyCode::PageDown => {
            let page = viewport_rows(state).saturating_sub(2);
            scroll_to(state, state.scroll + page, true, now);
        }
        KeyCode::PageUp => {
            let page = viewport_rows(state).saturating_sub(2);
            scroll_to(state, state.scroll.saturating_sub(page), true, now);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            scroll_to(state, 0, true, now);
        }
        KeyCode::Char('G') | KeyCode::End => {
            scroll_to(state, state.max_scroll(), true, now);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let section = c as usize - '1' as usize;
            if section < state.content.sections.len() {
                nav_activate(state, section, now);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            cycle_section_widget(state, true);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            cycle_section_widget(state, false);
        }
        KeyCode::Enter | KeyCode::Char('i') => {
            try_enter_edit(state);
        }
        KeyCode::Esc => {
            state.status_message = None;
        }
        _ => {}
    }
}

/// Switch the widget belonging to the active section: resume tabs, project
/// filters, or the testimonial slider.
fn cycle_section_widget(state: &mut AppState, forward: bool) {
    let Some(active) = state.spy.as_ref().and_then(|spy| spy.active()) else {
        return;
    };

    if state.anchors.resume == Some(active) {
        if let Some(tabs) = &mut state.resume_tabs {
            if forward {
                tabs.next();
            } else {
                tabs.prev();
            }
        }
    } else if state.anchors.projects == Some(active) {
        if let Some(filter) = &mut state.project_filter {
            if forward {
                filter.next();
            } else {
                filter.prev();
            }
        }
    } else if state.anchors.testimonials == Some(active) {
        if let Some(slider) = &mut state.slider {
            if forward {
                slider.next();
            } else {
                slider.prev();
            }
        }
    }
}

/// Enter edit mode, but only with the contact section active.
fn try_enter_edit(state: &mut AppState) {
    let active = state.spy.as_ref().and_then(|spy| spy.active());
    let Some(contact) = state.anchors.contact else {
        return;
    };
    if active == Some(contact) && state.form.is_some() {
        state.mode = InputMode::Edit;
    }
}

// ── Edit mode (contact form) ────────────────────────────────────

fn handle_edit_key(state: &mut AppState, key: KeyEvent) {
    let Some(form) = &mut state.form else {
        state.mode = InputMode::Browse;
        return;
    };

    match key.code {
        KeyCode::Esc => {
            state.mode = InputMode::Browse;
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
        }
        KeyCode::Enter => {
            state.pending_submit = true;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.pending_submit = true;
        }
        KeyCode::Backspace => {
            form.backspace();
        }
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            form.insert_char(c);
        }
        _ => {}
    }
}

// ── Open nav menu ───────────────────────────────────────────────

fn handle_menu_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            state.menu.close();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.menu.select_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.menu.select_next(state.content.sections.len());
        }
        KeyCode::Enter => {
            // Activating an entry closes the panel, then behaves exactly
            // like clicking the corresponding nav link.
            let section = state.menu.selected;
            state.menu.close();
            nav_activate(state, section, Instant::now());
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(state, mouse.column, mouse.row, now);
        }
        MouseEventKind::ScrollUp => {
            scroll_by(state, -3, now);
        }
        MouseEventKind::ScrollDown => {
            scroll_by(state, 3, now);
        }
        _ => {}
    }
}

fn handle_click(state: &mut AppState, col: u16, row: u16, now: Instant) {
    // While the menu is open it owns the pointer: clicks activate an entry,
    // toggle the trigger, or (anywhere else) just close the panel without
    // reaching whatever is underneath.
    if state.menu.is_open() {
        if let Some(section) = zone_hit(&state.hit.menu_items, col, row) {
            state.menu.close();
            nav_activate(state, section, now);
        } else if in_zone(state.hit.hamburger, col, row) {
            state.menu.toggle();
        } else if !in_zone(state.hit.menu_panel, col, row) {
            state.menu.close();
        }
        return;
    }

    if let Some(section) = zone_hit(&state.hit.nav_links, col, row) {
        nav_activate(state, section, now);
        return;
    }
    if in_zone(state.hit.hamburger, col, row) {
        state.menu.toggle();
        return;
    }
    if in_zone(state.hit.theme_toggle, col, row) {
        toggle_theme(state);
        return;
    }
    if let Some(index) = zone_hit(&state.hit.resume_tabs, col, row) {
        if let Some(tabs) = &mut state.resume_tabs {
            tabs.select(index);
        }
        return;
    }
    if let Some(index) = zone_hit(&state.hit.filter_buttons, col, row) {
        if let Some(filter) = &mut state.project_filter {
            filter.select(index);
        }
        return;
    }
    if in_zone(state.hit.slider_prev, col, row) {
        if let Some(slider) = &mut state.slider {
            slider.prev();
        }
        return;
    }
    if in_zone(state.hit.slider_next, col, row) {
        if let Some(slider) = &mut state.slider {
            slider.next();
        }
        return;
    }
    if let Some(index) = zone_hit(&state.hit.form_fields, col, row) {
        if state.form.is_some() {
            if let Some(form) = &mut state.form {
                form.focus(index);
            }
            state.mode = InputMode::Edit;
        }
        return;
    }
    if in_zone(state.hit.form_send, col, row) {
        state.pending_submit = state.form.is_some();
        return;
    }

    // A click on dead space while editing drops back to browsing.
    if state.mode == InputMode::Edit {
        state.mode = InputMode::Browse;
    }
}

// ── Timers ──────────────────────────────────────────────────────

/// Advance every timer-driven widget. Runs on each steady tick.
pub fn handle_tick(state: &mut AppState, now: Instant) {
    if let Some(typewriter) = &mut state.typewriter {
        typewriter.poll(now);
    }

    // Easing motion counts as scroll activity for the spy.
    if state.smooth.is_animating() {
        state.smooth.tick();
        if let Some(spy) = &mut state.spy {
            spy.scrolled(now);
        }
    }

    if let Some(spy) = &mut state.spy {
        if spy.due(now) {
            state.needs_spy_recompute = true;
        }
    }

    if let Some(form) = &mut state.form {
        form.tick(now);
    }
}

/// A submission outcome arrived from its background task.
pub fn handle_submission(state: &mut AppState, outcome: SubmitOutcome, now: Instant) {
    if let Some(form) = &mut state.form {
        form.complete(outcome, now);
    }
}

// ── helpers ─────────────────────────────────────────────────────

/// A nav link was activated: smooth-scroll to the section and force its
/// link active immediately, without waiting for the debounce. The section
/// id lands in the status bar, the location-hash of the terminal page.
fn nav_activate(state: &mut AppState, section: usize, now: Instant) {
    let id = match state.content.sections.get(section) {
        Some(section) => section.id.clone(),
        None => return,
    };
    state.status_message = Some(format!("#{id}"));
    let top = state
        .geometry
        .as_ref()
        .and_then(|geometry| geometry.section_tops.get(section).copied());
    if let Some(top) = top {
        scroll_to(state, top, true, now);
    }
    if let Some(spy) = &mut state.spy {
        spy.force_active(section);
    }
}

fn scroll_to(state: &mut AppState, target: usize, animate: bool, now: Instant) {
    let target = target.min(state.max_scroll());
    if target == state.scroll {
        return;
    }
    if animate {
        state.smooth.retarget(state.scroll, target);
    }
    state.scroll = target;
    if let Some(spy) = &mut state.spy {
        spy.scrolled(now);
    }
}

fn scroll_by(state: &mut AppState, delta: i64, now: Instant) {
    let max = state.max_scroll() as i64;
    let target = (state.scroll as i64 + delta).clamp(0, max) as usize;
    scroll_to(state, target, false, now);
}

fn viewport_rows(state: &AppState) -> usize {
    state
        .geometry
        .as_ref()
        .map(|geometry| geometry.viewport)
        .unwrap_or(0)
}

fn toggle_theme(state: &mut AppState) {
    let mode = state.theme.toggle();
    state.config.theme = Some(mode);
    let _ = state.config.save();
    state.status_message = Some(format!("{} {} theme", mode.icon(), mode.as_str()));
}

fn zone_hit(zones: &[(Rect, usize)], col: u16, row: u16) -> Option<usize> {
    zones
        .iter()
        .find(|(rect, _)| point_in_rect(*rect, col, row))
        .map(|&(_, index)| index)
}

fn in_zone(zone: Option<Rect>, col: u16, row: u16) -> bool {
    zone.is_some_and(|rect| point_in_rect(rect, col, row))
}

fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PageGeometry;
    use crate::config::AppConfig;
    use crate::core::contact::FormStatus;
    use crate::core::content;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const TOPS: [usize; 6] = [0, 20, 45, 80, 110, 130];

    /// A state that has "drawn" once: geometry present, spy built and primed.
    fn ready_state() -> AppState {
        let mut state = AppState::new(content::sample(), AppConfig::default(), Instant::now());
        state.geometry = Some(PageGeometry {
            section_tops: TOPS.to_vec(),
            doc_height: 160,
            viewport: 30,
        });
        state.init_spy(&TOPS);
        if let Some(spy) = &mut state.spy {
            spy.recompute(&TOPS, 160, 0);
        }
        state.needs_spy_recompute = false;
        state
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = ready_state();
        state.menu.toggle();
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn number_keys_jump_and_force_the_highlight() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.scroll, TOPS[2]);
        assert_eq!(state.spy.as_ref().and_then(|s| s.active()), Some(2));
        assert_eq!(state.status_message.as_deref(), Some("#resume"));
        // The jump eases in: the rendered offset still trails the target.
        assert!(state.smooth.is_animating());
    }

    #[test]
    fn out_of_range_number_keys_do_nothing() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('9')));
        assert_eq!(state.scroll, 0);
        assert_eq!(state.spy.as_ref().and_then(|s| s.active()), Some(0));
    }

    #[test]
    fn line_scrolling_is_instant_and_clamped() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.scroll, 1);
        assert!(!state.smooth.is_animating());

        handle_key(&mut state, key(KeyCode::Char('k')));
        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.scroll, 0);

        handle_key(&mut state, key(KeyCode::Char('G')));
        assert_eq!(state.scroll, 130); // doc 160, viewport 30
    }

    #[test]
    fn the_wheel_scrolls_three_rows() {
        let mut state = ready_state();
        let mut wheel = click(5, 5);
        wheel.kind = MouseEventKind::ScrollDown;
        handle_mouse(&mut state, wheel);
        assert_eq!(state.scroll, 3);
    }

    #[test]
    fn scrolling_marks_the_spy_for_a_debounced_recompute() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('j')));
        // Quiet period not over: nothing due yet.
        handle_tick(&mut state, Instant::now());
        assert!(!state.needs_spy_recompute);
        // Well past the quiet period.
        handle_tick(&mut state, Instant::now() + Duration::from_millis(300));
        assert!(state.needs_spy_recompute);
    }

    #[test]
    fn easing_ticks_defer_the_recompute_until_the_jump_settles() {
        let start = Instant::now();
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('3')));
        assert!(state.smooth.is_animating());

        // Every easing step counts as scroll activity, restarting the
        // quiet period while the viewport is still in motion.
        let mut now = start;
        let mut steps = 0;
        while state.smooth.is_animating() {
            now += Duration::from_millis(50);
            handle_tick(&mut state, now);
            assert!(!state.needs_spy_recompute);
            steps += 1;
            assert!(steps < 100, "easing never settles");
        }

        // Inside the quiet period after the last step: still nothing due.
        handle_tick(&mut state, now + Duration::from_millis(50));
        assert!(!state.needs_spy_recompute);
        // One quiet period after the motion stops, the recompute falls due.
        handle_tick(&mut state, now + Duration::from_millis(150));
        assert!(state.needs_spy_recompute);
    }

    #[test]
    fn menu_keys_drive_the_panel_not_the_page() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('m')));
        assert!(state.menu.is_open());

        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.scroll, 0);
        assert_eq!(state.menu.selected, 1);

        handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.menu.is_open());
        assert_eq!(state.scroll, TOPS[1]);
        assert_eq!(state.spy.as_ref().and_then(|s| s.active()), Some(1));
    }

    #[test]
    fn escape_closes_the_menu() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('m')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.menu.is_open());
    }

    #[test]
    fn a_click_outside_the_open_menu_closes_it_and_nothing_else() {
        let mut state = ready_state();
        state.menu.toggle();
        state.hit.menu_panel = Some(Rect::new(20, 5, 24, 8));
        state.hit.menu_items = vec![(Rect::new(21, 6, 22, 1), 0)];
        // The nav link underneath must not receive this click.
        state.hit.nav_links = vec![(Rect::new(2, 0, 6, 1), 3)];

        handle_mouse(&mut state, click(2, 0));
        assert!(!state.menu.is_open());
        assert_eq!(state.scroll, 0);
        assert_eq!(state.spy.as_ref().and_then(|s| s.active()), Some(0));
    }

    #[test]
    fn clicking_a_menu_entry_navigates() {
        let mut state = ready_state();
        state.menu.toggle();
        state.hit.menu_panel = Some(Rect::new(20, 5, 24, 8));
        state.hit.menu_items = vec![
            (Rect::new(21, 6, 22, 1), 0),
            (Rect::new(21, 7, 22, 1), 1),
        ];

        handle_mouse(&mut state, click(25, 7));
        assert!(!state.menu.is_open());
        assert_eq!(state.scroll, TOPS[1]);
    }

    #[test]
    fn clicking_a_nav_link_jumps_to_its_section() {
        let mut state = ready_state();
        state.hit.nav_links = vec![(Rect::new(10, 0, 5, 1), 4)];
        handle_mouse(&mut state, click(12, 0));
        assert_eq!(state.scroll, TOPS[4]);
        assert_eq!(state.spy.as_ref().and_then(|s| s.active()), Some(4));
    }

    #[test]
    fn h_and_l_cycle_the_active_sections_widget() {
        let mut state = ready_state();

        // Resume section (index 2): tabs.
        handle_key(&mut state, key(KeyCode::Char('3')));
        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.resume_tabs.as_ref().map(|t| t.active_index()), Some(1));
        handle_key(&mut state, key(KeyCode::Char('h')));
        assert_eq!(state.resume_tabs.as_ref().map(|t| t.active_index()), Some(0));

        // Projects section (index 3): filters.
        handle_key(&mut state, key(KeyCode::Char('4')));
        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(
            state.project_filter.as_ref().map(|f| f.active_key().to_string()),
            Some("tools".to_string())
        );

        // Testimonials section (index 4): slider.
        handle_key(&mut state, key(KeyCode::Char('5')));
        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.slider.as_ref().map(|s| s.current()), Some(1));
    }

    #[test]
    fn widget_cycling_needs_the_owning_section_active() {
        let mut state = ready_state();
        // Section 0 (hero) is active: h/l touch nothing.
        handle_key(&mut state, key(KeyCode::Char('l')));
        assert_eq!(state.resume_tabs.as_ref().map(|t| t.active_index()), Some(0));
        assert_eq!(state.slider.as_ref().map(|s| s.current()), Some(0));
    }

    #[test]
    fn enter_opens_the_form_only_on_the_contact_section() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode, InputMode::Browse);

        handle_key(&mut state, key(KeyCode::Char('6')));
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.mode, InputMode::Edit);
    }

    #[test]
    fn edit_mode_types_into_the_focused_field() {
        let mut state = ready_state();
        state.mode = InputMode::Edit;

        for c in ['J', 'o'] {
            handle_key(&mut state, key(KeyCode::Char(c)));
        }
        handle_key(&mut state, key(KeyCode::Tab));
        handle_key(&mut state, key(KeyCode::Char('a')));
        handle_key(&mut state, key(KeyCode::Backspace));

        let form = state.form.as_ref().expect("contact form");
        assert_eq!(form.fields[0].value, "Jo");
        assert_eq!(form.fields[1].value, "");
        assert_eq!(form.focused, 1);
    }

    #[test]
    fn enter_in_edit_mode_requests_a_submission() {
        let mut state = ready_state();
        state.mode = InputMode::Edit;
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.pending_submit);
        assert_eq!(state.mode, InputMode::Edit);
    }

    #[test]
    fn escape_leaves_edit_mode_without_submitting() {
        let mut state = ready_state();
        state.mode = InputMode::Edit;
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.mode, InputMode::Browse);
        assert!(!state.pending_submit);
    }

    #[test]
    fn clicking_a_form_field_starts_editing_it() {
        let mut state = ready_state();
        state.hit.form_fields = vec![
            (Rect::new(4, 20, 30, 1), 0),
            (Rect::new(4, 21, 30, 1), 1),
        ];
        handle_mouse(&mut state, click(10, 21));
        assert_eq!(state.mode, InputMode::Edit);
        assert_eq!(state.form.as_ref().map(|f| f.focused), Some(1));
    }

    #[test]
    fn clicking_send_requests_a_submission_from_any_mode() {
        let mut state = ready_state();
        state.hit.form_send = Some(Rect::new(4, 24, 16, 1));
        handle_mouse(&mut state, click(6, 24));
        assert!(state.pending_submit);
    }

    #[test]
    fn a_submission_outcome_lands_in_the_form() {
        let now = Instant::now();
        let mut state = ready_state();
        handle_submission(
            &mut state,
            SubmitOutcome::from_response(200, r#"{"message": "Thanks!"}"#),
            now,
        );
        let form = state.form.as_ref().expect("contact form");
        assert!(matches!(form.status(), FormStatus::Done(o) if o.success));

        // The linger deadline hides the region via the tick path.
        handle_tick(&mut state, now + Duration::from_secs(5));
        let form = state.form.as_ref().expect("contact form");
        assert_eq!(*form.status(), FormStatus::Hidden);
    }

    #[test]
    fn ticks_advance_the_typewriter() {
        let start = Instant::now();
        let mut state = AppState::new(content::sample(), AppConfig::default(), start);
        handle_tick(&mut state, start);
        let shown = state.typewriter.as_ref().map(|t| t.display().to_string());
        assert_eq!(shown.as_deref(), Some("I"));
    }

    #[test]
    fn slider_arrow_clicks_wrap() {
        let mut state = ready_state();
        state.hit.slider_prev = Some(Rect::new(4, 30, 3, 1));
        handle_mouse(&mut state, click(5, 30));
        // Backwards from the first entry wraps to the last of three.
        assert_eq!(state.slider.as_ref().map(|s| s.current()), Some(2));
    }
}
