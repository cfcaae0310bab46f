//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! Every page widget is wired exactly once, at construction; a widget whose
//! section or data is missing stays `None` and its feature is simply absent.

use ratatui::layout::Rect;
use std::time::Instant;

use crate::config::AppConfig;
use crate::core::{
    contact::ContactForm,
    content::{Portfolio, SectionKind},
    menu::NavMenu,
    scrollspy::{ScrollSpy, ACTIVATION_OFFSET},
    slider::Slider,
    tabs::TabStrip,
    theme::{self, ThemeState},
    typewriter::Typewriter,
};
use crate::ui::smooth_scroll::SmoothScroll;

/// Where key input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scrolling the page and driving the widgets.
    #[default]
    Browse,
    /// Typing into the contact form.
    Edit,
}

/// Document positions of the widget-owning sections, resolved once at
/// construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionAnchors {
    pub resume: Option<usize>,
    pub projects: Option<usize>,
    pub testimonials: Option<usize>,
    pub contact: Option<usize>,
}

/// Geometry of the last rendered frame, consumed by scrolling and the spy.
#[derive(Debug, Clone, Default)]
pub struct PageGeometry {
    /// Top row of each section within the virtual document, by section index.
    pub section_tops: Vec<usize>,
    /// Total height of the virtual document in rows.
    pub doc_height: usize,
    /// Height of the scrolling viewport in rows.
    pub viewport: usize,
}

/// Clickable regions recorded while rendering the last frame.
#[derive(Debug, Default)]
pub struct HitZones {
    pub nav_links: Vec<(Rect, usize)>,
    pub hamburger: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    pub menu_panel: Option<Rect>,
    pub menu_items: Vec<(Rect, usize)>,
    pub resume_tabs: Vec<(Rect, usize)>,
    pub filter_buttons: Vec<(Rect, usize)>,
    pub slider_prev: Option<Rect>,
    pub slider_next: Option<Rect>,
    pub form_fields: Vec<(Rect, usize)>,
    pub form_send: Option<Rect>,
}

/// Top-level application state.
pub struct AppState {
    /// The loaded portfolio document.
    pub content: Portfolio,
    /// Persisted settings (the theme override).
    pub config: AppConfig,

    // ── page widgets, each owning its own state ──────────────────────────
    pub theme: ThemeState,
    pub typewriter: Option<Typewriter>,
    pub spy: Option<ScrollSpy>,
    pub menu: NavMenu,
    pub resume_tabs: Option<TabStrip>,
    pub project_filter: Option<TabStrip>,
    pub slider: Option<Slider>,
    pub form: Option<ContactForm>,
    pub anchors: SectionAnchors,

    // ── viewport ─────────────────────────────────────────────────────────
    /// Top row of the viewport within the virtual document.
    pub scroll: usize,
    /// Easing for nav jumps; instant scrolling bypasses it.
    pub smooth: SmoothScroll,
    pub mode: InputMode,
    /// Layout of the last frame; `None` before the first draw.
    pub geometry: Option<PageGeometry>,
    pub hit: HitZones,
    /// Set when the active section must be re-derived after the next draw.
    pub needs_spy_recompute: bool,
    /// Set by handlers when a form submission should leave for the network.
    pub pending_submit: bool,

    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Wire every widget from the document. This is the page-load moment:
    /// it runs once, and widgets whose data is absent stay disabled.
    pub fn new(content: Portfolio, config: AppConfig, now: Instant) -> Self {
        let theme = ThemeState::new(config.theme, theme::detect_system_mode());

        let mut typewriter = None;
        let mut resume_tabs = None;
        let mut project_filter = None;
        let mut slider = None;
        let mut form = None;
        let mut anchors = SectionAnchors::default();

        for (index, section) in content.sections.iter().enumerate() {
            match &section.kind {
                SectionKind::Hero { taglines, .. } => {
                    if let Some(raw) = taglines {
                        typewriter = Typewriter::from_json(raw, now);
                    }
                }
                SectionKind::About { .. } => {}
                SectionKind::Resume { tabs, panels } => {
                    anchors.resume = Some(index);
                    if !panels.is_empty() {
                        resume_tabs =
                            TabStrip::new(tabs.iter().map(|tab| tab.key.clone()).collect());
                    }
                }
                SectionKind::Projects { filters, items } => {
                    anchors.projects = Some(index);
                    if !items.is_empty() {
                        project_filter = TabStrip::new(filters.clone());
                    }
                }
                SectionKind::Testimonials { entries } => {
                    anchors.testimonials = Some(index);
                    slider = Slider::new(entries.len());
                }
                SectionKind::Contact { endpoint, access_key } => {
                    anchors.contact = Some(index);
                    form = Some(ContactForm::new(endpoint.clone(), access_key.clone()));
                }
            }
        }

        Self {
            content,
            config,
            theme,
            typewriter,
            // Built from the first frame's layout; see `init_spy`.
            spy: None,
            menu: NavMenu::default(),
            resume_tabs,
            project_filter,
            slider,
            form,
            anchors,
            scroll: 0,
            smooth: SmoothScroll::new(0.3),
            mode: InputMode::default(),
            geometry: None,
            hit: HitZones::default(),
            needs_spy_recompute: true,
            pending_submit: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Build the spy registry from the first layout's section offsets.
    pub fn init_spy(&mut self, tops: &[usize]) {
        if self.spy.is_none() {
            self.spy = ScrollSpy::new(tops, ACTIVATION_OFFSET);
        }
    }

    /// Highest valid scroll position for the current geometry.
    pub fn max_scroll(&self) -> usize {
        match &self.geometry {
            Some(geometry) => geometry.doc_height.saturating_sub(geometry.viewport),
            None => 0,
        }
    }
}
