//! Scroll spy – keeps the nav link of the section in view highlighted.
//!
//! Recomputation is debounced: scroll activity only marks the spy dirty, and
//! the active section is re-derived once the scroll position has been quiet
//! for [`SCROLL_QUIET`]. A nav jump bypasses the debounce entirely by forcing
//! its target active, so the highlight moves the instant the jump starts.

use std::time::{Duration, Instant};

use super::debounce::Debounce;

/// Quiet period after the last scroll event before the active section is
/// recomputed.
pub const SCROLL_QUIET: Duration = Duration::from_millis(100);

/// Rows below the viewport top that count as the reader's focus line.
pub const ACTIVATION_OFFSET: usize = 3;

#[derive(Debug)]
pub struct ScrollSpy {
    /// Section indices sorted by top offset, ascending. Sorted once at
    /// construction; later layout changes reorder nothing.
    order: Vec<usize>,
    offset: usize,
    debounce: Debounce,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Build the registry from the first layout's section offsets. `None`
    /// when the page has no sections.
    pub fn new(tops: &[usize], offset: usize) -> Option<Self> {
        if tops.is_empty() {
            return None;
        }
        let mut order: Vec<usize> = (0..tops.len()).collect();
        order.sort_by_key(|&section| tops[section]);
        Some(Self {
            order,
            offset,
            debounce: Debounce::new(SCROLL_QUIET),
            active: None,
        })
    }

    /// Record scroll activity. The recomputation runs after the quiet period.
    pub fn scrolled(&mut self, now: Instant) {
        self.debounce.trigger(now);
    }

    /// True when a debounced recomputation is due; fires once per burst.
    pub fn due(&mut self, now: Instant) -> bool {
        self.debounce.fire(now)
    }

    /// Re-derive the active section from current geometry. `tops` are the
    /// live section offsets (indexable by section), `doc_height` bounds the
    /// last section, `scroll` is the viewport's top row.
    pub fn recompute(&mut self, tops: &[usize], doc_height: usize, scroll: usize) {
        self.active = self.locate(tops, doc_height, scroll);
    }

    /// Force a section active immediately, bypassing the debounced
    /// recomputation. Used by nav jumps.
    pub fn force_active(&mut self, section: usize) {
        self.active = Some(section);
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    fn locate(&self, tops: &[usize], doc_height: usize, scroll: usize) -> Option<usize> {
        if tops.len() < self.order.len() {
            return None;
        }
        let position = scroll + self.offset;
        // Scan bottom-up: the first span containing the position wins.
        for (rank, &section) in self.order.iter().enumerate().rev() {
            let top = tops[section];
            let bound = match self.order.get(rank + 1) {
                Some(&next) => tops[next],
                None => doc_height,
            };
            if position >= top && position < bound {
                return Some(section);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Section tops 0 / 100 / 300 in a 600-row document, focus offset 80.
    const TOPS: [usize; 3] = [0, 100, 300];
    const DOC: usize = 600;
    const OFFSET: usize = 80;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(&TOPS, OFFSET).expect("sections present")
    }

    #[test]
    fn empty_page_has_no_spy() {
        assert!(ScrollSpy::new(&[], OFFSET).is_none());
    }

    #[test]
    fn position_inside_a_span_selects_that_section() {
        let mut spy = spy();
        // Scroll 70 puts the focus line at 150, inside [100, 300).
        spy.recompute(&TOPS, DOC, 70);
        assert_eq!(spy.active(), Some(1));
    }

    #[test]
    fn position_at_the_very_top_selects_the_first_section() {
        let mut spy = spy();
        // Focus line 80 falls inside [0, 100).
        spy.recompute(&TOPS, DOC, 0);
        assert_eq!(spy.active(), Some(0));
    }

    #[test]
    fn position_past_the_last_top_selects_the_last_section() {
        let mut spy = spy();
        spy.recompute(&TOPS, DOC, 500);
        assert_eq!(spy.active(), Some(2));
    }

    #[test]
    fn position_above_every_section_selects_nothing() {
        let tops = [50, 200];
        let mut spy = ScrollSpy::new(&tops, 0).expect("sections present");
        spy.recompute(&tops, DOC, 10);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn registry_order_comes_from_offsets_not_indices() {
        // Section 2 sits above section 0 on the page.
        let tops = [200, 400, 0];
        let mut spy = ScrollSpy::new(&tops, 0).expect("sections present");
        spy.recompute(&tops, DOC, 100);
        assert_eq!(spy.active(), Some(2));
        spy.recompute(&tops, DOC, 250);
        assert_eq!(spy.active(), Some(0));
        spy.recompute(&tops, DOC, 450);
        assert_eq!(spy.active(), Some(1));
    }

    #[test]
    fn recomputation_waits_for_scrolling_to_go_quiet() {
        let start = Instant::now();
        let mut spy = spy();

        let mut now = start;
        for _ in 0..5 {
            spy.scrolled(now);
            assert!(!spy.due(now));
            now += Duration::from_millis(40);
        }
        let last = now - Duration::from_millis(40);
        assert!(!spy.due(last + Duration::from_millis(99)));
        assert!(spy.due(last + SCROLL_QUIET));
        assert!(!spy.due(last + Duration::from_secs(1)));
    }

    #[test]
    fn forcing_a_section_skips_the_debounce() {
        let mut spy = spy();
        spy.scrolled(Instant::now());
        spy.force_active(2);
        assert_eq!(spy.active(), Some(2));
    }
}
