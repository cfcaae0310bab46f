//! Testimonial slider – a cursor over a fixed list, wrapping both ways.

#[derive(Debug)]
pub struct Slider {
    count: usize,
    current: usize,
}

impl Slider {
    /// `None` for an empty list: the slider is simply absent.
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { count, current: 0 })
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.count;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.count - 1) % self.count;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_slider() {
        assert!(Slider::new(0).is_none());
    }

    #[test]
    fn next_wraps_past_the_end() {
        let mut slider = Slider::new(3).expect("non-empty");
        slider.next();
        slider.next();
        assert_eq!(slider.current(), 2);
        slider.next();
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn prev_wraps_before_the_start() {
        let mut slider = Slider::new(3).expect("non-empty");
        slider.prev();
        assert_eq!(slider.current(), 2);
        slider.prev();
        assert_eq!(slider.current(), 1);
    }

    #[test]
    fn single_entry_stays_put() {
        let mut slider = Slider::new(1).expect("non-empty");
        slider.next();
        slider.prev();
        assert_eq!(slider.current(), 0);
    }
}
