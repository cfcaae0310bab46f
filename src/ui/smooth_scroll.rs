//! Row-level smooth scroll with exponential ease-out.
//!
//! Nav jumps move the logical scroll position instantly; this widget injects
//! the old-minus-new row displacement so the rendered viewport starts where
//! the jump began and slides into place, decaying a fraction of the distance
//! each tick — visible deceleration. Line scrolling never goes through here.

/// Row-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Rendered-minus-logical displacement in rows. Negative while easing
    /// down the page, positive while easing up.
    offset: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    /// Higher speed = faster settle. Good range: 0.25–0.45 at 20 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// The logical scroll jumped from `old` to `new`: inject the
    /// displacement that keeps the rendered viewport where it was.
    pub fn retarget(&mut self, old: usize, new: usize) {
        self.offset += old as f64 - new as f64;
    }

    /// Decay the offset toward zero. Call once per tick.
    pub fn tick(&mut self) {
        self.offset *= 1.0 - self.speed;
        if self.offset.abs() < 0.4 {
            self.offset = 0.0;
        }
    }

    /// Current row displacement (integer rows).
    pub fn row_offset(&self) -> i64 {
        self.offset.round() as i64
    }

    /// True while there is still visible motion.
    pub fn is_animating(&self) -> bool {
        self.offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_jump_starts_at_the_old_position() {
        let mut smooth = SmoothScroll::new(0.3);
        smooth.retarget(0, 45);
        // Rendered row = logical 45 + offset -45 = the old position 0.
        assert_eq!(smooth.row_offset(), -45);
        assert!(smooth.is_animating());
    }

    #[test]
    fn the_offset_decays_monotonically_to_zero() {
        let mut smooth = SmoothScroll::new(0.3);
        smooth.retarget(120, 0);
        let mut previous = smooth.row_offset();
        let mut ticks = 0;
        while smooth.is_animating() {
            smooth.tick();
            assert!(smooth.row_offset() <= previous);
            previous = smooth.row_offset();
            ticks += 1;
            assert!(ticks < 100, "animation never settles");
        }
        assert_eq!(smooth.row_offset(), 0);
    }

    #[test]
    fn retargeting_mid_flight_accumulates() {
        let mut smooth = SmoothScroll::new(0.3);
        smooth.retarget(0, 40);
        smooth.tick();
        let mid = smooth.row_offset();
        smooth.retarget(40, 80);
        assert_eq!(smooth.row_offset(), mid - 40);
    }
}
