//! Slide navigation for multi-asset items.

/// Horizontal travel, in CSS pixels, a swipe needs before it changes slide.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Position within a looping, one-slide-per-view carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    len: usize,
    active: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Apply a horizontal swipe of `dx` pixels (end minus start).
    ///
    /// Swiping left shows the next slide and swiping right the previous one.
    /// Travel shorter than [`SWIPE_THRESHOLD`] is treated as a tap.
    pub fn swipe(&mut self, dx: f64) {
        if dx <= -SWIPE_THRESHOLD {
            self.next();
        } else if dx >= SWIPE_THRESHOLD {
            self.prev();
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}
