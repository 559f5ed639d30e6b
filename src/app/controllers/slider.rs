/// Fixed-size circular sequence of hero slides. The index is always
/// kept in `[0, count)`; previous/next wrap around at the ends.
#[derive(Debug)]
pub struct HeroSlider {
    current: usize,
    count: usize,
}

impl HeroSlider {
    /// `count` is the number of slide containers the display surface
    /// exposes, known at startup.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Jump to a specific slide. `index` must already be in range.
    pub fn show(&mut self, index: usize) -> usize {
        debug_assert!(index < self.count);
        self.current = index;
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = if self.current + 1 >= self.count {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = if self.count == 0 {
            0
        } else if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        };
        self.current
    }

    /// Timer tick. Same motion as `next`; the timer period is not
    /// affected by manual navigation, so a tick can land right after a
    /// manual click (existing behavior, kept).
    pub fn advance(&mut self) -> usize {
        self.next()
    }
}
