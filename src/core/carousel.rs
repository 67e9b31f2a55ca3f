/// Focused-index holder for a fixed, non-empty ordered list.
///
/// Both operations are total: modular arithmetic keeps the index in
/// `0..len` for any number of calls in any order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// `len` is the item count; the configuration list is never empty.
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "carousel needs at least one item");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Move focus one step forward, wrapping past the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Move focus one step backward, wrapping past the start.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Raw (unwrapped) index difference between `item` and the focus.
    pub fn raw_offset(&self, item: usize) -> i32 {
        item as i32 - self.index as i32
    }
}
