use super::transition;

/// Active-slide state for one carousel instance.
///
/// Only exists for non-empty sequences, so `active_index` is always a valid
/// index into the slides it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    len: usize,
}

impl CarouselState {
    /// State for a fresh widget, starting on the first slide.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            active_index: 0,
            len,
        })
    }

    /// State positioned at `index`, falling back to the first slide when the
    /// index does not address a slide.
    pub fn restore(len: usize, index: usize) -> Option<Self> {
        let mut state = Self::new(len)?;
        state.jump_to(index);
        Some(state)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn previous(&mut self) {
        self.active_index = transition::previous(self.active_index, self.len);
    }

    pub fn next(&mut self) {
        self.active_index = transition::next(self.active_index, self.len);
    }

    pub fn jump_to(&mut self, index: usize) {
        self.active_index = transition::jump_to(self.active_index, index, self.len);
    }

    /// Index `previous()` would move to, without moving.
    pub fn peek_previous(&self) -> usize {
        transition::previous(self.active_index, self.len)
    }

    /// Index `next()` would move to, without moving.
    pub fn peek_next(&self) -> usize {
        transition::next(self.active_index, self.len)
    }
}
