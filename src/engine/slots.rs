/// One selection slot. `card` is a board position; it is meaningful only
/// while `active` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub card: usize,
    pub active: bool,
}

impl Selection {
    fn set(&mut self, card: usize) {
        self.card = card;
        self.active = true;
    }

    fn reset(&mut self) {
        self.active = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessPair {
    pub first: Selection,
    pub second: Selection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPick {
    First,
    Completed(GuessPair),
    Full,
}

#[derive(Clone, Debug, Default)]
pub struct SelectionSlots {
    first: Selection,
    second: Selection,
}

impl SelectionSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does not deduplicate cards; callers keep a picked card unselectable.
    pub fn select(&mut self, card: usize) -> SlotPick {
        if !self.first.active {
            self.first.set(card);
            SlotPick::First
        } else if !self.second.active {
            self.second.set(card);
            SlotPick::Completed(GuessPair {
                first: self.first,
                second: self.second,
            })
        } else {
            SlotPick::Full
        }
    }

    pub fn clear(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    pub fn first(&self) -> Selection {
        self.first
    }

    pub fn second(&self) -> Selection {
        self.second
    }

    pub fn is_full(&self) -> bool {
        self.first.active && self.second.active
    }

    pub fn holds(&self, card: usize) -> bool {
        (self.first.active && self.first.card == card)
            || (self.second.active && self.second.card == card)
    }
}
