pub trait ProgressStore {
    /// Zero-based index of the next level to play.
    fn level_index(&self) -> u32;
    fn advance_level(&mut self);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryProgress {
    level_index: u32,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(level_index: u32) -> Self {
        MemoryProgress { level_index }
    }
}

impl ProgressStore for MemoryProgress {
    fn level_index(&self) -> u32 {
        self.level_index
    }

    fn advance_level(&mut self) {
        self.level_index = self.level_index.saturating_add(1);
    }
}
