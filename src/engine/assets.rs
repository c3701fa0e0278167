use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(value: impl Into<String>) -> Self {
        AssetHandle(value.into())
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait AssetSource {
    /// Returns `count` distinct handles, one per pair id.
    fn pair_sprites(&mut self, count: usize) -> Result<Vec<AssetHandle>, EngineError>;
}

const SYMBOLS: [&str; 60] = [
    // Animals
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵",
    // Fruits
    "🍏", "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🫐", "🍒", "🍑", "🥭", "🍍", "🥥",
    // Sports
    "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉", "🥏", "🎱", "🏓", "🏸", "🏒", "🏑", "🥍",
    // Activities/Objects
    "🎨", "🎬", "🎤", "🎧", "🎮", "🎯", "🎲", "🎳", "🚀", "🚁", "🚂", "🚢", "🪐", "🌙", "⛵",
];

pub struct SymbolSprites {
    rng: StdRng,
}

impl SymbolSprites {
    pub fn new() -> Self {
        SymbolSprites {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        SymbolSprites {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pool_size() -> usize {
        SYMBOLS.len()
    }
}

impl Default for SymbolSprites {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for SymbolSprites {
    fn pair_sprites(&mut self, count: usize) -> Result<Vec<AssetHandle>, EngineError> {
        if count > SYMBOLS.len() {
            return Err(EngineError::NotEnoughSprites {
                requested: count,
                available: SYMBOLS.len(),
            });
        }
        let mut symbol_pool = SYMBOLS.to_vec();
        symbol_pool.shuffle(&mut self.rng);
        Ok(symbol_pool
            .into_iter()
            .take(count)
            .map(AssetHandle::new)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sprites_are_distinct() {
        let mut sprites = SymbolSprites::seeded(11);
        let handles = sprites.pair_sprites(12).expect("pool is large enough");
        assert_eq!(handles.len(), 12);
        let unique: HashSet<_> = handles.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn oversized_requests_fail() {
        let mut sprites = SymbolSprites::seeded(1);
        let err = sprites.pair_sprites(SymbolSprites::pool_size() + 1).unwrap_err();
        assert_eq!(
            err,
            EngineError::NotEnoughSprites {
                requested: SymbolSprites::pool_size() + 1,
                available: SymbolSprites::pool_size(),
            }
        );
    }
}
