use rand::Rng;
use rand::seq::SliceRandom;

use super::assets::AssetHandle;

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub position_index: usize,
    pub pair_id: u32,
    pub face: AssetHandle,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }
}

pub fn spawn_cards<R: Rng + ?Sized>(sprites: &[AssetHandle], rng: &mut R) -> Vec<Card> {
    let mut values = Vec::with_capacity(sprites.len() * 2);
    for (pair_id, sprite) in sprites.iter().enumerate() {
        for _ in 0..2 {
            values.push((pair_id as u32, sprite.clone()));
        }
    }

    values.shuffle(rng);

    values
        .into_iter()
        .enumerate()
        .map(|(position_index, (pair_id, face))| Card {
            position_index,
            pair_id,
            face,
            revealed: false,
            matched: false,
        })
        .collect()
}
