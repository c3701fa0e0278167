pub const MAX_ROWS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub rows: u32,
    pub cols: u32,
}

impl BoardLayout {
    pub fn for_card_count(card_count: u32) -> Self {
        let rows = ((card_count as f64).sqrt().floor() as u32).clamp(1, MAX_ROWS);
        let cols = card_count.div_ceil(rows).max(1);
        BoardLayout { rows, cols }
    }

    pub fn cell(&self, position: usize) -> (u32, u32) {
        let position = position as u32;
        (position / self.cols, position % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_square_root_up_to_four() {
        assert_eq!(BoardLayout::for_card_count(4), BoardLayout { rows: 2, cols: 2 });
        assert_eq!(BoardLayout::for_card_count(6), BoardLayout { rows: 2, cols: 3 });
        assert_eq!(BoardLayout::for_card_count(12), BoardLayout { rows: 3, cols: 4 });
        assert_eq!(BoardLayout::for_card_count(30), BoardLayout { rows: 4, cols: 8 });
        assert_eq!(BoardLayout::for_card_count(0), BoardLayout { rows: 1, cols: 1 });
    }

    #[test]
    fn cells_are_row_major() {
        let layout = BoardLayout::for_card_count(12);
        assert_eq!(layout.cell(0), (0, 0));
        assert_eq!(layout.cell(5), (1, 1));
        assert_eq!(layout.cell(11), (2, 3));
    }
}
