//! Square board shared by the alignment games.
//!
//! Cells hold `0` (empty), `1` (`PlayerId::First`) or `-1`
//! (`PlayerId::Second`), so a line of `n` identical pieces sums to `±n`.

use smallvec::SmallVec;

use crate::core::PlayerId;

/// Directions scanned for lines: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A square grid of signed cells.
///
/// SmallVec keeps boards up to 5×5 inline, so cloning a position for a
/// search branch never touches the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: SmallVec<[i8; 25]>,
}

impl Grid {
    /// Create an empty `size × size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: SmallVec::from_elem(0, size * size),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Raw cell value. Panics if out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Occupant of a cell, if any.
    #[must_use]
    pub fn occupant(&self, row: usize, col: usize) -> Option<PlayerId> {
        PlayerId::from_sign(self.cell(row, col))
    }

    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == 0
    }

    /// Place a piece. Callers validate the move first.
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        self.cells[row * self.size + col] = player.sign();
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |row| (0..self.size).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_empty_at(row, col))
    }

    /// Sums of every straight window of `length` cells.
    fn window_sums(&self, length: usize) -> impl Iterator<Item = i32> + '_ {
        let n = self.size as isize;
        let len = length as isize;
        (0..n)
            .flat_map(move |row| (0..n).map(move |col| (row, col)))
            .flat_map(move |(row, col)| {
                DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
                    let end_row = row + dr * (len - 1);
                    let end_col = col + dc * (len - 1);
                    if end_row < 0 || end_row >= n || end_col < 0 || end_col >= n {
                        return None;
                    }
                    let sum: i32 = (0..len)
                        .map(|i| i32::from(self.cell((row + dr * i) as usize, (col + dc * i) as usize)))
                        .sum();
                    Some(sum)
                })
            })
    }

    /// The player owning a line of `length` pieces, if any.
    ///
    /// `PlayerId::First` is reported when both players own a line.
    #[must_use]
    pub fn line_owner(&self, length: usize) -> Option<PlayerId> {
        let target = length as i32;
        let mut second = false;
        for sum in self.window_sums(length) {
            if sum == target {
                return Some(PlayerId::First);
            }
            second |= sum == -target;
        }
        second.then_some(PlayerId::Second)
    }

    /// Number of windows of `length` cells on this board.
    #[must_use]
    pub fn window_count(&self, length: usize) -> usize {
        self.window_sums(length).count()
    }
}
