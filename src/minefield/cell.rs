use std::fmt::{Display, Formatter};

/// The cell's visibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
enum CellState {
    /// The cell hasn't been uncovered yet.
    #[default]
    Covered,
    /// The cell has been uncovered. The value is the amount of mines among its neighbours, computed at the moment the
    /// cell got uncovered.
    Uncovered(u8),
}

/// The representation of a single cell of a [`super::Minefield`].
///
/// A cell either holds a mine or doesn't, and is either covered or uncovered. A mined cell never becomes uncovered:
/// hitting it ends the game instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    mined: bool,
    state: CellState,
}

impl Cell {
    /// Creates a new covered cell without a mine.
    pub fn new() -> Self {
        Cell::default()
    }

    /// Checks whether the cell holds a mine.
    pub fn is_mined(&self) -> bool {
        self.mined
    }

    pub(crate) fn mine(&mut self) {
        self.mined = true;
    }

    /// Checks whether the cell is still covered.
    pub fn is_covered(&self) -> bool {
        self.state == CellState::Covered
    }

    /// Marks the cell as uncovered with the given amount of adjacent mines.
    pub(crate) fn uncover(&mut self, adjacent_mines_amount: u8) {
        self.state = CellState::Uncovered(adjacent_mines_amount);
    }

    /// Returns the amount of mines around the cell or `None` while the cell is covered.
    pub fn adjacent_mines_amount(&self) -> Option<u8> {
        match self.state {
            CellState::Covered => None,
            CellState::Uncovered(amount) => Some(amount),
        }
    }
}

/// The `Display` implementation represents the cell the way a player sees it: `?` for a covered cell, a blank for an
/// uncovered cell with no mines around and the digit otherwise.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.state {
            CellState::Covered => write!(f, "?"),
            CellState::Uncovered(0) => write!(f, " "),
            CellState::Uncovered(amount) => write!(f, "{}", amount),
        }
    }
}
