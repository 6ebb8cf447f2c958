pub mod cell;

use crate::{error::FieldError, render, GameState};
use cell::Cell;
use rand::{thread_rng, Rng};
use std::cmp;
use std::fmt::{Display, Formatter};

/// The largest allowed amount of rows.
pub const MAX_HEIGHT: usize = 50;
/// The largest allowed amount of columns.
pub const MAX_WIDTH: usize = 50;
/// When at most this many cells would stay free of mines, the first move only protects the visited cell itself
/// instead of its whole 3x3 neighbourhood.
const DENSE_FIELD_MARGIN: usize = 9;

/// The two phases of a field's life between resets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    /// No cell has been visited yet, so there are no mines in the field either.
    AwaitingFirstMove,
    /// The mines have been placed.
    InPlay,
}

/// The minefield: a grid of cells with a known number of mines.
///
/// The mines are placed lazily, on the first visit, so that the first visited cell and (unless the field is too
/// dense for that) its neighbours never hold a mine.
///
/// Coordinates are `(x, y)`, where `x` is the column index and `y` is the row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minefield {
    /// The cells of the field. The top level represents rows, the nested vectors represent the cells of each row.
    grid: Vec<Vec<Cell>>,
    height: usize,
    width: usize,
    mine_count: usize,
    phase: Phase,
}

impl Minefield {
    /// Creates a new [`Minefield`] with the provided dimensions and number of mines.
    ///
    /// The method never fails. Instead, every value is silently clamped into its valid range: the dimensions into
    /// `1..=50`, the mines amount into `1..=(height * width - 1)` so that there's always at least one safe cell. A
    /// field always has at least two cells, so a 1x1 request gets widened to 1x2.
    pub fn new(height: i32, width: i32, mine_count: i32) -> Self {
        let clamped_height = clamp(height, 1, MAX_HEIGHT);
        let mut clamped_width = clamp(width, 1, MAX_WIDTH);

        if clamped_height * clamped_width < 2 {
            clamped_width = 2;
        }

        let clamped_mine_count = clamp(mine_count, 1, clamped_height * clamped_width - 1);

        let requested = (i64::from(height), i64::from(width), i64::from(mine_count));
        let actual = (
            clamped_height as i64,
            clamped_width as i64,
            clamped_mine_count as i64,
        );
        if requested != actual {
            log::debug!(
                "requested a {}x{} field with {} mines, clamped to {}x{} with {} mines",
                width,
                height,
                mine_count,
                clamped_width,
                clamped_height,
                clamped_mine_count
            );
        }

        Minefield {
            grid: blank_grid(clamped_height, clamped_width),
            height: clamped_height,
            width: clamped_width,
            mine_count: clamped_mine_count,
            phase: Phase::AwaitingFirstMove,
        }
    }

    /// Returns the amount of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the amount of columns.
    ///
    /// This may differ from the requested width: besides the clamping, a 1x1 request is widened to two columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the amount of mines the field holds (or will hold after the first visit).
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Whether the mines are yet to be placed.
    pub fn is_first_move_pending(&self) -> bool {
        self.phase == Phase::AwaitingFirstMove
    }

    /// Covers every cell again and removes all the mines, so that the next visit places a fresh layout.
    pub fn reset(&mut self) {
        self.grid
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = Cell::new());
        self.phase = Phase::AwaitingFirstMove;

        log::debug!("the {}x{} field has been reset", self.width, self.height);
    }

    /// Checks whether the coordinate lies within the field.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns a read-only cell reference by its position or [`None`] if there's no cell at the given position.
    pub fn get_cell(&self, (x, y): (usize, usize)) -> Option<&Cell> {
        self.grid.get(y).and_then(|row| row.get(x))
    }

    /// Checks whether the cell at the given position is still covered.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the field.
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        self.cell_at(x, y).is_covered()
    }

    /// Returns the amount of mines around an uncovered cell.
    ///
    /// For a covered cell the value is meaningless and is always 0, so check [`Minefield::is_covered`] first.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the field.
    pub fn adjacent_mine_count(&self, x: usize, y: usize) -> u8 {
        self.cell_at(x, y).adjacent_mines_amount().unwrap_or(0)
    }

    /// Returns the amount of cells that are still covered (including the mined ones).
    pub fn covered_cells_amount(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.is_covered())
            .count()
    }

    /// Visits a cell, placing the mines first if that's the first visit since creation or the last reset.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the field. Use [`Minefield::try_visit`] for input that hasn't been
    /// validated yet.
    pub fn visit(&mut self, x: usize, y: usize) -> GameState {
        self.visit_with_rng(x, y, &mut thread_rng())
    }

    /// Same as [`Minefield::visit`], but draws the mine positions from the given random number generator.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the field.
    pub fn visit_with_rng<R: Rng + ?Sized>(&mut self, x: usize, y: usize, rng: &mut R) -> GameState {
        match self.try_visit_with_rng(x, y, rng) {
            Ok(state) => state,
            Err(error) => panic!("{}", error),
        }
    }

    /// Visits a cell, failing with [`FieldError::OutOfRange`] if the position lies outside the field.
    ///
    /// A failed call leaves the field untouched.
    pub fn try_visit(&mut self, x: usize, y: usize) -> Result<GameState, FieldError> {
        self.try_visit_with_rng(x, y, &mut thread_rng())
    }

    /// Same as [`Minefield::try_visit`], but draws the mine positions from the given random number generator.
    pub fn try_visit_with_rng<R: Rng + ?Sized>(
        &mut self,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> Result<GameState, FieldError> {
        self.check_position(x, y)?;

        if let Phase::AwaitingFirstMove = self.phase {
            self.place_mines((x, y), rng);
            self.phase = Phase::InPlay;
        }

        if self.grid[y][x].is_mined() {
            log::info!("stepped on a mine at ({}, {})", x, y);
            return Ok(GameState::Lose);
        }

        let uncovered = self.uncover_from(x, y);
        log::trace!("visiting ({}, {}) uncovered {} cells", x, y, uncovered);

        if self.covered_cells_amount() == self.mine_count {
            log::info!("the field has been cleared");
            Ok(GameState::Win)
        } else {
            Ok(GameState::Ongoing)
        }
    }

    /// Randomly distributes exactly `mine_count` mines, keeping them out of the first move's exclusion zone.
    ///
    /// Positions are drawn by rejection sampling: a draw that hits a mined or excluded cell is simply repeated. The
    /// exclusion zone always leaves at least `mine_count` free cells, so the loop terminates.
    fn place_mines<R: Rng + ?Sized>(&mut self, first_move: (usize, usize), rng: &mut R) {
        let dense = self.mine_count + DENSE_FIELD_MARGIN >= self.width * self.height;
        let mut placed = 0;

        while placed < self.mine_count {
            let position = (rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            let cell = &mut self.grid[position.1][position.0];

            if cell.is_mined() || is_excluded(first_move, position, dense) {
                continue;
            }

            cell.mine();
            placed += 1;
        }

        log::debug!(
            "placed {} mines around the first move at ({}, {}), dense: {}",
            placed,
            first_move.0,
            first_move.1,
            dense
        );
    }

    /// Uncovers a safe cell and, while uncovered cells turn out to have no mines around them, all of their covered
    /// neighbours. Returns the amount of cells uncovered.
    ///
    /// Every cell gets uncovered before it's queued, so each one is processed at most once.
    fn uncover_from(&mut self, x: usize, y: usize) -> usize {
        let mut uncovered = usize::from(self.grid[y][x].is_covered());
        let mut empty_cells = Vec::new();

        if self.uncover(x, y) == 0 {
            empty_cells.push((x, y));
        }

        while let Some((x, y)) = empty_cells.pop() {
            for (nx, ny) in self.neighbours(x, y) {
                if !self.grid[ny][nx].is_covered() {
                    continue;
                }

                uncovered += 1;
                if self.uncover(nx, ny) == 0 {
                    empty_cells.push((nx, ny));
                }
            }
        }

        uncovered
    }

    /// Uncovers a single cell and returns the amount of mines around it.
    fn uncover(&mut self, x: usize, y: usize) -> u8 {
        let adjacent_mines_amount = self.count_adjacent_mines(x, y);
        self.grid[y][x].uncover(adjacent_mines_amount);

        adjacent_mines_amount
    }

    fn count_adjacent_mines(&self, x: usize, y: usize) -> u8 {
        self.neighbours(x, y)
            .into_iter()
            .filter(|&(nx, ny)| self.grid[ny][nx].is_mined())
            .count() as u8
    }

    /// Returns the positions of the cells adjacent to the given one (horizontally, vertically or diagonally), clipped
    /// to the field's bounds. A corner cell has 3 neighbours, an edge cell has 5, the rest have 8.
    fn neighbours(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let columns = x.saturating_sub(1)..=cmp::min(x + 1, self.width - 1);
        let rows = y.saturating_sub(1)..=cmp::min(y + 1, self.height - 1);

        rows.flat_map(|ny| columns.clone().map(move |nx| (nx, ny)))
            .filter(|&position| position != (x, y))
            .collect()
    }

    /// Turns a typed, possibly negative, coordinate into a position within the field.
    pub fn position(&self, x: i64, y: i64) -> Result<(usize, usize), FieldError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(column), Ok(row)) if self.contains(column, row) => Ok((column, row)),
            _ => Err(self.out_of_range(x, y)),
        }
    }

    fn check_position(&self, x: usize, y: usize) -> Result<(), FieldError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(self.out_of_range(
                i64::try_from(x).unwrap_or(i64::MAX),
                i64::try_from(y).unwrap_or(i64::MAX),
            ))
        }
    }

    fn out_of_range(&self, x: i64, y: i64) -> FieldError {
        FieldError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn cell_at(&self, x: usize, y: usize) -> &Cell {
        match self.check_position(x, y) {
            Ok(()) => &self.grid[y][x],
            Err(error) => panic!("{}", error),
        }
    }

    /// Builds a field with the mines at the given positions, as if the first move had already happened.
    #[cfg(test)]
    pub(crate) fn with_mines(height: usize, width: usize, mines: &[(usize, usize)]) -> Self {
        let mut grid = blank_grid(height, width);
        for &(x, y) in mines {
            grid[y][x].mine();
        }

        Minefield {
            grid,
            height,
            width,
            mine_count: mines.len(),
            phase: Phase::InPlay,
        }
    }
}

impl Display for Minefield {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in render::render_board(self, None) {
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

fn blank_grid(height: usize, width: usize) -> Vec<Vec<Cell>> {
    vec![vec![Cell::new(); width]; height]
}

/// Clamps a raw, possibly negative, input into `min..=max`.
fn clamp(value: i32, min: usize, max: usize) -> usize {
    i64::from(value).clamp(min as i64, max as i64) as usize
}

/// Whether a mine is forbidden at `position` given the first move at `center`.
fn is_excluded(center: (usize, usize), position: (usize, usize), dense: bool) -> bool {
    if dense {
        position == center
    } else {
        position.0.abs_diff(center.0) <= 1 && position.1.abs_diff(center.1) <= 1
    }
}
