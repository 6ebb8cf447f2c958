pub mod args;
pub mod error;
pub mod input;
pub mod logging;
pub mod minefield;
pub mod preset;
pub mod render;
pub mod session;

pub use args::Args;
pub use error::{FieldError, UnknownPresetError};
pub use minefield::{cell::Cell, Minefield};
pub use preset::{Preset, PRESETS};
pub use session::{Flow, Session};

/// The outcome of a single visit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// There are still safe cells left to uncover.
    Ongoing,
    /// Every safe cell has been uncovered.
    Win,
    /// The visited cell held a mine.
    Lose,
}

impl GameState {
    /// Whether the game has been decided one way or the other.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

#[cfg(test)]
mod test {
    use super::GameState;

    #[test]
    fn only_decided_states_are_over() {
        assert!(!GameState::Ongoing.is_over());
        assert!(GameState::Win.is_over());
        assert!(GameState::Lose.is_over());
    }
}
