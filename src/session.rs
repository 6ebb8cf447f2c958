//! The "play, then play again?" loop around a single field, independent of how it's drawn.

use crate::input::{self, Command};
use crate::{FieldError, GameState, Minefield};
use rand::Rng;

const ONGOING_PROMPT: &str = "Dig at coordinate \"x y\", or type \"q\" to quit the game.";
const WIN_PROMPT: &str = "Congratulations! You cleared the minefield. Try again? (y/n)";
const LOSE_PROMPT: &str = "Oh no! You found a mine that blew up. Try again? (y/n)";

/// Whether the frontend should keep asking for input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Finish,
}

/// A game session: the field, the state of the current round and what to tell the player about the last input.
#[derive(Debug, Clone)]
pub struct Session {
    field: Minefield,
    state: GameState,
    /// The mine that ended the last round, kept until the next round starts.
    struck_mine: Option<(usize, usize)>,
    /// The error caused by the last submitted line, if any.
    error: Option<FieldError>,
}

impl Session {
    pub fn new(field: Minefield) -> Self {
        Session {
            field,
            state: GameState::Ongoing,
            struck_mine: None,
            error: None,
        }
    }

    pub fn field(&self) -> &Minefield {
        &self.field
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn struck_mine(&self) -> Option<(usize, usize)> {
        self.struck_mine
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// The line to show above the input prompt.
    pub fn prompt(&self) -> &'static str {
        match self.state {
            GameState::Ongoing => ONGOING_PROMPT,
            GameState::Win => WIN_PROMPT,
            GameState::Lose => LOSE_PROMPT,
        }
    }

    /// Handles a line typed by the player.
    ///
    /// During a round, the line is either a coordinate to dig at, `q` to leave or anything else to simply redraw.
    /// Once the round is over, `y` starts a new one and anything else ends the session.
    pub fn submit<R: Rng + ?Sized>(&mut self, line: &str, rng: &mut R) -> Flow {
        self.error = None;

        if self.state.is_over() {
            return if input::is_replay_confirmation(line) {
                self.restart();
                Flow::Continue
            } else {
                Flow::Finish
            };
        }

        match input::parse_command(line) {
            Command::Quit => Flow::Finish,
            Command::Redraw => Flow::Continue,
            Command::Dig((x, y)) => {
                let visit = self.field.position(x, y).and_then(|(x, y)| {
                    self.field
                        .try_visit_with_rng(x, y, rng)
                        .map(|state| (state, (x, y)))
                });

                match visit {
                    Ok((state, position)) => {
                        self.state = state;
                        if let GameState::Lose = state {
                            self.struck_mine = Some(position);
                        }
                    }
                    Err(error) => {
                        log::warn!("rejected the input {:?}: {}", line.trim(), error);
                        self.error = Some(error);
                    }
                }

                Flow::Continue
            }
        }
    }

    /// Starts a new round on the same field.
    pub fn restart(&mut self) {
        self.field.reset();
        self.state = GameState::Ongoing;
        self.struck_mine = None;
        self.error = None;
    }
}

#[cfg(test)]
mod test {
    use super::{Flow, Session, LOSE_PROMPT, ONGOING_PROMPT, WIN_PROMPT};
    use crate::{FieldError, GameState, Minefield};
    use rand::{rngs::StdRng, SeedableRng};

    fn create_stub_session() -> Session {
        Session::new(Minefield::with_mines(4, 3, &[(0, 0), (1, 0), (2, 1)]))
    }

    #[test]
    fn digging_updates_the_state() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();

        assert_eq!(session.submit("0 2", &mut rng), Flow::Continue);
        assert_eq!(session.state(), GameState::Ongoing);
        assert_eq!(session.prompt(), ONGOING_PROMPT);

        assert_eq!(session.submit("2 0", &mut rng), Flow::Continue);
        assert_eq!(session.state(), GameState::Win);
        assert_eq!(session.prompt(), WIN_PROMPT);
    }

    #[test]
    fn losing_remembers_the_struck_mine() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();

        session.submit("2 1", &mut rng);

        assert_eq!(session.state(), GameState::Lose);
        assert_eq!(session.struck_mine(), Some((2, 1)));
        assert_eq!(session.prompt(), LOSE_PROMPT);
    }

    #[test]
    fn malformed_input_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();
        let field = session.field().clone();

        assert_eq!(session.submit("dig here", &mut rng), Flow::Continue);
        assert_eq!(session.field(), &field);
        assert!(session.error().is_none());
    }

    #[test]
    fn out_of_range_input_is_reported_and_ignored() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = Session::new(Minefield::new(5, 5, 3));

        assert_eq!(session.submit("5 0", &mut rng), Flow::Continue);
        assert_eq!(
            session.error(),
            Some(&FieldError::OutOfRange {
                x: 5,
                y: 0,
                width: 5,
                height: 5
            })
        );
        assert!(session.field().is_first_move_pending());

        // the notice only lasts until the next line
        session.submit("", &mut rng);
        assert!(session.error().is_none());
    }

    #[test]
    fn negative_input_is_reported_like_any_other_outside_coordinate() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = Session::new(Minefield::new(5, 5, 3));

        assert_eq!(session.submit("-1 2", &mut rng), Flow::Continue);
        assert_eq!(
            session.error(),
            Some(&FieldError::OutOfRange {
                x: -1,
                y: 2,
                width: 5,
                height: 5
            })
        );
        assert!(session.field().is_first_move_pending());
    }

    #[test]
    fn q_ends_an_ongoing_round() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();

        assert_eq!(session.submit("q", &mut rng), Flow::Finish);
    }

    #[test]
    fn y_after_a_round_starts_a_new_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();
        session.submit("0 0", &mut rng);

        assert_eq!(session.submit("y", &mut rng), Flow::Continue);
        assert_eq!(session.state(), GameState::Ongoing);
        assert_eq!(session.struck_mine(), None);
        assert!(session.field().is_first_move_pending());
        assert_eq!(session.field().covered_cells_amount(), 12);
    }

    #[test]
    fn anything_but_y_after_a_round_ends_the_session() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = create_stub_session();
        session.submit("0 0", &mut rng);

        assert_eq!(session.submit("1 1", &mut rng), Flow::Finish);
    }
}
