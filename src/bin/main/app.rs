//! The terminal application

use crate::game_ui::render_game;
use crate::menu_ui::render_menu;
use crate::tui::Render;
use crate::update::{ControlsSupport, MoveSelectionDirection};
use minefield::{Flow, Minefield, Session, PRESETS};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::Frame;
use std::mem;

/// The longest line the player may type into the game prompt.
const MAX_INPUT_LENGTH: usize = 16;

/// What the application starts with.
#[derive(Debug, Default, Clone)]
pub struct GameSetup {
    /// The field to start playing right away, skipping the menu.
    pub field: Option<Minefield>,
    /// The seed for the mine placement. Every game started with the same seed gets its mines from the same sequence.
    pub seed: Option<u64>,
}

/// The terminal application
#[derive(Debug)]
pub struct App {
    /// The app can be represented by one variant at a time.
    pub variant: AppVariant,
    /// Indicates that the main application loop should be broken on the next tick and thus the app should quit.
    pub should_quit: bool,
    seed: Option<u64>,
}

impl App {
    pub fn new(setup: GameSetup) -> Self {
        App {
            variant: match setup.field {
                Some(field) => AppVariant::InGame(AppGame::new(field, setup.seed)),
                None => AppVariant::InMenu(AppMenu::new(0)),
            },
            should_quit: false,
            seed: setup.seed,
        }
    }

    pub fn tick(&mut self) {
        match &self.variant {
            AppVariant::InMenu(menu) if menu.should_quit => self.quit(),
            AppVariant::InMenu(menu) if menu.should_start => {
                let field = PRESETS[menu.selected].minefield();
                self.variant = AppVariant::InGame(AppGame::new(field, self.seed));
            }
            AppVariant::InGame(game) => {
                if game.should_finish || game.should_emergency_leave {
                    self.quit()
                } else if game.should_leave {
                    self.back_to_menu()
                }
            }
            _ => (),
        };
    }

    /// Leaves the game for the menu, pre-selecting the preset the game was started with (if it was one).
    pub fn back_to_menu(&mut self) {
        if let AppVariant::InGame(game) = &self.variant {
            let field = game.session.field();
            let selected = PRESETS
                .iter()
                .position(|preset| {
                    preset.width as usize == field.width()
                        && preset.height as usize == field.height()
                        && preset.mine_count as usize == field.mine_count()
                })
                .unwrap_or(0);

            self.variant = AppVariant::InMenu(AppMenu::new(selected));
        }
    }

    /// Quit the application altogether.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl ControlsSupport for App {
    fn move_selection(&mut self, direction: MoveSelectionDirection) {
        self.variant.move_selection(direction);
    }

    fn type_char(&mut self, c: char) {
        self.variant.type_char(c);
    }

    fn erase_char(&mut self) {
        self.variant.erase_char();
    }

    fn submit(&mut self) {
        self.variant.submit();
    }

    fn leave(&mut self, force: bool) {
        self.variant.leave(force);
    }
}

impl Render for App {
    fn render(&mut self, frame: &mut Frame) {
        self.variant.render(frame);
    }
}

/// The current application variant.
#[derive(Debug)]
pub enum AppVariant {
    /// When the menu's being displayed
    InMenu(AppMenu),
    /// When the game's being displayed
    InGame(AppGame),
}

impl ControlsSupport for AppVariant {
    fn move_selection(&mut self, direction: MoveSelectionDirection) {
        match self {
            AppVariant::InMenu(menu) => menu.move_selection(direction),
            AppVariant::InGame(game) => game.move_selection(direction),
        }
    }

    fn type_char(&mut self, c: char) {
        match self {
            AppVariant::InMenu(menu) => menu.type_char(c),
            AppVariant::InGame(game) => game.type_char(c),
        }
    }

    fn erase_char(&mut self) {
        match self {
            AppVariant::InMenu(menu) => menu.erase_char(),
            AppVariant::InGame(game) => game.erase_char(),
        }
    }

    fn submit(&mut self) {
        match self {
            AppVariant::InMenu(menu) => menu.submit(),
            AppVariant::InGame(game) => game.submit(),
        }
    }

    fn leave(&mut self, force: bool) {
        match self {
            AppVariant::InMenu(menu) => menu.leave(force),
            AppVariant::InGame(game) => game.leave(force),
        }
    }
}

impl Render for AppVariant {
    fn render(&mut self, frame: &mut Frame) {
        match self {
            AppVariant::InMenu(menu) => render_menu(menu, frame),
            AppVariant::InGame(game) => render_game(game, frame),
        }
    }
}

/// The Menu app variant: a list of the presets to pick from.
#[derive(Debug)]
pub struct AppMenu {
    /// The index of the selected preset in [`PRESETS`].
    pub selected: usize,
    should_start: bool,
    should_quit: bool,
}

impl AppMenu {
    fn new(selected: usize) -> Self {
        AppMenu {
            selected,
            should_start: false,
            should_quit: false,
        }
    }
}

impl ControlsSupport for AppMenu {
    /// Moves the selection, wrapping around at both ends of the list.
    fn move_selection(&mut self, direction: MoveSelectionDirection) {
        self.selected = match direction {
            MoveSelectionDirection::Up => (self.selected + PRESETS.len() - 1) % PRESETS.len(),
            MoveSelectionDirection::Down => (self.selected + 1) % PRESETS.len(),
        };
    }

    fn type_char(&mut self, c: char) {
        match c {
            'w' | 'k' => self.move_selection(MoveSelectionDirection::Up),
            's' | 'j' => self.move_selection(MoveSelectionDirection::Down),
            ' ' => self.submit(),
            'q' => self.leave(false),
            _ => {}
        }
    }

    fn erase_char(&mut self) {}

    fn submit(&mut self) {
        self.should_start = true;
    }

    fn leave(&mut self, _force: bool) {
        self.should_quit = true;
    }
}

/// The Game app variant
#[derive(Debug)]
pub struct AppGame {
    /// The game session.
    pub session: Session,
    /// What the player has typed so far.
    pub input: String,
    rng: StdRng,
    /// Whether the session is over and the app should quit.
    should_finish: bool,
    /// Whether the player asked to go back to the menu.
    should_leave: bool,
    /// Whether the app should urgently leave without asking for a confirmation
    should_emergency_leave: bool,
}

impl AppGame {
    fn new(field: Minefield, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        AppGame {
            session: Session::new(field),
            input: String::new(),
            rng,
            should_finish: false,
            should_leave: false,
            should_emergency_leave: false,
        }
    }
}

impl ControlsSupport for AppGame {
    fn move_selection(&mut self, _direction: MoveSelectionDirection) {}

    fn type_char(&mut self, c: char) {
        if !c.is_control() && self.input.chars().count() < MAX_INPUT_LENGTH {
            self.input.push(c);
        }
    }

    fn erase_char(&mut self) {
        self.input.pop();
    }

    fn submit(&mut self) {
        let line = mem::take(&mut self.input);

        if let Flow::Finish = self.session.submit(&line, &mut self.rng) {
            self.should_finish = true;
        }
    }

    fn leave(&mut self, force: bool) {
        if force {
            self.should_emergency_leave = true;
        } else {
            self.should_leave = true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::{App, AppVariant, GameSetup};
    use crate::update::{ControlsSupport, MoveSelectionDirection};
    use minefield::{GameState, Minefield, PRESETS};

    fn type_line(app: &mut App, line: &str) {
        line.chars().for_each(|c| app.type_char(c));
        app.submit();
        app.tick();
    }

    fn game(app: &App) -> &super::AppGame {
        match &app.variant {
            AppVariant::InGame(game) => game,
            AppVariant::InMenu(_) => panic!("expected the game screen"),
        }
    }

    fn selected(app: &App) -> usize {
        match &app.variant {
            AppVariant::InMenu(menu) => menu.selected,
            AppVariant::InGame(_) => panic!("expected the menu"),
        }
    }

    #[test]
    fn the_menu_selection_wraps_around() {
        let mut app = App::new(GameSetup::default());
        assert_eq!(selected(&app), 0);

        app.move_selection(MoveSelectionDirection::Up);
        assert_eq!(selected(&app), PRESETS.len() - 1);

        app.move_selection(MoveSelectionDirection::Down);
        assert_eq!(selected(&app), 0);
    }

    #[test]
    fn submitting_the_menu_starts_the_selected_preset() {
        let mut app = App::new(GameSetup::default());
        app.move_selection(MoveSelectionDirection::Down);
        app.submit();
        app.tick();

        let field = game(&app).session.field();
        assert_eq!((field.width(), field.height(), field.mine_count()), (9, 9, 10));
    }

    #[test]
    fn q_in_the_menu_quits() {
        let mut app = App::new(GameSetup::default());
        app.type_char('q');
        app.tick();

        assert!(app.should_quit);
    }

    #[test]
    fn typing_q_in_the_game_ends_the_session() {
        let mut app = App::new(GameSetup {
            field: Some(Minefield::new(5, 5, 3)),
            seed: None,
        });

        type_line(&mut app, "q");

        assert!(app.should_quit);
    }

    #[test]
    fn digging_clears_the_input_and_reaches_the_field() {
        let mut app = App::new(GameSetup {
            field: Some(Minefield::new(5, 5, 3)),
            seed: Some(9),
        });

        type_line(&mut app, "2 2");

        let game = game(&app);
        assert!(game.input.is_empty());
        assert!(!game.session.field().is_covered(2, 2));
        assert_ne!(game.session.state(), GameState::Lose);
        assert!(!app.should_quit);
    }

    #[test]
    fn the_same_seed_places_the_same_mines() {
        let setup = GameSetup {
            field: Some(Minefield::new(16, 16, 40)),
            seed: Some(1234),
        };
        let mut first = App::new(setup.clone());
        let mut second = App::new(setup);

        type_line(&mut first, "3 3");
        type_line(&mut second, "3 3");

        assert_eq!(game(&first).session.field(), game(&second).session.field());
    }

    #[test]
    fn leaving_the_game_returns_to_its_preset_in_the_menu() {
        let mut app = App::new(GameSetup {
            field: Some(PRESETS[2].minefield()),
            seed: None,
        });

        app.leave(false);
        app.tick();

        assert_eq!(selected(&app), 2);
        assert!(!app.should_quit);
    }
}
