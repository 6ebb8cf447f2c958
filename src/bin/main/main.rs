pub mod app;
pub mod event;
pub mod game_ui;
pub mod menu_ui;
pub mod tui;
pub mod update;

use app::{App, GameSetup};
use clap::Parser;
use color_eyre::Result;
use event::{Event, EventHandler};
use minefield::{logging, Args};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui::Tui;
use update::update;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)?;
    }

    // Create the terminal application.
    let mut app = App::new(GameSetup {
        field: args.game_setup()?,
        seed: args.seed,
    });

    // Initialize the terminal user interface.
    let backend = CrosstermBackend::new(std::io::stderr());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(250);
    let mut tui = Tui::new(terminal, events);
    tui.enter()?;

    // Start the main loop.
    while !app.should_quit {
        // Render the user interface.
        tui.draw(&mut app)?;
        // Handle events.
        match tui.events.next()? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => update(&mut app, key_event),
            Event::Resize(_, _) => {}
        };
    }

    // Exit the user interface.
    tui.exit()?;
    Ok(())
}
