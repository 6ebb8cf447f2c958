//! A line-oriented frontend: the board gets printed, the player types a line, repeat.

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use minefield::{logging, render::render_board, Args, Flow, Preset, Session, PRESETS};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{self, BufRead, Write};

const TITLE_TEXT: &str = "Welcome to Minesweeper!";
const HINT_TEXT: &str = "Please select difficulty (type its number or name, or \"q\" to quit):";

/// Reads a single line. `None` means the input has ended.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();

    Ok(match input.read_line(&mut line)? {
        0 => None,
        _ => Some(line),
    })
}

/// Asks for a preset until the answer names one. An empty line picks the first preset.
fn select_preset(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<&'static Preset>> {
    loop {
        writeln!(output, "{}", TITLE_TEXT)?;
        writeln!(output, "{}", HINT_TEXT)?;
        for (i, preset) in PRESETS.iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, preset)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(&PRESETS[0]));
        }

        let preset = match answer.parse::<usize>() {
            Ok(number) => number.checked_sub(1).and_then(|i| PRESETS.get(i)),
            Err(_) => Preset::find(answer),
        };
        if preset.is_some() {
            return Ok(preset);
        }

        writeln!(output, "There's no such difficulty: {}", answer)?;
    }
}

/// Plays the session until the player leaves or the input ends.
fn play<R: Rng + ?Sized>(
    session: &mut Session,
    rng: &mut R,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        execute!(output, Clear(ClearType::All), MoveTo(0, 0))?;

        for line in render_board(session.field(), session.struck_mine()) {
            writeln!(output, "{}", line)?;
        }
        writeln!(output)?;
        writeln!(output, "{}", session.prompt())?;
        if let Some(error) = session.error() {
            writeln!(output, "{}", error)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        if let Flow::Finish = session.submit(&line, rng) {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)?;
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let field = match args.game_setup()? {
        Some(field) => field,
        None => match select_preset(&mut input, &mut output)? {
            Some(preset) => preset.minefield(),
            None => return Ok(()),
        },
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    play(&mut Session::new(field), &mut rng, &mut input, &mut output)
}
