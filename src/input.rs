//! Turning the lines a player types into commands.

/// What a typed line asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Visit the cell at `(x, y)`. The coordinate isn't validated against any field yet, so it may even be negative.
    Dig((i64, i64)),
    /// Leave the game.
    Quit,
    /// Anything unrecognized: just draw the board again.
    Redraw,
}

/// Parses a line of the form `x y` (two whitespace-separated integers) or `q`.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }

    parse_coordinates(line).map_or(Command::Redraw, Command::Dig)
}

/// Parses exactly two whitespace-separated integers.
pub fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let [x, y]: [&str; 2] = line
        .split_whitespace()
        .collect::<Vec<&str>>()
        .as_slice()
        .try_into()
        .ok()?;

    Some((x.parse().ok()?, y.parse().ok()?))
}

/// Whether the line answers "yes" to the "try again?" question.
pub fn is_replay_confirmation(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod test {
    use super::{is_replay_confirmation, parse_command, parse_coordinates, Command};

    #[test]
    fn two_numbers_make_a_dig() {
        assert_eq!(parse_command("3 4"), Command::Dig((3, 4)));
        assert_eq!(parse_command("  10\t 0 \n"), Command::Dig((10, 0)));
    }

    #[test]
    fn negative_numbers_still_make_a_dig() {
        assert_eq!(parse_command("-1 2"), Command::Dig((-1, 2)));
        assert_eq!(parse_command("0 -7"), Command::Dig((0, -7)));
    }

    #[test]
    fn q_quits_in_any_case() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command(" Q\n"), Command::Quit);
    }

    #[test]
    fn malformed_lines_only_redraw() {
        for line in ["", "3", "3 4 5", "a b", "3 b", "3,4", "quit", "1.5 2"] {
            assert_eq!(parse_command(line), Command::Redraw, "{line:?}");
        }
    }

    #[test]
    fn parse_coordinates_needs_exactly_two_tokens() {
        assert_eq!(parse_coordinates("1 2"), Some((1, 2)));
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
    }

    #[test]
    fn only_y_confirms_a_replay() {
        assert!(is_replay_confirmation("y"));
        assert!(is_replay_confirmation(" Y \n"));
        assert!(!is_replay_confirmation("yes"));
        assert!(!is_replay_confirmation("n"));
        assert!(!is_replay_confirmation(""));
    }
}
