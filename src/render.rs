//! The plain-text board representation shared by the frontends.

use crate::Minefield;

/// The symbol drawn in place of the mine that ended the game.
pub const STRUCK_MINE_SYMBOL: char = 'X';

/// Renders the field as lines of text.
///
/// The column numbers come first, written vertically one digit per line (most significant digit on top). Every row
/// then starts with its right-aligned number and a `|`, followed by a character per cell. `struck` marks the mine
/// that has just been hit, if any.
pub fn render_board(field: &Minefield, struck: Option<(usize, usize)>) -> Vec<String> {
    let row_label_width = digit_count(field.height() - 1);
    let mut lines = Vec::with_capacity(field.height() + 2);

    for significance in (0..digit_count(field.width() - 1)).rev() {
        let mut line = " ".repeat(row_label_width + 1);
        line.extend((0..field.width()).map(|x| significant_digit(x, significance)));
        lines.push(line);
    }

    for y in 0..field.height() {
        let mut line = format!("{}|", padded_number(y, field.height() - 1));

        for x in 0..field.width() {
            if struck == Some((x, y)) {
                line.push(STRUCK_MINE_SYMBOL);
            } else if let Some(cell) = field.get_cell((x, y)) {
                line.push_str(&cell.to_string());
            }
        }

        lines.push(line);
    }

    lines
}

/// The amount of decimal digits in the value.
pub fn digit_count(value: usize) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Pads the value with leading spaces to the width of `max_value`.
pub fn padded_number(value: usize, max_value: usize) -> String {
    format!("{:>width$}", value, width = digit_count(max_value))
}

/// Returns the digit of the given significance (0 for the ones, 1 for the tens and so on), or a space if the value
/// has fewer digits than that.
pub fn significant_digit(value: usize, significance: usize) -> char {
    value
        .to_string()
        .chars()
        .rev()
        .nth(significance)
        .unwrap_or(' ')
}

#[cfg(test)]
mod test {
    use super::{digit_count, padded_number, render_board, significant_digit};
    use crate::Minefield;

    #[test]
    fn digit_count_counts_decimal_digits() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(49), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn padded_number_aligns_to_the_widest_value() {
        assert_eq!(padded_number(7, 49), " 7");
        assert_eq!(padded_number(12, 49), "12");
        assert_eq!(padded_number(3, 4), "3");
    }

    #[test]
    fn significant_digit_picks_digits_from_the_right() {
        assert_eq!(significant_digit(789, 0), '9');
        assert_eq!(significant_digit(789, 1), '8');
        assert_eq!(significant_digit(789, 2), '7');
        assert_eq!(significant_digit(5, 1), ' ');
    }

    #[test]
    fn a_fresh_board_is_all_question_marks() {
        let field = Minefield::new(2, 3, 1);

        assert_eq!(render_board(&field, None), vec!["  012", "0|???", "1|???"]);
    }

    #[test]
    fn a_single_cell_request_renders_two_columns() {
        let field = Minefield::new(1, 1, 1);

        assert_eq!(render_board(&field, None), vec!["  01", "0|??"]);
    }

    #[test]
    fn uncovered_cells_show_their_counts_and_blanks() {
        let mut field = Minefield::with_mines(4, 3, &[(0, 0), (1, 0), (2, 1)]);
        field.visit(0, 2);

        assert_eq!(
            render_board(&field, None),
            vec!["  012", "0|???", "1|23?", "2| 11", "3|   "]
        );
        assert_eq!(field.to_string(), "  012\n0|???\n1|23?\n2| 11\n3|   \n");
    }

    #[test]
    fn the_struck_mine_is_marked() {
        let mut field = Minefield::with_mines(4, 3, &[(0, 0), (1, 0), (2, 1)]);
        field.visit(0, 2);
        field.visit(1, 0);

        assert_eq!(render_board(&field, Some((1, 0)))[1], "0|?X?");
    }

    #[test]
    fn wide_and_tall_boards_get_multi_digit_labels() {
        let field = Minefield::new(11, 12, 1);
        let lines = render_board(&field, None);

        assert_eq!(lines[0], "             11");
        assert_eq!(lines[1], "   012345678901");
        assert_eq!(lines[2], " 0|????????????");
        assert_eq!(lines[12], "10|????????????");
        assert_eq!(lines.len(), 13);
    }
}
