//! The game renderer functions.

use crate::app::AppGame;
use minefield::{render::render_board, render::STRUCK_MINE_SYMBOL, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Widget},
};
use std::cmp;

const COVERED_CELL_SYMBOL: char = '?';
const APP_BG_COLOR: Color = Color::White;
const FIELD_BORDER_COLOR: Color = Color::Yellow;
const FIELD_BORDER_VICTORY_COLOR: Color = Color::Green;
const FIELD_BORDER_LOSS_COLOR: Color = Color::Red;
const COVERED_CELL_COLOR: Color = Color::DarkGray;
const STRUCK_MINE_COLOR: Color = Color::Red;
const ERROR_TEXT_COLOR: Color = Color::Red;
const INFO_WIDGET_BLOCK_COLOR: Color = Color::LightYellow;
const REGULAR_TEXT_COLOR: Color = Color::Black;
const LEGEND_TEXT_COLOR: Color = Color::DarkGray;

const LEGEND_TEXT: [&str; 4] = [
    "[0-9] / [SPACE] / [q] / [y]: type the command",
    "[ENTER]: submit the command",
    "[ESC]: leave back to the menu",
    "[CTRL]+[c]: quit",
];
/// The stats row: 2 rows for borders and one for the contents.
const STATS_CONTAINER_HEIGHT: u16 = 3;
/// The prompt: the status line, the input line and the error line, plus the borders.
const PROMPT_CONTAINER_HEIGHT: u16 = 5;

pub fn render_game(app: &AppGame, frame: &mut Frame) {
    // the root container is the whole terminal rectangle
    let root_container = frame.size();

    let (field_container, (mines_info_container, covered_info_container), prompt_container, legend_container) =
        create_app_layout(&root_container);

    let session = &app.session;
    let field = session.field();
    let board = render_board(field, session.struck_mine());

    // 1. Render the terminal background
    frame.render_widget(Block::default().bg(APP_BG_COLOR), root_container);

    // 2. Render the board, centered in its container
    let board_container = center_board(&field_container, &board);
    frame.render_widget(build_board_widget(board, session.state()), board_container);

    // 3. Render the stats
    frame.render_widget(
        build_info_widget(
            format!("{} ({}x{})", field.mine_count(), field.width(), field.height()),
            "mines",
        ),
        mines_info_container,
    );
    frame.render_widget(
        build_info_widget(field.covered_cells_amount().to_string(), "covered"),
        covered_info_container,
    );

    // 4. Render the prompt
    let mut prompt_lines = vec![
        Line::from(session.prompt()),
        Line::from(format!("> {}_", app.input)),
    ];
    if let Some(error) = session.error() {
        prompt_lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(ERROR_TEXT_COLOR),
        )));
    }

    frame.render_widget(
        Paragraph::new(prompt_lines).fg(REGULAR_TEXT_COLOR).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(FIELD_BORDER_COLOR)),
        ),
        prompt_container,
    );

    // 5. Render the legend
    frame.render_widget(build_legend_widget(), legend_container);
}

/// The method creates the base grid needed for the game screen. Namely, we need to show the field, some statistics
/// for the ongoing game, the prompt and the controls-legend.
fn create_app_layout(container: &Rect) -> (Rect, (Rect, Rect), Rect, Rect) {
    let legend_container_height = LEGEND_TEXT.len() as u16;
    // the field container's height is all that's left
    let field_container_height = container
        .height
        .saturating_sub(STATS_CONTAINER_HEIGHT + PROMPT_CONTAINER_HEIGHT + legend_container_height);

    // create a set of vertically-stacked rectangles
    let app_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Constraint::from_lengths([
            field_container_height,
            STATS_CONTAINER_HEIGHT,
            PROMPT_CONTAINER_HEIGHT,
            legend_container_height,
        ]))
        .split(*container);

    // the stats row is centered and split into 2 equal sections
    let stats_container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_percentages([25, 50, 25]))
        .split(app_layout[1])[1];
    let stats_containers = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_percentages([50, 50]))
        .split(stats_container);

    // the prompt takes the same space as the stats
    let prompt_container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_percentages([10, 80, 10]))
        .split(app_layout[2])[1];

    let legend_container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_percentages([5, 90, 5]))
        .split(app_layout[3])[1];

    (
        app_layout[0],
        (stats_containers[0], stats_containers[1]),
        prompt_container,
        legend_container,
    )
}

/// Finds a rectangle in the middle of the container that fits the board lines and the border around them. A board
/// larger than the container gets cut at the container's edges.
fn center_board(container: &Rect, board: &[String]) -> Rect {
    let board_width = board.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16 + 2;
    let board_height = board.len() as u16 + 2;

    let width = cmp::min(board_width, container.width);
    let height = cmp::min(board_height, container.height);

    Rect {
        x: container.x + (container.width - width) / 2,
        y: container.y + (container.height - height) / 2,
        width,
        height,
    }
}

/// Builds the bordered board. The border color tells how the round went.
fn build_board_widget(board: Vec<String>, state: GameState) -> impl Widget {
    let border_color = match state {
        GameState::Ongoing => FIELD_BORDER_COLOR,
        GameState::Win => FIELD_BORDER_VICTORY_COLOR,
        GameState::Lose => FIELD_BORDER_LOSS_COLOR,
    };

    let lines: Vec<Line> = board.into_iter().map(build_board_line).collect();

    Paragraph::new(lines).fg(REGULAR_TEXT_COLOR).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(border_color)),
    )
}

/// Splits a board line into spans so that the covered cells and the struck mine stand out.
fn build_board_line(line: String) -> Line<'static> {
    let spans: Vec<Span> = line
        .chars()
        .map(|symbol| match symbol {
            COVERED_CELL_SYMBOL => Span::styled(symbol.to_string(), Style::default().fg(COVERED_CELL_COLOR)),
            STRUCK_MINE_SYMBOL => Span::styled(
                symbol.to_string(),
                Style::default()
                    .fg(STRUCK_MINE_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => Span::raw(symbol.to_string()),
        })
        .collect();

    Line::from(spans)
}

/// Prepares a paragraph to render as an info-block.
fn build_info_widget(value: String, title: &str) -> impl Widget + '_ {
    Paragraph::new(value)
        .fg(REGULAR_TEXT_COLOR)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(INFO_WIDGET_BLOCK_COLOR)),
        )
}

/// The function builds the ready-to-use legend block (some text that provides information about the in-game controls).
fn build_legend_widget() -> impl Widget {
    let rows = LEGEND_TEXT.map(|legend_row| {
        let (keys, description) = legend_row.split_once(':').unwrap_or((legend_row, ""));

        Row::new([
            Line::from(keys).alignment(Alignment::Right),
            Line::from(format!(":{}", description)).alignment(Alignment::Left),
        ])
    });

    Table::new(rows, Constraint::from_percentages([50, 50])).fg(LEGEND_TEXT_COLOR)
}
