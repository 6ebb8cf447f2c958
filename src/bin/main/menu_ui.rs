//! The functionality related to the menu renderer.

use crate::app::AppMenu;
use minefield::PRESETS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Widget},
};

const TITLE_TEXT: &str = "Welcome to Minesweeper!";
const HINT_TEXT: &str = "Please select difficulty (or press ESC to quit):";
const LEGEND_TEXT: [&str; 3] = [
    "[↑][↓] / [w][s] / [k][j]: select the difficulty",
    "[SPACE] / [ENTER]: start the game",
    "[q] / [ESC]: leave",
];
const MENU_COLOR: Color = Color::Yellow;
const APP_BG_COLOR: Color = Color::White;
const REGULAR_TEXT_COLOR: Color = Color::Black;
const LEGEND_TEXT_COLOR: Color = Color::DarkGray;
/// The width of the box holding the presets list.
const MENU_WIDTH: u16 = 44;

pub fn render_menu(menu: &AppMenu, frame: &mut Frame) {
    // The root container is the whole terminal rectangle.
    let root_container = frame.size();

    // The layout consists of the menu and the legend containers. The menu takes all the height the legend leaves.
    let (menu_container, legend_container) = create_app_layout(&root_container);

    // Here the menu gets shrunk to the size of its contents.
    let menu_container = create_menu_layout(&menu_container, PRESETS.len() as u16 + 3);

    // 1. Render the terminal background.
    frame.render_widget(Block::default().bg(APP_BG_COLOR), root_container);

    // 2. Render the title, the hint and one line per preset, marking the selected one.
    let lines: Vec<Line> = [
        Line::from(Span::styled(
            TITLE_TEXT,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(HINT_TEXT),
        Line::from(""),
    ]
    .into_iter()
    .chain(PRESETS.iter().enumerate().map(|(i, preset)| {
        if i == menu.selected {
            Line::from(Span::styled(
                format!("> {}", preset),
                Style::default().fg(MENU_COLOR).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {}", preset))
        }
    }))
    .collect();

    frame.render_widget(
        Paragraph::new(lines).fg(REGULAR_TEXT_COLOR).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MENU_COLOR)),
        ),
        menu_container,
    );

    // 3. Render the legend.
    frame.render_widget(build_legend_widget(), legend_container);
}

/// The function builds a layout for the menu screen: one rectangle for the menu itself and one for the legend (the
/// in-menu controls description).
fn create_app_layout(container: &Rect) -> (Rect, Rect) {
    // The height of the legend is calculated based on the amount of lines in the legend text we need to display.
    let legend_container_height = LEGEND_TEXT.len() as u16;
    // The menu container's height is all that's left in the parental container.
    let menu_container_height = container.height.saturating_sub(legend_container_height);

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Constraint::from_lengths([
            menu_container_height,
            legend_container_height,
        ]))
        .split(*container);

    // The legend container is 90% of the width of the container and is horizontally-centered.
    let legend_container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_percentages([5, 90, 5]))
        .split(vertical_layout[1])[1];

    (vertical_layout[0], legend_container)
}

/// Centers a box for the given amount of text lines (plus the borders) in the container.
fn create_menu_layout(container: &Rect, lines_amount: u16) -> Rect {
    let menu_height = lines_amount + 2;
    let remainder_height = container.height.saturating_sub(menu_height);
    let remainder_width = container.width.saturating_sub(MENU_WIDTH);

    // Create a vertical grid to vertically center the menu.
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Constraint::from_lengths([
            remainder_height / 2,
            menu_height,
            remainder_height / 2,
        ]))
        .split(*container);

    // Divide the middle part of the vertical layout to horizontally center the menu as well.
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Constraint::from_lengths([
            remainder_width / 2,
            MENU_WIDTH,
            remainder_width / 2,
        ]))
        .split(vertical_layout[1])[1]
}

/// The function builds the ready-to-use legend block (some text that provides information about the in-menu controls).
fn build_legend_widget() -> impl Widget {
    let rows = LEGEND_TEXT.map(|legend_line| {
        let (keys, description) = legend_line
            .split_once(':')
            .unwrap_or((legend_line, ""));

        Row::new([
            Line::from(keys).alignment(Alignment::Right),
            Line::from(format!(":{}", description)).alignment(Alignment::Left),
        ])
    });

    Table::new(rows, Constraint::from_percentages([50, 50])).fg(LEGEND_TEXT_COLOR)
}
