//! TUI rendering with ratatui
//!
//! Draws the tile grid, input box, message area, and help overlay.

use super::app::App;
use crate::core::{AttemptRow, MAX_ATTEMPTS, WORD_LENGTH, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Tile grid
            Constraint::Length(3),                   // Input
            Constraint::Length(3),                   // Messages
            Constraint::Length(3),                   // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_help {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let typing_row = if state.status().is_terminal() {
        MAX_ATTEMPTS // Out of range: no pending row
    } else {
        state.attempt_index()
    };

    let lines: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|i| {
            if i == typing_row {
                pending_row_spans(&app.input)
            } else {
                row_spans(&state.history()[i])
            }
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

/// Tiles for an evaluated (or blank placeholder) row
fn row_spans(row: &AttemptRow) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for verdict in row {
        let style = if verdict.exact {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else if verdict.present {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if verdict.is_blank() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let cell = match verdict.letter {
            Some(c) => format!(" {} ", c.to_ascii_uppercase()),
            None => " · ".to_string(),
        };

        spans.push(Span::styled(cell, style));
        spans.push(Span::raw(" "));
    }

    spans.pop();
    Line::from(spans)
}

/// Tiles for the row currently being typed
fn pending_row_spans(input: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for i in 0..WORD_LENGTH {
        let (cell, style) = match input.as_bytes().get(i) {
            Some(&c) => (
                format!(" {} ", (c as char).to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
        };

        spans.push(Span::styled(cell, style));
        spans.push(Span::raw(" "));
    }

    spans.pop();
    Line::from(spans)
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (title, content, color) = if state.won() {
        (" 🎉 You got it! | n: new game  q: quit ", String::new(), Color::Green)
    } else if state.exhausted() {
        (" Out of guesses | n: new game  q: quit ", String::new(), Color::Red)
    } else {
        (
            " Type your guess, Enter to submit ",
            app.input.to_uppercase(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (text, style) = if let Some(error) = state.transient_error() {
        (error.to_string(), Style::default().fg(Color::Red))
    } else if state.won() {
        (
            "Nice! You got it! 👏".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else if state.exhausted() {
        let answer = app
            .game
            .revealed_answer()
            .map_or(String::new(), |w| w.text().to_uppercase());
        (
            format!("The word was {answer}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (String::new(), Style::default())
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.game.state();

    let attempts = Paragraph::new(format!(
        "Attempts: {}/{MAX_ATTEMPTS}",
        state.attempt_index()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let status_text = if state.won() {
        "Status: Won"
    } else if state.exhausted() {
        "Status: Out of guesses"
    } else {
        "Status: Playing"
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    let help = Paragraph::new("?: Help | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Guess the word",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Each guess must be a valid {WORD_LENGTH}-letter word. Press Enter to submit."
        )),
        Line::from("After each guess, tile colors show how close your guess was."),
        Line::from(""),
        Line::from("For example:"),
        Line::from(""),
        Line::from("T, E and R are in the word, but not in the correct spot:"),
    ];

    lines.extend(example_line("tiger", "alert"));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "A and L are correct. T, E and R are still not in the correct spot:",
    ));
    lines.extend(example_line("alter", "alert"));
    lines.push(Line::from(""));
    lines.push(Line::from("The correct word was ALERT:"));
    lines.extend(example_line("alert", "alert"));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "You must guess the correct word in {MAX_ATTEMPTS} tries or less. Have fun!"
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help, area);
}

/// Render a worked example row from real verdicts
fn example_line(guess: &str, target: &str) -> Option<Line<'static>> {
    let guess = Word::new(guess).ok()?;
    let target = Word::new(target).ok()?;
    Some(row_spans(&AttemptRow::evaluate(&guess, &target)))
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
