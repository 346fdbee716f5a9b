//! TUI rendering with ratatui
//!
//! Gallows, word and letter panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::RoundStatus;
use crate::output::formatters::{gallows, spaced_view};
use crate::repository::{UserRepository, WordRepository};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: WordRepository + UserRepository + ?Sized>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Strikes and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_board<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Gallows
            Constraint::Min(20),    // Word and letters
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_word(f, app, right[0]);
    render_letters(f, app, right[1]);
}

fn render_gallows<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let strikes = app.play.num_wrong_guesses().unwrap_or(0);
    let color = match app.input_mode {
        InputMode::RoundOver(RoundStatus::Lost) => Color::Red,
        InputMode::RoundOver(RoundStatus::Won) => Color::Green,
        _ => Color::White,
    };

    let lines: Vec<Line> = gallows(strikes, app.play.max_wrong_guesses())
        .lines()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let content = match app.input_mode {
        // Reveal the secret once the round is over
        InputMode::RoundOver(_) => app
            .play
            .secret_word()
            .map(spaced_view)
            .unwrap_or_default(),
        InputMode::Guessing => app.play.guess_view().map(spaced_view).unwrap_or_default(),
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            content,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_letters<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let guessed = app.guessed_letters();

    let spans: Vec<Span> = ('a'..='z')
        .map(|c| {
            let style = match guessed.iter().find(|(g, _)| *g == c) {
                Some((_, true)) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                Some((_, false)) => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
                None => Style::default().fg(Color::DarkGray),
            };
            Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
        })
        .collect();

    let (first, second) = spans.split_at(13);
    let paragraph = Paragraph::new(vec![Line::from(first.to_vec()), Line::from(second.to_vec())])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Strikes gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_strikes(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_strikes<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let strikes = app.play.num_wrong_guesses().unwrap_or(0);
    let max = app.play.max_wrong_guesses();
    let progress_pct = ((f64::from(strikes) / f64::from(max) * 100.0).min(100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Strikes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(progress_pct)
        .label(format!("{strikes}/{max} wrong guesses"));

    f.render_widget(gauge, area);
}

fn render_messages<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let (title, color) = match app.input_mode {
        InputMode::RoundOver(RoundStatus::Won) => (
            " 🎉 YOU WIN! 🎉 | Press 'n' for a new word or 'q' to quit ",
            Color::Green,
        ),
        InputMode::RoundOver(_) => (
            " GAME OVER | Press 'n' for a new word or 'q' to quit ",
            Color::Red,
        ),
        InputMode::Guessing => (" Type a letter (a-z) to guess | ESC to quit ", Color::Yellow),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status<R: WordRepository + UserRepository + ?Sized>(
    f: &mut Frame,
    app: &App<'_, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let player_text = app.accounts.current_user().map_or_else(
        || "Player: guest".to_string(),
        |u| format!("Player: {} ({} won)", u.user_name(), u.num_success()),
    );
    let player = Paragraph::new(player_text).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("ESC/Ctrl-C: Quit | n: New word after a round")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
