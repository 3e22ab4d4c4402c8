use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::view::{CategoryScreen, QuizRow};

use super::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &CategoryScreen) {
    match view {
        CategoryScreen::Found {
            name,
            description,
            quizzes,
        } => render_found(frame, area, name, description, quizzes),
        CategoryScreen::NotFound { category } => render_not_found(frame, area, category.as_str()),
    }
}

fn render_found(frame: &mut Frame, area: Rect, name: &str, description: &str, quizzes: &[QuizRow]) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(name, Style::default().fg(Color::Cyan).bold())),
        Line::from(description.fg(Color::Gray)),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(header, chunks[0]);

    if quizzes.is_empty() {
        let empty = Paragraph::new("No quizzes yet. Check back later for new quizzes in this category.")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .fg(Color::DarkGray);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_quizzes(frame, chunks[1], quizzes);
    }

    theme::render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  enter start  ·  esc back  ·  q quit",
    );
}

fn render_quizzes(frame: &mut Frame, area: Rect, quizzes: &[QuizRow]) {
    let mut lines: Vec<Line> = Vec::with_capacity(quizzes.len() * 4);

    for quiz in quizzes {
        let style = if quiz.is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if quiz.is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(quiz.title, style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", quiz.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                quiz.difficulty.label(),
                Style::default().fg(theme::difficulty_color(quiz.difficulty)),
            ),
            Span::styled(
                format!(
                    "  ·  {} questions  ·  ~{} min",
                    quiz.question_count, quiz.estimated_minutes
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Available quizzes ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

fn render_not_found(frame: &mut Frame, area: Rect, key: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Category not found",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("No category named `{}`", key),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from("esc to go back".fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        chunks[1],
    );
}
