use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::scoring::QuestionReview;
use crate::view::ResultsView;

use super::theme;

const QUESTION_PREVIEW_LENGTH: usize = 60;

pub fn render(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], view);
    render_score_gauge(frame, chunks[1], view);
    render_question_review(frame, chunks[2], &view.review, view.scroll);
    render_encouragement(frame, chunks[3], &view.encouragement);
    theme::render_controls(
        frame,
        chunks[4],
        "j/k scroll  ·  r retry  ·  esc back to quizzes  ·  H home  ·  q quit",
    );
}

fn render_score_summary(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let grade_color = theme::grade_color(view.grade);

    let content = vec![
        Line::from(Span::styled(
            format!("RESULTS  ·  {}", view.quiz_title),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({}%)", view.score, view.total, view.percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(view.grade.label(), Style::default().fg(grade_color))),
        Line::from(vec![
            Span::styled(format!("{} correct", view.score), Style::default().fg(Color::Green)),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} incorrect", view.incorrect), Style::default().fg(Color::Red)),
            Span::styled(
                format!("  ·  time {}", view.elapsed),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_score_gauge(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let color = if view.grade.is_passing() {
        Color::Green
    } else {
        Color::DarkGray
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(view.percentage.min(100) as u16);
    frame.render_widget(gauge, area);
}

fn render_question_review(frame: &mut Frame, area: Rect, review: &[QuestionReview], scroll: usize) {
    let rows: Vec<Vec<Line>> = review.iter().map(review_lines).collect();
    let offset: usize = rows.iter().take(scroll).map(Vec::len).sum();

    let widget = Paragraph::new(rows.into_iter().flatten().collect::<Vec<_>>())
        .block(
            Block::default()
                .title(" Question review ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((offset as u16, 0));
    frame.render_widget(widget, area);
}

/// Lines for one review row. Incorrect rows also carry the explanation.
fn review_lines(row: &QuestionReview) -> Vec<Line<'_>> {
    let (symbol, color) = if row.is_correct {
        ("+", Color::Green)
    } else {
        ("-", Color::Red)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
        Span::styled(
            format!("{:2}. ", row.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(truncate_question(&row.prompt), Style::default().fg(Color::Gray)),
    ])];

    let mut detail = vec![
        Span::styled("     your answer: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            row.your_answer.as_deref().unwrap_or("No answer"),
            Style::default().fg(color),
        ),
    ];
    if !row.is_correct {
        detail.push(Span::styled("  ·  correct: ", Style::default().fg(Color::DarkGray)));
        detail.push(Span::styled(
            row.correct_answer.as_str(),
            Style::default().fg(Color::Green),
        ));
    }
    lines.push(Line::from(detail));

    if let (false, Some(explanation)) = (row.is_correct, row.explanation.as_deref()) {
        lines.push(Line::from(Span::styled(
            format!("     {}", explanation),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines
}

fn render_encouragement(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
