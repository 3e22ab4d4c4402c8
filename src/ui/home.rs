use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::view::HomeView;

use super::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &HomeView) {
    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_banner(frame, chunks[0], view.total_quizzes);
    render_categories(frame, chunks[1], view);
    theme::render_controls(frame, chunks[2], "j/k navigate  ·  enter open  ·  q quit");
}

fn render_banner(frame: &mut Frame, area: Rect, total_quizzes: usize) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "DEV QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Master your skills".fg(Color::Gray)),
        Line::from(Span::styled(
            format!("{} quizzes available", total_quizzes),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_categories(frame: &mut Frame, area: Rect, view: &HomeView) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.categories.len() * 3);

    for category in &view.categories {
        let style = if category.is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if category.is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", theme::icon_glyph(category.icon)), style),
            Span::styled(category.name, style),
            Span::styled(
                format!("  ({} quizzes)", category.quiz_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", category.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Choose a category ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}
