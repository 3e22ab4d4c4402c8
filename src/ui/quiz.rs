use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::view::{OptionRow, QuestionView};

use super::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], view);
    render_progress(frame, chunks[1], view);
    render_question_text(frame, chunks[2], view);
    render_options(frame, chunks[3], &view.options);
    render_feedback(frame, chunks[4], view);
    render_controls(frame, chunks[5], view);
}

fn render_header(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let [title_area, stats_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(22)]).areas(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            view.quiz_title,
            Style::default().fg(theme::category_color(view.category)).bold(),
        )),
        Line::from(view.quiz_description.fg(Color::DarkGray)),
    ]);
    frame.render_widget(title, title_area);

    let stats = Paragraph::new(vec![
        Line::from(format!("time {}", view.elapsed)),
        Line::from(format!("answered {}/{}", view.answered, view.total)),
    ])
    .alignment(Alignment::Right)
    .fg(Color::Gray);
    frame.render_widget(stats, stats_area);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::category_color(view.category)))
        .percent(view.progress_percent.min(100))
        .label(format!(
            "Question {} of {}  ·  {}%",
            view.number, view.total, view.progress_percent
        ));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let widget = Paragraph::new(view.prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[OptionRow]) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for option in options {
        let style = match (option.is_chosen, option.is_cursor) {
            (true, _) => Style::default().fg(Color::Green).bold(),
            (false, true) => Style::default().fg(Color::Cyan).bold(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if option.is_cursor { ">" } else { " " };
        let check = if option.is_chosen { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}. ", option.label), style),
            Span::styled(option.text, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, view: &QuestionView) {
    if let Some(explanation) = view.explanation {
        let widget = Paragraph::new(explanation)
            .wrap(Wrap { trim: true })
            .fg(Color::Yellow)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Color::DarkGray)
                    .title(" Explanation ")
                    .title_style(Style::default().fg(Color::Cyan))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(widget, area);
    } else if let Some(notice) = view.notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let next = if view.is_last { "n finish" } else { "n next" };
    let mut parts = vec!["j/k move", "space choose", next];
    if view.can_go_back {
        parts.push("p previous");
    }
    parts.extend(["esc exit quiz", "q quit"]);

    theme::render_controls(frame, area, &parts.join("  ·  "));
}
