//! Colors, glyphs and the shared footer.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::{CategoryId, Difficulty};
use crate::scoring::Grade;

pub fn category_color(category: CategoryId) -> Color {
    match category {
        CategoryId::Frontend => Color::Cyan,
        CategoryId::Backend => Color::Magenta,
        CategoryId::Algorithms => Color::Yellow,
        CategoryId::DesignPatterns => Color::Blue,
        CategoryId::Security => Color::Red,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
    }
}

pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent | Grade::Great => Color::Green,
        Grade::Good => Color::Yellow,
        Grade::NeedsReview => Color::Red,
    }
}

/// Terminal stand-in for the icon names used by catalog documents.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Server" => "[=]",
        "Brain" => "{*}",
        "Palette" => "<#>",
        "Shield" => "[+]",
        _ => "</>",
    }
}

pub fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
