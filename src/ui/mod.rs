mod category;
mod home;
mod quiz;
mod results;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::view::{self, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match view::screen(app) {
        Screen::Home(view) => home::render(frame, area, &view),
        Screen::Category(view) => category::render(frame, area, &view),
        Screen::Question(view) => quiz::render(frame, area, &view),
        Screen::Results(view) => results::render(frame, area, &view),
    }
}
