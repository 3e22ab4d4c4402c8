//! What each screen shows, independent of how it is drawn.

use crate::app::App;
use crate::models::{CategoryId, Difficulty};
use crate::navigation::NavigationState;
use crate::scoring::{self, Grade, QuestionReview};
use crate::session::format_elapsed;

pub enum Screen<'a> {
    Home(HomeView<'a>),
    Category(CategoryScreen<'a>),
    Question(QuestionView<'a>),
    Results(ResultsView<'a>),
}

pub struct HomeView<'a> {
    pub categories: Vec<CategoryRow<'a>>,
    pub total_quizzes: usize,
}

pub struct CategoryRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub icon: &'a str,
    pub quiz_count: usize,
    pub is_selected: bool,
}

pub enum CategoryScreen<'a> {
    Found {
        name: &'a str,
        description: &'a str,
        quizzes: Vec<QuizRow<'a>>,
    },
    NotFound {
        category: CategoryId,
    },
}

pub struct QuizRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
    pub question_count: usize,
    pub is_selected: bool,
}

pub struct QuestionView<'a> {
    pub quiz_title: &'a str,
    pub quiz_description: &'a str,
    pub category: CategoryId,
    /// 1-based.
    pub number: usize,
    pub total: usize,
    pub prompt: &'a str,
    pub options: Vec<OptionRow<'a>>,
    pub answered: usize,
    pub progress_percent: u16,
    pub elapsed: String,
    pub is_last: bool,
    pub can_go_back: bool,
    pub explanation: Option<&'a str>,
    pub notice: Option<&'static str>,
}

pub struct OptionRow<'a> {
    pub label: char,
    pub text: &'a str,
    pub is_chosen: bool,
    pub is_cursor: bool,
}

pub struct ResultsView<'a> {
    pub quiz_title: &'a str,
    pub score: usize,
    pub total: usize,
    pub incorrect: usize,
    pub percentage: u32,
    pub grade: Grade,
    pub elapsed: String,
    pub review: Vec<QuestionReview>,
    pub encouragement: String,
    pub scroll: usize,
}

pub fn screen(app: &App) -> Screen<'_> {
    match app.state() {
        NavigationState::Home => Screen::Home(home_view(app)),
        NavigationState::CategoryView { category } => {
            Screen::Category(category_screen(app, *category))
        }
        NavigationState::QuizInProgress { quiz, session } => {
            let Some(question) = session.current_question(quiz) else {
                // An empty quiz cannot pass catalog validation.
                return Screen::Category(CategoryScreen::NotFound {
                    category: quiz.category,
                });
            };
            let chosen = session.answer_for(question.id);

            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| OptionRow {
                    label: option_label(index),
                    text: text.as_str(),
                    is_chosen: chosen == Some(text.as_str()),
                    is_cursor: index == app.option_cursor(),
                })
                .collect();

            let explanation = if app.explanation_revealed() {
                question.explanation.as_deref()
            } else {
                None
            };

            Screen::Question(QuestionView {
                quiz_title: &quiz.title,
                quiz_description: &quiz.description,
                category: quiz.category,
                number: session.current_index() + 1,
                total: quiz.question_count(),
                prompt: &question.prompt,
                options,
                answered: session.answered_count(),
                progress_percent: session.progress_percent(),
                elapsed: format_elapsed(app.displayed_elapsed()),
                is_last: session.is_last_question(),
                can_go_back: session.current_index() > 0,
                explanation,
                notice: app.notice(),
            })
        }
        NavigationState::QuizResults {
            quiz,
            score,
            total,
            answers,
            elapsed,
        } => {
            let percentage = scoring::percentage(*score, *total);
            let grade = Grade::from_percentage(percentage);

            Screen::Results(ResultsView {
                quiz_title: &quiz.title,
                score: *score,
                total: *total,
                incorrect: total.saturating_sub(*score),
                percentage,
                grade,
                elapsed: format_elapsed(*elapsed),
                review: scoring::review(quiz, answers),
                encouragement: scoring::encouragement(grade, &quiz.title),
                scroll: app.results_scroll(),
            })
        }
    }
}

fn home_view(app: &App) -> HomeView<'_> {
    let catalog = app.catalog();
    let categories = catalog
        .list_categories()
        .iter()
        .enumerate()
        .map(|(index, category)| CategoryRow {
            name: &category.name,
            description: &category.description,
            icon: &category.icon,
            quiz_count: category.quiz_count(),
            is_selected: index == app.home_cursor(),
        })
        .collect();

    HomeView {
        categories,
        total_quizzes: catalog.total_quizzes(),
    }
}

fn category_screen(app: &App, id: CategoryId) -> CategoryScreen<'_> {
    let Some(category) = app.catalog().find_category(id) else {
        return CategoryScreen::NotFound { category: id };
    };

    let quizzes = category
        .quizzes
        .iter()
        .enumerate()
        .map(|(index, quiz)| QuizRow {
            title: &quiz.title,
            description: &quiz.description,
            difficulty: quiz.difficulty,
            estimated_minutes: quiz.estimated_time,
            question_count: quiz.question_count(),
            is_selected: index == app.quiz_cursor(),
        })
        .collect();

    CategoryScreen::Found {
        name: &category.name,
        description: &category.description,
        quizzes,
    }
}

fn option_label(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32)
        .filter(char::is_ascii_uppercase)
        .unwrap_or('*')
}
