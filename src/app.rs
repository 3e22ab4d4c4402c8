use std::time::Duration;

use log::{debug, info};
use uuid::Uuid;

use crate::error::NotFound;
use crate::models::{Catalog, CategoryId, Question};
use crate::navigation::{NavEvent, NavigationState, Navigator};
use crate::scoring;
use crate::session::{Advance, AnswerPolicy, QuizSession};
use crate::ticker::Tick;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Runtime settings, filled from the command line by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    pub answer_policy: AnswerPolicy,
    pub tick_interval: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            answer_policy: AnswerPolicy::Required,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Catalog, navigation and the cursor state the terminal UI needs.
pub struct App {
    catalog: Catalog,
    nav: Navigator,
    options: AppOptions,
    home_cursor: usize,
    quiz_cursor: usize,
    option_cursor: usize,
    explanation_revealed: bool,
    notice: Option<&'static str>,
    results_scroll: usize,
    displayed_elapsed: Duration,
}

impl App {
    pub fn new(catalog: Catalog, options: AppOptions) -> Self {
        Self {
            catalog,
            nav: Navigator::new(options.answer_policy),
            options,
            home_cursor: 0,
            quiz_cursor: 0,
            option_cursor: 0,
            explanation_revealed: false,
            notice: None,
            results_scroll: 0,
            displayed_elapsed: Duration::ZERO,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn options(&self) -> AppOptions {
        self.options
    }

    pub fn home_cursor(&self) -> usize {
        self.home_cursor
    }

    pub fn quiz_cursor(&self) -> usize {
        self.quiz_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn explanation_revealed(&self) -> bool {
        self.explanation_revealed
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    pub fn displayed_elapsed(&self) -> Duration {
        self.displayed_elapsed
    }

    pub fn active_session_id(&self) -> Option<Uuid> {
        self.nav.active_session_id()
    }

    /// Open a category by its catalog key. Unknown keys leave the screen as is.
    pub fn select_category(&mut self, key: &str) -> Result<bool, NotFound> {
        let id: CategoryId = key.parse()?;
        if self.catalog.find_category(id).is_none() {
            return Err(NotFound::Category(key.to_string()));
        }
        Ok(self.open_category(id))
    }

    /// Start a quiz from the category currently on screen.
    pub fn select_quiz(&mut self, quiz_id: &str) -> Result<bool, NotFound> {
        let NavigationState::CategoryView { category } = self.nav.state() else {
            return Ok(false);
        };
        let category = *category;

        let quiz = self
            .catalog
            .find_quiz(category, quiz_id)
            .cloned()
            .ok_or_else(|| NotFound::Quiz {
                category,
                quiz: quiz_id.to_string(),
            })?;

        info!("Starting quiz {}", quiz.id);
        let changed = self.nav.dispatch(NavEvent::SelectQuiz(quiz));
        if changed {
            self.reset_quiz_view();
        }
        Ok(changed)
    }

    pub fn move_up(&mut self) {
        self.notice = None;
        match self.nav.state() {
            NavigationState::Home => self.home_cursor = self.home_cursor.saturating_sub(1),
            NavigationState::CategoryView { .. } => {
                self.quiz_cursor = self.quiz_cursor.saturating_sub(1)
            }
            NavigationState::QuizInProgress { .. } => {
                self.option_cursor = self.option_cursor.saturating_sub(1)
            }
            NavigationState::QuizResults { .. } => {
                self.results_scroll = self.results_scroll.saturating_sub(1)
            }
        }
    }

    pub fn move_down(&mut self) {
        self.notice = None;
        let last = |len: usize| len.saturating_sub(1);
        match self.nav.state() {
            NavigationState::Home => {
                let max = last(self.catalog.list_categories().len());
                self.home_cursor = (self.home_cursor + 1).min(max);
            }
            NavigationState::CategoryView { category } => {
                let count = self
                    .catalog
                    .find_category(*category)
                    .map_or(0, |c| c.quiz_count());
                self.quiz_cursor = (self.quiz_cursor + 1).min(last(count));
            }
            NavigationState::QuizInProgress { quiz, session } => {
                let count = session
                    .current_question(quiz)
                    .map_or(0, |q| q.options.len());
                self.option_cursor = (self.option_cursor + 1).min(last(count));
            }
            NavigationState::QuizResults { total, .. } => {
                self.results_scroll = (self.results_scroll + 1).min(last(*total));
            }
        }
    }

    /// Enter: open the highlighted entry, or choose the highlighted option.
    pub fn confirm(&mut self) {
        self.notice = None;
        match self.nav.state() {
            NavigationState::Home => {
                if let Some(category) = self.catalog.list_categories().get(self.home_cursor) {
                    let id = category.id;
                    self.open_category(id);
                }
            }
            NavigationState::CategoryView { category } => {
                let quiz_id = self
                    .catalog
                    .find_category(*category)
                    .and_then(|c| c.quizzes.get(self.quiz_cursor))
                    .map(|quiz| quiz.id.clone());
                if let Some(quiz_id) = quiz_id {
                    if let Err(err) = self.select_quiz(&quiz_id) {
                        debug!("ignored quiz selection: {}", err);
                    }
                }
            }
            NavigationState::QuizInProgress { .. } => self.choose_option(self.option_cursor),
            NavigationState::QuizResults { .. } => {}
        }
    }

    /// Record the option at `index` for the current question.
    pub fn choose_option(&mut self, index: usize) {
        let NavigationState::QuizInProgress { quiz, session } = self.nav.state_mut() else {
            return;
        };
        let Some(question) = session.current_question(quiz) else {
            return;
        };
        let Some(option) = question.options.get(index) else {
            debug!("ignored option {} for question {}", index, question.id);
            return;
        };

        let question_id = question.id;
        let option = option.clone();
        match session.select_answer(quiz, question_id, &option) {
            Ok(()) => {
                self.option_cursor = index;
                self.notice = None;
            }
            Err(err) => debug!("ignored answer: {}", err),
        }
    }

    /// Go to the next question, finishing the quiz after the last one.
    ///
    /// When the answered question has an explanation, the first call only
    /// reveals it.
    pub fn next(&mut self) {
        let NavigationState::QuizInProgress { quiz, session } = self.nav.state_mut() else {
            return;
        };

        if !self.explanation_revealed {
            let reveal = session.current_question(quiz).is_some_and(|question| {
                question.explanation.is_some() && session.answer_for(question.id).is_some()
            });
            if reveal {
                self.explanation_revealed = true;
                return;
            }
        }

        let event = match session.advance(quiz) {
            Advance::Moved(_) => {
                self.explanation_revealed = false;
                self.notice = None;
                self.option_cursor = cursor_for(session.current_question(quiz), session);
                return;
            }
            Advance::Unanswered => {
                self.notice = Some("Select an answer to continue");
                return;
            }
            Advance::Closed => return,
            Advance::Finished => {
                session.complete();
                let score = scoring::score(quiz, session.answers());
                info!(
                    "Completed quiz {} with {}/{}",
                    quiz.id,
                    score,
                    quiz.question_count()
                );
                NavEvent::Complete {
                    score,
                    total: quiz.question_count(),
                    answers: session.answers().clone(),
                    elapsed: session.elapsed(),
                }
            }
        };

        if self.nav.dispatch(event) {
            self.results_scroll = 0;
            self.explanation_revealed = false;
            self.notice = None;
        }
    }

    pub fn previous(&mut self) {
        let NavigationState::QuizInProgress { quiz, session } = self.nav.state_mut() else {
            return;
        };
        if session.retreat() {
            self.explanation_revealed = false;
            self.notice = None;
            self.option_cursor = cursor_for(session.current_question(quiz), session);
        }
    }

    /// Leave the current screen for its parent. Abandons a running quiz.
    pub fn back(&mut self) {
        if let NavigationState::QuizInProgress { quiz, .. } = self.nav.state() {
            info!("Abandoned quiz {}", quiz.id);
        }
        if self.nav.dispatch(NavEvent::Back) {
            self.notice = None;
            self.explanation_revealed = false;
        }
    }

    pub fn retry(&mut self) {
        if self.nav.dispatch(NavEvent::Retry) {
            self.reset_quiz_view();
        }
    }

    pub fn go_home(&mut self) {
        self.nav.dispatch(NavEvent::Home);
    }

    /// Refresh the elapsed counter. Ticks from an earlier session are dropped.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        match self.nav.state() {
            NavigationState::QuizInProgress { session, .. } if session.id() == tick.session_id => {
                self.displayed_elapsed = session.elapsed();
                true
            }
            _ => {
                debug!("dropped stale tick for session {}", tick.session_id);
                false
            }
        }
    }

    fn open_category(&mut self, id: CategoryId) -> bool {
        let changed = self.nav.dispatch(NavEvent::SelectCategory(id));
        if changed {
            self.quiz_cursor = 0;
        }
        changed
    }

    fn reset_quiz_view(&mut self) {
        self.option_cursor = 0;
        self.explanation_revealed = false;
        self.notice = None;
        self.displayed_elapsed = Duration::ZERO;
    }
}

/// Cursor position for a question: its recorded answer, else the first option.
fn cursor_for(question: Option<&Question>, session: &QuizSession) -> usize {
    question
        .and_then(|question| {
            let answer = session.answer_for(question.id)?;
            question.options.iter().position(|option| option == answer)
        })
        .unwrap_or(0)
}
