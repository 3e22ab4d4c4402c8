//! Screen state machine.
//!
//! ```text
//!   Home ──select category──► CategoryView ──select quiz──► QuizInProgress
//!    ▲                          ▲   │                        │   │
//!    │                          │   └──────── back ──► Home   │   │ complete
//!    │                          └──────────── back ───────────┘   ▼
//!    └──────────── home ─────────────────────────────────── QuizResults
//!                                 (retry starts a new QuizInProgress)
//! ```

use std::mem;
use std::time::Duration;

use log::debug;

use crate::models::{CategoryId, Quiz};
use crate::scoring::Answers;
use crate::session::{AnswerPolicy, QuizSession};

/// The active screen and the data needed to render it.
#[derive(Debug, Clone, Default)]
pub enum NavigationState {
    #[default]
    Home,
    CategoryView {
        category: CategoryId,
    },
    QuizInProgress {
        quiz: Quiz,
        session: QuizSession,
    },
    QuizResults {
        quiz: Quiz,
        score: usize,
        total: usize,
        answers: Answers,
        elapsed: Duration,
    },
}

/// User intents the state machine reacts to.
#[derive(Debug, Clone)]
pub enum NavEvent {
    SelectCategory(CategoryId),
    SelectQuiz(Quiz),
    Complete {
        score: usize,
        total: usize,
        answers: Answers,
        elapsed: Duration,
    },
    Back,
    Retry,
    Home,
}

impl NavEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NavEvent::SelectCategory(_) => "select-category",
            NavEvent::SelectQuiz(_) => "select-quiz",
            NavEvent::Complete { .. } => "complete",
            NavEvent::Back => "back",
            NavEvent::Retry => "retry",
            NavEvent::Home => "home",
        }
    }
}

/// An event that has no transition from the current state.
#[derive(Debug)]
pub struct Rejected {
    pub state: NavigationState,
    pub event: &'static str,
}

impl NavigationState {
    pub fn name(&self) -> &'static str {
        match self {
            NavigationState::Home => "home",
            NavigationState::CategoryView { .. } => "category",
            NavigationState::QuizInProgress { .. } => "quiz",
            NavigationState::QuizResults { .. } => "results",
        }
    }

    /// Compute the next state. Illegal events hand the current state back.
    pub fn apply(self, event: NavEvent, policy: AnswerPolicy) -> Result<Self, Rejected> {
        match (self, event) {
            (NavigationState::Home, NavEvent::SelectCategory(category)) => {
                Ok(NavigationState::CategoryView { category })
            }
            (NavigationState::CategoryView { .. }, NavEvent::SelectQuiz(quiz)) => {
                let session = QuizSession::new(&quiz, policy);
                Ok(NavigationState::QuizInProgress { quiz, session })
            }
            (NavigationState::CategoryView { .. }, NavEvent::Back) => Ok(NavigationState::Home),
            (
                NavigationState::QuizInProgress { quiz, .. },
                NavEvent::Complete {
                    score,
                    total,
                    answers,
                    elapsed,
                },
            ) => Ok(NavigationState::QuizResults {
                quiz,
                score,
                total,
                answers,
                elapsed,
            }),
            (NavigationState::QuizInProgress { quiz, .. }, NavEvent::Back)
            | (NavigationState::QuizResults { quiz, .. }, NavEvent::Back) => {
                Ok(NavigationState::CategoryView {
                    category: quiz.category,
                })
            }
            (NavigationState::QuizResults { quiz, .. }, NavEvent::Retry) => {
                let session = QuizSession::new(&quiz, policy);
                Ok(NavigationState::QuizInProgress { quiz, session })
            }
            (NavigationState::QuizResults { .. }, NavEvent::Home) => Ok(NavigationState::Home),
            (state, event) => Err(Rejected {
                state,
                event: event.name(),
            }),
        }
    }
}

/// Owner of the single navigation state for a running app.
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
    policy: AnswerPolicy,
}

impl Navigator {
    pub fn new(policy: AnswerPolicy) -> Self {
        Self {
            state: NavigationState::Home,
            policy,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.state
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Apply `event`; returns whether the state changed.
    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        let current = mem::take(&mut self.state);
        let from = current.name();

        match current.apply(event, self.policy) {
            Ok(next) => {
                debug!("navigation: {} -> {}", from, next.name());
                self.state = next;
                true
            }
            Err(Rejected { state, event }) => {
                debug!("navigation: ignored `{}` in {}", event, from);
                self.state = state;
                false
            }
        }
    }

    /// Id of the session backing the current screen, if a quiz is running.
    pub fn active_session_id(&self) -> Option<uuid::Uuid> {
        match &self.state {
            NavigationState::QuizInProgress { session, .. } => Some(session.id()),
            _ => None,
        }
    }
}
