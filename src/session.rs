//! Progress of one quiz attempt.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::error::AnswerError;
use crate::models::{Question, QuestionId, Quiz};
use crate::scoring::{self, Answers};

/// Whether the current question must be answered before moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    #[default]
    Required,
    /// Unanswered questions are allowed and score as incorrect.
    Optional,
}

/// Outcome of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// Already on the last question: the caller should score and complete.
    Finished,
    /// The current question has no answer and the policy requires one.
    Unanswered,
    /// The session was already completed.
    Closed,
}

/// Mutable state of a single attempt at a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    question_count: usize,
    current_index: usize,
    answers: Answers,
    completed: bool,
    started_at: Instant,
    ended_at: Option<Instant>,
    policy: AnswerPolicy,
}

impl QuizSession {
    pub fn new(quiz: &Quiz, policy: AnswerPolicy) -> Self {
        Self::started_at(quiz, policy, Instant::now())
    }

    pub fn started_at(quiz: &Quiz, policy: AnswerPolicy, started_at: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_count: quiz.question_count(),
            current_index: 0,
            answers: Answers::new(),
            completed: false,
            started_at,
            ended_at: None,
            policy,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q Question> {
        quiz.question(self.current_index)
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer_for(&self, question_id: QuestionId) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.question_count
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Position-based progress, counting the current question as reached.
    pub fn progress_percent(&self) -> u16 {
        scoring::percentage(self.current_index + 1, self.question_count) as u16
    }

    /// Record `option` as the answer to the current question.
    pub fn select_answer(
        &mut self,
        quiz: &Quiz,
        question_id: QuestionId,
        option: &str,
    ) -> Result<(), AnswerError> {
        if self.completed {
            return Err(AnswerError::Completed);
        }

        let Some(question) = self.current_question(quiz) else {
            return Err(AnswerError::NotAnOption(option.to_string()));
        };

        if question.id != question_id {
            return Err(AnswerError::WrongQuestion {
                given: question_id,
                current: question.id,
            });
        }

        if !question.has_option(option) {
            return Err(AnswerError::NotAnOption(option.to_string()));
        }

        self.answers.insert(question_id, option.to_string());
        Ok(())
    }

    pub fn advance(&mut self, quiz: &Quiz) -> Advance {
        if self.completed {
            return Advance::Closed;
        }

        if self.policy == AnswerPolicy::Required {
            let answered = self
                .current_question(quiz)
                .is_some_and(|question| self.answers.contains_key(&question.id));
            if !answered {
                return Advance::Unanswered;
            }
        }

        if self.is_last_question() {
            return Advance::Finished;
        }

        self.current_index += 1;
        Advance::Moved(self.current_index)
    }

    /// Step back one question. Returns false at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.completed || self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Freeze the session and stamp its end time.
    pub fn complete(&mut self) {
        self.complete_at(Instant::now());
    }

    pub fn complete_at(&mut self, now: Instant) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.ended_at = Some(now);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let end = self.ended_at.unwrap_or(now);
        end.saturating_duration_since(self.started_at)
    }
}

/// Format a duration as `m:ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fixtures, CategoryId};

    fn three_question_quiz() -> Quiz {
        fixtures::quiz(
            "three",
            CategoryId::Backend,
            vec![
                fixtures::question(10, &["a", "b"], "a"),
                fixtures::question(20, &["c", "d"], "d"),
                fixtures::question(30, &["e", "f"], "e"),
            ],
        )
    }

    #[test]
    fn test_new_session_starts_empty() {
        let quiz = three_question_quiz();
        let session = QuizSession::new(&quiz, AnswerPolicy::Required);

        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.is_completed());
        assert_eq!(session.current_question(&quiz).map(|q| q.id), Some(10));
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let quiz = three_question_quiz();
        let first = QuizSession::new(&quiz, AnswerPolicy::Required);
        let second = QuizSession::new(&quiz, AnswerPolicy::Required);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_select_answer_overwrites_without_advancing() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        session.select_answer(&quiz, 10, "b").unwrap();
        session.select_answer(&quiz, 10, "a").unwrap();

        assert_eq!(session.answer_for(10), Some("a"));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_select_answer_rejects_foreign_option() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        let err = session.select_answer(&quiz, 10, "d").unwrap_err();
        assert_eq!(err, AnswerError::NotAnOption("d".to_string()));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_select_answer_rejects_other_question() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        let err = session.select_answer(&quiz, 20, "d").unwrap_err();
        assert_eq!(
            err,
            AnswerError::WrongQuestion {
                given: 20,
                current: 10
            }
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_required_policy_blocks_unanswered_advance() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        assert_eq!(session.advance(&quiz), Advance::Unanswered);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_optional_policy_allows_skipping() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Optional);

        assert_eq!(session.advance(&quiz), Advance::Moved(1));
        assert_eq!(session.advance(&quiz), Advance::Moved(2));
        assert_eq!(session.advance(&quiz), Advance::Finished);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_advance_at_last_question_signals_finished() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Optional);
        session.advance(&quiz);
        session.advance(&quiz);
        assert!(session.is_last_question());

        for _ in 0..3 {
            assert_eq!(session.advance(&quiz), Advance::Finished);
            assert_eq!(session.current_index(), 2);
        }
    }

    #[test]
    fn test_retreat_at_first_question_is_noop() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        assert!(!session.retreat());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_forward_then_back_keeps_answers() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Required);

        for question in &quiz.questions {
            session
                .select_answer(&quiz, question.id, &question.options[1])
                .unwrap();
            session.advance(&quiz);
        }
        let recorded = session.answers().clone();
        assert_eq!(session.current_index(), 2);

        while session.retreat() {}

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answers(), &recorded);
    }

    #[test]
    fn test_completed_session_is_frozen() {
        let quiz = three_question_quiz();
        let start = Instant::now();
        let mut session = QuizSession::started_at(&quiz, AnswerPolicy::Optional, start);
        session.select_answer(&quiz, 10, "a").unwrap();
        session.complete_at(start + Duration::from_secs(42));

        assert_eq!(session.select_answer(&quiz, 10, "b"), Err(AnswerError::Completed));
        assert_eq!(session.advance(&quiz), Advance::Closed);
        assert!(!session.retreat());
        assert_eq!(session.answer_for(10), Some("a"));

        session.complete_at(start + Duration::from_secs(100));
        assert_eq!(
            session.elapsed_at(start + Duration::from_secs(500)),
            Duration::from_secs(42)
        );
    }

    #[test]
    fn test_elapsed_runs_until_completion() {
        let quiz = three_question_quiz();
        let start = Instant::now();
        let session = QuizSession::started_at(&quiz, AnswerPolicy::Required, start);

        assert_eq!(
            session.elapsed_at(start + Duration::from_secs(75)),
            Duration::from_secs(75)
        );
    }

    #[test]
    fn test_progress_percent() {
        let quiz = three_question_quiz();
        let mut session = QuizSession::new(&quiz, AnswerPolicy::Optional);

        assert_eq!(session.progress_percent(), 33);
        session.advance(&quiz);
        assert_eq!(session.progress_percent(), 67);
        session.advance(&quiz);
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1:05");
        assert_eq!(format_elapsed(Duration::from_millis(600_900)), "10:00");
    }
}
