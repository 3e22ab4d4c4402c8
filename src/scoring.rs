//! Pure scoring over a quiz and its recorded answers.

use std::collections::HashMap;

use crate::models::{QuestionId, Quiz};

/// Selected option per question. Ordering carries no meaning.
pub type Answers = HashMap<QuestionId, String>;

/// Number of questions whose recorded answer matches the correct one.
///
/// An unanswered question counts as incorrect.
pub fn score(quiz: &Quiz, answers: &Answers) -> usize {
    quiz.questions
        .iter()
        .filter(|question| {
            answers
                .get(&question.id)
                .is_some_and(|answer| question.is_correct(answer))
        })
        .count()
}

/// `score / total` as a whole percentage, rounded half up. Zero when `total` is 0.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * score + total) / (2 * total)) as u32
}

/// Presentation label derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Great,
    Good,
    NeedsReview,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90..=u32::MAX => Grade::Excellent,
            80..=89 => Grade::Great,
            60..=79 => Grade::Good,
            _ => Grade::NeedsReview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::Great => "Great Job!",
            Grade::Good => "Good Work!",
            Grade::NeedsReview => "Keep Learning!",
        }
    }

    pub fn is_passing(self) -> bool {
        !matches!(self, Grade::NeedsReview)
    }
}

/// Closing message for the results screen.
pub fn encouragement(grade: Grade, quiz_title: &str) -> String {
    if grade.is_passing() {
        format!(
            "Congratulations! You've demonstrated solid understanding of {}. Keep up the excellent work!",
            quiz_title.to_lowercase()
        )
    } else {
        "Don't worry! Learning is a journey. Review the concepts and try again.".to_string()
    }
}

/// One row of the per-question review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub number: usize,
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

pub fn review(quiz: &Quiz, answers: &Answers) -> Vec<QuestionReview> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let your_answer = answers.get(&question.id).cloned();
            let is_correct = your_answer
                .as_deref()
                .is_some_and(|answer| question.is_correct(answer));

            QuestionReview {
                number: index + 1,
                prompt: question.prompt.clone(),
                your_answer,
                correct_answer: question.correct_answer.clone(),
                is_correct,
                explanation: question.explanation.clone(),
            }
        })
        .collect()
}
