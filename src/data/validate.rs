//! Load-time invariant checks for catalog documents.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{Catalog, Category, Quiz};

pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut category_ids = HashSet::new();
    let mut quiz_ids = HashSet::new();

    for category in catalog.list_categories() {
        if !category_ids.insert(category.id) {
            return Err(CatalogError::DuplicateCategory(category.id));
        }

        for quiz in &category.quizzes {
            if !quiz_ids.insert(quiz.id.as_str()) {
                return Err(CatalogError::DuplicateQuiz(quiz.id.clone()));
            }
            validate_quiz(category, quiz)?;
        }
    }

    Ok(())
}

fn validate_quiz(category: &Category, quiz: &Quiz) -> Result<(), CatalogError> {
    if quiz.category != category.id {
        return Err(CatalogError::CategoryMismatch {
            quiz: quiz.id.clone(),
            tagged: quiz.category,
            listed: category.id,
        });
    }

    if quiz.questions.is_empty() {
        return Err(CatalogError::NoQuestions(quiz.id.clone()));
    }

    let mut question_ids = HashSet::new();
    for question in &quiz.questions {
        if !question_ids.insert(question.id) {
            return Err(CatalogError::DuplicateQuestion {
                quiz: quiz.id.clone(),
                question: question.id,
            });
        }

        if question.options.is_empty() {
            return Err(CatalogError::NoOptions {
                quiz: quiz.id.clone(),
                question: question.id,
            });
        }

        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.as_str()) {
                return Err(CatalogError::DuplicateOption {
                    quiz: quiz.id.clone(),
                    question: question.id,
                    option: option.clone(),
                });
            }
        }

        if !question.has_option(&question.correct_answer) {
            return Err(CatalogError::UnknownCorrectAnswer {
                quiz: quiz.id.clone(),
                question: question.id,
                answer: question.correct_answer.clone(),
            });
        }
    }

    Ok(())
}
