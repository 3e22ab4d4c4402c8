//! Read-only lookups over the loaded catalog.

use serde::Deserialize;

use super::category::{Category, CategoryId};
use super::question::Quiz;

/// Every category, in the order the catalog document lists them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn find_quiz(&self, category_id: CategoryId, quiz_id: &str) -> Option<&Quiz> {
        self.find_category(category_id)
            .and_then(|category| category.find_quiz(quiz_id))
    }

    pub fn total_quizzes(&self) -> usize {
        self.categories.iter().map(Category::quiz_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
