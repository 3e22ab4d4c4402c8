mod catalog;
mod category;
mod question;

#[cfg(test)]
pub(crate) use question::fixtures;

pub use catalog::Catalog;
pub use category::{Category, CategoryId};
pub use question::{Difficulty, Question, QuestionId, Quiz};
