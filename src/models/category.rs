use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::NotFound;

use super::question::Quiz;

/// The closed set of category tags shared by categories and quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Frontend,
    Backend,
    Algorithms,
    DesignPatterns,
    Security,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Frontend,
        CategoryId::Backend,
        CategoryId::Algorithms,
        CategoryId::DesignPatterns,
        CategoryId::Security,
    ];

    /// The key used in catalog documents.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Frontend => "frontend",
            CategoryId::Backend => "backend",
            CategoryId::Algorithms => "algorithms",
            CategoryId::DesignPatterns => "design-patterns",
            CategoryId::Security => "security",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = NotFound;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| NotFound::Category(key.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Icon name from the catalog document; the terminal UI maps it to a glyph.
    pub icon: String,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl Category {
    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }

    pub fn find_quiz(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == quiz_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_round_trips_through_key() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_category_key_is_not_found() {
        let err = "nonexistent".parse::<CategoryId>().unwrap_err();
        assert_eq!(err, NotFound::Category("nonexistent".to_string()));
    }

    #[test]
    fn test_category_id_deserializes_kebab_case() {
        let id: CategoryId = serde_json::from_str("\"design-patterns\"").unwrap();
        assert_eq!(id, CategoryId::DesignPatterns);
        assert!(serde_json::from_str::<CategoryId>("\"databases\"").is_err());
    }
}
