//! Question entity model and DTOs.

use std::fmt;

use qna_core::types::{DbId, Timestamp};
use qna_core::{validation, CoreError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// Set once at insert, never updated afterwards.
    pub created_at: Timestamp,
    /// Refreshed by the database on every update.
    pub modified_at: Timestamp,
}

/// The display string of a question is its title, exactly.
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub content: String,
}

impl CreateQuestion {
    /// Check both fields against the length bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        validation::validate_title(&self.title)?;
        validation::validate_content(&self.content)?;
        Ok(())
    }
}

/// DTO for updating an existing question. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateQuestion {
    /// Check the supplied fields against the length bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(title) = &self.title {
            validation::validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validation::validate_content(content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(title: &str) -> Question {
        let now = Utc::now();
        Question {
            id: 1,
            title: title.to_string(),
            content: "some content".to_string(),
            created_at: now,
            modified_at: now,
        }
    }

    #[test]
    fn display_is_the_title() {
        assert_eq!(question("How do I borrow?").to_string(), "How do I borrow?");
    }

    #[test]
    fn create_validates_both_fields() {
        let input = CreateQuestion {
            title: "t".repeat(31),
            content: "fine".to_string(),
        };
        assert!(input.validate().is_err());

        let input = CreateQuestion {
            title: "fine".to_string(),
            content: "c".repeat(101),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_skips_absent_fields() {
        let patch = UpdateQuestion {
            title: None,
            content: None,
        };
        assert!(patch.validate().is_ok());
    }
}
