use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::domain::entities::{InvalidRatingScore, RatingScore};
use crate::rating::application::ports::outgoing::rating_query::RatingView;

//
// ──────────────────────────────────────────────────────────
// Rate Recipe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RateRecipeCommand {
    recipe_id: Uuid,
    score: RatingScore,
    comment: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateRecipeCommandError {
    #[error(transparent)]
    InvalidScore(#[from] InvalidRatingScore),

    #[error("Comment must not exceed 500 characters")]
    CommentTooLong,
}

impl RateRecipeCommand {
    pub fn new(
        recipe_id: Uuid,
        value: i16,
        comment: Option<String>,
    ) -> Result<Self, RateRecipeCommandError> {
        let score = RatingScore::try_new(value)?;

        // Blank comments are stored as no comment at all
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if let Some(ref c) = comment {
            if c.len() > 500 {
                return Err(RateRecipeCommandError::CommentTooLong);
            }
        }

        Ok(Self {
            recipe_id,
            score,
            comment,
        })
    }

    pub fn recipe_id(&self) -> Uuid {
        self.recipe_id
    }

    pub fn score(&self) -> RatingScore {
        self.score
    }

    pub fn comment(&self) -> Option<&String> {
        self.comment.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateRecipeError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RateRecipeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RateRecipeCommand,
        rater: UserId,
    ) -> Result<RatingView, RateRecipeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_accepts_valid_score() {
        let command = RateRecipeCommand::new(Uuid::new_v4(), 4, Some("Tasty".to_string())).unwrap();

        assert_eq!(command.score().value(), 4);
        assert_eq!(command.comment().map(String::as_str), Some("Tasty"));
    }

    #[test]
    fn command_rejects_out_of_range_score() {
        let result = RateRecipeCommand::new(Uuid::new_v4(), 0, None);
        assert!(matches!(
            result,
            Err(RateRecipeCommandError::InvalidScore(_))
        ));

        let result = RateRecipeCommand::new(Uuid::new_v4(), 6, None);
        assert!(matches!(
            result,
            Err(RateRecipeCommandError::InvalidScore(_))
        ));
    }

    #[test]
    fn command_drops_blank_comment() {
        let command = RateRecipeCommand::new(Uuid::new_v4(), 3, Some("   ".to_string())).unwrap();

        assert!(command.comment().is_none());
    }

    #[test]
    fn command_rejects_oversized_comment() {
        let result = RateRecipeCommand::new(Uuid::new_v4(), 3, Some("c".repeat(501)));

        assert!(matches!(result, Err(RateRecipeCommandError::CommentTooLong)));
    }
}
