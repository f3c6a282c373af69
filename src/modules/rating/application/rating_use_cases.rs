use std::sync::Arc;

use crate::rating::application::ports::incoming::use_cases::{
    DeleteRatingUseCase, GetOwnRatingUseCase, GetRecipeRatingsUseCase, RateRecipeUseCase,
};

#[derive(Clone)]
pub struct RatingUseCases {
    pub rate: Arc<dyn RateRecipeUseCase + Send + Sync>,
    pub get_for_recipe: Arc<dyn GetRecipeRatingsUseCase + Send + Sync>,
    pub get_own: Arc<dyn GetOwnRatingUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRatingUseCase + Send + Sync>,
}
