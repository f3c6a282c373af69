pub mod delete_rating;
pub mod get_own_rating;
pub mod get_recipe_ratings;
pub mod rate_recipe;

pub use delete_rating::{DeleteRatingError, DeleteRatingUseCase};
pub use get_own_rating::{GetOwnRatingError, GetOwnRatingUseCase};
pub use get_recipe_ratings::{GetRecipeRatingsError, GetRecipeRatingsUseCase};
pub use rate_recipe::{
    RateRecipeCommand, RateRecipeCommandError, RateRecipeError, RateRecipeUseCase,
};
