pub mod rating_query;
pub mod rating_repository;
pub mod recipe_lookup;

pub use rating_query::{RatingQuery, RatingQueryError, RatingView};
pub use rating_repository::{
    RatingRecord, RatingRepository, RatingRepositoryError, UpsertRatingData,
};
pub use recipe_lookup::{RecipeLookup, RecipeLookupError};
