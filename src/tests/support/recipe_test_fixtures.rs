use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;
use crate::recipe::application::ports::outgoing::recipe_query::RecipeView;
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;

pub fn sample_recipe_view() -> RecipeView {
    let now = Utc::now();

    RecipeView {
        id: Uuid::new_v4(),
        name: "Lentil Soup".to_string(),
        description: "A hearty soup".to_string(),
        ingredients: vec!["lentils".to_string(), "water".to_string()],
        instructions: "Boil the lentils".to_string(),
        category: RecipeCategory::Soup,
        prep_time_minutes: 10,
        cook_time_minutes: 30,
        servings: 4,
        image_url: None,
        is_external: false,
        owner: Some(UserId::from(Uuid::new_v4())),
        average_rating: 0.0,
        ratings_count: 0,
        is_favorited: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_recipe_record(owner: Option<UserId>) -> RecipeRecord {
    let now = Utc::now();

    RecipeRecord {
        id: Uuid::new_v4(),
        name: "Lentil Soup".to_string(),
        description: "A hearty soup".to_string(),
        ingredients: vec!["lentils".to_string(), "water".to_string()],
        instructions: "Boil the lentils".to_string(),
        category: RecipeCategory::Soup,
        prep_time_minutes: 10,
        cook_time_minutes: 30,
        servings: 4,
        image_url: None,
        external_id: None,
        is_external: false,
        owner,
        created_at: now,
        updated_at: now,
    }
}

pub fn external_recipe_record(external_id: i64) -> RecipeRecord {
    let mut record = sample_recipe_record(None);
    record.external_id = Some(external_id);
    record.is_external = true;
    record
}
