pub mod app_state_builder;
pub mod recipe_test_fixtures;
pub mod stubs;
