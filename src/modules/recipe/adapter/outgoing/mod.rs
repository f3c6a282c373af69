pub mod dummyjson_catalog;
pub mod favorite_repository_postgres;
pub mod recipe_query_postgres;
pub mod recipe_repository_postgres;
pub mod sea_orm_entity;
