pub mod rating_query_postgres;
pub mod rating_repository_postgres;
pub mod recipe_lookup_postgres;
pub mod sea_orm_entity;
