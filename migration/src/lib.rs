pub use sea_orm_migration::prelude::*;

mod m20250410_000001_create_users_table;
mod m20250410_000002_create_recipes_table;
mod m20250410_000003_create_favorites_table;
mod m20250410_000004_create_ratings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250410_000001_create_users_table::Migration),
            Box::new(m20250410_000002_create_recipes_table::Migration),
            Box::new(m20250410_000003_create_favorites_table::Migration),
            Box::new(m20250410_000004_create_ratings_table::Migration),
        ]
    }
}
