use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Recipes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Recipes::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Recipes::Description).text().not_null())
                    .col(
                        ColumnDef::new(Recipes::Ingredients)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Recipes::Instructions).text().not_null())
                    .col(ColumnDef::new(Recipes::Category).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Recipes::PrepTimeMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Recipes::CookTimeMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Recipes::Servings).integer().not_null())
                    .col(ColumnDef::new(Recipes::ImageUrl).string_len(500))
                    .col(ColumnDef::new(Recipes::ExternalId).big_integer())
                    .col(
                        ColumnDef::new(Recipes::IsExternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Recipes::UserId).uuid())
                    .col(
                        ColumnDef::new(Recipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Recipes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Recipes::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipes_user_id")
                            .from(Recipes::Table, Recipes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recipes_user_id ON recipes (user_id);
                CREATE INDEX idx_recipes_category ON recipes (category);
                "#,
            )
            .await?;

        // One live imported copy per catalog record
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_recipes_external_id_active
                ON recipes (external_id)
                WHERE is_deleted = false AND external_id IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_recipes_updated_at
                BEFORE UPDATE ON recipes
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_recipes_updated_at ON recipes;
                DROP INDEX IF EXISTS idx_recipes_user_id;
                DROP INDEX IF EXISTS idx_recipes_category;
                DROP INDEX IF EXISTS idx_recipes_external_id_active;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    Name,
    Description,
    Ingredients,
    Instructions,
    Category,
    PrepTimeMinutes,
    CookTimeMinutes,
    Servings,
    ImageUrl,
    ExternalId,
    IsExternal,
    UserId,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
