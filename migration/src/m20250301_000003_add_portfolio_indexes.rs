use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    IsPublic,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Composite index backing the public listing: filter on is_public,
        // order by updated_at descending.
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolios_public_updated_at")
                    .table(Portfolios::Table)
                    .col(Portfolios::IsPublic)
                    .col(Portfolios::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolios_public_updated_at")
                    .to_owned(),
            )
            .await
    }
}
