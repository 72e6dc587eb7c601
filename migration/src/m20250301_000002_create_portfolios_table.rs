use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolios` table and its columns.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    UserId,
    Title,
    Tagline,
    About,
    Avatar,
    BannerImage,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    SocialLinks,
    Theme,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One portfolio per user.
                    .col(
                        ColumnDef::new(Portfolios::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Title).string().not_null())
                    .col(ColumnDef::new(Portfolios::Tagline).string().not_null())
                    .col(ColumnDef::new(Portfolios::About).text().not_null())
                    .col(ColumnDef::new(Portfolios::Avatar).text().not_null())
                    .col(ColumnDef::new(Portfolios::BannerImage).text().not_null())
                    .col(ColumnDef::new(Portfolios::Skills).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolios::Projects)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Experience)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::Education)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::Contact).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolios::SocialLinks)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::Theme).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::IsPublic).boolean().not_null())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_user_id")
                            .from(Portfolios::Table, Portfolios::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}
