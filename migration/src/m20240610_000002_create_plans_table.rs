use sea_orm_migration::{prelude::*, schema::*};

use super::m20240610_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plans::Table)
                    .if_not_exists()
                    .col(pk_auto(Plans::Id))
                    .col(integer(Plans::UserId))
                    .col(string(Plans::Title))
                    .col(string(Plans::Location))
                    .col(text_null(Plans::Description))
                    .col(date(Plans::StartDate))
                    .col(date(Plans::EndDate))
                    .col(big_integer(Plans::TotalBudget).default(0))
                    .col(boolean(Plans::IsPublic).default(false))
                    .col(boolean(Plans::Status).default(false))
                    .col(
                        timestamp_with_time_zone(Plans::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plans_user_id")
                            .from(Plans::Table, Plans::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_plans_is_public")
                    .table(Plans::Table)
                    .col(Plans::IsPublic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plans {
    Table,
    Id,
    UserId,
    Title,
    Location,
    Description,
    StartDate,
    EndDate,
    TotalBudget,
    IsPublic,
    Status,
    CreatedAt,
}
