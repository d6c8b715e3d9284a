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
                    .table(Alarms::Table)
                    .if_not_exists()
                    .col(pk_auto(Alarms::Id))
                    .col(integer(Alarms::UserId))
                    .col(string(Alarms::Content))
                    .col(boolean(Alarms::IsChecked).default(false))
                    .col(
                        timestamp_with_time_zone(Alarms::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alarms_user_id")
                            .from(Alarms::Table, Alarms::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alarms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alarms {
    Table,
    Id,
    UserId,
    Content,
    IsChecked,
    CreatedAt,
}
