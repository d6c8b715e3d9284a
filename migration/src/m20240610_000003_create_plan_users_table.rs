use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240610_000001_create_users_table::Users, m20240610_000002_create_plans_table::Plans,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanUsers::Id))
                    .col(integer(PlanUsers::PlanId))
                    .col(integer(PlanUsers::UserId))
                    .col(string(PlanUsers::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_users_plan_id")
                            .from(PlanUsers::Table, PlanUsers::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_users_user_id")
                            .from(PlanUsers::Table, PlanUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_plan_users_plan_user")
                    .table(PlanUsers::Table)
                    .col(PlanUsers::PlanId)
                    .col(PlanUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanUsers {
    Table,
    Id,
    PlanId,
    UserId,
    Status,
}
