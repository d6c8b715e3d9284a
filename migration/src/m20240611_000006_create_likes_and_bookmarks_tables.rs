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
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(pk_auto(Likes::Id))
                    .col(integer(Likes::UserId))
                    .col(integer(Likes::PlanId))
                    .col(
                        timestamp_with_time_zone(Likes::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user_id")
                            .from(Likes::Table, Likes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_plan_id")
                            .from(Likes::Table, Likes::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_likes_user_plan")
                    .table(Likes::Table)
                    .col(Likes::UserId)
                    .col(Likes::PlanId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bookmarks::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookmarks::Id))
                    .col(integer(Bookmarks::UserId))
                    .col(integer(Bookmarks::PlanId))
                    .col(
                        timestamp_with_time_zone(Bookmarks::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookmarks_user_id")
                            .from(Bookmarks::Table, Bookmarks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookmarks_plan_id")
                            .from(Bookmarks::Table, Bookmarks::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookmarks_user_plan")
                    .table(Bookmarks::Table)
                    .col(Bookmarks::UserId)
                    .col(Bookmarks::PlanId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookmarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Likes {
    Table,
    Id,
    UserId,
    PlanId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Bookmarks {
    Table,
    Id,
    UserId,
    PlanId,
    CreatedAt,
}
