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
                    .table(ChatRooms::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatRooms::Id))
                    .col(integer(ChatRooms::PlanId))
                    .col(string(ChatRooms::RoomName))
                    .col(
                        timestamp_with_time_zone(ChatRooms::RoomDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_rooms_plan_id")
                            .from(ChatRooms::Table, ChatRooms::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChatRoomUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatRoomUsers::Id))
                    .col(integer(ChatRoomUsers::RoomId))
                    .col(integer(ChatRoomUsers::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_room_users_room_id")
                            .from(ChatRoomUsers::Table, ChatRoomUsers::RoomId)
                            .to(ChatRooms::Table, ChatRooms::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_room_users_user_id")
                            .from(ChatRoomUsers::Table, ChatRoomUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChatMessages::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessages::Id))
                    .col(integer(ChatMessages::RoomId))
                    .col(integer(ChatMessages::UserId))
                    .col(text(ChatMessages::Content))
                    .col(
                        timestamp_with_time_zone(ChatMessages::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_messages_room_id")
                            .from(ChatMessages::Table, ChatMessages::RoomId)
                            .to(ChatRooms::Table, ChatRooms::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_messages_user_id")
                            .from(ChatMessages::Table, ChatMessages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChatRoomUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChatRooms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatRooms {
    Table,
    Id,
    PlanId,
    RoomName,
    RoomDate,
}

#[derive(DeriveIden)]
pub enum ChatRoomUsers {
    Table,
    Id,
    RoomId,
    UserId,
}

#[derive(DeriveIden)]
pub enum ChatMessages {
    Table,
    Id,
    RoomId,
    UserId,
    Content,
    CreatedAt,
}
