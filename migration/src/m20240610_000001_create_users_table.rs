use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_uniq(Users::Username))
                    .col(string_uniq(Users::Email))
                    .col(string_uniq(Users::Nickname))
                    .col(string_null(Users::Password))
                    .col(string(Users::Name))
                    .col(date_null(Users::BirthDate))
                    .col(string_null(Users::Gender))
                    .col(string(Users::Role).default("ROLE_USER"))
                    .col(string_null(Users::Provider))
                    .col(string_null(Users::ProviderId))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    Nickname,
    Password,
    Name,
    BirthDate,
    Gender,
    Role,
    Provider,
    ProviderId,
    CreatedAt,
}
