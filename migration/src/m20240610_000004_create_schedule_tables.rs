use sea_orm_migration::{prelude::*, schema::*};

use super::m20240610_000002_create_plans_table::Plans;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk_auto(Locations::Id))
                    .col(string(Locations::Name))
                    .col(double(Locations::Latitude))
                    .col(double(Locations::Longitude))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string(Vehicles::Vehicle))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(pk_auto(Budgets::Id))
                    .col(big_integer(Budgets::Amount))
                    .col(string_null(Budgets::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedules::Id))
                    .col(integer(Schedules::PlanId))
                    .col(boolean(Schedules::Status).default(false))
                    .col(integer(Schedules::TravelDayCount))
                    .col(text_null(Schedules::Description))
                    .col(time_null(Schedules::TravelTime))
                    .col(integer(Schedules::LocationId))
                    .col(integer_null(Schedules::VehicleId))
                    .col(integer_null(Schedules::BudgetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_plan_id")
                            .from(Schedules::Table, Schedules::PlanId)
                            .to(Plans::Table, Plans::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_location_id")
                            .from(Schedules::Table, Schedules::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_vehicle_id")
                            .from(Schedules::Table, Schedules::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_budget_id")
                            .from(Schedules::Table, Schedules::BudgetId)
                            .to(Budgets::Table, Budgets::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Vehicle,
}

#[derive(DeriveIden)]
pub enum Budgets {
    Table,
    Id,
    Amount,
    Description,
}

#[derive(DeriveIden)]
pub enum Schedules {
    Table,
    Id,
    PlanId,
    Status,
    TravelDayCount,
    Description,
    TravelTime,
    LocationId,
    VehicleId,
    BudgetId,
}
