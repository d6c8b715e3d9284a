pub use sea_orm_migration::prelude::*;

mod m20240610_000001_create_users_table;
mod m20240610_000002_create_plans_table;
mod m20240610_000003_create_plan_users_table;
mod m20240610_000004_create_schedule_tables;
mod m20240611_000005_create_comments_table;
mod m20240611_000006_create_likes_and_bookmarks_tables;
mod m20240612_000007_create_chat_tables;
mod m20240613_000008_create_refresh_tokens_table;
mod m20240614_000009_create_alarms_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240610_000001_create_users_table::Migration),
            Box::new(m20240610_000002_create_plans_table::Migration),
            Box::new(m20240610_000003_create_plan_users_table::Migration),
            Box::new(m20240610_000004_create_schedule_tables::Migration),
            Box::new(m20240611_000005_create_comments_table::Migration),
            Box::new(m20240611_000006_create_likes_and_bookmarks_tables::Migration),
            Box::new(m20240612_000007_create_chat_tables::Migration),
            Box::new(m20240613_000008_create_refresh_tokens_table::Migration),
            Box::new(m20240614_000009_create_alarms_table::Migration),
        ]
    }
}
