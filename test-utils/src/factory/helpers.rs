//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation plus convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, a plan owned by them and the owner's accepted membership row.
///
/// Mirrors what plan creation does in the service layer, so tests that need an
/// ordinary plan can start from a consistent state.
///
/// # Returns
/// - `Ok((owner, plan))` - Created owner and plan
/// - `Err(DbErr)` - Database error during creation
pub async fn create_plan_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::plan::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let plan = create_plan_for_owner(db, &owner).await?;

    Ok((owner, plan))
}

/// Creates a plan owned by an existing user with the owner's accepted membership row.
pub async fn create_plan_for_owner(
    db: &DatabaseConnection,
    owner: &entity::user::Model,
) -> Result<entity::plan::Model, DbErr> {
    let plan = crate::factory::plan::create_plan(db, owner.id).await?;
    crate::factory::plan_user::PlanUserFactory::new(db, plan.id, owner.id)
        .status("ACCEPTED")
        .build()
        .await?;

    Ok(plan)
}
