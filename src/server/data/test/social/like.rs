use super::*;

/// Tests liking and unliking a plan.
///
/// Expected: exists and count follow the like being added then removed
#[tokio::test]
async fn toggles_like() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let fan = factory::create_user(db).await?;

    let repo = LikeRepository::new(db);
    repo.create(fan.id, plan.id).await?;

    assert!(repo.exists(fan.id, plan.id).await?);
    assert_eq!(repo.count_by_plan(plan.id).await?, 1);

    assert!(repo.delete(fan.id, plan.id).await?);
    assert!(!repo.exists(fan.id, plan.id).await?);
    assert_eq!(repo.count_by_plan(plan.id).await?, 0);
    assert!(!repo.delete(fan.id, plan.id).await?);

    Ok(())
}

/// Tests counting likes from several users.
///
/// Expected: Ok with one like per user counted
#[tokio::test]
async fn counts_likes_per_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let (_, other) = factory::create_plan_with_owner(db).await?;
    let fan = factory::create_user(db).await?;
    factory::create_like(db, owner.id, plan.id).await?;
    factory::create_like(db, fan.id, plan.id).await?;
    factory::create_like(db, fan.id, other.id).await?;

    let repo = LikeRepository::new(db);

    assert_eq!(repo.count_by_plan(plan.id).await?, 2);
    assert_eq!(repo.count_by_plan(other.id).await?, 1);

    Ok(())
}
