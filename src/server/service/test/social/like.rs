use super::*;

/// Tests liking a plan twice.
///
/// Expected: Ok for the first like, Err(Conflict) for the second, count stays 1
#[tokio::test]
async fn second_like_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let fan = factory::create_user(db).await?;

    let service = LikeService::new(db);
    service.add(fan.id, plan.id).await?;

    assert!(matches!(
        service.add(fan.id, plan.id).await,
        Err(AppError::Conflict(_))
    ));
    assert_eq!(service.count(plan.id).await?, 1);

    Ok(())
}

/// Tests liking a missing plan and removing a missing like.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn fails_for_missing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let fan = factory::create_user(db).await?;

    let service = LikeService::new(db);

    assert!(matches!(
        service.add(fan.id, 404).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.remove(fan.id, plan.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests unliking a plan.
///
/// Expected: Ok with the count back to zero
#[tokio::test]
async fn removes_like() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let fan = factory::create_user(db).await?;
    factory::create_like(db, fan.id, plan.id).await?;

    let service = LikeService::new(db);
    service.remove(fan.id, plan.id).await?;

    assert_eq!(service.count(plan.id).await?, 0);

    Ok(())
}

/// Tests liking a private plan the user is not a member of.
///
/// Verifies that the plan is reported missing and no like is stored, while an
/// accepted member can still like it.
///
/// Expected: Err(NotFound) for the outsider, Ok for the member
#[tokio::test]
async fn hides_private_plan_from_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let plan = factory::create_private_plan(db, owner.id).await?;
    let stranger = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, plan.id, member.id).await?;

    let service = LikeService::new(db);

    assert!(matches!(
        service.add(stranger.id, plan.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.count(plan.id).await?, 0);

    service.add(member.id, plan.id).await?;
    assert_eq!(service.count(plan.id).await?, 1);

    Ok(())
}
