use super::*;

/// Tests bookmarking a plan twice.
///
/// Expected: Err(Conflict) for the second bookmark
#[tokio::test]
async fn second_bookmark_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let reader = factory::create_user(db).await?;

    let service = BookmarkService::new(db);
    service.add(reader.id, plan.id).await?;

    assert!(matches!(
        service.add(reader.id, plan.id).await,
        Err(AppError::Conflict(_))
    ));
    assert_eq!(service.count(plan.id).await?, 1);

    service.remove(reader.id, plan.id).await?;
    assert_eq!(service.count(plan.id).await?, 0);

    Ok(())
}

/// Tests bookmarking a private plan the user is not a member of.
///
/// Expected: Err(NotFound) with no bookmark stored
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

    let service = BookmarkService::new(db);

    assert!(matches!(
        service.add(stranger.id, plan.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.count(plan.id).await?, 0);

    Ok(())
}
