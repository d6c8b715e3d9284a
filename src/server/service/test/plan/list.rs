use super::*;

/// Tests the public listing with counters.
///
/// Verifies that private plans are excluded and each entry carries its like and
/// bookmark counts and the owner nickname.
///
/// Expected: Ok with only public plans and correct counters
#[tokio::test]
async fn lists_public_plans_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, public) = factory::create_plan_with_owner(db).await?;
    let private = factory::create_private_plan(db, owner.id).await?;
    let fan = factory::create_user(db).await?;
    factory::create_like(db, fan.id, public.id).await?;
    factory::create_like(db, owner.id, public.id).await?;
    factory::create_bookmark(db, fan.id, public.id).await?;

    let summaries = PlanService::new(db).list_public(None).await?;

    assert_eq!(summaries.len(), 1);
    assert!(summaries.iter().all(|s| s.plan.id != private.id));
    assert_eq!(summaries[0].like_count, 2);
    assert_eq!(summaries[0].bookmark_count, 1);
    assert_eq!(summaries[0].nickname, owner.nickname);

    Ok(())
}

/// Tests that a blank keyword lists everything public.
///
/// Expected: Ok with both public plans
#[tokio::test]
async fn ignores_blank_keyword() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_plan_with_owner(db).await?;
    factory::create_plan_with_owner(db).await?;

    let summaries = PlanService::new(db).list_public(Some("  ")).await?;

    assert_eq!(summaries.len(), 2);

    Ok(())
}

/// Tests the recent bookmark listing.
///
/// Expected: Ok with at most three plans, newest bookmark first
#[tokio::test]
async fn limits_recent_bookmarks_to_three() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::create_user(db).await?;
    let mut plan_ids = Vec::new();
    for _ in 0..5 {
        let (_, plan) = factory::create_plan_with_owner(db).await?;
        factory::create_bookmark(db, reader.id, plan.id).await?;
        plan_ids.push(plan.id);
    }

    let service = PlanService::new(db);

    let recent = service.list_bookmarked(reader.id, true).await?;
    let ids: Vec<i32> = recent.iter().map(|s| s.plan.id).collect();
    assert_eq!(ids, vec![plan_ids[4], plan_ids[3], plan_ids[2]]);

    assert_eq!(service.list_bookmarked(reader.id, false).await?.len(), 5);

    Ok(())
}

/// Tests the liked plan listing.
///
/// Expected: Ok with only the plans the user liked
#[tokio::test]
async fn lists_liked_plans() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fan = factory::create_user(db).await?;
    let (_, liked) = factory::create_plan_with_owner(db).await?;
    factory::create_plan_with_owner(db).await?;
    factory::create_like(db, fan.id, liked.id).await?;

    let summaries = PlanService::new(db).list_liked(fan.id, false).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].plan.id, liked.id);
    assert_eq!(summaries[0].like_count, 1);

    Ok(())
}

/// Tests annotation listings after a plan turned private.
///
/// Verifies that a plan liked and bookmarked while public no longer shows up for a
/// user who is not a member, while it still does for an accepted member.
///
/// Expected: Ok with empty lists for the outsider and one entry for the member
#[tokio::test]
async fn omits_private_plans_from_annotation_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let plan = factory::create_private_plan(db, owner.id).await?;
    let outsider = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, plan.id, member.id).await?;

    factory::create_like(db, outsider.id, plan.id).await?;
    factory::create_bookmark(db, outsider.id, plan.id).await?;
    factory::create_like(db, member.id, plan.id).await?;

    let service = PlanService::new(db);

    assert!(service.list_liked(outsider.id, false).await?.is_empty());
    assert!(service.list_bookmarked(outsider.id, true).await?.is_empty());

    let liked = service.list_liked(member.id, false).await?;
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].plan.id, plan.id);

    Ok(())
}
