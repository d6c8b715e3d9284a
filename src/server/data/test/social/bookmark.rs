use super::*;

/// Tests reading a user's bookmarks most recent first with a limit.
///
/// Expected: Ok with the newest bookmarks only
#[tokio::test]
async fn finds_recent_bookmarked_plan_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::create_user(db).await?;
    let mut plan_ids = Vec::new();
    for _ in 0..4 {
        let (_, plan) = factory::create_plan_with_owner(db).await?;
        factory::create_bookmark(db, reader.id, plan.id).await?;
        plan_ids.push(plan.id);
    }

    let repo = BookmarkRepository::new(db);

    let recent = repo.find_plan_ids_by_user(reader.id, Some(3)).await?;
    assert_eq!(recent, vec![plan_ids[3], plan_ids[2], plan_ids[1]]);

    let all = repo.find_plan_ids_by_user(reader.id, None).await?;
    assert_eq!(all.len(), 4);

    Ok(())
}

/// Tests removing every bookmark of a plan.
///
/// Expected: Ok with the plan's bookmarks gone
#[tokio::test]
async fn deletes_bookmarks_by_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let reader = factory::create_user(db).await?;
    factory::create_bookmark(db, owner.id, plan.id).await?;
    factory::create_bookmark(db, reader.id, plan.id).await?;

    let repo = BookmarkRepository::new(db);
    let deleted = repo.delete_by_plan(plan.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.count_by_plan(plan.id).await?, 0);

    Ok(())
}
