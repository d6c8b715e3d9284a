use super::*;

/// Tests posting a comment.
///
/// Expected: Ok with the author's nickname resolved
#[tokio::test]
async fn creates_comment_with_author_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;

    let comment = CommentRepository::new(db)
        .create(owner.id, plan.id, "Looks great".to_string())
        .await?;

    assert_eq!(comment.content, "Looks great");
    assert_eq!(comment.nickname, owner.nickname);
    assert_eq!(comment.created_at, comment.updated_at);

    Ok(())
}

/// Tests listing a plan's comments.
///
/// Expected: Ok with comments oldest first and other plans excluded
#[tokio::test]
async fn lists_comments_by_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_social_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let (_, other) = factory::create_plan_with_owner(db).await?;
    let first = factory::create_comment(db, owner.id, plan.id).await?;
    let second = factory::create_comment(db, owner.id, plan.id).await?;
    factory::create_comment(db, owner.id, other.id).await?;

    let comments = CommentRepository::new(db).find_by_plan(plan.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
