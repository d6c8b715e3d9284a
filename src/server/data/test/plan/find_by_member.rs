use super::*;

/// Tests listing the plans a user takes part in.
///
/// Verifies that owned plans and accepted memberships are included while pending
/// invitations are not.
///
/// Expected: Ok with owned and accepted plans only
#[tokio::test]
async fn includes_only_accepted_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owned = factory::create_plan_for_owner(db, &user).await?;
    let (_, joined) = factory::create_plan_with_owner(db).await?;
    factory::create_member(db, joined.id, user.id).await?;
    let (_, invited) = factory::create_plan_with_owner(db).await?;
    factory::create_invitation(db, invited.id, user.id).await?;

    let plans = PlanRepository::new(db).find_by_member(user.id).await?;

    let mut ids: Vec<i32> = plans.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![owned.id, joined.id]);

    Ok(())
}
