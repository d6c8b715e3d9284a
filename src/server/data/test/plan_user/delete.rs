use super::*;

/// Tests removing a single membership.
///
/// Expected: Ok(true) for the member, Ok(false) when repeated
#[tokio::test]
async fn deletes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_member(db, plan.id, guest.id).await?;

    let repo = PlanUserRepository::new(db);

    assert!(repo.delete(plan.id, guest.id).await?);
    assert!(!repo.delete(plan.id, guest.id).await?);
    assert!(repo.find(plan.id, guest.id).await?.is_none());

    Ok(())
}

/// Tests removing every membership of a plan.
///
/// Expected: Ok with both rows removed and other plans untouched
#[tokio::test]
async fn deletes_memberships_by_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let (other_owner, other) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_member(db, plan.id, guest.id).await?;

    let repo = PlanUserRepository::new(db);
    let deleted = repo.delete_by_plan(plan.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_plan(plan.id).await?.is_empty());
    assert!(repo.is_accepted_member(other.id, other_owner.id).await?);

    Ok(())
}
