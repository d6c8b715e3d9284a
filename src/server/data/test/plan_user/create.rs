use super::*;

/// Tests recording a pending invitation.
///
/// Expected: Ok with a pending membership that is not yet accepted
#[tokio::test]
async fn creates_pending_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;

    let repo = PlanUserRepository::new(db);
    let membership = repo
        .create(plan.id, guest.id, PlanUserStatus::Pending)
        .await?;

    assert_eq!(membership.status, PlanUserStatus::Pending);
    assert!(!repo.is_accepted_member(plan.id, guest.id).await?);

    Ok(())
}

/// Tests accepting an invitation by updating its status.
///
/// Expected: Ok with membership accepted
#[tokio::test]
async fn accepts_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let invitation = factory::create_invitation(db, plan.id, guest.id).await?;

    let repo = PlanUserRepository::new(db);
    let updated = repo
        .update_status(invitation.id, PlanUserStatus::Accepted)
        .await?;

    assert_eq!(updated.status, PlanUserStatus::Accepted);
    assert!(repo.is_accepted_member(plan.id, guest.id).await?);

    Ok(())
}
