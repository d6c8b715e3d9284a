use super::*;

/// Tests inviting a new user to a plan.
///
/// Expected: Ok with a pending membership and an invitation alarm
#[tokio::test]
async fn creates_pending_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;

    let membership = PlanUserService::new(db).invite(plan.id, guest.id).await?;

    assert_eq!(membership.user_id, guest.id);
    assert_eq!(membership.status, PlanUserStatus::Pending);

    let alarms = entity::prelude::Alarm::find().all(db).await?;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].user_id, guest.id);

    Ok(())
}

/// Tests inviting a user who is already invited or already a member.
///
/// Expected: Err(Conflict) in both cases
#[tokio::test]
async fn rejects_duplicate_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_invitation(db, plan.id, guest.id).await?;

    let service = PlanUserService::new(db);

    assert!(matches!(
        service.invite(plan.id, guest.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.invite(plan.id, owner.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests inviting a user who previously declined.
///
/// Expected: Ok with the same row reopened as pending
#[tokio::test]
async fn reopens_declined_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let declined = factory::plan_user::PlanUserFactory::new(db, plan.id, guest.id)
        .status("DECLINED")
        .build()
        .await?;

    let membership = PlanUserService::new(db).invite(plan.id, guest.id).await?;

    assert_eq!(membership.id, declined.id);
    assert_eq!(membership.status, PlanUserStatus::Pending);

    Ok(())
}

/// Tests inviting a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_invitee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let result = PlanUserService::new(db).invite(plan.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
