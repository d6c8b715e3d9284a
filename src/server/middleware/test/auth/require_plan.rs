use super::*;

/// Tests plan permissions for the owner.
///
/// Expected: Ok for both member and owner checks
#[tokio::test]
async fn owner_passes_plan_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let headers = headers_for(&jwt, &owner);

    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::PlanMember(plan.id), Permission::PlanOwner(plan.id)])
        .await?;

    assert_eq!(user.id, owner.id);

    Ok(())
}

/// Tests plan permissions for an accepted member.
///
/// Expected: Ok for the member check, Err(AccessDenied) for the owner check
#[tokio::test]
async fn member_is_not_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    factory::create_member(db, plan.id, member.id).await?;
    let headers = headers_for(&jwt, &member);
    let guard = AuthGuard::new(db, &jwt, &headers);

    assert!(guard.require(&[Permission::PlanMember(plan.id)]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::PlanOwner(plan.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a pending invitation does not grant membership.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn pending_invitee_is_not_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let invitee = factory::create_user(db).await?;
    factory::create_invitation(db, plan.id, invitee.id).await?;
    let headers = headers_for(&jwt, &invitee);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::PlanMember(plan.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests plan permissions on a plan that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let user = factory::create_user(db).await?;
    let headers = headers_for(&jwt, &user);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::PlanMember(404)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that admins pass plan checks without membership.
///
/// Expected: Ok
#[tokio::test]
async fn admin_bypasses_plan_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let admin = factory::create_admin(db).await?;
    let headers = headers_for(&jwt, &admin);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::PlanMember(plan.id), Permission::PlanOwner(plan.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
