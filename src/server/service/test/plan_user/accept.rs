use super::*;

/// Tests accepting an invitation to a plan with chat rooms.
///
/// Expected: Ok with the membership accepted and the user added to every room
#[tokio::test]
async fn accepts_and_joins_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let first = factory::create_chat_room(db, plan.id).await?;
    let second = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, first.id, owner.id).await?;
    factory::create_chat_room_user(db, second.id, owner.id).await?;
    let guest = factory::create_user(db).await?;
    factory::create_invitation(db, plan.id, guest.id).await?;

    let membership = PlanUserService::new(db).accept(plan.id, guest.id).await?;

    assert_eq!(membership.status, PlanUserStatus::Accepted);
    assert_eq!(entity::prelude::ChatRoomUser::find().count(db).await?, 4);

    Ok(())
}

/// Tests answering an invitation twice.
///
/// Expected: Err(Conflict) for the second answer
#[tokio::test]
async fn rejects_answered_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_invitation(db, plan.id, guest.id).await?;

    let service = PlanUserService::new(db);
    let declined = service.reject(plan.id, guest.id).await?;
    assert_eq!(declined.status, PlanUserStatus::Declined);

    assert!(matches!(
        service.accept(plan.id, guest.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests accepting without an invitation.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_without_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let result = PlanUserService::new(db).accept(plan.id, stranger.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
