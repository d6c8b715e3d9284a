use super::*;

/// Tests an accepted plan member joining a room.
///
/// Expected: Ok, and a second join is Err(Conflict)
#[tokio::test]
async fn plan_member_joins_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_member(db, plan.id, guest.id).await?;
    let room = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, room.id, owner.id).await?;

    let service = ChatService::new(db);
    let joined = service.join(room.id, guest.id).await?;

    assert_eq!(joined.id, room.id);
    assert_eq!(service.members(room.id, guest.id).await?.len(), 2);
    assert!(matches!(
        service.join(room.id, guest.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests joining a room of a plan the user does not belong to.
///
/// Pending invitations do not count as membership.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn forbids_outsider_join() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let invited = factory::create_user(db).await?;
    factory::create_invitation(db, plan.id, invited.id).await?;
    let room = factory::create_chat_room(db, plan.id).await?;

    let result = ChatService::new(db).join(room.id, invited.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests the last member leaving a room.
///
/// Expected: Ok with the room and its messages deleted
#[tokio::test]
async fn last_leave_deletes_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, room.id, owner.id).await?;
    factory::create_chat_message(db, room.id, owner.id).await?;

    ChatService::new(db).leave(room.id, owner.id).await?;

    assert_eq!(entity::prelude::ChatRoom::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ChatMessage::find().count(db).await?, 0);

    Ok(())
}

/// Tests leaving a room that still has other members.
///
/// Expected: Ok with the room kept
#[tokio::test]
async fn leave_keeps_occupied_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, room.id, owner.id).await?;
    factory::create_chat_room_user(db, room.id, guest.id).await?;

    let service = ChatService::new(db);
    service.leave(room.id, guest.id).await?;

    assert_eq!(entity::prelude::ChatRoom::find().count(db).await?, 1);
    assert!(matches!(
        service.leave(room.id, guest.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
