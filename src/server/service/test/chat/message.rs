use super::*;

/// Tests sending and reading messages.
///
/// Expected: Ok with messages in send order carrying the sender nickname
#[tokio::test]
async fn sends_and_lists_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, room.id, owner.id).await?;

    let service = ChatService::new(db);
    service.send(room.id, owner.id, "Hello".to_string()).await?;
    service.send(room.id, owner.id, "World".to_string()).await?;

    let messages = service.messages(room.id, owner.id).await?;

    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["Hello", "World"]);
    assert_eq!(messages[0].nickname, owner.nickname);

    Ok(())
}

/// Tests reading and sending from outside the room.
///
/// Expected: Err(Forbidden) for both
#[tokio::test]
async fn forbids_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;

    let service = ChatService::new(db);

    assert!(matches!(
        service.messages(room.id, outsider.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.send(room.id, outsider.id, "Hi".to_string()).await,
        Err(AppError::Forbidden(_))
    ));

    Ok(())
}
