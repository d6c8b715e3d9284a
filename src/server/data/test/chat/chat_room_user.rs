use super::*;

/// Tests that the first member to join is reported as the room creator.
///
/// Expected: Ok with the earliest member returned
#[tokio::test]
async fn finds_first_user_of_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let guest = factory::create_user(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;

    let repo = ChatRoomUserRepository::new(db);
    assert_eq!(repo.find_first_user(room.id).await?, None);

    repo.create(room.id, owner.id).await?;
    repo.create(room.id, guest.id).await?;

    assert_eq!(repo.find_first_user(room.id).await?, Some(owner.id));
    assert_eq!(repo.count_by_room(room.id).await?, 2);

    let members = repo.find_members(room.id).await?;
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].nickname, guest.nickname);

    Ok(())
}

/// Tests leaving a room.
///
/// Expected: Ok(true) on leave, Ok(false) when not a member
#[tokio::test]
async fn removes_member_from_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let room = factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, room.id, owner.id).await?;

    let repo = ChatRoomUserRepository::new(db);

    assert!(repo.exists(room.id, owner.id).await?);
    assert!(repo.delete(room.id, owner.id).await?);
    assert!(!repo.exists(room.id, owner.id).await?);
    assert!(!repo.delete(room.id, owner.id).await?);

    Ok(())
}
