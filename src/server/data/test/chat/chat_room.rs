use super::*;

/// Tests creating a chat room for a plan.
///
/// Expected: Ok with the room listed under its plan
#[tokio::test]
async fn creates_room_for_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, plan) = factory::create_plan_with_owner(db).await?;

    let repo = ChatRoomRepository::new(db);
    let room = repo.create(plan.id, "Day one".to_string()).await?;

    assert_eq!(room.plan_id, plan.id);
    assert_eq!(room.room_name, "Day one");
    assert_eq!(repo.find_by_plan(plan.id).await?, vec![room]);

    Ok(())
}

/// Tests listing the rooms a user joined.
///
/// Verifies that only joined rooms are returned, newest room first.
///
/// Expected: Ok with joined rooms in descending room date
#[tokio::test]
async fn finds_rooms_by_user_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, plan) = factory::create_plan_with_owner(db).await?;
    let now = Utc::now();
    let older = factory::create_chat_room_at(db, plan.id, now - Duration::days(1)).await?;
    let newer = factory::create_chat_room_at(db, plan.id, now).await?;
    factory::create_chat_room(db, plan.id).await?;
    factory::create_chat_room_user(db, older.id, owner.id).await?;
    factory::create_chat_room_user(db, newer.id, owner.id).await?;

    let rooms = ChatRoomRepository::new(db).find_by_user(owner.id).await?;

    let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
