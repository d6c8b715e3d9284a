use super::*;

/// Tests listing a user's alarms.
///
/// Expected: Ok with only the user's alarms, newest first
#[tokio::test]
async fn lists_own_alarms_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Alarm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_alarm(db, user.id).await?;
    let second = factory::create_alarm_with_status(db, user.id, true).await?;
    factory::create_alarm(db, other.id).await?;

    let service = AlarmService::new(db);
    let alarms = service.list(user.id).await?;

    let ids: Vec<i32> = alarms.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(service.count_unchecked(user.id).await?, 1);

    Ok(())
}
