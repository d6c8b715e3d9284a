use super::*;

/// Tests marking an alarm as read.
///
/// Expected: Ok with the alarm checked and the unchecked count reduced
#[tokio::test]
async fn marks_alarm_checked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Alarm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let alarm = factory::create_alarm(db, user.id).await?;
    factory::create_alarm_with_status(db, user.id, true).await?;

    let repo = AlarmRepository::new(db);
    assert_eq!(repo.count_unchecked(user.id).await?, 1);

    let checked = repo.mark_checked(alarm.id).await?;

    assert!(checked.is_checked);
    assert_eq!(repo.count_unchecked(user.id).await?, 0);

    Ok(())
}
