use super::*;

/// Tests checking one's own alarm.
///
/// Expected: Ok with the alarm checked and the unchecked count lowered
#[tokio::test]
async fn checks_own_alarm() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Alarm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let alarm = factory::create_alarm(db, user.id).await?;
    factory::create_alarm(db, user.id).await?;

    let service = AlarmService::new(db);
    let checked = service.check(alarm.id, user.id).await?;

    assert!(checked.is_checked);
    assert_eq!(service.count_unchecked(user.id).await?, 1);

    Ok(())
}

/// Tests checking and deleting another user's alarm.
///
/// Expected: Err(Forbidden) for both
#[tokio::test]
async fn forbids_foreign_alarm() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Alarm)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let alarm = factory::create_alarm(db, owner.id).await?;

    let service = AlarmService::new(db);

    assert!(matches!(
        service.check(alarm.id, other.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.delete(alarm.id, other.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.check(404, owner.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
