use super::*;

/// Tests replacing a password hash.
///
/// Expected: Ok with only the password column changed
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password("old-hash")
        .build()
        .await?;

    UserRepository::new(db)
        .update_password(user.id, "new-hash".to_string())
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password.as_deref(), Some("new-hash"));
    assert_eq!(stored.nickname, user.nickname);

    Ok(())
}
