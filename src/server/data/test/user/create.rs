use super::*;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        nickname: format!("{}-nick", username),
        password_hash: Some("hash".to_string()),
        name: "Kim".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1995, 3, 14),
        gender: Some("F".to_string()),
        role: Role::User,
        provider: None,
        provider_id: None,
    }
}

/// Tests creating a local account.
///
/// Verifies that the repository stores every field of the account and reads the
/// role back as a regular user.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_local_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("traveler")).await?;

    assert_eq!(user.username, "traveler");
    assert_eq!(user.email, "traveler@example.com");
    assert_eq!(user.nickname, "traveler-nick");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.password_hash.as_deref(), Some("hash"));

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Verifies that inserting a second account with a taken username is rejected by
/// the unique constraint.
///
/// Expected: Err on second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("traveler")).await?;

    let mut duplicate = params("traveler");
    duplicate.email = "other@example.com".to_string();
    duplicate.nickname = "other".to_string();
    let result = repo.create(duplicate).await;

    assert!(result.is_err());

    Ok(())
}
