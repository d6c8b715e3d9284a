use super::*;

fn params(username: &str, email: &str, nickname: &str) -> SignUpParams {
    SignUpParams {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        nickname: nickname.to_string(),
        name: "Kim".to_string(),
        birth_date: None,
        gender: None,
    }
}

/// Tests registering a local account.
///
/// Verifies that the password is stored hashed and the account gets the user role.
///
/// Expected: Ok with a hashed password
#[tokio::test]
async fn signs_up_with_hashed_password() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    let user = AuthService::new(db, &jwt)
        .signup(params("traveler", "traveler@example.com", "wanderer"))
        .await?;

    assert_eq!(user.username, "traveler");
    assert!(!user.is_admin());
    let hash = user.password_hash.unwrap();
    assert_ne!(hash, "secret123");
    assert!(hash.starts_with("$argon2"));

    Ok(())
}

/// Tests signing up with a nickname that is taken.
///
/// Expected: Err(Conflict) and no second account
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    factory::user::UserFactory::new(db)
        .nickname("wanderer")
        .build()
        .await?;

    let result = AuthService::new(db, &jwt)
        .signup(params("traveler", "traveler@example.com", "wanderer"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests the availability checks.
///
/// Verifies that the nickname check looks at nicknames, not usernames.
///
/// Expected: Conflict only for values actually in use
#[tokio::test]
async fn checks_availability_per_column() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    factory::user::UserFactory::new(db)
        .username("taken")
        .email("taken@example.com")
        .nickname("busy")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);

    assert!(matches!(
        service.check_username("taken").await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.check_email("taken@example.com").await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.check_nickname("busy").await,
        Err(AppError::Conflict(_))
    ));
    assert!(service.check_nickname("taken").await.is_ok());
    assert!(service.check_username("free").await.is_ok());

    Ok(())
}

/// Tests recovering a username.
///
/// Expected: Ok with username for a match, Err(NotFound) otherwise
#[tokio::test]
async fn finds_username_by_name_and_email() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    factory::user::UserFactory::new(db)
        .username("forgetful")
        .email("forgetful@example.com")
        .name("Lee")
        .build()
        .await?;

    let service = AuthService::new(db, &jwt);

    assert_eq!(
        service
            .find_username("Lee", "forgetful@example.com")
            .await?,
        "forgetful"
    );
    assert!(matches!(
        service.find_username("Park", "forgetful@example.com").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
