use super::*;

/// Tests logging in with the right password.
///
/// Verifies that an access token is returned and the refresh token is persisted for
/// the user.
///
/// Expected: Ok with non-empty tokens and a stored refresh token
#[tokio::test]
async fn issues_tokens_for_valid_credentials() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    let user = create_user_with_password(db, "traveler").await?;

    let result = AuthService::new(db, &jwt)
        .login("traveler", "secret123")
        .await?;

    assert!(!result.access_token.is_empty());
    assert_eq!(jwt.parse_access_token(&result.access_token)?, user.id);

    let stored = entity::prelude::RefreshToken::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, user.id);
    assert_eq!(stored[0].token, result.refresh_token);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials) and no refresh token stored
#[tokio::test]
async fn rejects_wrong_password_without_issuing_tokens() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    create_user_with_password(db, "traveler").await?;

    let result = AuthService::new(db, &jwt).login("traveler", "wrong").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert_eq!(entity::prelude::RefreshToken::find().count(db).await?, 0);

    Ok(())
}

/// Tests logging in with an unknown username.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    let result = AuthService::new(db, &jwt).login("ghost", "secret123").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a second login replaces the stored refresh token.
///
/// Expected: Ok with one row holding the latest token
#[tokio::test]
async fn second_login_replaces_refresh_token() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    create_user_with_password(db, "traveler").await?;

    let service = AuthService::new(db, &jwt);
    service.login("traveler", "secret123").await?;
    let second = service.login("traveler", "secret123").await?;

    let stored = entity::prelude::RefreshToken::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].token, second.refresh_token);

    Ok(())
}
