use super::*;

/// Tests exchanging the stored refresh token for a new access token.
///
/// Expected: Ok with an access token for the same user
#[tokio::test]
async fn issues_access_token_for_stored_refresh_token() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    let user = create_user_with_password(db, "traveler").await?;
    let service = AuthService::new(db, &jwt);
    let login = service.login("traveler", "secret123").await?;

    let access = service.refresh(&login.refresh_token).await?;

    assert_eq!(jwt.parse_access_token(&access.token)?, user.id);

    Ok(())
}

/// Tests refreshing after logout.
///
/// Verifies that a correctly signed token no longer stored server side is refused.
///
/// Expected: Err(RefreshTokenMismatch)
#[tokio::test]
async fn rejects_revoked_refresh_token() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    create_user_with_password(db, "traveler").await?;
    let service = AuthService::new(db, &jwt);
    let login = service.login("traveler", "secret123").await?;
    service.logout(Some(&login.access_token)).await?;

    let result = service.refresh(&login.refresh_token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RefreshTokenMismatch(_)))
    ));

    Ok(())
}

/// Tests using an access token as a refresh token.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_access_token_as_refresh_token() -> Result<(), AppError> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = test_tokenizer();

    create_user_with_password(db, "traveler").await?;
    let service = AuthService::new(db, &jwt);
    let login = service.login("traveler", "secret123").await?;

    let result = service.refresh(&login.access_token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
