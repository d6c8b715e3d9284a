use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a request with a token signed by another key.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let foreign = JwtTokenizer::new(
        "some-other-access-secret-of-enough-length",
        "some-other-refresh-secret-of-enough-length",
        Duration::minutes(30),
        Duration::days(7),
    );
    let headers = headers_for(&foreign, &user);
    let jwt = tokenizer();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let user = factory::create_user(db).await?;
    let headers = headers_for(&jwt, &user);
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, user.id),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests an authenticated request without permissions.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn authenticates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let user = factory::create_user(db).await?;
    let headers = headers_for(&jwt, &user);

    let authenticated = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.username, user.username);

    Ok(())
}

/// Tests the admin permission for both roles.
///
/// Expected: Ok for the admin, Err(AuthError::AccessDenied) for a regular user
#[tokio::test]
async fn checks_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = tokenizer();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let admin_headers = headers_for(&jwt, &admin);
    let user_headers = headers_for(&jwt, &user);

    assert!(AuthGuard::new(db, &jwt, &admin_headers)
        .require(&[Permission::Admin])
        .await
        .is_ok());

    match AuthGuard::new(db, &jwt, &user_headers)
        .require(&[Permission::Admin])
        .await
    {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
