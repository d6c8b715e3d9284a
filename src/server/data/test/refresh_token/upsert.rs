use super::*;

/// Tests issuing a second refresh token for the same user.
///
/// Verifies that the upsert replaces the stored token instead of adding a row.
///
/// Expected: Ok with a single row holding the newest token
#[tokio::test]
async fn replaces_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::RefreshToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_refresh_token(db, user.id, "first").await?;

    let repo = RefreshTokenRepository::new(db);
    repo.upsert(user.id, "second".to_string(), Utc::now() + Duration::days(7))
        .await?;

    let stored = repo.find_by_user(user.id).await?;
    assert_eq!(stored.map(|t| t.token), Some("second".to_string()));
    assert_eq!(entity::prelude::RefreshToken::find().count(db).await?, 1);

    Ok(())
}

/// Tests logging out by removing the user's token.
///
/// Expected: Ok with no token left for the user
#[tokio::test]
async fn deletes_token_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::RefreshToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_refresh_token(db, user.id, "token").await?;

    let repo = RefreshTokenRepository::new(db);

    assert_eq!(repo.delete_by_user(user.id).await?, 1);
    assert!(repo.find_by_user(user.id).await?.is_none());

    Ok(())
}
