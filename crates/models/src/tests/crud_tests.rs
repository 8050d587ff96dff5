use anyhow::Result;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::db::{connect, migrate};
use crate::errors::ModelError;
use crate::{review, service, service_provider, user};

/// Connect and migrate, or `None` when no database is configured.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migrate(&db).await?;
    Ok(Some(db))
}

async fn seed_provider(db: &DatabaseConnection) -> Result<(user::Model, service_provider::Model)> {
    let now = Utc::now().into();
    let u = user::insert(db, user::Model {
        user_id: Uuid::new_v4(),
        name: "Test User".into(),
        email: format!("user_{}@example.com", Uuid::new_v4()),
        password_hash: "hashedpassword".into(),
        role: "provider".into(),
        created_at: now,
        updated_at: now,
    })
    .await?;
    let p = service_provider::insert(db, service_provider::Model {
        provider_id: Uuid::new_v4(),
        user_id: u.user_id,
        certification: true,
        bio: Some("Experienced Barber".into()),
        location: Some("Downtown".into()),
        profile_picture: Some("profile.jpg".into()),
        created_at: now,
        updated_at: now,
    })
    .await?;
    Ok((u, p))
}

#[tokio::test]
async fn test_service_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let (u, p) = seed_provider(&db).await?;

    let now = Utc::now().into();
    let created = service::insert(&db, service::Model {
        service_id: Uuid::new_v4(),
        provider_id: p.provider_id,
        name: "Haircut".into(),
        description: Some("Classic cut".into()),
        price: 25.0,
        created_at: now,
        updated_at: now,
    })
    .await?;

    let mut found = service::Entity::find_by_id(created.service_id).one(&db).await?.unwrap();
    assert_eq!(found.name, "Haircut");

    found.price = 30.0;
    found.updated_at = Utc::now().into();
    let saved = service::save(&db, found).await?;
    assert_eq!(saved.price, 30.0);
    assert_eq!(saved.name, "Haircut");

    service::Entity::delete_by_id(created.service_id).exec(&db).await?;
    assert!(service::Entity::find_by_id(created.service_id).one(&db).await?.is_none());

    // cleanup cascades to the provider
    user::Entity::delete_by_id(u.user_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_reviews_filtered_by_provider() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let (u, p) = seed_provider(&db).await?;

    let now = Utc::now().into();
    let r = review::insert(&db, review::Model {
        review_id: Uuid::new_v4(),
        provider_id: p.provider_id,
        user_id: Some(u.user_id),
        rating: 4.5,
        comment: Some("Great service!".into()),
        created_at: now,
        updated_at: now,
    })
    .await?;

    let mine = review::find_all(&db, Some(p.provider_id)).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].review_id, r.review_id);

    user::Entity::delete_by_id(u.user_id).exec(&db).await?;
    assert!(review::Entity::find_by_id(r.review_id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let (u, _p) = seed_provider(&db).await?;

    let now = Utc::now().into();
    let dup = user::insert(&db, user::Model {
        user_id: Uuid::new_v4(),
        name: "Other".into(),
        email: u.email.clone(),
        password_hash: "x".into(),
        role: "customer".into(),
        created_at: now,
        updated_at: now,
    })
    .await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));

    user::Entity::delete_by_id(u.user_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_save_missing_row_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let now = Utc::now().into();
    let ghost = review::Model {
        review_id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        user_id: None,
        rating: 3.0,
        comment: None,
        created_at: now,
        updated_at: now,
    };
    assert!(matches!(review::save(&db, ghost).await, Err(ModelError::NotFound(_))));
    Ok(())
}
