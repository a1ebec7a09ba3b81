mod common;

use hbnb::domain::entities::{NewUser, UserPatch};
use hbnb::domain::repositories::UserRepository;
use hbnb::error::AppError;
use hbnb::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$fake".to_string(),
        is_admin: false,
    }
}

#[sqlx::test]
async fn test_create_user_lowercases_email(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.create(new_user("Jane@Example.COM")).await.unwrap();

    assert_eq!(user.email, "jane@example.com");
    assert!(!user.is_admin);
}

#[sqlx::test]
async fn test_create_user_duplicate_email_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("jane@example.com")).await.unwrap();
    let result = repo.create(new_user("JANE@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_by_email_case_insensitive(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.create(new_user("jane@example.com")).await.unwrap();

    let found = repo.find_by_email("JANE@EXAMPLE.COM").await.unwrap();

    assert_eq!(found.map(|u| u.id), Some(created.id));
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_user_partial(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    let created = repo.create(new_user("jane@example.com")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UserPatch {
                last_name: Some("Smith".to_string()),
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.last_name, "Smith");
    assert!(updated.is_admin);
    assert_eq!(updated.password_hash, created.password_hash);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_user_missing(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.update(Uuid::new_v4(), UserPatch::default()).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_list_and_count_users(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("a@example.com")).await.unwrap();
    repo.create(new_user("b@example.com")).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}
