//! Integration tests for the submission repository.

use premiere_core::submission::NewSubmission;
use premiere_db::SubmissionRepo;
use sqlx::PgPool;

fn new_submission(name: &str, city: &str) -> NewSubmission {
    NewSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        postal_code: "73301".to_string(),
        city: Some(city.to_string()),
        region: Some("TX".to_string()),
        lat: 30.2672,
        lon: -97.7431,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_timestamp(pool: PgPool) {
    let created = SubmissionRepo::create(&pool, &new_submission("Jane", "Austin"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Jane");
    assert_eq!(created.city.as_deref(), Some("Austin"));

    // created_at is server-assigned and recent, not a client value.
    let age = chrono::Utc::now() - created.created_at;
    assert!(age.num_seconds() < 60);
}

#[sqlx::test(migrations = "./migrations")]
async fn ids_are_distinct_across_inserts(pool: PgPool) {
    let a = SubmissionRepo::create(&pool, &new_submission("Jane", "Austin"))
        .await
        .unwrap();
    let b = SubmissionRepo::create(&pool, &new_submission("John", "Dallas"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    let first = SubmissionRepo::create(&pool, &new_submission("First", "Austin"))
        .await
        .unwrap();
    let second = SubmissionRepo::create(&pool, &new_submission("Second", "Dallas"))
        .await
        .unwrap();

    let listed = SubmissionRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);

    // Newest first; equal timestamps fall back to id descending.
    let ids: Vec<_> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn unresolved_place_is_persistable(pool: PgPool) {
    let mut new = new_submission("Jane", "Austin");
    new.city = None;
    new.region = None;

    let created = SubmissionRepo::create(&pool, &new).await.unwrap();
    assert_eq!(created.city, None);
    assert_eq!(created.region, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_all_clears_the_table(pool: PgPool) {
    SubmissionRepo::create(&pool, &new_submission("Jane", "Austin"))
        .await
        .unwrap();
    SubmissionRepo::create(&pool, &new_submission("John", "Dallas"))
        .await
        .unwrap();

    let deleted = SubmissionRepo::delete_all(&pool).await.unwrap();
    assert_eq!(deleted, 2);

    assert!(SubmissionRepo::list(&pool).await.unwrap().is_empty());
    assert_eq!(SubmissionRepo::count(&pool).await.unwrap(), 0);
}
