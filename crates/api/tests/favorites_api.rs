//! HTTP-level integration tests for the favorites endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json};
use sqlx::PgPool;

async fn create_property(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(
        app,
        "/api/properties",
        serde_json::json!({
            "title": title,
            "price": 150000.0,
            "location": "Valencia",
            "type": "apartment",
            "operation": "sale",
        }),
    )
    .await)
    .await;
    created["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_and_list_favorites(pool: PgPool) {
    let id = create_property(&pool, "Atico").await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/favorites").await).await;
    let favorites = json.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["title"], "Atico");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_double_add_is_idempotent(pool: PgPool) {
    let id = create_property(&pool, "Atico").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post(app, &format!("/api/favorites/{id}")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/favorites").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_non_favorite_succeeds(pool: PgPool) {
    let id = create_property(&pool, "Nunca").await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_clears_favorite(pool: PgPool) {
    let id = create_property(&pool, "Atico").await;

    let app = common::build_test_app(pool.clone());
    post(app, &format!("/api/favorites/{id}")).await;
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/favorites/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/favorites").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_favoriting_missing_property_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, "/api/favorites/999999").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
