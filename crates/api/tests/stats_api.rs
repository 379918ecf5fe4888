//! HTTP-level integration tests for the stats and health endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

fn listing(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "price": 100000.0,
        "location": "Sevilla",
        "type": "house",
        "operation": "sale",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_scenario(pool: PgPool) {
    // 3 properties: 2 available, 1 sold; plus 1 inquiry.
    for title in ["A", "B"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/properties", listing(title)).await;
    }
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/properties", listing("C")).await).await;
    let sold_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let mut sold = listing("C");
    sold["status"] = serde_json::json!("sold");
    put_json(app, &format!("/api/properties/{sold_id}"), sold).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/inquiries",
        serde_json::json!({"property_id": sold_id, "client_name": "Ana"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["active"], 2);
    assert_eq!(json["sold"], 1);
    assert_eq!(json["inquiries"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_empty_database(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats").await).await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["active"], 0);
    assert_eq!(json["sold"], 0);
    assert_eq!(json["inquiries"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
