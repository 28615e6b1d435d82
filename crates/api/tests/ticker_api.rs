//! Integration tests for the `/paragliding/api/ticker` resource.

mod common;

use axum::http::StatusCode;
use common::{expect_status, flight_date, get, seed_track};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn seed_three(pool: &PgPool) {
    seed_track(pool, "http://example.org/a.igc", flight_date(2018, 4, 25)).await;
    seed_track(pool, "http://example.org/b.igc", flight_date(2018, 4, 26)).await;
    seed_track(pool, "http://example.org/c.igc", flight_date(2019, 4, 25)).await;
}

// ---------------------------------------------------------------------------
// /ticker/latest
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_is_null_on_empty_store(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker/latest").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["latest"], Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_is_newest_flight_date(pool: PgPool) {
    seed_three(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker/latest").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["latest"], "2019-04-25T00:00:00Z");
}

// ---------------------------------------------------------------------------
// /ticker (no cursor)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn window_without_cursor_pages_from_oldest(pool: PgPool) {
    seed_three(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["latest"], "2019-04-25T00:00:00Z");
    assert_eq!(body["data"]["oldest"], "2018-04-25T00:00:00Z");
    assert_eq!(body["data"]["oldest_newer"], "2018-04-25T00:00:00Z");
    assert_eq!(body["data"]["ids"], json!([1, 2, 3]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn window_respects_limit_parameter(pool: PgPool) {
    seed_three(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker?limit=1").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["ids"], json!([1]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn limit_zero_returns_timestamps_only(pool: PgPool) {
    seed_three(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker?limit=0").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["latest"], "2019-04-25T00:00:00Z");
    assert_eq!(body["data"]["ids"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn window_on_empty_store_is_all_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["latest"], Value::Null);
    assert_eq!(body["data"]["oldest"], Value::Null);
    assert_eq!(body["data"]["oldest_newer"], Value::Null);
    assert_eq!(body["data"]["ids"], json!([]));
}

// ---------------------------------------------------------------------------
// /ticker/{timestamp}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cursor_window_skips_already_seen_tracks(pool: PgPool) {
    seed_three(&pool).await;

    // Cursor at the first flight date: only the two newer tracks remain.
    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker/25.04.2018%2000:00:00.000").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["oldest_newer"], "2018-04-26T00:00:00Z");
    assert_eq!(body["data"]["ids"], json!([2, 3]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cursor_past_everything_yields_empty_page(pool: PgPool) {
    seed_three(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker/01.01.2020%2012:34:30.314").await;

    let body = expect_status(response, StatusCode::OK).await;
    assert_eq!(body["data"]["oldest_newer"], Value::Null);
    assert_eq!(body["data"]["ids"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unparseable_cursor_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/paragliding/api/ticker/yesterday").await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "MALFORMED_INPUT");
}
