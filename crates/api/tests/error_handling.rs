//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use gacha_api::error::AppError;
use gacha_core::error::{CoreError, GachaError, PoolKey, StoreError};
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Generic errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Item",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Item with id 42 not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad field".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad field");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("Admin role required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Roll service errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_range_returns_400() {
    let (status, json) = error_to_response(GachaError::InvalidRange("max < min").into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_RANGE");
    assert_eq!(json["error"], "Invalid range: max < min");
}

#[tokio::test]
async fn overlap_returns_400_naming_bounds() {
    let (status, json) =
        error_to_response(GachaError::Overlap { min: 10, max: 20 }.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "RANGE_OVERLAP");
    assert_eq!(json["error"], "Already an item reachable with values: 10 -> 20");
}

#[tokio::test]
async fn empty_pool_returns_422() {
    let err = GachaError::EmptyPool {
        pool_type: "standard".into(),
    };

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "EMPTY_POOL");
}

#[tokio::test]
async fn missing_lookups_return_404() {
    for err in [
        GachaError::PoolNotFound(PoolKey::Type("standard".into())),
        GachaError::UserNotFound(3),
        GachaError::ItemNotFound("9".into()),
    ] {
        let (status, json) = error_to_response(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn pool_not_found_message_names_the_key() {
    let (_, json) =
        error_to_response(GachaError::PoolNotFound(PoolKey::Type("event".into())).into()).await;
    assert_eq!(json["error"], "Pool with type 'event' not found");
}

#[tokio::test]
async fn opaque_store_error_is_sanitized() {
    let backend = std::io::Error::other("connection reset by 10.0.0.7");
    let err = GachaError::Store(StoreError::backend(backend));

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("10.0.0.7"));
}

#[tokio::test]
async fn sqlx_error_behind_store_is_classified() {
    let err = GachaError::Store(StoreError::backend(sqlx::Error::RowNotFound));

    let (status, _) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
