//! Integration tests for dice rolling.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_roll_three_d_four_at_both_extremes() {
    let app = common::build_test_app_with_words(vec![0, 0, 0]);
    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "3d4" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 3);

    let app = common::build_test_app_with_words(vec![3, 3, 3]);
    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "3d4" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 12);
}

#[tokio::test]
async fn test_roll_keep_highest_reports_kept_die() {
    let app = common::build_test_app_with_words(vec![1, 2, 0, 3, 0]);

    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "5d4kH" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["notation"], "5d4kh");
    assert_eq!(json["total"], 4);
    let kept: Vec<bool> = json["terms"][0]["dice"]
        .as_array()
        .unwrap()
        .iter()
        .map(|die| die["kept"].as_bool().unwrap())
        .collect();
    assert_eq!(kept, vec![false, false, false, true, false]);
}

#[tokio::test]
async fn test_roll_with_suffix() {
    let app = common::build_test_app_with_words(vec![7]);

    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "1d8+1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 9);
    assert_eq!(json["minimum"], 2);
    assert_eq!(json["maximum"], 9);
}

#[tokio::test]
async fn test_malformed_notation_returns_400_parse_error() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "2d1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "parse_error");
    assert_eq!(
        json["message"],
        "parse error at position 2: dice need at least 2 sides"
    );
}

#[tokio::test]
async fn test_seeded_engine_gives_totals_within_bounds() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/dice/roll",
        &serde_json::json!({ "notation": "2d8 + 1d6 - 2" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let total = json["total"].as_i64().unwrap();
    assert!((1..=20).contains(&total), "total {total}");
}
