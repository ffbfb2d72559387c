// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plan API tests: save semantics, cycle resize, today, materialization.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use trakker::store::RecordStore;
use trakker::time_utils::local_today;

mod common;

fn put_plan(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/api/plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Day payloads for an all-rest cycle of the given length.
fn rest_days(n: usize) -> Vec<serde_json::Value> {
    (0..n)
        .map(|i| {
            json!({
                "day_index": i,
                "day_type": "rest",
                "label": format!("Day {}", i + 1),
                "exercises": []
            })
        })
        .collect()
}

#[tokio::test]
async fn test_save_plan_defaults_name_and_anchors_today() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(put_plan(json!({
            "name": "   ",
            "period_days": 7,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = state.store.get_active_plan().unwrap();
    assert_eq!(plan.name, "My Program");
    assert_eq!(plan.period_days, 7);
    assert_eq!(plan.start_date, local_today());
}

#[tokio::test]
async fn test_get_plan_is_null_without_one() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(get("/api/plan")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::read_json(response).await.is_null());
}

#[tokio::test]
async fn test_resave_preserves_id_and_start_date() {
    let (app, state) = common::create_test_app();

    app.clone()
        .oneshot(put_plan(json!({
            "name": "PPL",
            "period_days": 7,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    let first = state.store.get_active_plan().unwrap();

    let response = app
        .oneshot(put_plan(json!({
            "name": "PPL v2",
            "period_days": 7,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let second = state.store.get_active_plan().unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.start_date, first.start_date);
    assert_eq!(second.name, "PPL v2");
}

#[tokio::test]
async fn test_growing_the_cycle_appends_rest_days() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(put_plan(json!({
            "name": "Long Cycle",
            "period_days": 10,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = state.store.get_active_plan().unwrap();
    assert_eq!(plan.period_days, 10);
    assert_eq!(plan.days.len(), 10);
    assert_eq!(plan.days[7].day_index, 7);
    assert_eq!(plan.days[9].label, "Day 10");
    assert!(plan.validate().is_ok());
}

#[tokio::test]
async fn test_shrinking_the_cycle_truncates_trailing_days() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(put_plan(json!({
            "name": "Short Cycle",
            "period_days": 3,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = state.store.get_active_plan().unwrap();
    assert_eq!(plan.period_days, 3);
    assert_eq!(plan.days.len(), 3);
    assert_eq!(plan.days.last().unwrap().day_index, 2);
}

#[tokio::test]
async fn test_save_rejects_zero_period() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(put_plan(json!({
            "name": "Bad",
            "period_days": 0,
            "days": []
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_rejects_shuffled_day_indices() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(put_plan(json!({
            "name": "Bad",
            "period_days": 2,
            "days": [
                {"day_index": 1, "day_type": "rest", "label": "Day 2", "exercises": []},
                {"day_index": 0, "day_type": "rest", "label": "Day 1", "exercises": []}
            ]
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clear_plan() {
    let (app, state) = common::create_test_app();

    app.clone()
        .oneshot(put_plan(json!({
            "name": "PPL",
            "period_days": 7,
            "days": rest_days(7)
        })))
        .await
        .unwrap();
    assert!(state.store.get_active_plan().is_some());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/plan")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.store.get_active_plan().is_none());
}

#[tokio::test]
async fn test_today_without_plan_is_not_found() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(get("/api/plan/today")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_today_is_day_zero_on_the_anchor_date() {
    let (app, _state) = common::create_test_app();

    // Saving with no prior plan anchors the cycle at today.
    app.clone()
        .oneshot(put_plan(json!({
            "name": "PPL",
            "period_days": 7,
            "days": rest_days(7)
        })))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/plan/today")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let today = common::read_json(response).await;
    assert_eq!(today["day_index"], 0);
    assert_eq!(today["day"]["label"], "Day 1");
}

#[tokio::test]
async fn test_materialize_refuses_rest_days() {
    let (app, _state) = common::create_test_app();

    app.clone()
        .oneshot(put_plan(json!({
            "name": "Lazy",
            "period_days": 1,
            "days": rest_days(1)
        })))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/plan/today/materialize")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_materialize_merges_history_with_defaults() {
    let (app, state) = common::create_test_app();

    // Today (day 0) is a push day with one three-set template.
    app.clone()
        .oneshot(put_plan(json!({
            "name": "PPL",
            "period_days": 2,
            "days": [
                {
                    "day_index": 0,
                    "day_type": "push",
                    "label": "Push",
                    "exercises": [
                        {"name": "Bench Press", "default_sets": 3, "default_reps": 8}
                    ]
                },
                {"day_index": 1, "day_type": "rest", "label": "Day 2", "exercises": []}
            ]
        })))
        .await
        .unwrap();

    // Two historical sets: the third draft set must fall back.
    state
        .store
        .upsert_session(common::session_on_day(
            "Last Push",
            1,
            vec![common::exercise("bench press", &[(5, 80.0), (3, 82.5)])],
        ))
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/plan/today/materialize")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let draft = common::read_json(response).await;
    assert_eq!(draft["name"], "Push");
    let sets = draft["exercises"][0]["sets"].as_array().unwrap();
    assert_eq!(sets.len(), 3);
    assert_eq!((sets[0]["reps"].as_u64(), sets[0]["weight"].as_f64()), (Some(5), Some(80.0)));
    assert_eq!((sets[1]["reps"].as_u64(), sets[1]["weight"].as_f64()), (Some(3), Some(82.5)));
    assert_eq!((sets[2]["reps"].as_u64(), sets[2]["weight"].as_f64()), (Some(8), Some(0.0)));
}
