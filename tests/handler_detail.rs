mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chara_insight::domain::entities::TrendSample;
use chara_insight::web::handlers::character_handler;
use chrono::{Days, NaiveDate};
use common::{FixtureCharacterRepo, FixtureTrendRepo, character, create_test_state, sample};

fn detail_app(state: chara_insight::AppState) -> Router {
    Router::new()
        .route("/characters/{id}", get(character_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_detail_renders_header_and_chart() {
    let state = create_test_state(
        FixtureCharacterRepo {
            characters: vec![character(1, "アリス", "ワンダーランド")],
            fail: false,
        },
        FixtureTrendRepo {
            samples: vec![
                sample(1, "2025-09-01", 40, 1200),
                sample(1, "2025-09-02", 55, 1500),
                sample(1, "2025-09-03", 70, 2100),
            ],
            fail: false,
        },
    );

    let server = TestServer::new(detail_app(state)).unwrap();
    let response = server.get("/characters/1").await;

    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("アリス"));
    assert!(body.contains("ワンダーランド"));
    assert!(body.contains("trend-chart"));
    // Chronological labels and both series are embedded for the chart.
    assert!(body.contains("2025-09-01"));
    assert!(body.contains("2025-09-03"));
    assert!(body.contains("google_index"));
    assert!(body.contains("x_post_count"));
}

#[tokio::test]
async fn test_detail_unknown_id_renders_not_found() {
    let state = create_test_state(
        FixtureCharacterRepo {
            characters: vec![character(1, "アリス", "ワンダーランド")],
            fail: false,
        },
        FixtureTrendRepo {
            samples: vec![],
            fail: false,
        },
    );

    let server = TestServer::new(detail_app(state)).unwrap();
    let response = server.get("/characters/999").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(body.contains("キャラクターが見つかりません"));
    assert!(!body.contains("trend-chart"));
}

#[tokio::test]
async fn test_detail_history_keeps_earliest_thirty() {
    let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    let samples: Vec<TrendSample> = (0..35u64)
        .map(|i| {
            let date = start.checked_add_days(Days::new(i)).unwrap();
            TrendSample {
                id: i as i64,
                character_id: 1,
                date,
                google_index: 50,
                x_post_count: 100,
            }
        })
        .collect();

    let state = create_test_state(
        FixtureCharacterRepo {
            characters: vec![character(1, "アリス", "ワンダーランド")],
            fail: false,
        },
        FixtureTrendRepo {
            samples,
            fail: false,
        },
    );

    let server = TestServer::new(detail_app(state)).unwrap();
    let response = server.get("/characters/1").await;

    response.assert_status_ok();
    let body = response.text();

    // 35 stored rows, ascending with a 30-row cap: the earliest 30 survive.
    assert!(body.contains("2025-08-01"));
    assert!(body.contains("2025-08-30"));
    assert!(!body.contains("2025-08-31"));
    assert!(!body.contains("2025-09-04"));
}

#[tokio::test]
async fn test_detail_store_failure_renders_not_found() {
    let state = create_test_state(
        FixtureCharacterRepo {
            characters: vec![],
            fail: true,
        },
        FixtureTrendRepo {
            samples: vec![],
            fail: true,
        },
    );

    let server = TestServer::new(detail_app(state)).unwrap();
    let response = server.get("/characters/1").await;

    response.assert_status_not_found();
    assert!(response.text().contains("キャラクターが見つかりません"));
}

#[tokio::test]
async fn test_detail_empty_history_still_renders_chart_page() {
    let state = create_test_state(
        FixtureCharacterRepo {
            characters: vec![character(1, "アリス", "ワンダーランド")],
            fail: false,
        },
        FixtureTrendRepo {
            samples: vec![],
            fail: false,
        },
    );

    let server = TestServer::new(detail_app(state)).unwrap();
    let response = server.get("/characters/1").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("trend-chart"));
    assert!(body.contains("\"labels\":[]"));
}
