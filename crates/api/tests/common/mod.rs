#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use medialib_core::locale::Locale;
use medialib_core::recording::{RecordingDraft, Track};
use medialib_core::reference::{CreateArtist, CreateLabel};
use medialib_core::store::{CatalogStore, MemoryCatalogStore};
use medialib_core::types::DbId;
use tower::ServiceExt;

use medialib_api::config::ServerConfig;
use medialib_api::router::build_app_router;
use medialib_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and English messages.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        locale: Locale::En,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryCatalogStore>, locale: Locale) -> Router {
    let config = ServerConfig {
        locale,
        ..test_config()
    };
    let state = AppState {
        catalog: store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A store holding two artists, two labels and one recording
/// ("Are You Experienced", three tracks). Returns the store and recording id.
pub async fn seeded_store() -> (Arc<MemoryCatalogStore>, DbId) {
    let store = Arc::new(MemoryCatalogStore::new());

    let beatles = store
        .add_artist(&CreateArtist {
            name: "The Beatles".into(),
        })
        .await
        .unwrap();
    let hendrix = store
        .add_artist(&CreateArtist {
            name: "Jimi Hendrix".into(),
        })
        .await
        .unwrap();
    let track_record = store
        .add_label(&CreateLabel {
            name: "Track Record".into(),
        })
        .await
        .unwrap();
    store
        .add_label(&CreateLabel {
            name: "Parlophone".into(),
        })
        .await
        .unwrap();
    assert_eq!(beatles.id, 1);

    let id = store
        .add_recording(&RecordingDraft {
            title: "Are You Experienced".into(),
            release_date: NaiveDate::from_ymd_opt(1967, 5, 12),
            artist: hendrix,
            label: track_record,
            tracks: vec![
                Track::new("Foxy Lady", 199),
                Track::new("Manic Depression", 210),
                Track::new("Red House", 224),
            ],
        })
        .await
        .unwrap();

    (store, id)
}

/// The Sgt. Pepper submission: artist 1 (The Beatles), label 2 (Parlophone).
pub fn sgt_peppers_json() -> serde_json::Value {
    serde_json::json!({
        "title": "Sgt. Peppers Lonely Hearts Club Band",
        "release_date": "1967-05-26",
        "track_titles": [
            "Sgt. Pepper's Lonely Hearts Club Band",
            "With a Little Help from My Friends",
            "Lucy in the Sky with Diamonds"
        ],
        "durations": [122, 163, 208],
        "selected_artist_id": 1,
        "selected_label_id": 2
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
