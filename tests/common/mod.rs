#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use url_shortener_client::api::dto::shorten::{CreateShortUrlRequest, ShortenedUrlData};
use url_shortener_client::api::dto::stats::StatisticsData;
use url_shortener_client::api::dto::{DataEnvelope, ErrorBody};
use url_shortener_client::config::Config;
use url_shortener_client::error::{ID_RESERVED, NOT_FOUND};
use url_shortener_client::state::AppState;

/// Original URL the fake service answers with a 500 and a non-recognized message.
pub const FAILING_URL: &str = "https://fail.example.com/";

#[derive(Debug, Clone)]
pub struct StoredLink {
    pub original_url: String,
    pub is_custom: bool,
    pub created_at: String,
    pub visit_count: u64,
}

/// In-memory stand-in for the shortening service.
#[derive(Default)]
pub struct FakeApi {
    pub base_url: String,
    links: Mutex<HashMap<String, StoredLink>>,
    requests: AtomicUsize,
    generated: AtomicUsize,
}

impl FakeApi {
    pub fn insert(&self, path: &str, original_url: &str, visit_count: u64) {
        self.links.lock().unwrap().insert(
            path.to_string(),
            StoredLink {
                original_url: original_url.to_string(),
                is_custom: true,
                created_at: "2024-05-01T10:20:30Z".to_string(),
                visit_count,
            },
        );
    }

    pub fn get(&self, path: &str) -> Option<StoredLink> {
        self.links.lock().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn short_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

async fn create_link(
    State(api): State<Arc<FakeApi>>,
    Json(body): Json<CreateShortUrlRequest>,
) -> Response {
    api.requests.fetch_add(1, Ordering::SeqCst);

    if body.original_url == FAILING_URL {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "database-down");
    }

    let mut links = api.links.lock().unwrap();

    let (path, is_custom) = match body.custom_url_path {
        Some(path) if links.contains_key(&path) => {
            return error_response(StatusCode::CONFLICT, ID_RESERVED);
        }
        Some(path) => (path, true),
        None => {
            let n = api.generated.fetch_add(1, Ordering::SeqCst);
            (format!("gen{n:05}"), false)
        }
    };

    links.insert(
        path.clone(),
        StoredLink {
            original_url: body.original_url,
            is_custom,
            created_at: chrono::Utc::now().to_rfc3339(),
            visit_count: 0,
        },
    );

    let data = ShortenedUrlData {
        shortened_url: api.short_url(&path),
    };
    (StatusCode::CREATED, Json(DataEnvelope { data })).into_response()
}

async fn link_statistics(State(api): State<Arc<FakeApi>>, Path(path): Path<String>) -> Response {
    api.requests.fetch_add(1, Ordering::SeqCst);

    let Some(link) = api.get(&path) else {
        return error_response(StatusCode::NOT_FOUND, NOT_FOUND);
    };

    let data = StatisticsData {
        created_at: link.created_at,
        is_custom: link.is_custom,
        original_url: link.original_url,
        short_url: api.short_url(&path),
        visit_count: link.visit_count,
    };
    Json(DataEnvelope { data }).into_response()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Starts the fake shortening service.
pub async fn spawn_fake_api() -> Arc<FakeApi> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let api = Arc::new(FakeApi {
        base_url: format!("http://{addr}"),
        ..Default::default()
    });

    let router = Router::new()
        .route("/api/urls", post(create_link))
        .route("/api/urls/{path}/statistics", get(link_statistics))
        .with_state(api.clone());

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    api
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        http_timeout_seconds: 5,
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(base_url: &str) -> AppState {
    AppState::from_config(&test_config(base_url)).unwrap()
}
