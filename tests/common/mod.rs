#![allow(dead_code)]

use activity_board::ports::TimeProvider;
use activity_board::types::{Activity, ActivityCatalog};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type SharedCatalog = Arc<Mutex<ActivityCatalog>>;

pub fn seed_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Chess Club",
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    catalog.insert(
        "Programming Class",
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );
    catalog.insert(
        "Gym Class",
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: Vec::new(),
        },
    );
    catalog
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

type Reply = (StatusCode, Json<Value>);

async fn list(State(catalog): State<SharedCatalog>) -> Json<ActivityCatalog> {
    Json(catalog.lock().expect("catalog lock").clone())
}

async fn signup(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Reply {
    let mut catalog = catalog.lock().expect("catalog lock");
    let Some(activity) = catalog.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Activity not found" })),
        );
    };
    if activity.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Student is already signed up for this activity" })),
        );
    }
    activity.participants.push(query.email.clone());
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Signed up {} for {}", query.email, name) })),
    )
}

async fn remove(
    State(catalog): State<SharedCatalog>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Reply {
    let mut catalog = catalog.lock().expect("catalog lock");
    let Some(activity) = catalog.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Activity not found" })),
        );
    };
    let Some(position) = activity.participants.iter().position(|p| *p == query.email) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Participant not found in this activity" })),
        );
    };
    activity.participants.remove(position);
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Removed {} from {}", query.email, name) })),
    )
}

async fn broken_list() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>maintenance</html>")
}

async fn plain_text_delete() -> (StatusCode, &'static str) {
    (StatusCode::OK, "deleted")
}

pub fn stub_app(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/activities", get(list))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/participants", delete(remove))
        .with_state(catalog)
}

/// Serves non-JSON bodies for the list and removal routes.
pub fn broken_app() -> Router {
    Router::new()
        .route("/activities", get(broken_list))
        .route("/activities/{name}/participants", delete(plain_text_delete))
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    addr
}

pub async fn spawn_stub_server() -> (String, SharedCatalog) {
    let catalog = Arc::new(Mutex::new(seed_catalog()));
    let addr = serve(stub_app(Arc::clone(&catalog))).await;
    (format!("http://{addr}"), catalog)
}

/// A base url nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind unused port");
    let addr = listener.local_addr().expect("unused address");
    drop(listener);
    format!("http://{addr}")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTime;

impl TimeProvider for InstantTime {
    type Sleep<'a>
        = std::future::Ready<()>
    where
        Self: 'a;

    fn sleep(&self, _duration: Duration) -> Self::Sleep<'_> {
        std::future::ready(())
    }
}
