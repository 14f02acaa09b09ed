use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// What the server saw of an `/echo` request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub method: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Option<serde_json::Value>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Note>>>;

/// Routes mounted under `/api`, so clients must keep the base path.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/point", get(point))
        .route("/wrong-shape", get(wrong_shape))
        .route("/redirect", get(redirect))
        .route("/echo", get(echo).post(echo))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note))
        .route("/status/{code}", get(status).post(status))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn point() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "x": 1 }))
}

async fn wrong_shape() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "y": "oops" }))
}

async fn redirect() -> Redirect {
    Redirect::to("/api/point")
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn echo(method: Method, RawQuery(query): RawQuery, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let body = if body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())),
        )
    };
    Json(Echo {
        method: method.to_string(),
        query,
        authorization: header_value(&headers, header::AUTHORIZATION),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        accept: header_value(&headers, header::ACCEPT),
        body,
    })
}

async fn list_notes(State(db): State<Db>) -> Json<Vec<Note>> {
    let notes = db.read().await;
    Json(notes.values().cloned().collect())
}

async fn create_note(State(db): State<Db>, Json(input): Json<CreateNote>) -> Json<Note> {
    let note = Note {
        id: Uuid::new_v4(),
        title: input.title,
        tags: input.tags,
    };
    tracing::debug!(id = %note.id, "note created");
    db.write().await.insert(note.id, note.clone());
    Json(note)
}

async fn get_note(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Note>, StatusCode> {
    let notes = db.read().await;
    notes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")),
        Err(_) => (StatusCode::BAD_REQUEST, format!("invalid status {code}")),
    }
}
