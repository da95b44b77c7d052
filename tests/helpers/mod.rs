use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use noteboard::model::{Note, NoteDraft, NoteId};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Note server running in-process on an ephemeral loopback port.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct TestServer {
    inner: Arc<Mutex<ServerData>>,
    pub addr: Option<SocketAddr>,
}

#[derive(Default)]
struct ServerData {
    notes: Vec<Note>,
    next_id: NoteId,
    requests: Vec<String>,
}

#[allow(dead_code)]
impl TestServer {
    /// Starts serving `notes` at `/api/notes`.
    ///
    /// `/api/failing` always answers 500 and `/api/garbage` answers 200 with a non-JSON body.
    pub async fn start(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        let mut server = TestServer {
            inner: Arc::new(Mutex::new(ServerData {
                notes,
                next_id,
                requests: Vec::new(),
            })),
            addr: None,
        };

        let app = Router::new()
            .route("/api/notes", get(list_notes).post(create_note))
            .route("/api/notes/:id", put(update_note).delete(delete_note))
            .route(
                "/api/failing",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route("/api/garbage", get(|| async { "<html>not json</html>" }))
            .with_state(server.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        server.addr = Some(listener.local_addr().expect("local addr"));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test server");
        });
        server
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr.expect("server started"), path)
    }

    pub fn notes_url(&self) -> String {
        self.url("/api/notes")
    }

    pub fn notes(&self) -> Vec<Note> {
        self.inner.lock().unwrap().notes.clone()
    }

    /// `"<METHOD> <path>"` for every request the notes routes received.
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn record(&self, request: String) {
        self.inner.lock().unwrap().requests.push(request);
    }
}

async fn list_notes(State(server): State<TestServer>) -> Json<Vec<Note>> {
    server.record("GET /api/notes".into());
    Json(server.notes())
}

async fn create_note(
    State(server): State<TestServer>,
    Json(draft): Json<NoteDraft>,
) -> (StatusCode, Json<Note>) {
    server.record("POST /api/notes".into());
    let mut data = server.inner.lock().unwrap();
    data.next_id += 1;
    let note = Note::new(data.next_id, draft.title, draft.content);
    data.notes.insert(0, note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn update_note(
    State(server): State<TestServer>,
    Path(id): Path<NoteId>,
    Json(draft): Json<NoteDraft>,
) -> Result<Json<Note>, StatusCode> {
    server.record(format!("PUT /api/notes/{}", id));
    let mut data = server.inner.lock().unwrap();
    let note = data
        .notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    note.title = draft.title;
    note.content = draft.content;
    Ok(Json(note.clone()))
}

async fn delete_note(State(server): State<TestServer>, Path(id): Path<NoteId>) -> StatusCode {
    server.record(format!("DELETE /api/notes/{}", id));
    let mut data = server.inner.lock().unwrap();
    let before = data.notes.len();
    data.notes.retain(|n| n.id != id);
    if data.notes.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}
