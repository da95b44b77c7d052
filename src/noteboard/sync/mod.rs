//! # Sync Layer
//!
//! This module defines the network abstraction for the board. The [`SyncClient`] trait
//! allows the board to talk to different note servers.
//!
//! ## Implementations
//!
//! - [`http::HttpSyncClient`]: Production client for a REST-style JSON endpoint
//!   - `GET <base>` lists, `POST <base>` creates
//!   - `PUT <base>/<id>` updates, `DELETE <base>/<id>` deletes
//!
//! - [`memory::InMemorySync`]: In-memory fake server for testing
//!   - Assigns ids like a real server would
//!   - Records every call and can be switched into a failing mode
//!
//! ## Failure Model
//!
//! Every operation returns a [`Result`]. Network failure, a non-success status and a
//! malformed body all surface as errors for which
//! [`NoteboardError::is_request_failure`](crate::error::NoteboardError::is_request_failure)
//! holds. Nothing is retried and no timeout is applied here.

use crate::error::Result;
use crate::model::{Note, NoteDraft, NoteId};
use async_trait::async_trait;

pub mod http;
pub mod memory;

/// Abstract interface to the note server.
#[async_trait]
pub trait SyncClient: Send + Sync {
    /// Fetch every note, in server order
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Create a note; the server assigns the id
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note>;

    /// Replace the title and content of note `id`
    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note>;

    /// Delete note `id`; any response body is ignored
    async fn delete_note(&self, id: NoteId) -> Result<()>;
}
