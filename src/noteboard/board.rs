//! # Board Dispatch
//!
//! Maps user interactions to view-state transitions and server requests.
//!
//! | Event            | Precondition    | Effect                                                        |
//! |------------------|-----------------|---------------------------------------------------------------|
//! | `Mount`          |                 | list, then replace the whole list                             |
//! | `ClickNote`      |                 | select the note, copy it into the draft                       |
//! | `EditTitle/...`  |                 | change the draft in place                                     |
//! | `Submit`         | nothing selected| create, then prepend the server's note and clear the draft    |
//! | `Submit`         | note selected   | update, then replace by the selected id and clear the draft   |
//! | `Cancel`         | note selected   | clear the draft                                               |
//! | `ClickDelete`    |                 | delete, then remove by id (never selects the card)            |
//!
//! ## Two Phases
//!
//! [`NoteBoard::handle`] applies the local part of an event and returns the [`Request`] to
//! issue, with the target id and draft captured at that moment. [`Request::send`] performs it
//! and [`NoteBoard::apply`] merges the [`Response`]. Requests can therefore overlap, and
//! responses are merged in the order they are applied: the last response wins.
//!
//! [`NoteBoard::dispatch`] runs all three steps for a single event.
//!
//! A failed request is logged at `warn` and leaves the state exactly as it was.

use crate::error::NoteboardError;
use crate::model::{Note, NoteDraft, NoteId};
use crate::state::ViewState;
use crate::sync::SyncClient;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Mount,
    ClickNote(NoteId),
    EditTitle(String),
    EditContent(String),
    Submit,
    Cancel,
    ClickDelete(NoteId),
}

/// A server call captured at event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Create(NoteDraft),
    Update { id: NoteId, draft: NoteDraft },
    Delete { id: NoteId },
}

#[derive(Debug)]
pub enum Response {
    Listed(Vec<Note>),
    Created(Note),
    Updated { id: NoteId, note: Note },
    Deleted { id: NoteId },
    Failed {
        request: Request,
        error: NoteboardError,
    },
}

/// What an event or response did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do for this event in the current state
    Ignored,
    Selected(NoteId),
    DraftEdited,
    Cancelled,
    /// Submit refused locally because a required field is empty
    Rejected(&'static str),
    /// A request was issued and its response is still to be applied
    Pending,
    Listed(usize),
    Created(NoteId),
    Updated(NoteId),
    Deleted(NoteId),
    /// The request failed; the state is unchanged
    Failed,
}

impl Request {
    pub async fn send<S: SyncClient + ?Sized>(self, client: &S) -> Response {
        debug!(request = ?self, "issuing request");
        let result = match &self {
            Request::List => client.list_notes().await.map(Response::Listed),
            Request::Create(draft) => client.create_note(draft).await.map(Response::Created),
            Request::Update { id, draft } => client
                .update_note(*id, draft)
                .await
                .map(|note| Response::Updated { id: *id, note }),
            Request::Delete { id } => client
                .delete_note(*id)
                .await
                .map(|()| Response::Deleted { id: *id }),
        };
        result.unwrap_or_else(|error| Response::Failed {
            request: self,
            error,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoteBoard {
    state: ViewState,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies the local part of `event`. Returns the request to issue, if any.
    pub fn handle(&mut self, event: BoardEvent) -> (Outcome, Option<Request>) {
        match event {
            BoardEvent::Mount => (Outcome::Pending, Some(Request::List)),
            BoardEvent::ClickNote(id) => match self.state.find(id).cloned() {
                Some(note) => {
                    self.state.select_note(&note);
                    (Outcome::Selected(id), None)
                }
                None => (Outcome::Ignored, None),
            },
            BoardEvent::EditTitle(title) => {
                self.state.set_draft_title(title);
                (Outcome::DraftEdited, None)
            }
            BoardEvent::EditContent(content) => {
                self.state.set_draft_content(content);
                (Outcome::DraftEdited, None)
            }
            BoardEvent::Submit => {
                let draft = self.state.draft().clone();
                if let Some(field) = draft.missing_field() {
                    return (Outcome::Rejected(field), None);
                }
                let request = match self.state.selected() {
                    Some(selected) => Request::Update {
                        id: selected.id,
                        draft,
                    },
                    None => Request::Create(draft),
                };
                (Outcome::Pending, Some(request))
            }
            BoardEvent::Cancel => {
                if self.state.is_editing() {
                    self.state.clear_draft();
                    (Outcome::Cancelled, None)
                } else {
                    (Outcome::Ignored, None)
                }
            }
            BoardEvent::ClickDelete(id) => (Outcome::Pending, Some(Request::Delete { id })),
        }
    }

    /// Merges a server response into the state.
    pub fn apply(&mut self, response: Response) -> Outcome {
        match response {
            Response::Listed(notes) => {
                self.state.replace_all(notes);
                Outcome::Listed(self.state.notes().len())
            }
            Response::Created(note) => {
                let id = note.id;
                self.state.prepend(note);
                self.state.clear_draft();
                Outcome::Created(id)
            }
            Response::Updated { id, note } => {
                self.state.replace_by_id(id, note);
                self.state.clear_draft();
                Outcome::Updated(id)
            }
            Response::Deleted { id } => {
                self.state.remove_by_id(id);
                if self.state.selected().is_some_and(|n| n.id == id) {
                    self.state.clear_draft();
                }
                Outcome::Deleted(id)
            }
            Response::Failed { request, error } => {
                warn!(?request, %error, "request failed, board left unchanged");
                Outcome::Failed
            }
        }
    }

    /// Handles `event`, performs its request if any, and merges the response.
    pub async fn dispatch<S: SyncClient + ?Sized>(
        &mut self,
        client: &S,
        event: BoardEvent,
    ) -> Outcome {
        match self.handle(event) {
            (_, Some(request)) => {
                let response = request.send(client).await;
                self.apply(response)
            }
            (outcome, None) => outcome,
        }
    }
}
