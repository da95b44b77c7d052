use super::SyncClient;
use crate::error::{NoteboardError, Result};
use crate::model::{Note, NoteDraft, NoteId};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// A call received by [`InMemorySync`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCall {
    List,
    Create(NoteDraft),
    Update(NoteId, NoteDraft),
    Delete(NoteId),
}

#[derive(Debug, Default)]
struct ServerState {
    notes: Vec<Note>,
    next_id: NoteId,
    failing: bool,
    calls: Vec<SyncCall>,
}

/// In-memory note server for testing and development.
/// Does NOT persist data.
///
/// New notes are stored first, so a list after a create matches what the board shows.
#[derive(Debug, Default)]
pub struct InMemorySync {
    state: Mutex<ServerState>,
}

impl InMemorySync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(ServerState {
                notes,
                next_id,
                ..ServerState::default()
            }),
        }
    }

    /// While failing, every call is recorded and then rejected.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ServerState> {
        // a panicking test thread must not hide the server from the rest of the test
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn receive(&self, call: SyncCall) -> Result<MutexGuard<'_, ServerState>> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing {
            return Err(NoteboardError::Unavailable(
                "in-memory server is failing".to_string(),
            ));
        }
        Ok(state)
    }
}

#[async_trait]
impl SyncClient for InMemorySync {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let state = self.receive(SyncCall::List)?;
        Ok(state.notes.clone())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        let mut state = self.receive(SyncCall::Create(draft.clone()))?;
        state.next_id += 1;
        let note = Note::new(state.next_id, draft.title.clone(), draft.content.clone());
        state.notes.insert(0, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note> {
        let mut state = self.receive(SyncCall::Update(id, draft.clone()))?;
        let note = state
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NoteboardError::NoteNotFound(id))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        let mut state = self.receive(SyncCall::Delete(id))?;
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(NoteboardError::NoteNotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ServerFixture {
        notes: Vec<Note>,
    }

    impl Default for ServerFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ServerFixture {
        pub fn new() -> Self {
            Self { notes: Vec::new() }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            let start = self.notes.len() as NoteId;
            for i in 1..=count as NoteId {
                let id = start + i;
                self.notes.push(Note::new(
                    id,
                    format!("Test Note {}", id),
                    format!("Content for note {}", id),
                ));
            }
            self
        }

        pub fn with_note(mut self, id: NoteId, title: &str, content: &str) -> Self {
            self.notes.push(Note::new(id, title, content));
            self
        }

        pub fn build(self) -> InMemorySync {
            InMemorySync::with_notes(self.notes)
        }
    }
}
