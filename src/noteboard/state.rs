//! # View State
//!
//! The board's local state: the ordered note list, the form draft, and the selected note.
//!
//! List transitions come in two forms. The free functions ([`prepend`], [`replace_by_id`],
//! [`remove_by_id`]) take a slice and return a new sequence, leaving the input alone.
//! [`ViewState`] wraps them for the board.
//!
//! Invariants kept here:
//! - ids in `notes` are unique
//! - at most one note is selected
//! - the draft is either empty (no selection) or started as a copy of the selected note

use crate::model::{Note, NoteDraft, NoteId};
use std::collections::HashSet;

/// `note` first, followed by `notes` in their original order.
///
/// An existing entry with the same id is dropped so ids stay unique.
pub fn prepend(notes: &[Note], note: Note) -> Vec<Note> {
    let mut result = Vec::with_capacity(notes.len() + 1);
    let id = note.id;
    result.push(note);
    result.extend(notes.iter().filter(|n| n.id != id).cloned());
    result
}

/// `notes` with the entry matching `id` swapped for `updated`. Order is preserved.
///
/// Any other entry already carrying `updated.id` is dropped so ids stay unique.
pub fn replace_by_id(notes: &[Note], id: NoteId, updated: Note) -> Vec<Note> {
    if !notes.iter().any(|n| n.id == id) {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|n| n.id == id || n.id != updated.id)
        .map(|n| if n.id == id { updated.clone() } else { n.clone() })
        .collect()
}

/// `notes` keeping only the first entry for each id.
pub fn dedup_by_id(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::with_capacity(notes.len());
    notes.into_iter().filter(|n| seen.insert(n.id)).collect()
}

/// `notes` without the entry matching `id`. Order is preserved.
pub fn remove_by_id(notes: &[Note], id: NoteId) -> Vec<Note> {
    notes.iter().filter(|n| n.id != id).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    notes: Vec<Note>,
    draft: NoteDraft,
    selected: Option<Note>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn draft_title(&self) -> &str {
        &self.draft.title
    }

    pub fn draft_content(&self) -> &str {
        &self.draft.content
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_ref()
    }

    /// True while an existing note is being edited rather than a new one composed.
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn select_note(&mut self, note: &Note) {
        self.draft = NoteDraft::new(note.title.clone(), note.content.clone());
        self.selected = Some(note.clone());
    }

    pub fn clear_draft(&mut self) {
        self.draft = NoteDraft::default();
        self.selected = None;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Takes the server's list as-is, except that repeated ids keep their first entry.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes = dedup_by_id(notes);
    }

    pub fn prepend(&mut self, note: Note) {
        self.notes = prepend(&self.notes, note);
    }

    pub fn replace_by_id(&mut self, id: NoteId, updated: Note) {
        self.notes = replace_by_id(&self.notes, id, updated);
    }

    pub fn remove_by_id(&mut self, id: NoteId) {
        self.notes = remove_by_id(&self.notes, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Note> {
        vec![
            Note::new(1, "A", "a"),
            Note::new(2, "B", "b"),
            Note::new(3, "C", "c"),
        ]
    }

    fn ids(notes: &[Note]) -> Vec<NoteId> {
        notes.iter().map(|n| n.id).collect()
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let notes = sample();
        assert_eq!(remove_by_id(&notes, 42), notes);
        assert_eq!(remove_by_id(&[], 1), Vec::<Note>::new());
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        assert_eq!(ids(&remove_by_id(&sample(), 2)), vec![1, 3]);
    }

    #[test]
    fn replace_preserves_length_and_order() {
        let notes = sample();
        let updated = Note::new(2, "B2", "b2");
        let result = replace_by_id(&notes, 2, updated.clone());

        assert_eq!(result.len(), notes.len());
        assert_eq!(ids(&result), ids(&notes));
        assert_eq!(result[1], updated);
        assert_eq!(result[0], notes[0]);
        assert_eq!(result[2], notes[2]);
    }

    #[test]
    fn replace_absent_id_is_noop() {
        let notes = sample();
        assert_eq!(replace_by_id(&notes, 9, Note::new(9, "X", "x")), notes);
    }

    #[test]
    fn prepend_puts_note_first() {
        let notes = sample();
        let result = prepend(&notes, Note::new(4, "D", "d"));

        assert_eq!(result.len(), notes.len() + 1);
        assert_eq!(result[0].id, 4);
        assert_eq!(&result[1..], &notes[..]);
    }

    #[test]
    fn prepend_keeps_ids_unique() {
        let result = prepend(&sample(), Note::new(2, "B again", "b"));
        assert_eq!(ids(&result), vec![2, 1, 3]);
        assert_eq!(result[0].title, "B again");
    }

    #[test]
    fn replace_keeps_ids_unique() {
        let result = replace_by_id(&sample(), 1, Note::new(2, "A", "a2"));
        assert_eq!(ids(&result), vec![2, 3]);
        assert_eq!(result[0], Note::new(2, "A", "a2"));

        let untouched = replace_by_id(&sample(), 9, Note::new(2, "X", "x"));
        assert_eq!(untouched, sample());
    }

    #[test]
    fn replace_all_keeps_first_of_repeated_ids() {
        let mut state = ViewState::new();
        state.replace_all(vec![
            Note::new(1, "A", "a"),
            Note::new(1, "B", "b"),
            Note::new(2, "C", "c"),
        ]);

        assert_eq!(ids(state.notes()), vec![1, 2]);
        assert_eq!(state.notes()[0].title, "A");
    }

    #[test]
    fn select_copies_fields_into_draft() {
        let mut state = ViewState::with_notes(sample());
        let note = state.notes()[1].clone();
        state.select_note(&note);

        assert_eq!(state.draft_title(), "B");
        assert_eq!(state.draft_content(), "b");
        assert_eq!(state.selected(), Some(&note));
        assert!(state.is_editing());
    }

    #[test]
    fn draft_edits_do_not_touch_the_selected_note() {
        let mut state = ViewState::with_notes(sample());
        let note = state.notes()[0].clone();
        state.select_note(&note);
        state.set_draft_content("a2");

        assert_eq!(state.draft_content(), "a2");
        assert_eq!(state.selected().unwrap().content, "a");
        assert_eq!(state.notes()[0].content, "a");
    }

    #[test]
    fn clear_draft_resets_everything_but_the_list() {
        let mut state = ViewState::with_notes(sample());
        let note = state.notes()[2].clone();
        state.select_note(&note);
        state.set_draft_title("changed");
        state.clear_draft();

        assert_eq!(state.draft_title(), "");
        assert_eq!(state.draft_content(), "");
        assert!(state.selected().is_none());
        assert_eq!(state.notes().len(), 3);

        // idempotent from the initial state too
        let mut fresh = ViewState::new();
        fresh.clear_draft();
        assert_eq!(fresh, ViewState::new());
    }

    #[test]
    fn state_methods_delegate_to_list_transitions() {
        let mut state = ViewState::new();
        state.replace_all(sample());
        state.prepend(Note::new(4, "D", "d"));
        state.replace_by_id(1, Note::new(1, "A2", "a2"));
        state.remove_by_id(3);

        assert_eq!(ids(state.notes()), vec![4, 1, 2]);
        assert_eq!(state.find(1).unwrap().title, "A2");
        assert!(state.find(3).is_none());
    }
}
