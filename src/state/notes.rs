// src/state/notes.rs
//! Store for the floating sticky-notes add-on.

use serde::{Deserialize, Serialize};

use super::Slice;
use crate::entity::Note;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesState {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone)]
pub enum NotesAction {
    AddNote,
    UpdateNote(Note),
    DeleteNote(Note),
    DuplicateNote(Note),
    /// Bulk replace, used to reconcile `opened` flags against the
    /// windows the desktop shell actually has open.
    UpdateNotes(Vec<Note>),
}

pub fn reduce(state: &NotesState, action: NotesAction) -> (NotesState, Vec<Slice>) {
    match action {
        NotesAction::AddNote => {
            let mut next = state.clone();
            next.notes.push(Note::new(&next.notes));
            (next, vec![Slice::Notes])
        }

        NotesAction::UpdateNote(note) => {
            if !state.notes.iter().any(|n| n.id == note.id) {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            for n in &mut next.notes {
                if n.id == note.id {
                    *n = note.clone();
                }
            }
            (next, vec![Slice::Notes])
        }

        NotesAction::DeleteNote(note) => {
            if !state.notes.iter().any(|n| n.id == note.id) {
                return (state.clone(), Vec::new());
            }
            let mut next = state.clone();
            next.notes.retain(|n| n.id != note.id);
            (next, vec![Slice::Notes])
        }

        NotesAction::DuplicateNote(note) => {
            let mut next = state.clone();
            let ids: Vec<i32> = next.notes.iter().map(|n| n.id).collect();
            let mut copy = note;
            copy.id = crate::entity::unique_id(&ids);
            next.notes.push(copy);
            (next, vec![Slice::Notes])
        }

        NotesAction::UpdateNotes(notes) => {
            let mut next = state.clone();
            next.notes = notes;
            (next, vec![Slice::Notes])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &NotesState, action: NotesAction) -> NotesState {
        reduce(state, action).0
    }

    #[test]
    fn test_add_note_allocates_ids() {
        let state = NotesState::default();
        let state = apply(&state, NotesAction::AddNote);
        let state = apply(&state, NotesAction::AddNote);

        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.notes[0].id, 0);
        assert_eq!(state.notes[1].id, 1);
    }

    #[test]
    fn test_update_note_by_id() {
        let state = apply(&NotesState::default(), NotesAction::AddNote);
        let mut note = state.notes[0].clone();
        note.text = "remember the milk".to_string();
        note.opened = true;

        let state = apply(&state, NotesAction::UpdateNote(note));
        assert_eq!(state.notes[0].text, "remember the milk");
        assert!(state.notes[0].opened);
    }

    #[test]
    fn test_delete_note() {
        let state = apply(&NotesState::default(), NotesAction::AddNote);
        let note = state.notes[0].clone();
        let state = apply(&state, NotesAction::DeleteNote(note));
        assert!(state.notes.is_empty());
    }

    #[test]
    fn test_duplicate_note_gets_fresh_id() {
        let state = apply(&NotesState::default(), NotesAction::AddNote);
        let mut note = state.notes[0].clone();
        note.text = "copy me".to_string();

        let state = apply(&state, NotesAction::DuplicateNote(note));
        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.notes[1].id, 1);
        assert_eq!(state.notes[1].text, "copy me");
    }

    #[test]
    fn test_update_notes_bulk_replace() {
        let state = apply(&NotesState::default(), NotesAction::AddNote);
        let mut reconciled = state.notes.clone();
        reconciled[0].opened = false;

        let state = apply(&state, NotesAction::UpdateNotes(reconciled));
        assert!(!state.notes[0].opened);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let state = apply(&NotesState::default(), NotesAction::AddNote);
        let mut ghost = state.notes[0].clone();
        ghost.id = 99;

        let (next, changed) = reduce(&state, NotesAction::UpdateNote(ghost.clone()));
        assert_eq!(next, state);
        assert!(changed.is_empty());

        let (next, changed) = reduce(&state, NotesAction::DeleteNote(ghost));
        assert_eq!(next, state);
        assert!(changed.is_empty());
    }
}
