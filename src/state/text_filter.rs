// src/state/text_filter.rs
//! Store for the text-filtering add-on: a target text and four
//! character-class strip toggles.

use serde::{Deserialize, Serialize};

use super::Slice;

pub const DEFAULT_TARGET_TEXT: &str = "Toggle any filter to change me.. 1, 2, 3, go!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFilterState {
    pub target_text: String,
    pub filter_numbers: bool,
    pub filter_letters: bool,
    pub filter_special_characters: bool,
    pub filter_spaces: bool,
    pub preview_visible: bool,
}

impl Default for TextFilterState {
    fn default() -> Self {
        Self {
            target_text: DEFAULT_TARGET_TEXT.to_string(),
            filter_numbers: false,
            filter_letters: false,
            filter_special_characters: false,
            filter_spaces: false,
            preview_visible: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TextFilterAction {
    UpdateTargetText(String),
    UpdateFilterNumbers(bool),
    UpdateFilterLetters(bool),
    UpdateFilterSpecialCharacters(bool),
    UpdateFilterSpaces(bool),
    UpdatePreviewVisible(bool),
}

pub fn reduce(state: &TextFilterState, action: TextFilterAction) -> (TextFilterState, Vec<Slice>) {
    let mut next = state.clone();
    match action {
        TextFilterAction::UpdateTargetText(text) => next.target_text = text,
        TextFilterAction::UpdateFilterNumbers(enabled) => next.filter_numbers = enabled,
        TextFilterAction::UpdateFilterLetters(enabled) => next.filter_letters = enabled,
        TextFilterAction::UpdateFilterSpecialCharacters(enabled) => {
            next.filter_special_characters = enabled
        }
        TextFilterAction::UpdateFilterSpaces(enabled) => next.filter_spaces = enabled,
        TextFilterAction::UpdatePreviewVisible(visible) => next.preview_visible = visible,
    }
    (next, vec![Slice::TextFilter])
}

/// Apply the enabled filters to the target text, in a fixed order:
/// digits, letters, special characters, whitespace.
pub fn filtered_output(state: &TextFilterState) -> String {
    let mut output = state.target_text.clone();
    if state.filter_numbers {
        output.retain(|c| !c.is_ascii_digit());
    }
    if state.filter_letters {
        output.retain(|c| !c.is_ascii_alphabetic());
    }
    if state.filter_special_characters {
        output.retain(|c| c.is_ascii_alphanumeric() || c.is_whitespace());
    }
    if state.filter_spaces {
        output.retain(|c| !c.is_whitespace());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_text(text: &str) -> TextFilterState {
        TextFilterState {
            target_text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_filters_passes_through() {
        let state = state_with_text("abc 123!?");
        assert_eq!(filtered_output(&state), "abc 123!?");
    }

    #[test]
    fn test_filter_numbers() {
        let mut state = state_with_text("abc 123!?");
        state.filter_numbers = true;
        assert_eq!(filtered_output(&state), "abc !?");
    }

    #[test]
    fn test_filter_letters() {
        let mut state = state_with_text("abc 123!?");
        state.filter_letters = true;
        assert_eq!(filtered_output(&state), " 123!?");
    }

    #[test]
    fn test_filter_special_characters() {
        let mut state = state_with_text("abc 123!?");
        state.filter_special_characters = true;
        assert_eq!(filtered_output(&state), "abc 123");
    }

    #[test]
    fn test_filter_spaces() {
        let mut state = state_with_text("a b\tc");
        state.filter_spaces = true;
        assert_eq!(filtered_output(&state), "abc");
    }

    #[test]
    fn test_all_filters_compose() {
        let mut state = state_with_text(DEFAULT_TARGET_TEXT);
        state.filter_numbers = true;
        state.filter_letters = true;
        state.filter_special_characters = true;
        state.filter_spaces = true;
        assert_eq!(filtered_output(&state), "");
    }

    #[test]
    fn test_reduce_toggles_fields() {
        let state = TextFilterState::default();
        let (state, changed) = reduce(&state, TextFilterAction::UpdateFilterNumbers(true));
        assert!(state.filter_numbers);
        assert_eq!(changed, vec![Slice::TextFilter]);

        let (state, _) = reduce(
            &state,
            TextFilterAction::UpdateTargetText("abc".to_string()),
        );
        assert_eq!(state.target_text, "abc");
    }
}
