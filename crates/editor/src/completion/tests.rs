use pretty_assertions::assert_eq;

use super::*;

fn vocab() -> Vocabulary {
	Vocabulary::new(["user", "name", "email", "phone", "address"])
}

fn trigger(start: CharIdx, query: &str) -> Option<Trigger> {
	Some(Trigger {
		query_start: start,
		query: query.to_string(),
	})
}

#[test]
fn empty_query_matches_everything_in_order() {
	assert_eq!(compute_candidates("", &vocab()), ["user", "name", "email", "phone", "address"]);
}

#[test]
fn prefix_match_ignores_case() {
	assert_eq!(compute_candidates("NA", &vocab()), ["name"]);
	assert_eq!(compute_candidates("e", &vocab()), ["email"]);
	assert_eq!(compute_candidates("xyz", &vocab()), Vec::<String>::new());
}

#[test]
fn prefix_match_is_not_substring_match() {
	assert_eq!(compute_candidates("ame", &vocab()), Vec::<String>::new());
}

#[test]
fn update_without_trigger_is_inactive() {
	let mut engine = SuggestionEngine::new(10);
	assert_eq!(engine.update(None, &vocab()), SuggestionUpdate::Inactive);
	assert!(!engine.is_active());
}

#[test]
fn update_with_no_matches_clears_state() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, "u"), &vocab());
	assert!(engine.is_active());
	assert_eq!(engine.update(trigger(0, "uz"), &vocab()), SuggestionUpdate::NoCandidates);
	assert!(engine.state().is_none());
}

#[test]
fn selection_wraps_both_ways() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, ""), &vocab());
	assert_eq!(engine.move_selection(-1), Some(4));
	assert_eq!(engine.state().map(SuggestionState::selected), Some("address"));
	assert_eq!(engine.move_selection(1), Some(0));
	assert_eq!(engine.move_selection(7), Some(2));
}

#[test]
fn move_selection_without_state_is_none() {
	let mut engine = SuggestionEngine::new(10);
	assert_eq!(engine.move_selection(1), None);
}

#[test]
fn same_query_keeps_highlight() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(3, ""), &vocab());
	engine.move_selection(2);
	engine.update(trigger(3, ""), &vocab());
	assert_eq!(engine.state().map(SuggestionState::selected_index), Some(2));
}

#[test]
fn changed_query_resets_highlight() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, ""), &vocab());
	engine.move_selection(1);
	engine.update(trigger(0, "n"), &vocab());
	assert_eq!(engine.state().map(SuggestionState::selected_index), Some(0));
}

#[test]
fn moved_start_resets_highlight_even_with_same_candidates() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, ""), &vocab());
	engine.move_selection(3);
	engine.update(trigger(4, ""), &vocab());
	let state = engine.state().expect("showing");
	assert_eq!(state.selected_index(), 0);
	assert_eq!(state.query_start(), 4);
}

#[test]
fn select_rejects_out_of_range() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, ""), &vocab());
	assert!(engine.select(3));
	assert!(!engine.select(5));
	assert_eq!(engine.state().map(SuggestionState::selected_index), Some(3));
}

#[test]
fn window_follows_selection() {
	let mut engine = SuggestionEngine::new(2);
	engine.update(trigger(0, ""), &vocab());
	assert_eq!(engine.visible_range(), 0..2);
	engine.move_selection(2);
	assert_eq!(engine.visible_range(), 1..3);
	engine.move_selection(2);
	assert_eq!(engine.visible_range(), 3..5);
	engine.move_selection(1);
	assert_eq!(engine.visible_range(), 0..2);
}

#[test]
fn dismiss_suppresses_until_trigger_moves() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(2, "u"), &vocab());
	engine.dismiss();
	assert!(!engine.is_active());
	assert_eq!(engine.update(trigger(2, "us"), &vocab()), SuggestionUpdate::Suppressed);
	assert_eq!(engine.update(trigger(8, ""), &vocab()), SuggestionUpdate::Showing);
}

#[test]
fn suppression_ends_when_trigger_goes_inactive() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(0, ""), &vocab());
	engine.dismiss();
	engine.update(None, &vocab());
	assert_eq!(engine.update(trigger(0, ""), &vocab()), SuggestionUpdate::Showing);
}

#[test]
fn take_hands_over_state() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(1, "em"), &vocab());
	let state = engine.take().expect("showing");
	assert_eq!(state.query(), "em");
	assert_eq!(state.candidates(), ["email"]);
	assert!(!engine.is_active());
}

#[test]
fn suppress_at_hides_trigger_without_state() {
	let mut engine = SuggestionEngine::new(10);
	engine.update(trigger(5, ""), &vocab());
	let state = engine.take().expect("showing");
	engine.suppress_at(state.query_start());
	assert_eq!(engine.update(trigger(5, ""), &vocab()), SuggestionUpdate::Suppressed);
	assert_eq!(engine.update(trigger(0, ""), &vocab()), SuggestionUpdate::Showing);
}
