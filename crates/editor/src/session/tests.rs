use entrypad_buffer::Document;
use entrypad_primitives::KeyCode;
use pretty_assertions::assert_eq;

use super::*;

fn session(text: &str) -> EditorSession<Document> {
	let mut session = EditorSession::new(Document::from_text(text), &EditorConfig::default());
	session.on_change();
	session
}

fn type_text(session: &mut EditorSession<Document>, text: &str) {
	session.buffer_mut().type_text(text).unwrap();
	session.on_change();
}

fn text(session: &EditorSession<Document>) -> String {
	session.buffer().to_text()
}

fn candidates(session: &EditorSession<Document>) -> Vec<String> {
	session.suggestions().map(|s| s.candidates().to_vec()).unwrap_or_default()
}

#[test]
fn typing_marker_opens_dropdown() {
	let mut s = session("");
	assert_eq!(s.router_state(), RouterState::Idle);
	type_text(&mut s, "<>");
	assert_eq!(s.router_state(), RouterState::Suggesting);
	assert_eq!(candidates(&s), ["user", "name", "email", "phone", "address"]);
}

#[test]
fn query_narrows_and_unknown_query_closes() {
	let mut s = session("<>");
	type_text(&mut s, "e");
	assert_eq!(candidates(&s), ["email"]);
	type_text(&mut s, "x");
	assert!(s.suggestions().is_none());
	assert_eq!(s.router_state(), RouterState::Idle);
}

#[test]
fn tab_accepts_highlighted_candidate() {
	let mut s = session("<>na");
	assert_eq!(s.handle_key(Key::new(KeyCode::Tab)).unwrap(), KeyOutcome::Handled);
	assert_eq!(text(&s), "<>name ");
	assert_eq!(s.buffer().selection().start(), 7);
	assert_eq!(s.router_state(), RouterState::Idle);
	assert!(s.suggestions().is_none());
}

#[test]
fn navigation_then_enter() {
	let mut s = session("say <>");
	s.handle_key(Key::new(KeyCode::Down)).unwrap();
	s.handle_key(Key::new(KeyCode::Down)).unwrap();
	s.handle_key(Key::new(KeyCode::Up)).unwrap();
	assert_eq!(s.suggestions().map(SuggestionState::selected), Some("name"));
	s.handle_key(Key::new(KeyCode::Enter)).unwrap();
	assert_eq!(text(&s), "say <>name ");
}

#[test]
fn up_from_first_wraps_to_last() {
	let mut s = session("<>");
	s.handle_key(Key::new(KeyCode::Up)).unwrap();
	assert_eq!(s.suggestions().map(SuggestionState::selected), Some("address"));
}

#[test]
fn escape_commits_typed_query() {
	let mut s = session("hello <>us");
	type_text(&mut s, "er");
	assert_eq!(s.handle_key(Key::new(KeyCode::Esc)).unwrap(), KeyOutcome::Handled);
	assert_eq!(text(&s), "hello <>user ");
	assert_eq!(s.router_state(), RouterState::Idle);
}

#[test]
fn escape_keeps_query_case() {
	let mut s = session("<>EM");
	s.handle_key(Key::new(KeyCode::Esc)).unwrap();
	assert_eq!(text(&s), "<>EM ");
}

#[test]
fn escape_with_empty_query_only_closes() {
	let mut s = session("<>");
	let before = s.buffer().version();
	assert_eq!(s.handle_key(Key::new(KeyCode::Esc)).unwrap(), KeyOutcome::Handled);
	assert_eq!(text(&s), "<>");
	assert_eq!(s.buffer().version(), before);
	assert_eq!(s.router_state(), RouterState::Idle);

	assert_eq!(s.on_change(), SuggestionUpdate::Suppressed);
	assert_eq!(s.router_state(), RouterState::Idle);
	assert!(s.suggestions().is_none());
}

#[test]
fn idle_keys_pass_through() {
	let mut s = session("plain");
	for code in [KeyCode::Enter, KeyCode::Tab, KeyCode::Esc, KeyCode::Down] {
		assert_eq!(s.handle_key(Key::new(code)).unwrap(), KeyOutcome::NotHandled);
	}
	assert_eq!(text(&s), "plain");
}

#[test]
fn typing_keys_pass_through_while_suggesting() {
	let mut s = session("<>");
	assert_eq!(s.handle_key(Key::char('u')).unwrap(), KeyOutcome::NotHandled);
	assert_eq!(s.router_state(), RouterState::Suggesting);
}

#[test]
fn backspace_removes_whole_entry() {
	let mut s = session("x <>email");
	let outcome = s.handle_command(EditorCommand::Backspace).unwrap();
	assert_eq!(outcome, CommandOutcome::Handled);
	assert_eq!(text(&s), "x ");
	assert_eq!(s.router_state(), RouterState::Idle);
}

#[test]
fn backspace_after_space_falls_back_to_default() {
	let mut s = session("<>email ");
	assert_eq!(s.handle_command(EditorCommand::Backspace).unwrap(), CommandOutcome::NotHandled);

	s.buffer_mut().delete_backward().unwrap();
	s.on_change();
	assert_eq!(text(&s), "<>email");
	assert_eq!(candidates(&s), ["email"]);

	assert_eq!(s.handle_command(EditorCommand::Backspace).unwrap(), CommandOutcome::Handled);
	assert_eq!(text(&s), "");
	assert!(s.suggestions().is_none());
}

#[test]
fn other_commands_are_not_intercepted() {
	let mut s = session("<>email");
	assert_eq!(s.handle_command(EditorCommand::DeleteForward).unwrap(), CommandOutcome::NotHandled);
	assert_eq!(s.handle_command(EditorCommand::SplitBlock).unwrap(), CommandOutcome::NotHandled);
	assert_eq!(text(&s), "<>email");
}

#[test]
fn hover_and_click() {
	let mut s = session("<>");
	assert!(s.hover_candidate(3));
	assert_eq!(s.suggestions().map(SuggestionState::selected), Some("phone"));
	assert!(!s.hover_candidate(9));

	let inserted = s.accept_candidate(4).unwrap().expect("candidate 4 exists");
	assert_eq!(text(&s), "<>address ");
	assert_eq!(inserted.caret, 10);
	assert_eq!(s.router_state(), RouterState::Idle);
}

#[test]
fn click_outside_candidates_does_nothing() {
	let mut s = session("<>u");
	assert_eq!(s.accept_candidate(1).unwrap(), None);
	assert_eq!(text(&s), "<>u");
	assert_eq!(s.router_state(), RouterState::Suggesting);
}

#[test]
fn dismiss_holds_until_new_trigger() {
	let mut s = session("<>");
	s.dismiss();
	assert_eq!(s.router_state(), RouterState::Idle);

	type_text(&mut s, "e");
	assert!(s.suggestions().is_none());
	assert_eq!(s.handle_key(Key::new(KeyCode::Enter)).unwrap(), KeyOutcome::NotHandled);

	type_text(&mut s, " <>");
	assert_eq!(s.router_state(), RouterState::Suggesting);
}

#[test]
fn caret_move_away_closes_dropdown() {
	let mut s = session("ab <>");
	assert_eq!(s.router_state(), RouterState::Suggesting);
	let block = s.buffer().focused_block();
	s.buffer_mut().set_cursor(block, 1).unwrap();
	assert_eq!(s.on_change(), SuggestionUpdate::Inactive);
	assert_eq!(s.router_state(), RouterState::Idle);
}

#[test]
fn trigger_does_not_cross_blocks() {
	let mut s = session("<>\n");
	assert_eq!(s.on_change(), SuggestionUpdate::Inactive);
	type_text(&mut s, "na");
	assert!(s.suggestions().is_none());
}

#[test]
fn decorations_use_vocabulary() {
	let s = session("<>email and <>who");
	let block = s.buffer().focused_block();
	let decorations = s.decorations(block);
	assert_eq!(decorations.len(), 2);
	assert!(decorations[0].known);
	assert!(!decorations[1].known);
	assert!(s.decorations(BlockKey(99)).is_empty());
}

#[test]
fn custom_vocabulary_and_placeholder() {
	let s = EditorSession::new(Document::new(), &EditorConfig::default()).with_vocabulary(Vocabulary::new(["alpha", "beta"]));
	assert_eq!(s.placeholder(), "Type <> to trigger autocomplete...");
	assert_eq!(s.vocabulary().len(), 2);
	assert_eq!(s.marker().as_str(), "<>");
}
