//! Unit tests for key routing.

use entrypad_primitives::{Key, KeyCode, Modifiers};
use rstest::rstest;

use super::{InputRouter, KeyResult, RouterEvent, RouterState};

fn suggesting() -> InputRouter {
	let mut r = InputRouter::new();
	r.apply(RouterEvent::SuggestionsShown);
	r
}

#[test]
fn test_initial_state_is_idle() {
	let r = InputRouter::new();
	assert_eq!(r.state(), RouterState::Idle);
	assert!(!r.is_suggesting());
}

#[rstest]
#[case(Key::new(KeyCode::Down))]
#[case(Key::new(KeyCode::Up))]
#[case(Key::new(KeyCode::Enter))]
#[case(Key::new(KeyCode::Tab))]
#[case(Key::new(KeyCode::Esc))]
#[case(Key::new(KeyCode::Backspace))]
#[case(Key::char('a'))]
fn test_idle_passes_everything_through(#[case] key: Key) {
	let mut r = InputRouter::new();
	assert_eq!(r.handle_key(key), KeyResult::PassThrough);
	assert_eq!(r.state(), RouterState::Idle);
}

#[rstest]
#[case(KeyCode::Down, KeyResult::Navigate(1))]
#[case(KeyCode::Up, KeyResult::Navigate(-1))]
fn test_navigation_keeps_suggesting(#[case] code: KeyCode, #[case] expected: KeyResult) {
	let mut r = suggesting();
	assert_eq!(r.handle_key(Key::new(code)), expected);
	assert!(expected.is_consumed());
	assert!(r.is_suggesting());
}

#[rstest]
#[case(KeyCode::Enter, KeyResult::AcceptSelected)]
#[case(KeyCode::Tab, KeyResult::AcceptSelected)]
#[case(KeyCode::Esc, KeyResult::CommitQuery)]
fn test_accepting_keys_return_to_idle(#[case] code: KeyCode, #[case] expected: KeyResult) {
	let mut r = suggesting();
	assert_eq!(r.handle_key(Key::new(code)), expected);
	assert_eq!(r.state(), RouterState::Idle);
}

#[rstest]
#[case(Key::char('x'))]
#[case(Key::new(KeyCode::Backspace))]
#[case(Key::new(KeyCode::Left))]
#[case(Key::new(KeyCode::Space))]
#[case(Key::new(KeyCode::BackTab))]
#[case(Key::ctrl('n'))]
#[case(Key { code: KeyCode::Down, modifiers: Modifiers::ALT })]
#[case(Key::new(KeyCode::Tab).with_shift())]
#[case(Key::new(KeyCode::Enter).with_shift())]
#[case(Key::new(KeyCode::Esc).with_shift())]
fn test_other_keys_pass_through_while_suggesting(#[case] key: Key) {
	let mut r = suggesting();
	assert_eq!(r.handle_key(key), KeyResult::PassThrough);
	assert!(r.is_suggesting());
}

#[test]
fn test_shift_arrows_still_navigate() {
	let mut r = suggesting();
	assert_eq!(r.handle_key(Key::new(KeyCode::Down).with_shift()), KeyResult::Navigate(1));
}

#[rstest]
#[case(RouterEvent::TriggerInactive)]
#[case(RouterEvent::CandidatesEmptied)]
#[case(RouterEvent::Accepted)]
#[case(RouterEvent::Dismissed)]
fn test_leaving_events_return_to_idle(#[case] event: RouterEvent) {
	let mut r = suggesting();
	assert_eq!(r.apply(event), RouterState::Idle);
	assert_eq!(r.handle_key(Key::new(KeyCode::Down)), KeyResult::PassThrough);
}

#[test]
fn test_repeated_shown_stays_suggesting() {
	let mut r = suggesting();
	assert_eq!(r.apply(RouterEvent::SuggestionsShown), RouterState::Suggesting);
}
