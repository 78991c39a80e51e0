#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Entry engine for an in-place editing surface.
//!
//! Typing the marker (`<>` by default) opens a trigger; the characters typed
//! after it filter a fixed vocabulary into a dropdown. Accepting a candidate
//! replaces the trigger with a single entry token that decorates as one unit
//! and is removed by a single backspace.
//!
//! # Main Types
//!
//! - [`EditorSession`] - Owns the buffer, suggestions, and key router for one surface
//! - [`Vocabulary`] - Ordered completion values with their display attributes
//! - [`SuggestionEngine`] - Candidate list and highlighted index
//!
//! # Data flow
//!
//! ```text
//! text change ──► detect_trigger ──► SuggestionEngine::update ──► dropdown
//! keystroke   ──► InputRouter ──► navigate / insert_entry / pass through
//! backspace   ──► delete_entry_before_cursor ──► handled / default deletion
//! render      ──► find_entries ──► decorations
//! ```
//!
//! Decoration never mutates anything; entry spans are recomputed from the
//! current block text on every pass.

/// Candidate computation and dropdown state.
pub mod completion;
/// Decoration spans with vocabulary attributes.
pub mod decoration;
/// Entry scanning over block text.
pub mod entry;
/// Atomic insertion and removal of entries.
pub mod entry_editor;
mod error;
/// Session wiring for one editing surface.
pub mod session;
/// Active-trigger detection before the caret.
pub mod trigger;
/// Completion vocabulary and display attributes.
pub mod vocabulary;

pub use completion::{SuggestionEngine, SuggestionState, SuggestionUpdate, compute_candidates};
pub use decoration::{Decoration, decorate_block};
pub use entry::{Entries, Entry, EntrySpan, entry_ending_at, find_entries};
pub use entry_editor::{CommandOutcome, InsertedEntry, delete_entry_before_cursor, insert_entry};
pub use error::EntryEditError;
pub use session::{EditorCommand, EditorSession, KeyOutcome};
pub use trigger::{Trigger, detect_trigger, detect_trigger_at};
pub use vocabulary::{EntryAttribute, Vocabulary};
