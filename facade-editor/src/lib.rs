//! facade-editor: edit sessions with undo/redo over facade configs.
//!
//! The `facade` binary drives the same session types from the command line.

pub mod editor;

pub use editor::{EditIntent, EditOutcome, Editor, EditorError, History};
