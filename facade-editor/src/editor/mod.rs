pub mod edits;
pub mod history;
pub mod session;

pub use edits::{Edit, EditIntent};
pub use history::{History, HistoryError};
pub use session::{EditOutcome, Editor, EditorError};
