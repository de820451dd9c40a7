//! In-editor résumé state: a single state tree updated only through the
//! closed `EditorAction` set. Nothing here persists; the caller serializes the
//! state into a `ResumeInput` and submits it to the Resume API.

pub mod handlers;
pub mod reducer;
pub mod state;

pub use reducer::{apply, EditorAction};
pub use state::EditorState;
