pub mod tauri_commands;
pub mod todos;

pub use todos::{add_todo, load_current_user, load_todos};
