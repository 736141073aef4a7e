pub mod use_display;
pub mod use_media_query;
pub mod use_todos;
pub mod use_user;

pub use use_display::*;
pub use use_media_query::*;
pub use use_todos::*;
pub use use_user::*;
