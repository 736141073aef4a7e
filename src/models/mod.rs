pub mod task;
pub mod user;

pub use task::TodoTask;
pub use user::User;
