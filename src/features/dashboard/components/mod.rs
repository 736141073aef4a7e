pub mod calendar;
pub mod dates_lister;
pub mod navbar;
pub mod pagination;
pub mod task_card;
pub mod task_editor;
pub mod task_preview;
pub mod welcome;

pub use calendar::Calendar;
pub use dates_lister::DatesLister;
pub use navbar::Navbar;
pub use pagination::PaginationBar;
pub use task_card::TaskCard;
pub use task_editor::TaskEditor;
pub use task_preview::TaskPreview;
pub use welcome::Welcome;
