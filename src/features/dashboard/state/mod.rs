pub mod calendar_grid;
pub mod display;
pub mod draft;
pub mod month_nav;
pub mod pagination;
pub mod selection;
pub mod task_list;

pub use calendar_grid::{month_grid, same_month, week_of, weekday_labels};
pub use display::{mode_for_selection, DisplayFlow, DisplayMode};
pub use draft::{NewTodo, TaskDraft};
pub use month_nav::MonthNavigator;
pub use pagination::{page_numbers, Pagination};
pub use selection::TaskSelection;
pub use task_list::{FetchState, QueryState, TaskListView};
