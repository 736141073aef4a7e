use crate::error::DashboardError;
use crate::models::TodoTask;

use super::TaskSelection;

/// Result of a one-shot host request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Ready(T),
    Failed(DashboardError),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// A repeatedly fetched value. The last successful result survives refetches and failed
/// refetches; `error` only describes the most recent attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    data: Option<T>,
    is_fetching: bool,
    error: Option<DashboardError>,
}

impl<T> QueryState<T> {
    /// Nothing loaded yet, first request in flight.
    pub fn pending() -> Self {
        Self { data: None, is_fetching: true, error: None }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    pub fn start_fetch(&mut self) {
        self.is_fetching = true;
    }

    pub fn finish(&mut self, result: Result<T, DashboardError>) {
        self.is_fetching = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub task: TodoTask,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    Loading,
    Empty,
    Failed(String),
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    /// Rows stay hidden while any fetch is in flight. An error only shows when there is no
    /// earlier list to fall back on.
    pub fn project(state: &QueryState<Vec<TodoTask>>, selection: &TaskSelection) -> Self {
        if state.is_fetching() {
            return TaskListView::Loading;
        }
        match (state.data(), state.error()) {
            (Some(tasks), _) if tasks.is_empty() => TaskListView::Empty,
            (Some(tasks), _) => TaskListView::Rows(
                tasks
                    .iter()
                    .map(|task| TaskRow { task: task.clone(), active: selection.is_active(task.id) })
                    .collect(),
            ),
            (None, Some(error)) => TaskListView::Failed(error.to_string()),
            (None, None) => TaskListView::Loading,
        }
    }
}
