use crate::error::DashboardError;
use crate::features::dashboard::state::NewTodo;
use crate::models::{TodoTask, User};

use super::tauri_commands::*;

/// Keeps well-formed records and logs the rest; one bad row must not hide the whole list.
pub fn decode_todos(records: Vec<serde_json::Value>) -> Vec<TodoTask> {
    let total = records.len();
    let tasks: Vec<TodoTask> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<TodoTask>(record) {
            Ok(task) => Some(task),
            Err(error) => {
                tracing::warn!(%error, "skipping malformed todo record");
                None
            }
        })
        .collect();

    if tasks.len() != total {
        tracing::warn!(kept = tasks.len(), total, "some todo records could not be decoded");
    }
    tasks
}

pub async fn load_todos(user_id: &str) -> Result<Vec<TodoTask>, DashboardError> {
    let js_result = load_todos_data(user_id).await?;
    if js_result.is_null() {
        return Ok(Vec::new());
    }
    let records = serde_wasm_bindgen::from_value::<Vec<serde_json::Value>>(js_result)
        .map_err(|e| DashboardError::Decode { command: "load_todos".to_string(), message: e.to_string() })?;
    Ok(decode_todos(records))
}

pub async fn load_current_user() -> Result<User, DashboardError> {
    let js_result = current_user_data().await?;
    serde_wasm_bindgen::from_value::<User>(js_result)
        .map_err(|e| DashboardError::Decode { command: "current_user".to_string(), message: e.to_string() })
}

pub async fn add_todo(user_id: &str, todo: &NewTodo) -> Result<(), DashboardError> {
    add_todo_data(user_id, todo).await?;
    tracing::info!(user_id, task = %todo.task, "todo created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_records_are_skipped() {
        let records = vec![
            json!({
                "id": 1,
                "task": "Stand-up",
                "start_time": "2024-03-04T09:00:00Z",
                "end_time": "2024-03-04T09:15:00Z",
                "done": true,
                "created_at": "2024-03-01T08:00:00Z"
            }),
            json!({ "id": 2, "task": "missing times" }),
        ];
        let tasks = decode_todos(records);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert!(tasks[0].done);
    }

    #[test]
    fn empty_payload_decodes_to_empty_list() {
        assert!(decode_todos(Vec::new()).is_empty());
    }
}
