use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::error::DashboardError;
use crate::features::dashboard::state::NewTodo;
use crate::tauri_bridge::{host_available, invoke_raw};

// Generic Tauri command executor with error handling
pub async fn execute_tauri_command(command: &str, args: serde_json::Value) -> Result<JsValue, DashboardError> {
    if !host_available() {
        return Err(DashboardError::HostUnavailable);
    }

    // Tauri expects plain objects, not the ES Maps serde-wasm-bindgen emits by default.
    let js_args = args
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| DashboardError::Encode { command: command.to_string(), message: e.to_string() })?;

    tracing::debug!(command, "invoking host command");
    let result = invoke_raw(command, js_args).await.map_err(|e| DashboardError::Rejected {
        command: command.to_string(),
        message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
    })?;

    if result.is_undefined() {
        Err(DashboardError::NoResponse { command: command.to_string() })
    } else {
        Ok(result)
    }
}

pub async fn current_user_data() -> Result<JsValue, DashboardError> {
    execute_tauri_command("current_user", serde_json::json!({})).await
}

pub async fn load_todos_data(user_id: &str) -> Result<JsValue, DashboardError> {
    execute_tauri_command("load_todos", serde_json::json!({ "userId": user_id })).await
}

pub async fn add_todo_data(user_id: &str, todo: &NewTodo) -> Result<JsValue, DashboardError> {
    let todo = serde_json::to_value(todo)
        .map_err(|e| DashboardError::Encode { command: "add_todo".to_string(), message: e.to_string() })?;
    execute_tauri_command("add_todo", serde_json::json!({ "userId": user_id, "todo": todo })).await
}
