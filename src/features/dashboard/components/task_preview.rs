use chrono::Local;
use leptos::prelude::*;

use crate::features::dashboard::hooks::use_display;
use crate::features::dashboard::state::DisplayMode;
use crate::models::TodoTask;

#[component]
pub fn TaskPreview(#[prop(into)] task: Signal<Option<TodoTask>>) -> impl IntoView {
    let display = use_display();

    view! {
        <div class="task-preview">
            <div class="panel-header">
                <h3>"Task"</h3>
                <button class="modal-close" on:click=move |_| display.switch_mode(DisplayMode::Calendar)>"×"</button>
            </div>
            {move || match task.get() {
                Some(task) => {
                    let day = task.start_time.with_timezone(&Local).format("%A, %d %B %Y").to_string();
                    let status = if task.done { "Done" } else { "Pending" };
                    view! {
                        <div class="preview-body">
                            <h4>{task.task.clone()}</h4>
                            <p class="preview-date">{day}</p>
                            <p class="preview-time">
                                {task.time_range()} " (" {task.duration_minutes()} " min)"
                            </p>
                            <p class="preview-status" class:done=task.done>{status}</p>
                        </div>
                    }
                    .into_any()
                }
                None => view! { <p class="preview-empty">"Select a task to see its details."</p> }.into_any(),
            }}
        </div>
    }
}
