use leptos::prelude::*;

use crate::models::TodoTask;

#[component]
pub fn TaskCard(
    task: TodoTask,
    active: bool,
    #[prop(into)] on_toggle: Callback<i64>,
) -> impl IntoView {
    let id = task.id;
    let time_range = task.time_range();

    view! {
        <div
            class="task-card clickable"
            class:active=active
            class:done=task.done
            on:click=move |_| on_toggle.run(id)
        >
            <input type="checkbox" class="task-done" prop:checked=task.done disabled=true />
            <div class="task-content">
                <h4>{task.task}</h4>
                <p class="task-time">{time_range}</p>
            </div>
        </div>
    }
}
