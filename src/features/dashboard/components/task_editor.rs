use chrono::NaiveDate;
use leptos::ev;
use leptos::prelude::*;

use crate::features::dashboard::hooks::use_display;
use crate::features::dashboard::state::{DisplayMode, NewTodo, TaskDraft};

#[component]
pub fn TaskEditor(
    #[prop(into)] default_date: Signal<NaiveDate>,
    #[prop(into)] on_submit: Callback<NewTodo>,
) -> impl IntoView {
    let display = use_display();
    let draft = RwSignal::new(TaskDraft::for_date(default_date.get_untracked()));
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(TaskDraft::validate) {
            Ok(todo) => {
                set_error.set(None);
                on_submit.run(todo);
                draft.set(TaskDraft::for_date(default_date.get_untracked()));
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let cancel = move |_| {
        set_error.set(None);
        display.switch_mode(DisplayMode::Calendar);
    };

    view! {
        <div class="task-editor">
            <div class="panel-header">
                <h3>"Add Task"</h3>
                <button type="button" class="modal-close" on:click=cancel>"×"</button>
            </div>
            <form on:submit=handle_submit>
                <div class="form-group">
                    <textarea
                        placeholder="Task description..."
                        rows="3"
                        on:input=move |ev| draft.update(|d| d.task = event_target_value(&ev))
                        prop:value=move || draft.with(|d| d.task.clone())
                    ></textarea>
                </div>
                <div class="form-row">
                    <input
                        type="date"
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        prop:value=move || draft.with(|d| d.date.clone())
                    />
                    <input
                        type="time"
                        on:input=move |ev| draft.update(|d| d.start = event_target_value(&ev))
                        prop:value=move || draft.with(|d| d.start.clone())
                    />
                    <input
                        type="time"
                        on:input=move |ev| draft.update(|d| d.end = event_target_value(&ev))
                        prop:value=move || draft.with(|d| d.end.clone())
                    />
                </div>
                {move || error.get().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=cancel>"Cancel"</button>
                    <button type="submit" class="btn-primary">"Add"</button>
                </div>
            </form>
        </div>
    }
}
