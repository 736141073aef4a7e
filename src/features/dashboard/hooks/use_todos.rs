use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::load_todos;
use crate::features::dashboard::state::QueryState;
use crate::models::TodoTask;

pub struct TodosHook {
    pub state: ReadSignal<QueryState<Vec<TodoTask>>>,
    pub refetch: Callback<()>,
}

pub fn use_todos(user_id: String, refetch_interval_secs: u32) -> TodosHook {
    let state = RwSignal::new(QueryState::<Vec<TodoTask>>::pending());
    // Bumped per request so a slow response cannot overwrite a newer one.
    let generation = StoredValue::new(0_u64);

    let fetch = move |user_id: String| {
        let Some(request) = generation.try_get_value().map(|g| g + 1) else {
            return;
        };
        generation.set_value(request);
        let _ = state.try_update(|s| s.start_fetch());

        spawn_local(async move {
            let result = load_todos(&user_id).await;
            if generation.try_get_value() != Some(request) {
                tracing::debug!(request, "discarding superseded todo fetch");
                return;
            }
            match &result {
                Ok(tasks) => tracing::info!(count = tasks.len(), "loaded todos"),
                Err(error) => tracing::error!(%error, "failed to load todos"),
            }
            let _ = state.try_update(|s| s.finish(result));
        });
    };

    fetch(user_id.clone());

    if refetch_interval_secs > 0 {
        let user_id = user_id.clone();
        let millis = refetch_interval_secs.saturating_mul(1000);
        spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(millis).await;
                // Stop once the owning view has been disposed.
                if generation.try_get_value().is_none() {
                    break;
                }
                fetch(user_id.clone());
            }
        });
    }

    let refetch = Callback::new(move |_: ()| fetch(user_id.clone()));

    TodosHook { state: state.read_only(), refetch }
}
