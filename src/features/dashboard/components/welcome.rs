use leptos::prelude::*;

#[component]
pub fn Welcome(
    greeting: &'static str,
    #[prop(into)] task_highlight: String,
    #[prop(into)] create_task: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="welcome">
            <div class="welcome-text">
                <h2>{greeting}</h2>
                <p>{task_highlight}</p>
            </div>
            <button class="btn-primary" on:click=move |_| create_task.run(())>"+ Create New Task"</button>
        </section>
    }
}
