use leptos::prelude::*;

use crate::config::load_dashboard_config;
use crate::features::dashboard::hooks::{provide_display, provide_user};
use crate::features::dashboard::state::FetchState;
use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    let config = load_dashboard_config();
    provide_display(config.initial_display_mode());
    provide_context(config);
    let current_user = provide_user();

    view! {
        <div class="app">
            {move || match current_user.state.get() {
                FetchState::Pending => view! { <div class="app-loading">"Loading your dashboard..."</div> }.into_any(),
                FetchState::Failed(error) => view! {
                    <div class="app-error" role="alert">{format!("Could not identify the current user: {error}")}</div>
                }
                .into_any(),
                FetchState::Ready(user) => view! { <Home user=user /> }.into_any(),
            }}
        </div>
    }
}
