use leptos::prelude::*;

use crate::features::dashboard::hooks::use_user;

#[component]
pub fn Navbar() -> impl IntoView {
    let user = use_user();

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Taskboard"</span>
            <span class="navbar-user">
                {move || user.current().map(|u| u.display_name()).unwrap_or_default()}
            </span>
        </nav>
    }
}
