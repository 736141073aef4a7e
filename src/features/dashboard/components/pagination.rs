use leptos::prelude::*;

use crate::features::dashboard::state::page_numbers;

/// Page buttons for the task list. Keeps clicks inside `1..=ceil(total_pages)`.
#[component]
pub fn PaginationBar(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<f64>,
    #[prop(into)] on_change_page: Callback<u32>,
) -> impl IntoView {
    move || {
        let pages = page_numbers(total_pages.get());
        if pages.is_empty() {
            return view! {}.into_any();
        }
        let current = current_page.get();
        let last = pages.len() as u32;

        view! {
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled={current <= 1}
                    on:click=move |_| on_change_page.run(current.saturating_sub(1).max(1))
                >"Prev"</button>
                {pages
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="page-btn"
                                class:active={page == current}
                                on:click=move |_| on_change_page.run(page)
                            >{page}</button>
                        }
                    })
                    .collect_view()}
                <button
                    class="page-btn"
                    disabled={current >= last}
                    on:click=move |_| on_change_page.run((current + 1).min(last))
                >"Next"</button>
            </nav>
        }
        .into_any()
    }
}
