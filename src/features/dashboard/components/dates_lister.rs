use chrono::{Datelike, NaiveDate, Weekday};
use leptos::prelude::*;

use crate::features::dashboard::state::week_of;

// Horizontal strip with the week around the selected date
#[component]
pub fn DatesLister(
    #[prop(into)] selected_date: Signal<NaiveDate>,
    #[prop(into)] handle_date_click: Callback<NaiveDate>,
    week_start: Weekday,
) -> impl IntoView {
    view! {
        <div class="dates-lister">
            <h3 class="dates-month">{move || selected_date.get().format("%B %Y").to_string()}</h3>
            <div class="dates-strip">
                {move || {
                    let selected = selected_date.get();
                    week_of(selected, week_start)
                        .into_iter()
                        .map(|day| {
                            view! {
                                <button
                                    class="date-chip"
                                    class:selected={day == selected}
                                    on:click=move |_| handle_date_click.run(day)
                                >
                                    <span class="date-weekday">{day.format("%a").to_string()}</span>
                                    <span class="date-day">{day.day()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
