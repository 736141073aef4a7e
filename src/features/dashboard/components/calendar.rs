use chrono::{Datelike, Local, NaiveDate, Weekday};
use leptos::prelude::*;

use crate::features::dashboard::state::{month_grid, same_month, weekday_labels};

#[component]
pub fn Calendar(
    #[prop(into)] selected_date: Signal<NaiveDate>,
    #[prop(into)] current_month: Signal<NaiveDate>,
    #[prop(into)] handle_date_click: Callback<NaiveDate>,
    #[prop(into)] handle_prev_month: Callback<NaiveDate>,
    #[prop(into)] handle_next_month: Callback<NaiveDate>,
    week_start: Weekday,
) -> impl IntoView {
    let today = Local::now().date_naive();

    view! {
        <div class="calendar">
            <div class="calendar-header">
                <button
                    class="calendar-nav"
                    title="Previous month"
                    on:click=move |_| handle_prev_month.run(current_month.get_untracked())
                >"‹"</button>
                <h3>{move || current_month.get().format("%B %Y").to_string()}</h3>
                <button
                    class="calendar-nav"
                    title="Next month"
                    on:click=move |_| handle_next_month.run(current_month.get_untracked())
                >"›"</button>
            </div>
            <div class="calendar-weekdays">
                {weekday_labels(week_start)
                    .into_iter()
                    .map(|label| view! { <span>{label}</span> })
                    .collect_view()}
            </div>
            <div class="calendar-grid">
                {move || {
                    let month = current_month.get();
                    let selected = selected_date.get();
                    month_grid(month, week_start)
                        .into_iter()
                        .map(|day| {
                            view! {
                                <button
                                    class="calendar-day"
                                    class:outside={!same_month(day, month)}
                                    class:selected={day == selected}
                                    class:today={day == today}
                                    on:click=move |_| handle_date_click.run(day)
                                >{day.day()}</button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
