use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::DashboardConfig;
use crate::core::services::add_todo;
use crate::features::dashboard::components::{
    Calendar, DatesLister, Navbar, PaginationBar, TaskCard, TaskEditor, TaskPreview, Welcome,
};
use crate::features::dashboard::hooks::{use_display, use_media_query, use_todos, TodosHook};
use crate::features::dashboard::state::{
    DisplayMode, MonthNavigator, NewTodo, Pagination, TaskListView, TaskSelection,
};
use crate::models::{TodoTask, User};
use crate::utils::get_greeting;

#[component]
pub fn Home(user: User) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let display = use_display();
    let TodosHook { state: todos, refetch } = use_todos(user.id.clone(), config.refetch_interval_secs);

    let selection = RwSignal::new(TaskSelection::default());
    let navigator = RwSignal::new(MonthNavigator::new(Local::now().date_naive()));
    let pagination = RwSignal::new(Pagination::new(config.page_size));

    let is_above_lg_screen = use_media_query(&config.wide_media_query());
    let week_start = config.week_start();

    let selected_date = Memo::new(move |_| navigator.with(|nav| nav.selected_date()));
    let current_month = Memo::new(move |_| navigator.with(|nav| nav.current_month()));
    let current_page = Memo::new(move |_| pagination.with(|p| p.current_page()));
    let total_pages = Memo::new(move |_| {
        let count = todos.with(|state| state.data().map(Vec::len));
        pagination.with(|p| p.total_pages(count))
    });
    let active_task = Memo::new(move |_| -> Option<TodoTask> {
        let id = selection.with(|s| s.selected())?;
        todos.with(|state| state.data().and_then(|tasks| tasks.iter().find(|t| t.id == id).cloned()))
    });

    let handle_prev_month = Callback::new(move |day: NaiveDate| navigator.update(|nav| nav.go_to_previous_month(day)));
    let handle_next_month = Callback::new(move |day: NaiveDate| navigator.update(|nav| nav.go_to_next_month(day)));
    let handle_date_click = Callback::new(move |day: NaiveDate| {
        let outcome = navigator.try_update(|nav| nav.select_date(day));
        tracing::debug!(%day, ?outcome, "date clicked");
    });
    let handle_page_change = Callback::new(move |page: u32| pagination.update(|p| p.set_page(page)));
    let toggle_task = Callback::new(move |id: i64| {
        let selected = selection.try_update(|s| {
            s.toggle(id);
            s.selected()
        });
        if let Some(selected) = selected {
            display.follow_selection(selected);
        }
    });

    let create_task = Callback::new(move |_: ()| {
        if display.current() != DisplayMode::Editor {
            display.switch_mode(DisplayMode::Editor);
        }
    });
    let submit_task = {
        let user_id = user.id.clone();
        Callback::new(move |todo: NewTodo| {
            let user_id = user_id.clone();
            spawn_local(async move {
                match add_todo(&user_id, &todo).await {
                    Ok(()) => {
                        refetch.run(());
                        display.switch_mode(DisplayMode::Calendar);
                    }
                    Err(error) => tracing::error!(%error, "failed to create todo"),
                }
            });
        })
    };

    let task_list = move || {
        let list = todos.with(|state| selection.with(|s| TaskListView::project(state, s)));
        match list {
            TaskListView::Loading => view! {
                <div class="tasks-loading">
                    <div class="spinner"></div>
                    <span>"Loading todos..."</span>
                </div>
            }
            .into_any(),
            TaskListView::Empty => view! { <div class="tasks-empty">"No task yet"</div> }.into_any(),
            TaskListView::Failed(message) => view! {
                <div class="tasks-error" role="alert">{format!("Couldn't load your tasks: {message}")}</div>
            }
            .into_any(),
            TaskListView::Rows(rows) => rows
                .into_iter()
                .map(|row| view! { <TaskCard task=row.task active=row.active on_toggle=toggle_task /> })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="home-page">
            <Navbar />
            <main class="dashboard">
                <Welcome
                    greeting=get_greeting()
                    task_highlight=config.task_highlight.clone()
                    create_task=create_task
                />
                <div class="dashboard-body">
                    <div class="task-column">
                        <DatesLister
                            selected_date=selected_date
                            handle_date_click=handle_date_click
                            week_start=week_start
                        />
                        <div class="task-list">
                            <h1 class="task-list-title">"My Tasks"</h1>
                            {task_list}
                            <PaginationBar
                                current_page=current_page
                                total_pages=total_pages
                                on_change_page=handle_page_change
                            />
                        </div>
                    </div>
                    <aside
                        class="side-panel"
                        class:side-panel-wide=move || is_above_lg_screen.get()
                        class:side-panel-docked=move || !is_above_lg_screen.get()
                    >
                        {move || display.flow().preview.then(|| view! { <TaskPreview task=active_task /> })}
                        {move || display.flow().editor.then(|| view! { <TaskEditor default_date=selected_date on_submit=submit_task /> })}
                        {move || {
                            display.flow().calendar.then(|| {
                                view! {
                                    <Calendar
                                        selected_date=selected_date
                                        current_month=current_month
                                        handle_date_click=handle_date_click
                                        handle_prev_month=handle_prev_month
                                        handle_next_month=handle_next_month
                                        week_start=week_start
                                    />
                                }
                            })
                        }}
                    </aside>
                </div>
            </main>
        </div>
    }
}
