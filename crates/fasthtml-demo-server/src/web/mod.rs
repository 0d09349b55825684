// ABOUTME: Page and fragment handlers serving HTML via Askama templates and HTMX.
// ABOUTME: Fragments swap outerHTML against stable ids: #counter, #todo-list, #system-info.

use axum::extract::{Form, State};
use serde::Deserialize;

use fasthtml_demo_core::SystemSnapshot;

use crate::app_state::SharedState;

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;

/// Full index page: header, counter demo, todo demo, system info panel,
/// and the launch-options help section.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub os: &'static str,
    pub arch: &'static str,
    pub host: String,
    pub port: u16,
    pub count: u64,
    pub todos: Vec<String>,
    pub info: SystemSnapshot,
}

/// GET / - Render the main page with the current state.
pub async fn index(State(state): State<SharedState>) -> IndexTemplate {
    let snapshot = state.demo.read().await.snapshot();
    IndexTemplate {
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        host: state.host.clone(),
        port: state.port,
        count: snapshot.counter,
        todos: snapshot.todos,
        info: SystemSnapshot::capture(state.packaged),
    }
}

/// Fragment: the counter display span.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/counter.html")]
pub struct CounterTemplate {
    pub count: u64,
}

/// POST /increment - Bump the counter, return the refreshed counter span.
pub async fn increment(State(state): State<SharedState>) -> CounterTemplate {
    let count = state.demo.write().await.increment();
    CounterTemplate { count }
}

/// Fragment: the full todo list.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/todo_list.html")]
pub struct TodoListTemplate {
    pub todos: Vec<String>,
}

/// Form data for adding a todo. A missing `task` field is rejected by the
/// extractor before the handler runs; an empty value is accepted verbatim.
#[derive(Deserialize)]
pub struct AddTodoForm {
    pub task: String,
}

/// POST /add-todo - Append the task, return the re-rendered list.
pub async fn add_todo(
    State(state): State<SharedState>,
    Form(form): Form<AddTodoForm>,
) -> TodoListTemplate {
    let todos = state.demo.write().await.add_task(form.task).to_vec();
    TodoListTemplate { todos }
}

/// Fragment: the system information panel.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/system_info.html")]
pub struct SystemInfoTemplate {
    pub info: SystemSnapshot,
}

/// GET /system-info - Capture fresh process facts, return the refreshed panel.
pub async fn system_info(State(state): State<SharedState>) -> SystemInfoTemplate {
    SystemInfoTemplate {
        info: SystemSnapshot::capture(state.packaged),
    }
}
