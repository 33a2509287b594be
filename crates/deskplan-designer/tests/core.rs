#[path = "core/arrangement.rs"]
mod arrangement;
#[path = "core/history.rs"]
mod history;
#[path = "core/routing.rs"]
mod routing;
