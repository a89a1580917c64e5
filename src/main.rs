//! To-Do Frontend Entry Point

mod models;
mod error;
mod config;
mod storage;
mod capacity;
mod serializer;
mod task_store;
mod tasks;
mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    mount_to_body(App);
}
