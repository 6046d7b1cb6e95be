//! Sequencer Hub Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod ids;
mod manager;
mod models;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
