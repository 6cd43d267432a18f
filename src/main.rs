//! Todo List Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;

use app::App;
use leptos::prelude::*;

/// Console log level for the whole app
const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    mount_to_body(App);
}
