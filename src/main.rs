mod app;
mod commands;
mod components;
mod dom;
mod logging;
mod pages;
mod scroll;
mod state;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
