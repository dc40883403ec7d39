mod app;
mod bridge;
mod config;
mod dto;

pub mod components {
    pub mod feed;
    pub mod report_form;
}

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(app::App);
}
