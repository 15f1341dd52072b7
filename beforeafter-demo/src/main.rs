//! beforeafter demo - desktop showcase for the comparison slider.

mod app;
mod config;

fn main() {
    env_logger::init();
    log::info!("Starting beforeafter demo");
    dioxus::launch(app::App);
}
