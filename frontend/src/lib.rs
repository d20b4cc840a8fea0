pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the router.
pub fn start() {
    init_logging();
    log::info!("Starting HR portal frontend");

    // Config resolves in the background; API calls await it on first use.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}
