//! Browser entry point: install logging, then mount the app.

#[cfg(feature = "csr")]
fn main() {
    use escrow_client::app::App;
    use escrow_client::config::ClientConfig;

    console_error_panic_hook::set_once();
    let config = ClientConfig::from_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("escrow client starting against {}", config.api_base_url);
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
