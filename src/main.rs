//! Browser entry point: installs the panic hook and console logger, then
//! mounts the application to `<body>`.

#[cfg(feature = "hydrate")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(askboard::app::App);
}

#[cfg(not(feature = "hydrate"))]
fn main() {
    // Native builds exist only to run the test suite.
}
