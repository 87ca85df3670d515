//! Client-side entrypoint: panic hook, console logging, mount.

use huskymap::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logging already initialized".into());
    }
    leptos::mount::mount_to_body(App);
}
