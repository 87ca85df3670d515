//! Window-level helpers: alert dialogs and full page reloads.
//!
//! Failure handling in this app is catch-and-alert: a failed fetch surfaces
//! one dialog and aborts the operation. These wrappers log the rare cases
//! where the browser refuses the call instead of silently discarding them.

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window for alert: {message}");
        return;
    };
    if window.alert_with_message(message).is_err() {
        log::error!("alert failed: {message}");
    }
}

/// Reload the page, dropping all view state.
pub fn reload() {
    let Some(window) = web_sys::window() else {
        log::error!("no window for reload");
        return;
    };
    if window.location().reload().is_err() {
        log::error!("page reload failed");
    }
}
