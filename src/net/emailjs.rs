//! Binding to the third-party `emailjs` relay loaded by `index.html`.
//!
//! Delivery is handled entirely by the external provider; this module only
//! marshals the template parameters and awaits the relay promise.

use wasm_bindgen::prelude::*;

/// EmailJS service routing the relay.
const SERVICE_ID: &str = "default_service";
/// Email template holding the directions layout.
const TEMPLATE_ID: &str = "uw_campusmap";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    async fn emailjs_send(
        service_id: &str,
        template_id: &str,
        template_params: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// Relay the walking directions to `to_email` through the external
/// email template. `start` and `end` are the buildings' long names.
///
/// # Errors
///
/// Returns a display string when the relay rejects the send or the
/// template parameters cannot be marshaled.
pub async fn send_directions(
    to_email: &str,
    start: &str,
    end: &str,
    path_directions: &str,
) -> Result<(), String> {
    let params = js_sys::Object::new();
    for (key, value) in [
        ("to_email", to_email),
        ("start", start),
        ("end", end),
        ("path_directions", path_directions),
    ] {
        js_sys::Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(|_| format!("failed to set template param {key}"))?;
    }

    emailjs_send(SERVICE_ID, TEMPLATE_ID, &params)
        .await
        .map(|_| ())
        .map_err(|err| js_error_message(&err))
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
