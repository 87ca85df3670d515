//! Canvas component that renders the campus map and the fetched path.
//!
//! Bridge between the reactive page state and the imperative renderer in
//! [`crate::map::render`]: the background image loads once on mount, and a
//! redraw effect fires whenever the image or the segment list changes.

use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::map::render;
use crate::state::path::PathState;

/// Source path of the campus map bitmap, served alongside the app.
const MAP_IMAGE_SRC: &str = "/campus_map.jpg";

/// Map canvas — draws the background image once loaded and redraws the
/// path overlay whenever the fetched segments change.
#[component]
pub fn MapView() -> impl IntoView {
    let path = expect_context::<RwSignal<PathState>>();
    let canvas_ref = NodeRef::<Canvas>::new();

    // The image element is browser-only state, kept out of the shared
    // (thread-safe) signals.
    let image = RwSignal::new_local(None::<HtmlImageElement>);
    load_background(image);

    Effect::new(move || {
        let segments = path.get().segments;
        let img = image.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            return;
        };
        if let Err(err) = render::draw(&canvas, &ctx, img.as_ref(), &segments) {
            log::error!("map render failed: {err:?}");
        }
    });

    view! {
        <div class="map-view">
            <canvas node_ref=canvas_ref>"Your browser does not support canvas."</canvas>
        </div>
    }
}

/// Kick off loading the map bitmap; the signal fires once the image is
/// decoded and ready to draw.
fn load_background(image: RwSignal<Option<HtmlImageElement>, LocalStorage>) {
    let Ok(element) = HtmlImageElement::new() else {
        log::error!("failed to create background image element");
        return;
    };
    let onload = Closure::<dyn FnMut()>::new({
        let element = element.clone();
        move || image.set(Some(element.clone()))
    });
    element.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The handler must outlive this function; the leak is one closure for
    // the lifetime of the page.
    onload.forget();
    element.set_src(MAP_IMAGE_SRC);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let Ok(Some(ctx)) = canvas.get_context("2d") else {
        return None;
    };
    match ctx.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
