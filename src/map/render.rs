//! Rendering: draws the campus map scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives the background image
//! and the path segments and produces pixels; it does not mutate any
//! application state.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::net::types::Segment;

/// Path stroke width in canvas pixels.
const PATH_LINE_WIDTH: f64 = 7.0;

/// Path stroke color.
const PATH_STROKE: &str = "red";

/// Draw the full scene: background map image, then path segments on top.
///
/// Sizes the canvas backing store to the image's natural dimensions so the
/// bitmap renders unscaled and the pixel-space path coordinates stay
/// accurate (this also keeps the canvas from going blurry).
///
/// # Errors
///
/// Returns `Err` if drawing the background image fails.
pub fn draw(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    image: Option<&HtmlImageElement>,
    segments: &[Segment],
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));

    if let Some(image) = image {
        canvas.set_width(image.natural_width());
        canvas.set_height(image.natural_height());
        ctx.draw_image_with_html_image_element(image, 0.0, 0.0)?;
    }

    for segment in segments {
        draw_segment(ctx, segment);
    }

    Ok(())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    ctx.set_line_width(PATH_LINE_WIDTH);
    ctx.set_stroke_style_str(PATH_STROKE);
    ctx.begin_path();
    ctx.move_to(segment.start.x, segment.start.y);
    ctx.line_to(segment.end.x, segment.end.y);
    ctx.stroke();
}
