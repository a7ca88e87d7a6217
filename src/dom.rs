use crate::constants::RIPPLE_CLASS;
use crate::style;
use ripple_core::{MotionFrame, Ripple, SurfaceMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Snapshot of the surface's viewport rectangle.
pub fn measure_surface(surface: &web::HtmlElement) -> SurfaceMetrics {
    let rect = surface.get_bounding_client_rect();
    SurfaceMetrics::new(
        rect.width() as f32,
        rect.height() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Make the surface a clipping containing block for ripple elements.
pub fn prepare_surface(surface: &web::HtmlElement) {
    let css = surface.style();
    let position = web::window()
        .and_then(|w| w.get_computed_style(surface).ok().flatten())
        .and_then(|computed| computed.get_property_value("position").ok())
        .unwrap_or_default();
    if style::needs_positioning(&position) {
        _ = css.set_property("position", "relative");
    }
    _ = css.set_property("overflow", "hidden");
}

pub fn create_ripple_element(
    document: &web::Document,
    surface: &web::HtmlElement,
    ripple: &Ripple,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
    el.set_class_name(RIPPLE_CLASS);
    _ = el.set_attribute("aria-hidden", "true");
    _ = el.set_attribute(
        "style",
        &style::ripple_base_style(ripple.descriptor.initial_size),
    );
    let css = el.style();
    if css.set_property("background", &ripple.color).is_err() {
        log::warn!("[ripple] color {:?} rejected", ripple.color);
    }
    _ = css.set_property(
        "transform",
        &style::transform_value(&MotionFrame {
            offset: ripple.descriptor.initial_offset,
            scale: 1.0,
            opacity: 0.0,
        }),
    );
    surface
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

#[inline]
pub fn apply_frame(el: &web::HtmlElement, frame: &MotionFrame) {
    let css = el.style();
    _ = css.set_property("transform", &style::transform_value(frame));
    _ = css.set_property("opacity", &style::opacity_value(frame));
}
