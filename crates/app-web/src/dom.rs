use app_core::CanvasMetrics;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn get_canvas(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {e:?}"))
}

/// Keep the canvas backing store at CSS size * devicePixelRatio so splat
/// coordinates line up with what the fluid sim renders.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width(((rect.width() * dpr) as u32).max(1));
        canvas.set_height(((rect.height() * dpr) as u32).max(1));
    }
}

/// Snapshot the canvas geometry for this frame's coordinate mappings.
pub fn canvas_metrics(canvas: &web::HtmlCanvasElement) -> CanvasMetrics {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    CanvasMetrics::new(canvas.width() as f32, canvas.height() as f32, dpr as f32)
}

/// Re-sync the backing size whenever the window resizes. The closure is
/// leaked intentionally; it lives as long as the page.
pub fn watch_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
