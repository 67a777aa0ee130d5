#![cfg(target_arch = "wasm32")]
mod bridge;
mod dom;
mod frame;
mod surface;

use frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use surface::JsFluidSurface;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");
    Ok(())
}

/// JS-facing facade over the gesture-to-force engine.
///
/// The page glue constructs one per canvas, attaches its fluid-simulation
/// object, then feeds recognizer results in: `push_hand` once per detected
/// hand, `commit_frame` once per recognizer callback. `run` starts the
/// animation-frame loop that drives the engine.
#[wasm_bindgen]
pub struct GestureApp {
    ctx: Rc<RefCell<FrameContext>>,
}

#[wasm_bindgen]
impl GestureApp {
    /// `mirror` should be true for selfie-view video, which is the usual
    /// webcam setup; it swaps handedness and flips landmark x.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, mirror: bool, seed: u32) -> Result<GestureApp, JsValue> {
        let canvas = dom::get_canvas(canvas_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        dom::sync_canvas_backing_size(&canvas);
        dom::watch_resize(&canvas);
        log::info!("[app] canvas #{canvas_id} {}x{}", canvas.width(), canvas.height());
        Ok(GestureApp {
            ctx: Rc::new(RefCell::new(FrameContext::new(canvas, mirror, seed as u64))),
        })
    }

    /// Attach (or replace) the fluid-simulation object splats and synthetic
    /// touches are sent to. Works with partial objects; missing methods are
    /// skipped per call.
    pub fn attach_fluid(&self, sim: JsValue) {
        self.ctx.borrow_mut().surface = Some(JsFluidSurface::new(sim));
    }

    /// One recognized hand for the frame being assembled. `landmarks` is the
    /// flat `[x0, y0, z0, ...]` layout, 21 landmarks in video space.
    pub fn push_hand(&self, handedness: &str, category: &str, landmarks: &[f32]) {
        self.ctx
            .borrow_mut()
            .pending
            .push_hand(handedness, category, landmarks);
    }

    /// Seal the pushed hands into the result the next animation frame will
    /// consume. Call once per recognizer callback, even with zero hands.
    pub fn commit_frame(&self) {
        self.ctx.borrow_mut().pending.commit();
    }

    /// Start the requestAnimationFrame loop. Call once.
    pub fn run(&self) {
        frame::start_loop(self.ctx.clone());
    }

    /// Drop all engine state, for a camera or recognizer restart.
    pub fn reset(&self) {
        self.ctx.borrow_mut().engine.reset();
    }
}
