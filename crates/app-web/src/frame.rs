use crate::bridge::PendingFrame;
use crate::dom;
use crate::surface::JsFluidSurface;
use app_core::{classify_hands, EffectEngine, FrameInput, HandFrame, NullSurface};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-animation-frame tick touches. Single-threaded by
/// construction; only the RAF closure and the JS-facing facade borrow it.
pub struct FrameContext {
    pub engine: EffectEngine,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<JsFluidSurface>,
    pub pending: PendingFrame,
    pub mirror: bool,
    pub started: Instant,
    hands: [Option<HandFrame>; 2],
}

impl FrameContext {
    pub fn new(canvas: web::HtmlCanvasElement, mirror: bool, seed: u64) -> Self {
        Self {
            engine: EffectEngine::new(seed),
            canvas,
            surface: None,
            pending: PendingFrame::default(),
            mirror,
            started: Instant::now(),
            hands: [None, None],
        }
    }

    /// One animation frame: fold in the newest recognizer result if one
    /// arrived, then run the engine. Between recognizer results the last
    /// classified hands are reused so time-driven effects keep animating.
    pub fn frame(&mut self) {
        if let Some(raw) = self.pending.take() {
            self.hands = classify_hands(&raw, self.mirror);
        }
        let input = FrameInput {
            time_sec: self.started.elapsed().as_secs_f64(),
            metrics: dom::canvas_metrics(&self.canvas),
            hands: self.hands.clone(),
        };
        match &mut self.surface {
            Some(surface) => self.engine.update(&input, surface),
            None => self.engine.update(&input, &mut NullSurface),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
