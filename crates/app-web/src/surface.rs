use app_core::{Color, FluidSurface, Splat, TouchPoint};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;

/// [`FluidSurface`] backed by a JS fluid-simulation object. Methods are
/// looked up by name on every call and silently skipped when absent, so the
/// engine keeps running against a sim that is still loading or only
/// implements part of the surface.
pub struct JsFluidSurface {
    target: Object,
}

impl JsFluidSurface {
    pub fn new(target: JsValue) -> Self {
        Self {
            target: Object::from(target),
        }
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn call_touch(&self, name: &str, points: &[TouchPoint]) {
        let Some(f) = self.method(name) else { return };
        let event = touch_event(points);
        if let Err(e) = f.call1(&self.target, &event) {
            log::warn!("[surface] {name} failed: {e:?}");
        }
    }
}

impl FluidSurface for JsFluidSurface {
    fn splat(&mut self, splat: &Splat) {
        let Some(f) = self.method("createSplat") else {
            return;
        };
        let args = Array::of5(
            &splat.pos.x.into(),
            &splat.pos.y.into(),
            &splat.force.x.into(),
            &splat.force.y.into(),
            &color_object(splat.color),
        );
        if let Err(e) = f.apply(&self.target, &args) {
            log::warn!("[surface] createSplat failed: {e:?}");
        }
    }

    fn touch_start(&mut self, points: &[TouchPoint]) {
        self.call_touch("sendTouchStart", points);
    }

    fn touch_move(&mut self, points: &[TouchPoint]) {
        self.call_touch("sendTouchMove", points);
    }

    fn touch_end(&mut self, points: &[TouchPoint]) {
        self.call_touch("sendTouchEnd", points);
    }
}

fn color_object(color: Color) -> JsValue {
    let obj = Object::new();
    let _ = Reflect::set(&obj, &"r".into(), &color.r.into());
    let _ = Reflect::set(&obj, &"g".into(), &color.g.into());
    let _ = Reflect::set(&obj, &"b".into(), &color.b.into());
    obj.into()
}

/// Build a touch-event shaped object: `{ touches: [{identifier, pageX,
/// pageY}, ...] }`, mirroring what the sim's real touch handlers receive.
fn touch_event(points: &[TouchPoint]) -> JsValue {
    let touches = Array::new();
    for p in points {
        let t = Object::new();
        let _ = Reflect::set(&t, &"identifier".into(), &p.id.into());
        let _ = Reflect::set(&t, &"pageX".into(), &p.page.x.into());
        let _ = Reflect::set(&t, &"pageY".into(), &p.page.y.into());
        touches.push(&t);
    }
    let event = Object::new();
    let _ = Reflect::set(&event, &"touches".into(), &touches);
    event.into()
}
