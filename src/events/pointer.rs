use crate::dom;
use crate::input;
use heart_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let hit = w.scene.borrow_mut().update_hover(ndc);
        dom::set_body_cursor(if hit.is_some() { "pointer" } else { "default" });
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
