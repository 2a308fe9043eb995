use crate::constants::FRAME_LOG_EVERY;
use crate::render;
use heart_core::{Clock, FrameClock, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub clock: Clock,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<render::CanvasRenderer>,
    pub frame_count: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time = self.clock.tick();
        let w = self.canvas.width();
        let h = self.canvas.height();

        {
            let mut scene = self.scene.borrow_mut();
            scene.set_viewport(w, h);
            scene.advance(time);
        }

        if let Some(r) = &mut self.renderer {
            r.resize_if_needed(w, h);
            if let Err(e) = r.draw(&self.scene.borrow()) {
                log::error!("[frame] render error: {:?}", e);
            }
        }

        self.frame_count += 1;
        if self.frame_count % FRAME_LOG_EVERY == 0 {
            let scene = self.scene.borrow();
            log::debug!(
                "[frame] n={} t={:.2}s dt={:.4}s hovered={:?} beating={}",
                self.frame_count,
                time.elapsed,
                time.delta,
                scene.hovered_index(),
                scene.main_heart().map_or(false, |h| h.is_beating()),
            );
        }
    }
}

pub fn init_renderer(canvas: &web::HtmlCanvasElement) -> Option<render::CanvasRenderer> {
    match render::CanvasRenderer::new(canvas) {
        Ok(r) => Some(r),
        Err(e) => {
            log::error!("canvas init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
