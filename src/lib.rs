#![cfg(target_arch = "wasm32")]
use heart_core::{Clock, Scene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heartfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let seed: u64 = rand::random();
    log::info!("[scene] seed={:#018x}", seed);
    let mut scene = Scene::new(SceneParams::default(), seed)?;
    scene.set_viewport(canvas.width(), canvas.height());
    let scene = Rc::new(RefCell::new(scene));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    let renderer = frame::init_renderer(&canvas);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock: Clock::default(),
        canvas,
        renderer,
        frame_count: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
