#![cfg(target_arch = "wasm32")]
use crate::core::{Scene, SceneConfig, ViewportProfile};
use instant::Instant;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod mips;
mod navigate;
mod render;
mod textures;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        let target: web::EventTarget = window.unchecked_into();
        dom::add_listener(&target, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

// Per-frame callbacks end together when the page goes away.
fn wire_teardown(handle: frame::LoopHandle) {
    if let Some(window) = web::window() {
        let target: web::EventTarget = window.unchecked_into();
        dom::add_listener(&target, "pagehide", move |_ev: web::Event| handle.stop());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ring-carousel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
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
    wire_canvas_resize(&canvas);

    // Device class is decided exactly once, here.
    let profile = ViewportProfile::from_user_agent(&dom::user_agent(&window));
    let scene = Scene::new(profile, SceneConfig::default());
    log::info!(
        "[scene] device={:?} cards={} camera=({:.1},{:.1},{:.1}) fov={} env={}",
        profile.device,
        scene.cards.len(),
        profile.camera_position.x,
        profile.camera_position.y,
        profile.camera_position.z,
        profile.fov_degrees,
        scene.config.environment.preset,
    );

    let gpu = frame::init_gpu(&canvas, &scene).await?;

    let images: textures::ImageInbox = Rc::new(RefCell::new(Vec::new()));
    let urls: BTreeSet<String> = scene
        .cards
        .iter()
        .map(|c| c.descriptor.image_url.clone())
        .chain(std::iter::once(constants::LOGO_URL.to_string()))
        .collect();
    textures::spawn_fetches(urls, images.clone());

    let scene = Rc::new(RefCell::new(scene));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let pending_scroll = Rc::new(RefCell::new(input::PendingScroll::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: pointer.clone(),
        pending_scroll: pending_scroll.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        pointer,
        pending_scroll,
        images,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    let handle = frame::start_loop(frame_ctx);
    wire_teardown(handle);

    Ok(())
}
