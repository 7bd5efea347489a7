use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{FrameInput, HoverEvent, Scene};
use crate::input;
use crate::render;
use crate::textures::ImageInbox;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub pending_scroll: Rc<RefCell<input::PendingScroll>>,
    pub images: ImageInbox,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let frame_input = FrameInput {
            pointer: self.pointer.borrow().ndc,
            scroll_pixels: self.pending_scroll.borrow_mut().take(),
            viewport_height: input::canvas_css_height(&self.canvas),
            aspect: self.gpu.aspect(),
        };

        let (next, events) = self.scene.borrow().update(dt_sec, &frame_input);
        for ev in &events {
            match ev {
                HoverEvent::Enter(i) => log::debug!("[scene] hover card {}", i),
                HoverEvent::Leave(i) => log::debug!("[scene] leave card {}", i),
            }
        }
        *self.scene.borrow_mut() = next;

        let images = std::mem::take(&mut *self.images.borrow_mut());
        if !images.is_empty() {
            self.gpu.upload_images(images);
        }

        let scene = self.scene.borrow();
        match self.gpu.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> anyhow::Result<render::GpuState> {
    render::GpuState::new(canvas, scene).await
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to the running requestAnimationFrame loop.
///
/// Stopping cancels the pending frame and drops the callback, so every
/// per-frame update ends together.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl LoopHandle {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
        raf_id: Rc::new(Cell::new(None)),
        tick: Rc::new(RefCell::new(None)),
    };
    let h = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !h.running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&h.tick, &h.raf_id);
    }) as Box<dyn FnMut()>));
    request_frame(&handle.tick, &handle.raf_id);
    handle
}
