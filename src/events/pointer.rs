use crate::core::Scene;
use crate::dom;
use crate::input;
use crate::navigate::LocationNavigator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub pending_scroll: Rc<RefCell<input::PendingScroll>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointer(&w);
    wire_click(&w);
    super::wire_wheel(&w);
    super::wire_touch(&w);
    super::wire_keys(&w);
}

fn wire_pointer(w: &InputWiring) {
    let target: web::EventTarget = w.canvas.clone().unchecked_into();

    let moved = w.clone();
    dom::add_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        moved.pointer.borrow_mut().ndc = Some(input::pointer_ndc(&ev, &moved.canvas));
    });

    // Leaving the canvas drops every hover.
    for event in ["pointerleave", "pointercancel"] {
        let left = w.clone();
        dom::add_listener(&target, event, move |_ev: web::PointerEvent| {
            left.pointer.borrow_mut().ndc = None;
        });
    }
}

// Taps often arrive without a preceding pointermove, so the click is hit
// tested at its own position rather than trusting the hover state.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().unchecked_into();
    dom::add_listener(&target, "click", move |ev: web::MouseEvent| {
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let scene = w.scene.borrow();
        if let Some(card) = scene.hit_test(ndc).and_then(|i| scene.cards.get(i)) {
            log::info!("[click] card {} ({})", card.descriptor.index, card.descriptor.image_url);
        }
        scene.click(ndc, &mut LocationNavigator);
    });
}
