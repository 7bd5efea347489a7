use super::InputWiring;
use crate::constants::{KEY_PAGE_FRACTION, KEY_SCROLL_PX, WHEEL_LINE_PX};
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().unchecked_into();
    dom::add_active_listener(&target, "wheel", move |ev: web::WheelEvent| {
        let page_px = input::canvas_css_height(&w.canvas);
        let px = input::wheel_delta_pixels(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, page_px);
        w.pending_scroll.borrow_mut().push(px);
        ev.prevent_default();
    });
}

pub fn wire_touch(w: &InputWiring) {
    let target: web::EventTarget = w.canvas.clone().unchecked_into();

    let start = w.clone();
    dom::add_active_listener(&target, "touchstart", move |ev: web::TouchEvent| {
        let y = ev.touches().get(0).map(|t| t.client_y() as f32);
        start.pending_scroll.borrow_mut().touch_y = y;
    });

    let moved = w.clone();
    dom::add_active_listener(&target, "touchmove", move |ev: web::TouchEvent| {
        let Some(y) = ev.touches().get(0).map(|t| t.client_y() as f32) else {
            return;
        };
        let mut pending = moved.pending_scroll.borrow_mut();
        if let Some(last) = pending.touch_y {
            // Dragging up scrolls forward, like a native scroll container.
            pending.push(last - y);
        }
        pending.touch_y = Some(y);
        ev.prevent_default();
    });

    let ended = w.clone();
    dom::add_listener(&target, "touchend", move |_ev: web::TouchEvent| {
        ended.pending_scroll.borrow_mut().touch_y = None;
    });
}

pub fn wire_keys(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    let target: web::EventTarget = window.unchecked_into();
    dom::add_listener(&target, "keydown", move |ev: web::KeyboardEvent| {
        let page_px = input::canvas_css_height(&w.canvas) * KEY_PAGE_FRACTION;
        if let Some(px) = input::key_scroll_pixels(&ev.key(), ev.shift_key(), KEY_SCROLL_PX, page_px)
        {
            w.pending_scroll.borrow_mut().push(px);
            ev.prevent_default();
        }
    });
}
