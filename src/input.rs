use glam::Vec2;
use web_sys as web;

/// Latest pointer position in normalized device coordinates (`y` up).
/// `None` until the first pointer event and after the pointer leaves.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc: Option<Vec2>,
}

/// Scroll gesture pixels waiting for the next frame.
#[derive(Default, Clone, Copy)]
pub struct PendingScroll {
    pub pixels: f32,
    pub touch_y: Option<f32>,
}

impl PendingScroll {
    #[inline]
    pub fn push(&mut self, pixels: f32) {
        if pixels.is_finite() {
            self.pixels += pixels;
        }
    }

    #[inline]
    pub fn take(&mut self) -> f32 {
        std::mem::take(&mut self.pixels)
    }
}

#[inline]
pub fn uv_to_ndc(uv: [f32; 2]) -> Vec2 {
    Vec2::new(uv[0] * 2.0 - 1.0, 1.0 - uv[1] * 2.0)
}

/// Convert a wheel delta in the event's delta mode to pixels.
///
/// Modes follow the DOM constants: 0 pixels, 1 lines, 2 pages.
#[inline]
pub fn wheel_delta_pixels(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * line_px,
        2 => d * page_px,
        _ => d,
    }
}

/// Pixels a native scroll container would move for a navigation key.
#[inline]
pub fn key_scroll_pixels(key: &str, shift: bool, line_px: f32, page_px: f32) -> Option<f32> {
    match key {
        "ArrowDown" => Some(line_px),
        "ArrowUp" => Some(-line_px),
        "PageDown" => Some(page_px),
        "PageUp" => Some(-page_px),
        " " if shift => Some(-page_px),
        " " => Some(page_px),
        _ => None,
    }
}

// ---------------- DOM event helpers ----------------
#[inline]
pub fn client_uv(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        [(x_css / w).clamp(0.0, 1.0), (y_css / h).clamp(0.0, 1.0)]
    } else {
        [0.5, 0.5]
    }
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    uv_to_ndc(client_uv(ev.client_x() as f32, ev.client_y() as f32, canvas))
}

#[inline]
pub fn canvas_css_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height().max(1.0) as f32
}
