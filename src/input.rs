use glam::Vec2;
use web_sys as web;

/// Map a CSS-pixel offset inside a `width` x `height` rect to normalized
/// device coordinates (x right, y up). Returns `None` outside the rect or for
/// a degenerate rect.
#[inline]
pub fn css_to_ndc(x_css: f32, y_css: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let u = x_css / width;
    let v = y_css / height;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some(Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0))
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}
