use frost_types::{Point, Rect};

/// Map a point in screenshot pixels to global desktop coordinates.
///
/// `screencapture` writes physical pixels while window frames are in
/// logical points, so on a Retina display the screenshot is larger than
/// the window it shows. The per-axis ratio between the window frame and
/// the screenshot recovers the logical offset, which is then shifted by
/// the window origin.
pub fn translate_to_screen(point: Point, shot_w: i32, shot_h: i32, window: Rect) -> Point {
    let scale_x = window.width as f64 / shot_w as f64;
    let scale_y = window.height as f64 / shot_h as f64;
    Point {
        x: window.x + (point.x as f64 * scale_x).round() as i32,
        y: window.y + (point.y as f64 * scale_y).round() as i32,
    }
}
