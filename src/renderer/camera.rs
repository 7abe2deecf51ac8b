//! Camera and per-shape transforms

use glam::{Mat4, Vec2, Vec3};

/// Camera that stretches a `screen`-sized world over a window of
/// `window_px` pixels, so the game fills any window size
pub fn camera_for_window(window_px: Vec2, screen: Vec2) -> Mat4 {
    let sx = if window_px.x > 0.0 { screen.x / window_px.x } else { 1.0 };
    let sy = if window_px.y > 0.0 { screen.y / window_px.y } else { 1.0 };
    Mat4::from_scale(Vec3::new(sx, sy, 1.0))
}

/// Transform placing a rect of `size` so that `center` is its middle
#[inline]
pub fn centered_rect_xform(center: Vec2, size: Vec2) -> Mat4 {
    corner_rect_xform(center - size / 2.0)
}

/// Transform placing a rect's bottom-left corner at `corner`
#[inline]
pub fn corner_rect_xform(corner: Vec2) -> Mat4 {
    Mat4::from_translation(corner.extend(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_scale() {
        let cam = camera_for_window(Vec2::new(640.0, 360.0), Vec2::new(320.0, 180.0));
        let p = cam.transform_point3(Vec3::new(100.0, 50.0, 0.0));
        assert_eq!(p, Vec3::new(50.0, 25.0, 0.0));

        // Minimised window: leave the world unscaled
        assert_eq!(camera_for_window(Vec2::ZERO, Vec2::new(320.0, 180.0)), Mat4::IDENTITY);
    }

    #[test]
    fn test_centered_rect() {
        let xf = centered_rect_xform(Vec2::new(10.0, 0.0), Vec2::new(10.0, 40.0));
        assert_eq!(xf.transform_point3(Vec3::ZERO), Vec3::new(5.0, -20.0, 0.0));
    }
}
