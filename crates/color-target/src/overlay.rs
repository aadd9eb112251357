//! Debug drawing of detection results onto a caller-supplied frame.
//!
//! Purely observational: writes pixels into the given [`RgbFrame`] and
//! nothing else.

use nalgebra::Point2;

use color_target_core::RgbFrame;

const HULL_COLOR: [u8; 3] = [0, 255, 0];
const SHAPE_COLOR: [u8; 3] = [0, 0, 255];
const CENTER_COLOR: [u8; 3] = [255, 0, 0];

fn draw_line(frame: &mut RgbFrame, a: Point2<f32>, b: Point2<f32>, rgb: [u8; 3]) {
    let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil() as i32;
    if steps == 0 {
        frame.put(a.x.round() as i32, a.y.round() as i32, rgb);
        return;
    }
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = a.x + (b.x - a.x) * t;
        let y = a.y + (b.y - a.y) * t;
        frame.put(x.round() as i32, y.round() as i32, rgb);
    }
}

fn draw_circle_outline(frame: &mut RgbFrame, cx: f32, cy: f32, radius: f32, rgb: [u8; 3]) {
    let steps = (radius.max(1.0) * 8.0) as i32;
    for i in 0..steps {
        let t = i as f32 / steps as f32 * std::f32::consts::TAU;
        let x = cx + radius * t.cos();
        let y = cy + radius * t.sin();
        frame.put(x.round() as i32, y.round() as i32, rgb);
    }
}

fn draw_rect_outline(frame: &mut RgbFrame, x0: i32, y0: i32, x1: i32, y1: i32, rgb: [u8; 3]) {
    for x in x0..=x1 {
        frame.put(x, y0, rgb);
        frame.put(x, y1, rgb);
    }
    for y in y0..=y1 {
        frame.put(x0, y, rgb);
        frame.put(x1, y, rgb);
    }
}

fn draw_dot(frame: &mut RgbFrame, x: i32, y: i32, rgb: [u8; 3]) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            frame.put(x + dx, y + dy, rgb);
        }
    }
}

/// Draw hull outline, enclosing circle, bounding rectangle and centroid
/// marker for one detected target.
pub(crate) fn draw_target(
    frame: &mut RgbFrame,
    hull: &[Point2<f32>],
    circle_center: Point2<f32>,
    radius: f32,
    rect: (i32, i32, i32, i32),
    center: (i32, i32),
) {
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        draw_line(frame, a, b, HULL_COLOR);
    }
    draw_circle_outline(frame, circle_center.x, circle_center.y, radius, SHAPE_COLOR);
    draw_rect_outline(frame, rect.0, rect.1, rect.2, rect.3, SHAPE_COLOR);
    draw_dot(frame, center.0, center.1, CENTER_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_stays_inside_the_frame() {
        let mut frame = RgbFrame::black(10, 10);
        draw_circle_outline(&mut frame, 0.0, 0.0, 50.0, SHAPE_COLOR);
        draw_rect_outline(&mut frame, -5, -5, 20, 20, SHAPE_COLOR);
        draw_dot(&mut frame, 0, 0, CENTER_COLOR);
        assert_eq!(frame.data.len(), 10 * 10 * 3);
    }

    #[test]
    fn line_endpoints_are_painted() {
        let mut frame = RgbFrame::black(8, 8);
        draw_line(
            &mut frame,
            Point2::new(1.0, 1.0),
            Point2::new(6.0, 4.0),
            HULL_COLOR,
        );
        assert_eq!(&frame.data[(8 + 1) * 3..(8 + 1) * 3 + 3], HULL_COLOR);
        assert_eq!(&frame.data[(4 * 8 + 6) * 3..(4 * 8 + 6) * 3 + 3], HULL_COLOR);
    }
}
