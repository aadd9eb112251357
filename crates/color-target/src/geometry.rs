//! Reduction of a binary mask to a single target's position and shape.
//!
//! The region of interest is the convex hull of the largest external
//! contour. From the hull: minimum-enclosing-circle radius (`size`),
//! axis-aligned bounding rectangle (`width`/`height` and orientation),
//! mass-weighted centroid from polygon moments, and the sign-classified
//! offset of the centroid from the frame center.

use log::{debug, warn};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use color_target_core::{BinaryMask, RgbFrame};

use crate::contour::external_contours;
use crate::overlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Horizontal placement of the target relative to the frame center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    Left,
    Right,
    Straight,
}

/// Vertical placement of the target relative to the frame center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    Up,
    Down,
    Straight,
}

/// Centroid in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCenter {
    pub x: i32,
    pub y: i32,
}

/// Geometry of the detected target, one record per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetGeometry {
    pub center: PixelCenter,
    /// Rounded radius of the hull's minimum enclosing circle.
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    /// Direction plus signed horizontal offset from the frame center.
    pub xpos: (HorizontalSide, f32),
    /// Direction plus signed vertical offset from the frame center.
    pub ypos: (VerticalSide, f32),
}

fn cross(o: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f64 {
    let (ax, ay) = ((a.x - o.x) as f64, (a.y - o.y) as f64);
    let (bx, by) = ((b.x - o.x) as f64, (b.y - o.y) as f64);
    ax * by - ay * bx
}

/// Convex hull via Andrew's monotone chain, counterclockwise in image
/// coordinates, no repeated endpoint.
pub fn convex_hull(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    let mut pts: Vec<Point2<f32>> = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point2<f32>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // chain endpoints repeat each other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn circle_from_two(a: Point2<f32>, b: Point2<f32>) -> (Point2<f32>, f32) {
    let center = Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    (center, (a - b).norm() / 2.0)
}

fn circle_from_three(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Option<(Point2<f32>, f32)> {
    let (px, py) = ((a.x - c.x) as f64, (a.y - c.y) as f64);
    let (qx, qy) = ((b.x - c.x) as f64, (b.y - c.y) as f64);
    let d = 2.0 * (px * qy - py * qx);
    if d.abs() < 1e-9 {
        return None; // collinear
    }
    let pp = px * px + py * py;
    let qq = qx * qx + qy * qy;
    let cx = c.x as f64 + (qy * pp - py * qq) / d;
    let cy = c.y as f64 + (px * qq - qx * pp) / d;
    let center = Point2::new(cx as f32, cy as f32);
    let r = (center - a).norm();
    Some((center, r))
}

fn encloses(center: Point2<f32>, radius: f32, p: Point2<f32>) -> bool {
    (p - center).norm() <= radius + 1e-4
}

/// Minimum enclosing circle of a point set (Welzl's scheme with explicit
/// one- and two-point boundary stages; the inputs here are small hulls).
pub fn min_enclosing_circle(points: &[Point2<f32>]) -> (Point2<f32>, f32) {
    match points {
        [] => return (Point2::new(0.0, 0.0), 0.0),
        [p] => return (*p, 0.0),
        _ => {}
    }

    let (mut center, mut radius) = (points[0], 0.0f32);
    for (i, &p) in points.iter().enumerate().skip(1) {
        if encloses(center, radius, p) {
            continue;
        }
        // p lies on the boundary
        let (mut c1, mut r1) = (p, 0.0f32);
        for (j, &q) in points[..i].iter().enumerate() {
            if encloses(c1, r1, q) {
                continue;
            }
            // p and q both lie on the boundary
            let (mut c2, mut r2) = circle_from_two(p, q);
            for &s in &points[..j] {
                if encloses(c2, r2, s) {
                    continue;
                }
                if let Some((c3, r3)) = circle_from_three(p, q, s) {
                    (c2, r2) = (c3, r3);
                }
            }
            (c1, r1) = (c2, r2);
        }
        (center, radius) = (c1, r1);
    }
    (center, radius)
}

/// Mass-weighted polygon centroid from the zeroth and first moments.
///
/// Returns `None` for a degenerate (zero-area) region instead of
/// dividing by zero.
pub fn polygon_centroid(points: &[Point2<f32>]) -> Option<Point2<f32>> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let (mut m00, mut m10, mut m01) = (0.0f64, 0.0f64, 0.0f64);
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let c = p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        m00 += c;
        m10 += (p.x as f64 + q.x as f64) * c;
        m01 += (p.y as f64 + q.y as f64) * c;
    }
    m00 /= 2.0;
    if m00.abs() < 1e-9 {
        return None;
    }
    Some(Point2::new(
        (m10 / (6.0 * m00)) as f32,
        (m01 / (6.0 * m00)) as f32,
    ))
}

fn classify_x(offset: f32) -> HorizontalSide {
    if offset < 0.0 {
        HorizontalSide::Left
    } else if offset > 0.0 {
        HorizontalSide::Right
    } else {
        HorizontalSide::Straight
    }
}

fn classify_y(offset: f32) -> VerticalSide {
    if offset < 0.0 {
        VerticalSide::Up
    } else if offset > 0.0 {
        VerticalSide::Down
    } else {
        VerticalSide::Straight
    }
}

/// Locate the single largest target in `mask`.
///
/// Returns `None` when the mask holds no in-range region. When `frame`
/// is given, the hull outline, enclosing circle, bounding rectangle and
/// centroid marker are drawn onto it; the drawing never changes the
/// returned record.
pub fn single_target(mask: &BinaryMask, frame: Option<&mut RgbFrame>) -> Option<TargetGeometry> {
    let contours = external_contours(mask);
    let contour = match contours.last() {
        Some(c) => c,
        None => {
            debug!("no in-range regions in {}x{} mask", mask.width, mask.height);
            return None;
        }
    };

    let hull = convex_hull(&contour.points);
    let (circle_center, radius) = min_enclosing_circle(&hull);

    let min_x = hull.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = hull.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = hull.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = hull.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let width = (max_x - min_x) as u32 + 1;
    let height = (max_y - min_y) as u32 + 1;

    let orientation = if width > height {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    let center = match polygon_centroid(&hull) {
        Some(c) => PixelCenter {
            x: c.x as i32,
            y: c.y as i32,
        },
        None => {
            warn!("degenerate zero-area region, reporting zero centroid");
            PixelCenter { x: 0, y: 0 }
        }
    };

    let x_off = -(mask.width as f32) / 2.0 + center.x as f32;
    let y_off = -(mask.height as f32) / 2.0 + center.y as f32;

    if let Some(frame) = frame {
        overlay::draw_target(
            frame,
            &hull,
            circle_center,
            radius,
            (min_x as i32, min_y as i32, max_x as i32, max_y as i32),
            (center.x, center.y),
        );
    }

    Some(TargetGeometry {
        center,
        size: radius.round() as u32,
        width,
        height,
        orientation,
        xpos: (classify_x(x_off), x_off),
        ypos: (classify_y(y_off), y_off),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square_points() -> Vec<Point2<f32>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
            Point2::new(2.0, 2.0), // interior
            Point2::new(2.0, 0.0), // edge
        ]
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let hull = convex_hull(&square_points());
        assert_eq!(hull.len(), 4);
        for p in &hull {
            assert!(p.x == 0.0 || p.x == 4.0);
            assert!(p.y == 0.0 || p.y == 4.0);
        }
    }

    #[test]
    fn enclosing_circle_of_square_hits_the_diagonal() {
        let hull = convex_hull(&square_points());
        let (center, radius) = min_enclosing_circle(&hull);
        assert_abs_diff_eq!(center.x, 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(center.y, 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(radius, (8.0f32).sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let hull = convex_hull(&square_points());
        let c = polygon_centroid(&hull).unwrap();
        assert_abs_diff_eq!(c.x, 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_region_has_no_centroid() {
        assert!(polygon_centroid(&[]).is_none());
        assert!(polygon_centroid(&[Point2::new(1.0, 1.0)]).is_none());
        let collinear = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(polygon_centroid(&collinear).is_none());
    }

    #[test]
    fn empty_mask_yields_no_target() {
        let mask = BinaryMask::zeros(32, 24);
        assert_eq!(single_target(&mask, None), None);
    }

    #[test]
    fn single_pixel_region_reports_zero_centroid() {
        let mut mask = BinaryMask::zeros(16, 16);
        mask.set(5, 5);
        let target = single_target(&mask, None).unwrap();
        assert_eq!(target.center, PixelCenter { x: 0, y: 0 });
        assert_eq!(target.size, 0);
    }
}
