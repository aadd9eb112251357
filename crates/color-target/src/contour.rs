//! External contour extraction from a binary mask.
//!
//! Connected regions (8-connectivity) are found by a flood fill; the
//! outer boundary of each region is traced with Moore-neighbor tracing
//! and Jacob's stopping criterion. Contours are returned sorted by
//! enclosed polygon area, ascending.

use nalgebra::Point2;

use color_target_core::BinaryMask;

// Clockwise 8-neighborhood starting east, y growing downward.
const NB8: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Ordered boundary polyline of one connected in-range region.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<Point2<f32>>,
}

impl Contour {
    /// Enclosed polygon area (shoelace formula over the boundary).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0f64;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            acc += p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
        }
        acc.abs() / 2.0
    }
}

fn trace_boundary(mask: &BinaryMask, start: (i32, i32)) -> Vec<(i32, i32)> {
    let mut contour = vec![start];
    let mut p = start;
    // The pixel west of the scan-order start is background by construction.
    let mut b = (start.0 - 1, start.1);
    // Jacob's criterion: stop when the first move out of `start` repeats.
    let mut first_successor: Option<(i32, i32)> = None;

    let max_steps = mask.width * mask.height * 4 + 8;
    for _ in 0..max_steps {
        let d0 = NB8
            .iter()
            .position(|&(dx, dy)| (p.0 + dx, p.1 + dy) == b)
            .unwrap_or(4);
        let mut next = None;
        for k in 1..=8 {
            let nd = (d0 + k) % 8;
            let q = (p.0 + NB8[nd].0, p.1 + NB8[nd].1);
            if mask.get(q.0, q.1) {
                let back = NB8[(d0 + k - 1) % 8];
                next = Some((q, (p.0 + back.0, p.1 + back.1)));
                break;
            }
        }
        let Some((q, back)) = next else {
            break; // isolated pixel
        };
        if p == start {
            match first_successor {
                None => first_successor = Some(q),
                Some(fq) if fq == q => break,
                Some(_) => {}
            }
        }
        b = back;
        p = q;
        if p != start {
            contour.push(p);
        }
    }
    contour
}

fn flood_mark(mask: &BinaryMask, visited: &mut [bool], x: i32, y: i32) {
    let mut stack = vec![(x, y)];
    visited[y as usize * mask.width + x as usize] = true;
    while let Some((cx, cy)) = stack.pop() {
        for (dx, dy) in NB8 {
            let (nx, ny) = (cx + dx, cy + dy);
            if mask.get(nx, ny) {
                let idx = ny as usize * mask.width + nx as usize;
                if !visited[idx] {
                    visited[idx] = true;
                    stack.push((nx, ny));
                }
            }
        }
    }
}

/// Trace the external boundary of every 8-connected in-range region,
/// sorted by enclosed area ascending.
pub fn external_contours(mask: &BinaryMask) -> Vec<Contour> {
    let mut visited = vec![false; mask.width * mask.height];
    let mut contours = Vec::new();

    for y in 0..mask.height as i32 {
        for x in 0..mask.width as i32 {
            if !mask.get(x, y) || visited[y as usize * mask.width + x as usize] {
                continue;
            }
            // Scan order guarantees this is the topmost-leftmost pixel
            // of a fresh region.
            let boundary = trace_boundary(mask, (x, y));
            flood_mark(mask, &mut visited, x, y);
            contours.push(Contour {
                points: boundary
                    .into_iter()
                    .map(|(px, py)| Point2::new(px as f32, py as f32))
                    .collect(),
            });
        }
    }

    contours.sort_by(|a, b| {
        a.area()
            .partial_cmp(&b.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    contours
}
