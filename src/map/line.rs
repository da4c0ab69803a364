//! Integer line rasterization.

use glam::IVec2;

/// Traces the discrete line from (0, 0) to the rounded (dx, dy), inclusive
/// of both endpoints.
///
/// Bresenham with equal error accumulation in both axes; no floating point
/// past the initial rounding. Handles every octant; a zero-length line is the
/// single origin point.
pub fn trace_line(dx: f32, dy: f32) -> Vec<IVec2> {
    let end_x = dx.round() as i32;
    let end_y = dy.round() as i32;
    let sx = if end_x < 0 { -1 } else { 1 };
    let sy = if end_y < 0 { -1 } else { 1 };
    let adx = end_x.abs();
    let ady = end_y.abs();

    let mut err = (if adx > ady { adx } else { -ady }) / 2;
    let mut x = 0;
    let mut y = 0;
    let mut points = vec![IVec2::ZERO];
    while x != end_x || y != end_y {
        let err2 = err;
        if err2 > -adx {
            err -= ady;
            x += sx;
        }
        if err2 < ady {
            err += adx;
            y += sy;
        }
        points.push(IVec2::new(x, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_connected(points: &[IVec2]) -> bool {
        points.windows(2).all(|pair| {
            let step = pair[1] - pair[0];
            step.x.abs() <= 1 && step.y.abs() <= 1 && step != IVec2::ZERO
        })
    }

    #[test]
    fn zero_length_line_is_a_single_point() {
        assert_eq!(trace_line(0.0, 0.0), vec![IVec2::ZERO]);
    }

    #[test]
    fn line_3_2_has_four_connected_points() {
        let points = trace_line(3.0, 2.0);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], IVec2::ZERO);
        assert_eq!(*points.last().unwrap(), IVec2::new(3, 2));
        assert!(is_connected(&points));
    }

    #[test]
    fn all_octants_end_at_the_target() {
        for (dx, dy) in [
            (5, 2),
            (2, 5),
            (-5, 2),
            (-2, 5),
            (5, -2),
            (2, -5),
            (-5, -2),
            (-2, -5),
            (7, 0),
            (0, 7),
            (-7, 0),
            (0, -7),
            (4, 4),
            (-4, -4),
        ] {
            let points = trace_line(dx as f32, dy as f32);
            assert_eq!(points[0], IVec2::ZERO, "line ({}, {})", dx, dy);
            assert_eq!(
                *points.last().unwrap(),
                IVec2::new(dx, dy),
                "line ({}, {})",
                dx,
                dy
            );
            assert_eq!(
                points.len() as i32,
                dx.abs().max(dy.abs()) + 1,
                "line ({}, {})",
                dx,
                dy
            );
            assert!(is_connected(&points), "line ({}, {})", dx, dy);
        }
    }

    #[test]
    fn fractional_targets_are_rounded() {
        let points = trace_line(2.6, -0.4);
        assert_eq!(*points.last().unwrap(), IVec2::new(3, 0));
    }
}
