use glam::Vec2;

/// Screen- or world-space point. Plain value type, no invariants.
pub type Point2D = Vec2;

/// 2-D cross product (z of the 3-D cross): `x1 * y2 - y1 * x2`.
#[inline]
pub fn cross_product(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    x1 * y2 - y1 * x2
}

/// Intersection of the infinite line through `(x1,y1)-(x2,y2)` with the
/// infinite line through `(x3,y3)-(x4,y4)`.
///
/// Determinant form:
/// ```text
/// a   = (x1,y1) × (x2,y2)
/// b   = (x3,y3) × (x4,y4)
/// det = (p1 - p2) × (p3 - p4)
/// x   = (a, x1 - x2) × (b, x3 - x4) / det
/// y   = (a, y1 - y2) × (b, y3 - y4) / det
/// ```
///
/// **Precondition:** the lines are not parallel. A zero determinant is not
/// guarded; the result then has infinite or NaN coordinates.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn intersect(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
    x4: f32,
    y4: f32,
) -> Point2D {
    let a = cross_product(x1, y1, x2, y2);
    let b = cross_product(x3, y3, x4, y4);
    let det = cross_product(x1 - x2, y1 - y2, x3 - x4, y3 - y4);
    Point2D::new(
        cross_product(a, x1 - x2, b, x3 - x4) / det,
        cross_product(a, y1 - y2, b, y3 - y4) / det,
    )
}

/// [`intersect`] on `Vec2` endpoints: line `a0-a1` against line `b0-b1`.
#[inline]
pub fn intersect_lines(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Point2D {
    intersect(a0.x, a0.y, a1.x, a1.y, b0.x, b0.y, b1.x, b1.y)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_of_axes() {
        assert_eq!(cross_product(1.0, 0.0, 0.0, 1.0), 1.0);
        assert_eq!(cross_product(0.0, 1.0, 1.0, 0.0), -1.0);
        assert_eq!(cross_product(2.0, 4.0, 1.0, 2.0), 0.0); // collinear
    }

    #[test]
    fn diagonals_of_a_square_meet_in_the_middle() {
        let p = intersect(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0);
        assert!((p - Vec2::new(5.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn lines_are_infinite_not_segments() {
        // Segments don't overlap, their extensions meet at (20, 0).
        let p = intersect(0.0, 0.0, 1.0, 0.0, 20.0, 5.0, 20.0, 6.0);
        assert!((p - Vec2::new(20.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn parallel_lines_are_not_finite() {
        let p = intersect_lines(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        );
        assert!(!p.is_finite());
    }
}
