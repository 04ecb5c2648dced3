use super::Point2;

/// Returns `true` if `d` lies strictly inside the circumcircle of `a`, `b`, `c`.
///
/// The triangle must be counter-clockwise; for a clockwise triangle the
/// sign of the result is inverted. Points on the circle are outside.
#[must_use]
pub fn in_circumcircle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;

    let a_sq = ad.norm_squared();
    let b_sq = bd.norm_squared();
    let c_sq = cd.norm_squared();

    let det = ad.x * (bd.y * c_sq - b_sq * cd.y) - ad.y * (bd.x * c_sq - b_sq * cd.x)
        + a_sq * (bd.x * cd.y - bd.y * cd.x);
    det > 0.0
}

/// Returns `true` if any corner of the triangle is sharper than the angle
/// whose squared cosine is `cos_sq`.
///
/// Consecutive edge vectors `e_i`, `e_{i+1}` are compared through
/// `(e_i · e_{i+1})² > cos_sq · |e_i|² · |e_{i+1}|²`, which also flags
/// corners close to a straight angle.
#[must_use]
pub fn has_sharp_corner(a: &Point2, b: &Point2, c: &Point2, cos_sq: f64) -> bool {
    let edges = [b - a, c - b, a - c];
    (0..3).any(|i| {
        let e1 = edges[i];
        let e2 = edges[(i + 1) % 3];
        let dot = e1.dot(&e2);
        dot * dot > cos_sq * e1.norm_squared() * e2.norm_squared()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccw_triangle() -> (Point2, Point2, Point2) {
        (
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
    }

    #[test]
    fn circumcenter_is_inside() {
        let (a, b, c) = ccw_triangle();
        assert!(in_circumcircle(&a, &b, &c, &Point2::new(2.0, 2.0)));
        assert!(in_circumcircle(&a, &b, &c, &Point2::new(3.5, 3.0)));
    }

    #[test]
    fn far_point_is_outside() {
        let (a, b, c) = ccw_triangle();
        assert!(!in_circumcircle(&a, &b, &c, &Point2::new(10.0, 10.0)));
        assert!(!in_circumcircle(&a, &b, &c, &Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn vertices_and_cocircular_points_are_not_inside() {
        let (a, b, c) = ccw_triangle();
        assert!(!in_circumcircle(&a, &b, &c, &a));
        assert!(!in_circumcircle(&a, &b, &c, &b));
        // (4, 4) lies on the circle centred at (2, 2) through the origin.
        assert!(!in_circumcircle(&a, &b, &c, &Point2::new(4.0, 4.0)));
    }

    #[test]
    fn clockwise_triangle_inverts_sign() {
        let (a, b, c) = ccw_triangle();
        assert!(!in_circumcircle(&a, &c, &b, &Point2::new(2.0, 2.0)));
    }

    #[test]
    fn right_isoceles_is_not_sharp() {
        let (a, b, c) = ccw_triangle();
        let cos = 0.15_f64.cos();
        assert!(!has_sharp_corner(&a, &b, &c, cos * cos));
    }

    #[test]
    fn thin_triangle_is_sharp() {
        // Corner at the origin is about 0.05 rad.
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let c = Point2::new(10.0, 0.5);
        let cos = 0.15_f64.cos();
        assert!(has_sharp_corner(&a, &b, &c, cos * cos));
    }

    #[test]
    fn flat_triangle_is_sharp() {
        // Nearly straight corner at (5, 0.1).
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let c = Point2::new(5.0, 0.1);
        let cos = 0.15_f64.cos();
        assert!(has_sharp_corner(&a, &b, &c, cos * cos));
    }
}
