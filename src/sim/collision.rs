//! Circle overlap tests between bodies

use glam::DVec2;

use super::state::Body;
use crate::square;

/// Whether two circles overlap or touch.
///
/// Compares squared centre distance against the squared radius sum, so
/// exactly touching circles count as a hit. Distance is measured in the plane,
/// not across the wrap seam.
#[inline]
pub fn circles_overlap(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> bool {
    square(a_pos.x - b_pos.x) + square(a_pos.y - b_pos.y) <= square(a_radius + b_radius)
}

/// Whether two bodies are in contact
#[inline]
pub fn is_collision(a: &Body, b: &Body) -> bool {
    circles_overlap(a.pos, a.radius, b.pos, b.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body(x: f64, y: f64, radius: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::ZERO, radius)
    }

    #[test]
    fn test_overlapping() {
        assert!(is_collision(&body(0.0, 0.0, 10.0), &body(15.0, 0.0, 10.0)));
    }

    #[test]
    fn test_separate() {
        assert!(!is_collision(&body(0.0, 0.0, 10.0), &body(25.0, 0.0, 10.0)));
    }

    #[test]
    fn test_touching_counts() {
        // 3-4-5 triangle keeps the arithmetic exact
        assert!(is_collision(&body(0.0, 0.0, 2.0), &body(3.0, 4.0, 3.0)));
        assert!(!is_collision(&body(0.0, 0.0, 2.0), &body(3.0, 4.0, 2.5)));
    }

    #[test]
    fn test_zero_radius_points() {
        assert!(is_collision(&body(5.0, 5.0, 0.0), &body(5.0, 5.0, 0.0)));
        assert!(!is_collision(&body(5.0, 5.0, 0.0), &body(5.0, 6.0, 0.0)));
    }

    #[test]
    fn test_no_wrap_distance() {
        // Close across the seam, far apart in the plane
        assert!(!is_collision(&body(1.0, 150.0, 5.0), &body(799.0, 150.0, 5.0)));
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            ax in -1000.0f64..1000.0, ay in -1000.0f64..1000.0, ar in 0.0f64..200.0,
            bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0, br in 0.0f64..200.0,
        ) {
            let a = body(ax, ay, ar);
            let b = body(bx, by, br);
            prop_assert_eq!(is_collision(&a, &b), is_collision(&b, &a));
        }

        #[test]
        fn prop_axis_aligned_boundary(x in -1000.0f64..1000.0, r1 in 0u32..200, r2 in 0u32..200) {
            // Integer radii keep the centre gap exactly representable
            let a = body(x, 0.0, r1 as f64);
            let b = body(x, (r1 + r2) as f64, r2 as f64);
            prop_assert!(is_collision(&a, &b));
        }
    }
}
