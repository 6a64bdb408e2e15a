//! Interpolation helpers:
//! - lerp_f32 (linear blend)
//! - bezier_ease_t (cubic-bezier timing curve, inverted on X by bisection)

/// Ease-in-out controls `(x1, y1, x2, y2)` used for Bezier segments.
pub const DEFAULT_BEZIER_CTRL: [f32; 4] = [0.42, 0.0, 0.58, 1.0];

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points `[x1, y1, x2, y2]` and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
pub fn bezier_ease_t(t: f32, ctrl: [f32; 4]) -> f32 {
    let [x1, y1, x2, y2] = ctrl;
    let t = t.clamp(0.0, 1.0);
    // Bezier(0,0,1,1) is exactly linear
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        let c = DEFAULT_BEZIER_CTRL;
        assert!(bezier_ease_t(0.0, c).abs() < 1e-6);
        assert!((bezier_ease_t(1.0, c) - 1.0).abs() < 1e-6);
        // Symmetric controls pass through (0.5, 0.5).
        assert!((bezier_ease_t(0.5, c) - 0.5).abs() < 1e-3);
        // Ease-in: slower than linear early on.
        assert!(bezier_ease_t(0.2, c) < 0.2);
    }

    #[test]
    fn linear_controls_are_identity() {
        assert_eq!(bezier_ease_t(0.3, [0.0, 0.0, 1.0, 1.0]), 0.3);
        assert_eq!(lerp_f32(2.0, -2.0, 0.5), 0.0);
    }
}
