use libm::sinh;
use num_complex::Complex64;

/// Transverse comoving distance from the radial comoving distance `co_dist`.
///
/// Open geometry (`ok0 > 0`) uses sinh. Closed geometry evaluates the same
/// expression with an imaginary sqrt(ok0), which turns sinh into sin; the
/// product with the imaginary prefactor is real.
pub fn transverse_distance(co_dist: f64, ok0: f64, h_dist: f64) -> f64 {
    match ok0 {
        val if val > 0. => h_dist / ok0.sqrt() * sinh(ok0.sqrt() * co_dist / h_dist),
        val if val < 0. => {
            let sqrt_ok0 = Complex64::new(ok0, 0.).sqrt();
            let answer = Complex64::new(h_dist, 0.) / sqrt_ok0
                * (sqrt_ok0 * co_dist / h_dist).sinh();
            answer.re
        }
        _ => co_dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H_DIST: f64 = 4282.7494;

    // Real valued form with an explicit sin branch for closed geometry.
    fn transverse_distance_real(co_dist: f64, ok0: f64, h_dist: f64) -> f64 {
        match ok0 {
            val if val > 0. => h_dist * (1. / ok0.sqrt()) * sinh(ok0.sqrt() * (co_dist / h_dist)),
            val if val < 0. => {
                h_dist * (1. / ok0.abs().sqrt()) * (ok0.abs().sqrt() * (co_dist / h_dist)).sin()
            }
            _ => co_dist,
        }
    }

    #[test]
    fn flat_is_identity() {
        for co_dist in [0., 10., 1888.6, 6355.7] {
            assert_eq!(transverse_distance(co_dist, 0., H_DIST), co_dist);
        }
    }

    #[test]
    fn complex_branch_matches_sin() {
        for ok0 in [-1e-6, -0.01, -0.2, -0.5] {
            for co_dist in [100., 1955.9, 5299.8] {
                let complex = transverse_distance(co_dist, ok0, H_DIST);
                let real = transverse_distance_real(co_dist, ok0, H_DIST);
                assert!((complex - real).abs() < 1e-12 * real.abs());
            }
        }
    }

    #[test]
    fn open_branch_matches_real_form() {
        for ok0 in [1e-6, 0.1, 0.7] {
            let complex = transverse_distance(3000., ok0, H_DIST);
            let real = transverse_distance_real(3000., ok0, H_DIST);
            assert!((complex - real).abs() < 1e-12 * real);
        }
    }

    #[test]
    fn both_branches_approach_flat() {
        let co_dist = 3303.8288;
        for ok0 in [1e-10, -1e-10] {
            assert!((transverse_distance(co_dist, ok0, H_DIST) - co_dist).abs() < 1e-6);
        }
    }

    #[test]
    fn closed_universe_is_shorter_than_open() {
        let closed = transverse_distance(5000., -0.2, H_DIST);
        let open = transverse_distance(5000., 0.2, H_DIST);
        assert!(closed < 5000.);
        assert!(open > 5000.);
    }
}
