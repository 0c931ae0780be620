//! Quadrature rules
use crate::types::{IntegrationMethod, IntegrationPoint};
use itertools::izip;
use ndelement::{quadrature::gauss_jacobi_rule, types::ReferenceCellType};

/// Gauss-Legendre rule of `method` on the reference line [-1, 1]
///
/// The rule is the Gauss-Jacobi rule on the unit interval, mapped to [-1, 1].
pub fn line_gauss_legendre(method: IntegrationMethod) -> Vec<IntegrationPoint> {
    let npoints = method.points_per_direction();
    // A rule of degree 2n - 1 has n points
    let rule = match gauss_jacobi_rule(ReferenceCellType::Interval, 2 * npoints - 1) {
        Ok(rule) => rule,
        Err(e) => panic!("No Gauss-Jacobi rule with {npoints} points on an interval: {e:?}"),
    };
    let points: &[f64] = &rule.points;
    let weights: &[f64] = &rule.weights;
    izip!(points, weights)
        .map(|(p, w)| IntegrationPoint::new(&[2.0 * p - 1.0], 2.0 * w))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted(method: IntegrationMethod) -> Vec<(f64, f64)> {
        let mut rule = line_gauss_legendre(method)
            .iter()
            .map(|p| (p.coordinates()[0], p.weight()))
            .collect::<Vec<_>>();
        rule.sort_by(|a, b| a.0.total_cmp(&b.0));
        rule
    }

    #[test]
    fn test_one_point() {
        let rule = sorted(IntegrationMethod::Gauss1);
        assert_eq!(rule.len(), 1);
        assert_relative_eq!(rule[0].0, 0.0, epsilon = 1e-14);
        assert_relative_eq!(rule[0].1, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_two_points() {
        let rule = sorted(IntegrationMethod::Gauss2);
        assert_relative_eq!(rule[0].0, -1.0 / f64::sqrt(3.0), epsilon = 1e-14);
        assert_relative_eq!(rule[1].0, 1.0 / f64::sqrt(3.0), epsilon = 1e-14);
        assert_relative_eq!(rule[0].1, 1.0, epsilon = 1e-14);
        assert_relative_eq!(rule[1].1, 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_three_points() {
        let rule = sorted(IntegrationMethod::Gauss3);
        assert_relative_eq!(rule[0].0, -f64::sqrt(0.6), epsilon = 1e-14);
        assert_relative_eq!(rule[1].0, 0.0, epsilon = 1e-14);
        assert_relative_eq!(rule[0].1, 5.0 / 9.0, epsilon = 1e-14);
        assert_relative_eq!(rule[1].1, 8.0 / 9.0, epsilon = 1e-14);
    }

    #[test]
    fn test_exact_for_polynomials() {
        // An n-point rule integrates x^(2n-2) exactly
        for m in IntegrationMethod::ALL {
            let deg = 2 * m.points_per_direction() - 2;
            let integral = sorted(m)
                .iter()
                .map(|(x, w)| w * x.powi(deg as i32))
                .sum::<f64>();
            assert_relative_eq!(integral, 2.0 / (deg as f64 + 1.0), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_line_rule_sizes() {
        for m in IntegrationMethod::ALL {
            let pts = line_gauss_legendre(m);
            assert_eq!(pts.len(), m.index() + 1);
            for p in &pts {
                assert_eq!(p.local_dimension(), 1);
                assert!(p.coordinates()[0] > -1.0 && p.coordinates()[0] < 1.0);
            }
        }
    }
}
