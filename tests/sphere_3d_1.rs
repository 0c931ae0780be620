//! Behaviour of the sphere geometry as seen by consuming code
use approx::assert_relative_eq;
use ndshape::{
    traits::Geometry,
    types::{
        GeometryFamily, GeometryOrder, GeometryType, IntegrationMethod, LumpingMethod, Matrix,
    },
    GeometryError, Node, Sphere3D1,
};
use std::sync::Arc;

fn nodes(n: usize) -> Vec<Arc<Node>> {
    (0..n)
        .map(|i| Arc::new(Node::new(i, [i as f64, 0.0, 0.0])))
        .collect()
}

fn all_constructions() -> Vec<Sphere3D1> {
    vec![
        Sphere3D1::new(nodes(1).remove(0)),
        Sphere3D1::from_points(nodes(1)).unwrap(),
        Sphere3D1::with_id(1, nodes(1)).unwrap(),
        Sphere3D1::with_name("s", nodes(1)).unwrap(),
    ]
}

#[test]
fn test_every_construction_has_one_point_and_one_edge() {
    for s in all_constructions() {
        assert_eq!(s.points_number(), 1);
        assert_eq!(s.edges_number(), 1);
        assert_eq!(s.geometry_family(), GeometryFamily::Point);
        assert_eq!(s.geometry_type(), GeometryType::Sphere3D1);
        assert_eq!(s.geometry_order(), GeometryOrder::Zero);
    }
}

#[test]
fn test_arity_errors() {
    for n in [0, 2, 5] {
        for r in [
            Sphere3D1::from_points(nodes(n)),
            Sphere3D1::with_id(9, nodes(n)),
            Sphere3D1::with_name("bad", nodes(n)),
        ] {
            let e = r.unwrap_err();
            assert!(matches!(e, GeometryError::InvalidPointsNumber { given, .. } if given == n));
            assert_eq!(
                e.to_string(),
                format!("Invalid points number. Expected 1, given {n}")
            );
        }
    }
}

#[test]
fn test_moving_the_node_of_a_copy() {
    let original = Sphere3D1::new(Arc::new(Node::new(0, [0.0, 0.0, 0.0])));
    let copy = original.clone();
    copy.point(0).set_coordinates([1.0, 2.0, 3.0]);
    assert_eq!(original.center(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_neutral_results() {
    for s in all_constructions() {
        assert_eq!(s.length(), 0.0);
        assert_eq!(s.area(), 0.0);
        assert_eq!(s.domain_size(), 0.0);
        for m in IntegrationMethod::ALL {
            for i in 0..s.integration_points_number(m) {
                assert_eq!(s.determinant_of_jacobian(i, m), 0.0);
            }
            let mut jacobians = vec![Matrix::identity(3, 1)];
            s.jacobians(m, &mut jacobians);
            assert_eq!(jacobians, vec![Matrix::identity(3, 1)]);
        }
        assert_eq!(s.shape_function_value(0, &[0.0]), 0.0);
        assert_eq!(s.determinant_of_jacobian_at(&[0.5]), 0.0);
        for m in LumpingMethod::ALL {
            assert_eq!(s.lumping_factors(m), vec![1.0]);
        }
    }
}

#[test]
fn test_table_point_counts_follow_line_rules() {
    let s = Sphere3D1::new(nodes(1).remove(0));
    let mut total_weight = 0.0;
    for m in IntegrationMethod::ALL {
        let points = s.integration_points(m);
        assert_eq!(points.len(), m.points_per_direction());
        assert_eq!(s.shape_functions_values(m).nrows(), points.len());
        assert_eq!(s.shape_functions_local_gradients(m).len(), points.len());
        total_weight += points.iter().map(|p| p.weight()).sum::<f64>();
    }
    assert_relative_eq!(total_weight, 10.0, epsilon = 1e-12);
}

#[test]
fn test_tables_read_from_threads() {
    let handles = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let data = GeometryType::Sphere3D1.geometry_data();
                IntegrationMethod::ALL
                    .iter()
                    .map(|m| data.integration_points_number(*m))
                    .sum::<usize>()
            })
        })
        .collect::<Vec<_>>();
    for h in handles {
        assert_eq!(h.join().unwrap(), 15);
    }
}
