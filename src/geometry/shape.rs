//! A geometry of any supported type
use super::{Line3D2, Node, Sphere3D1};
#[cfg(feature = "serde")]
use super::SerializableGeometry;
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
use crate::{
    error::Result,
    traits::{geometry::display_geometry, Geometry, Point},
    types::{
        GeometryId, GeometryType, IntegrationMethod, Jacobians, LumpingMethod, Matrix,
        ShapeFunctionsGradients,
    },
};
use std::{fmt, sync::Arc};

/// A geometry of any supported type
///
/// Algorithms that iterate over mixed collections of geometries hold them as `Shape`s.
#[derive(Debug)]
pub enum Shape<P: Point = Node> {
    /// Sphere represented by its center
    Sphere3D1(Sphere3D1<P>),
    /// Two-node line
    Line3D2(Line3D2<P>),
}

impl<P: Point> Clone for Shape<P> {
    fn clone(&self) -> Self {
        match self {
            Shape::Sphere3D1(g) => Shape::Sphere3D1(g.clone()),
            Shape::Line3D2(g) => Shape::Line3D2(g.clone()),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $g:ident => $e:expr) => {
        match $self {
            Shape::Sphere3D1($g) => $e,
            Shape::Line3D2($g) => $e,
        }
    };
}

impl<P: Point> Shape<P> {
    /// Create a geometry of type `geometry_type`
    pub fn new(
        geometry_type: GeometryType,
        id: GeometryId,
        points: Vec<Arc<P>>,
    ) -> Result<Self> {
        Ok(match geometry_type {
            GeometryType::Sphere3D1 => Shape::Sphere3D1(match id {
                GeometryId::Unassigned => Sphere3D1::from_points(points)?,
                GeometryId::Index(i) => Sphere3D1::with_id(i, points)?,
                GeometryId::Name(n) => Sphere3D1::with_name(n, points)?,
            }),
            GeometryType::Line3D2 => Shape::Line3D2(match id {
                GeometryId::Unassigned => Line3D2::from_points(points)?,
                GeometryId::Index(i) => Line3D2::with_id(i, points)?,
                GeometryId::Name(n) => Line3D2::with_name(n, points)?,
            }),
        })
    }
}

impl<P: Point> From<Sphere3D1<P>> for Shape<P> {
    fn from(g: Sphere3D1<P>) -> Self {
        Shape::Sphere3D1(g)
    }
}

impl<P: Point> From<Line3D2<P>> for Shape<P> {
    fn from(g: Line3D2<P>) -> Self {
        Shape::Line3D2(g)
    }
}

impl<P: Point> Geometry for Shape<P> {
    type Point = P;

    fn points(&self) -> &[Arc<P>] {
        dispatch!(self, g => g.points())
    }
    fn id(&self) -> &GeometryId {
        dispatch!(self, g => g.id())
    }
    fn create(&self, id: GeometryId, points: Vec<Arc<P>>) -> Result<Self> {
        Self::new(self.geometry_type(), id, points)
    }
    fn geometry_type(&self) -> GeometryType {
        dispatch!(self, g => g.geometry_type())
    }
    fn length(&self) -> f64 {
        dispatch!(self, g => g.length())
    }
    fn area(&self) -> f64 {
        dispatch!(self, g => g.area())
    }
    fn volume(&self) -> f64 {
        dispatch!(self, g => g.volume())
    }
    fn domain_size(&self) -> f64 {
        dispatch!(self, g => g.domain_size())
    }
    fn center(&self) -> [f64; 3] {
        dispatch!(self, g => g.center())
    }
    fn jacobians(&self, method: IntegrationMethod, result: &mut Jacobians) {
        dispatch!(self, g => g.jacobians(method, result))
    }
    fn jacobians_with_delta_position(
        &self,
        method: IntegrationMethod,
        delta_position: &Matrix,
        result: &mut Jacobians,
    ) {
        dispatch!(self, g => g.jacobians_with_delta_position(method, delta_position, result))
    }
    fn jacobian(&self, point_index: usize, method: IntegrationMethod, result: &mut Matrix) {
        dispatch!(self, g => g.jacobian(point_index, method, result))
    }
    fn jacobian_at(&self, local_point: &[f64], result: &mut Matrix) {
        dispatch!(self, g => g.jacobian_at(local_point, result))
    }
    fn determinants_of_jacobian(&self, method: IntegrationMethod, result: &mut Vec<f64>) {
        dispatch!(self, g => g.determinants_of_jacobian(method, result))
    }
    fn determinant_of_jacobian(&self, point_index: usize, method: IntegrationMethod) -> f64 {
        dispatch!(self, g => g.determinant_of_jacobian(point_index, method))
    }
    fn determinant_of_jacobian_at(&self, local_point: &[f64]) -> f64 {
        dispatch!(self, g => g.determinant_of_jacobian_at(local_point))
    }
    fn inverses_of_jacobian(&self, method: IntegrationMethod, result: &mut Jacobians) {
        dispatch!(self, g => g.inverses_of_jacobian(method, result))
    }
    fn inverse_of_jacobian(
        &self,
        point_index: usize,
        method: IntegrationMethod,
        result: &mut Matrix,
    ) {
        dispatch!(self, g => g.inverse_of_jacobian(point_index, method, result))
    }
    fn inverse_of_jacobian_at(&self, local_point: &[f64], result: &mut Matrix) {
        dispatch!(self, g => g.inverse_of_jacobian_at(local_point, result))
    }
    fn shape_function_value(&self, index: usize, local_point: &[f64]) -> f64 {
        dispatch!(self, g => g.shape_function_value(index, local_point))
    }
    fn shape_functions_local_gradients_at(&self, local_point: &[f64], result: &mut Matrix) {
        dispatch!(self, g => g.shape_functions_local_gradients_at(local_point, result))
    }
    fn shape_functions_integration_points_gradients(
        &self,
        method: IntegrationMethod,
        result: &mut ShapeFunctionsGradients,
    ) {
        dispatch!(self, g => g.shape_functions_integration_points_gradients(method, result))
    }
    fn edges_number(&self) -> usize {
        dispatch!(self, g => g.edges_number())
    }
    fn faces_number(&self) -> usize {
        dispatch!(self, g => g.faces_number())
    }
    fn lumping_factors(&self, method: LumpingMethod) -> Vec<f64> {
        dispatch!(self, g => g.lumping_factors(method))
    }
    fn info(&self) -> String {
        dispatch!(self, g => g.info())
    }
    fn print_info(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        dispatch!(self, g => g.print_info(f))
    }
    fn print_data(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        dispatch!(self, g => g.print_data(f))
    }
}

impl<P: Point> fmt::Display for Shape<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_geometry(self, f)
    }
}

#[cfg(feature = "serde")]
impl ConvertToSerializable for Shape<Node> {
    type SerializableType = SerializableGeometry;
    fn to_serializable(&self) -> SerializableGeometry {
        dispatch!(self, g => g.to_serializable())
    }
    fn from_serializable(s: SerializableGeometry) -> Result<Self> {
        Ok(match s.geometry_type() {
            GeometryType::Sphere3D1 => Shape::Sphere3D1(Sphere3D1::from_serializable(s)?),
            GeometryType::Line3D2 => Shape::Line3D2(Line3D2::from_serializable(s)?),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::GeometryFamily;

    fn node(id: usize, x: [f64; 3]) -> Arc<Node> {
        Arc::new(Node::new(id, x))
    }

    fn mixed_shapes() -> Vec<Shape> {
        let a = node(0, [0.0, 0.0, 0.0]);
        let b = node(1, [2.0, 0.0, 0.0]);
        vec![
            Sphere3D1::new(a.clone()).into(),
            Line3D2::new(a.clone(), b.clone()).into(),
            Sphere3D1::new(b).into(),
        ]
    }

    #[test]
    fn test_mixed_domain_size() {
        // Spheres contribute nothing to the total
        let total = mixed_shapes().iter().map(|s| s.domain_size()).sum::<f64>();
        approx::assert_relative_eq!(total, 2.0);
    }

    #[test]
    fn test_mixed_jacobians() {
        for s in mixed_shapes() {
            let m = s.default_integration_method();
            let mut dets = vec![];
            s.determinants_of_jacobian(m, &mut dets);
            match s.geometry_family() {
                GeometryFamily::Point => assert!(dets.is_empty()),
                _ => assert_eq!(dets.len(), s.integration_points_number(m)),
            }
        }
    }

    #[test]
    fn test_lumping_sums_to_one() {
        for s in mixed_shapes() {
            for m in LumpingMethod::ALL {
                let f = s.lumping_factors(m);
                assert_eq!(f.len(), s.points_number());
                approx::assert_relative_eq!(f.iter().sum::<f64>(), 1.0, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_create_keeps_type() {
        for s in mixed_shapes() {
            let points = s.points().to_vec();
            let c = s.create(GeometryId::from("copy"), points).unwrap();
            assert_eq!(c.geometry_type(), s.geometry_type());
            assert_eq!(c.id(), &GeometryId::Name(String::from("copy")));
            assert!(s.create(GeometryId::Unassigned, vec![]).is_err());
            let c = s.create_from(GeometryId::Index(1), &s).unwrap();
            assert!(Arc::ptr_eq(c.point(0), s.point(0)));
        }
    }

    #[test]
    fn test_shared_tables() {
        let shapes = mixed_shapes();
        assert!(std::ptr::eq(shapes[0].geometry_data(), shapes[2].geometry_data()));
        assert!(!std::ptr::eq(shapes[0].geometry_data(), shapes[1].geometry_data()));
    }

    #[test]
    fn test_display() {
        let shapes = mixed_shapes();
        assert_eq!(
            format!("{}", shapes[0]),
            "a sphere with 1 nodes in its center, in 3D space\n"
        );
    }
}
