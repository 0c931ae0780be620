//! A sphere represented by the single node at its center
//!
//! Used for rigid spherical particles. The geometry has no interior: metrics, Jacobians and
//! shape function evaluations log a warning and return zero or leave their output untouched.
use super::{fixed_points, not_applicable::not_applicable, GeometryData, Node};
#[cfg(feature = "serde")]
use super::SerializableGeometry;
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
use crate::{
    error::Result,
    quadrature::line_gauss_legendre,
    traits::{geometry::display_geometry, Geometry, Point},
    types::{
        GeometryDimension, GeometryId, GeometryType, IntegrationMethod, IntegrationPoint,
        Jacobians, LumpingMethod, Matrix, ShapeFunctionsGradients,
    },
};
use once_cell::sync::Lazy;
use std::{fmt, sync::Arc};

pub(crate) const POINTS_NUMBER: usize = 1;
const NAME: &str = "Sphere3D1";
const SHAPE: &str = "Sphere";
const INFO: &str = "a sphere with 1 nodes in its center, in 3D space";

static DIMENSION: GeometryDimension = GeometryDimension::new(3, 1);

static DATA: Lazy<GeometryData> = Lazy::new(|| {
    // Line rules size the zero-valued tables of each method
    GeometryData::from_rules(
        &DIMENSION,
        IntegrationMethod::Gauss1,
        line_gauss_legendre,
        shape_functions_integration_points_values,
        shape_functions_integration_points_local_gradients,
    )
});

/// The integration tables shared by every sphere
pub(crate) fn geometry_data() -> &'static GeometryData {
    &DATA
}

fn shape_functions_integration_points_values(points: &[IntegrationPoint]) -> Matrix {
    Matrix::zeros(points.len(), POINTS_NUMBER)
}

fn shape_functions_integration_points_local_gradients(
    points: &[IntegrationPoint],
) -> ShapeFunctionsGradients {
    vec![Matrix::zeros(POINTS_NUMBER, DIMENSION.local_space_dimension()); points.len()]
}

/// A sphere represented by the single node at its center, in 3D space
///
/// Cloning shares the node: moving the node of a clone moves the node of the original.
#[derive(Debug)]
pub struct Sphere3D1<P: Point = Node> {
    id: GeometryId,
    points: [Arc<P>; POINTS_NUMBER],
}

impl<P: Point> Clone for Sphere3D1<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            points: self.points.clone(),
        }
    }
}

impl<P: Point> Sphere3D1<P> {
    /// Create from the center node
    pub fn new(point: Arc<P>) -> Self {
        Self {
            id: GeometryId::Unassigned,
            points: [point],
        }
    }

    /// Create from a list of points, which must contain exactly one point
    pub fn from_points(points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Unassigned, points)
    }

    /// Create with a numeric id from a list of points, which must contain exactly one point
    pub fn with_id(id: usize, points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Index(id), points)
    }

    /// Create with a name from a list of points, which must contain exactly one point
    pub fn with_name(name: impl Into<String>, points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Name(name.into()), points)
    }

    fn build(id: GeometryId, points: Vec<Arc<P>>) -> Result<Self> {
        Ok(Self {
            id,
            points: fixed_points(GeometryType::Sphere3D1, points)?,
        })
    }

    /// The center node
    pub fn center_point(&self) -> &Arc<P> {
        &self.points[0]
    }
}

impl<P: Point> Geometry for Sphere3D1<P> {
    type Point = P;

    fn points(&self) -> &[Arc<P>] {
        &self.points
    }

    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn create(&self, id: GeometryId, points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(id, points)
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Sphere3D1
    }

    fn geometry_data(&self) -> &'static GeometryData {
        &DATA
    }

    fn length(&self) -> f64 {
        not_applicable(NAME, SHAPE, "Length");
        0.0
    }

    fn area(&self) -> f64 {
        not_applicable(NAME, SHAPE, "Area");
        0.0
    }

    fn volume(&self) -> f64 {
        not_applicable(NAME, SHAPE, "Volume");
        0.0
    }

    fn domain_size(&self) -> f64 {
        not_applicable(NAME, SHAPE, "DomainSize");
        0.0
    }

    fn jacobians(&self, _method: IntegrationMethod, _result: &mut Jacobians) {
        not_applicable(NAME, SHAPE, "Jacobian");
    }

    fn jacobians_with_delta_position(
        &self,
        _method: IntegrationMethod,
        _delta_position: &Matrix,
        _result: &mut Jacobians,
    ) {
        not_applicable(NAME, SHAPE, "Jacobian");
    }

    fn jacobian(&self, _point_index: usize, _method: IntegrationMethod, _result: &mut Matrix) {
        not_applicable(NAME, SHAPE, "Jacobian");
    }

    fn jacobian_at(&self, _local_point: &[f64], _result: &mut Matrix) {
        not_applicable(NAME, SHAPE, "Jacobian");
    }

    fn determinants_of_jacobian(&self, _method: IntegrationMethod, _result: &mut Vec<f64>) {
        not_applicable(NAME, SHAPE, "DeterminantOfJacobian");
    }

    fn determinant_of_jacobian(&self, _point_index: usize, _method: IntegrationMethod) -> f64 {
        not_applicable(NAME, SHAPE, "DeterminantOfJacobian");
        0.0
    }

    fn determinant_of_jacobian_at(&self, _local_point: &[f64]) -> f64 {
        not_applicable(NAME, SHAPE, "DeterminantOfJacobian");
        0.0
    }

    fn inverses_of_jacobian(&self, _method: IntegrationMethod, _result: &mut Jacobians) {
        not_applicable(NAME, SHAPE, "InverseOfJacobian");
    }

    fn inverse_of_jacobian(
        &self,
        _point_index: usize,
        _method: IntegrationMethod,
        _result: &mut Matrix,
    ) {
        not_applicable(NAME, SHAPE, "InverseOfJacobian");
    }

    fn inverse_of_jacobian_at(&self, _local_point: &[f64], _result: &mut Matrix) {
        not_applicable(NAME, SHAPE, "InverseOfJacobian");
    }

    fn shape_function_value(&self, _index: usize, _local_point: &[f64]) -> f64 {
        not_applicable(NAME, SHAPE, "ShapeFunctionValue");
        0.0
    }

    fn shape_functions_local_gradients_at(&self, _local_point: &[f64], _result: &mut Matrix) {
        not_applicable(NAME, SHAPE, "ShapeFunctionsLocalGradients");
    }

    fn shape_functions_integration_points_gradients(
        &self,
        _method: IntegrationMethod,
        _result: &mut ShapeFunctionsGradients,
    ) {
        not_applicable(NAME, SHAPE, "ShapeFunctionsIntegrationPointsGradients");
    }

    /// A point bounds a single trivial edge
    fn edges_number(&self) -> usize {
        1
    }

    /// The single node receives the whole mass, whatever the method
    fn lumping_factors(&self, _method: LumpingMethod) -> Vec<f64> {
        vec![1.0]
    }

    fn info(&self) -> String {
        INFO.to_string()
    }

    fn print_data(&self, _f: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}

impl<P: Point> fmt::Display for Sphere3D1<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_geometry(self, f)
    }
}

#[cfg(feature = "serde")]
impl ConvertToSerializable for Sphere3D1<Node> {
    type SerializableType = SerializableGeometry;
    fn to_serializable(&self) -> SerializableGeometry {
        SerializableGeometry::new(GeometryType::Sphere3D1, &self.id, &self.points)
    }
    fn from_serializable(s: SerializableGeometry) -> Result<Self> {
        let (id, points) = s.into_parts(GeometryType::Sphere3D1)?;
        Self::build(id, points)
    }
}
