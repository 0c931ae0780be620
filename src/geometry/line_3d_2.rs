//! A two-node line in 3D space
//!
//! The reference line is [-1, 1] with linear shape functions `(1 - xi) / 2` and `(1 + xi) / 2`.
use super::{fixed_points, GeometryData, Node};
#[cfg(feature = "serde")]
use super::SerializableGeometry;
#[cfg(feature = "serde")]
use crate::traits::ConvertToSerializable;
use crate::{
    error::Result,
    quadrature::line_gauss_legendre,
    traits::{geometry::display_geometry, point::coordinates_of, Geometry, Point},
    types::{
        GeometryDimension, GeometryId, GeometryType, IntegrationMethod, IntegrationPoint,
        Jacobians, Matrix, ShapeFunctionsGradients,
    },
};
use itertools::izip;
use once_cell::sync::Lazy;
use std::{fmt, sync::Arc};

pub(crate) const POINTS_NUMBER: usize = 2;

static DIMENSION: GeometryDimension = GeometryDimension::new(3, 1);

static DATA: Lazy<GeometryData> = Lazy::new(|| {
    GeometryData::from_rules(
        &DIMENSION,
        IntegrationMethod::Gauss1,
        line_gauss_legendre,
        shape_functions_integration_points_values,
        shape_functions_integration_points_local_gradients,
    )
});

/// The integration tables shared by every two-node line
pub(crate) fn geometry_data() -> &'static GeometryData {
    &DATA
}

fn shape_functions(xi: f64) -> [f64; POINTS_NUMBER] {
    [0.5 * (1.0 - xi), 0.5 * (1.0 + xi)]
}

fn local_gradients() -> Matrix {
    Matrix::from_column_slice(POINTS_NUMBER, 1, &[-0.5, 0.5])
}

fn shape_functions_integration_points_values(points: &[IntegrationPoint]) -> Matrix {
    let mut values = Matrix::zeros(points.len(), POINTS_NUMBER);
    for (i, p) in points.iter().enumerate() {
        for (j, n) in shape_functions(p.coordinates()[0]).iter().enumerate() {
            values[(i, j)] = *n;
        }
    }
    values
}

fn shape_functions_integration_points_local_gradients(
    points: &[IntegrationPoint],
) -> ShapeFunctionsGradients {
    vec![local_gradients(); points.len()]
}

/// Pseudo-inverse of a single-column Jacobian
fn column_pseudo_inverse(jacobian: &Matrix) -> Matrix {
    jacobian.transpose() / jacobian.norm_squared()
}

/// A two-node line in 3D space
///
/// Cloning shares the nodes.
#[derive(Debug)]
pub struct Line3D2<P: Point = Node> {
    id: GeometryId,
    points: [Arc<P>; POINTS_NUMBER],
}

impl<P: Point> Clone for Line3D2<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            points: self.points.clone(),
        }
    }
}

impl<P: Point> Line3D2<P> {
    /// Create from the two end nodes
    pub fn new(first: Arc<P>, second: Arc<P>) -> Self {
        Self {
            id: GeometryId::Unassigned,
            points: [first, second],
        }
    }

    /// Create from a list of points, which must contain exactly two points
    pub fn from_points(points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Unassigned, points)
    }

    /// Create with a numeric id from a list of exactly two points
    pub fn with_id(id: usize, points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Index(id), points)
    }

    /// Create with a name from a list of exactly two points
    pub fn with_name(name: impl Into<String>, points: Vec<Arc<P>>) -> Result<Self> {
        Self::build(GeometryId::Name(name.into()), points)
    }

    fn build(id: GeometryId, points: Vec<Arc<P>>) -> Result<Self> {
        Ok(Self {
            id,
            points: fixed_points(GeometryType::Line3D2, points)?,
        })
    }

    /// Point coordinates, shape [points in geometry, 3]
    ///
    /// Coordinates past the third are ignored.
    fn coordinates(&self) -> Matrix {
        let mut x = Matrix::zeros(POINTS_NUMBER, 3);
        for (i, p) in self.points.iter().enumerate() {
            for (j, v) in coordinates_of(&**p).into_iter().take(3).enumerate() {
                x[(i, j)] = v;
            }
        }
        x
    }

    fn jacobian_from(coordinates: &Matrix, gradients: &Matrix) -> Matrix {
        coordinates.transpose() * gradients
    }
}

impl<P: Point> Geometry for Line3D2<P> {
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
        GeometryType::Line3D2
    }

    fn geometry_data(&self) -> &'static GeometryData {
        &DATA
    }

    fn length(&self) -> f64 {
        let x = self.coordinates();
        (x.row(1) - x.row(0)).norm()
    }

    /// A line encloses no area
    fn area(&self) -> f64 {
        0.0
    }

    /// A line encloses no volume
    fn volume(&self) -> f64 {
        0.0
    }

    fn domain_size(&self) -> f64 {
        self.length()
    }

    fn jacobians(&self, method: IntegrationMethod, result: &mut Jacobians) {
        let x = self.coordinates();
        result.clear();
        result.extend(
            self.shape_functions_local_gradients(method)
                .iter()
                .map(|g| Self::jacobian_from(&x, g)),
        );
    }

    fn jacobians_with_delta_position(
        &self,
        method: IntegrationMethod,
        delta_position: &Matrix,
        result: &mut Jacobians,
    ) {
        let x = self.coordinates() - delta_position;
        result.clear();
        result.extend(
            self.shape_functions_local_gradients(method)
                .iter()
                .map(|g| Self::jacobian_from(&x, g)),
        );
    }

    fn jacobian(&self, point_index: usize, method: IntegrationMethod, result: &mut Matrix) {
        let g = &self.shape_functions_local_gradients(method)[point_index];
        *result = Self::jacobian_from(&self.coordinates(), g);
    }

    fn jacobian_at(&self, _local_point: &[f64], result: &mut Matrix) {
        *result = Self::jacobian_from(&self.coordinates(), &local_gradients());
    }

    fn determinants_of_jacobian(&self, method: IntegrationMethod, result: &mut Vec<f64>) {
        let mut jacobians = vec![];
        self.jacobians(method, &mut jacobians);
        result.clear();
        result.extend(jacobians.iter().map(|j| j.norm()));
    }

    fn determinant_of_jacobian(&self, point_index: usize, method: IntegrationMethod) -> f64 {
        let mut j = Matrix::zeros(3, 1);
        self.jacobian(point_index, method, &mut j);
        j.norm()
    }

    fn determinant_of_jacobian_at(&self, local_point: &[f64]) -> f64 {
        let mut j = Matrix::zeros(3, 1);
        self.jacobian_at(local_point, &mut j);
        j.norm()
    }

    fn inverses_of_jacobian(&self, method: IntegrationMethod, result: &mut Jacobians) {
        let mut jacobians = vec![];
        self.jacobians(method, &mut jacobians);
        result.clear();
        result.extend(jacobians.iter().map(column_pseudo_inverse));
    }

    fn inverse_of_jacobian(
        &self,
        point_index: usize,
        method: IntegrationMethod,
        result: &mut Matrix,
    ) {
        let mut j = Matrix::zeros(3, 1);
        self.jacobian(point_index, method, &mut j);
        *result = column_pseudo_inverse(&j);
    }

    fn inverse_of_jacobian_at(&self, local_point: &[f64], result: &mut Matrix) {
        let mut j = Matrix::zeros(3, 1);
        self.jacobian_at(local_point, &mut j);
        *result = column_pseudo_inverse(&j);
    }

    fn shape_function_value(&self, index: usize, local_point: &[f64]) -> f64 {
        match shape_functions(local_point[0]).get(index) {
            Some(v) => *v,
            None => panic!("Shape function index {index} out of range for Line3D2"),
        }
    }

    fn shape_functions_local_gradients_at(&self, _local_point: &[f64], result: &mut Matrix) {
        *result = local_gradients();
    }

    fn shape_functions_integration_points_gradients(
        &self,
        method: IntegrationMethod,
        result: &mut ShapeFunctionsGradients,
    ) {
        let mut inverses = vec![];
        self.inverses_of_jacobian(method, &mut inverses);
        result.clear();
        for (g, inv) in izip!(self.shape_functions_local_gradients(method), &inverses) {
            result.push(g * inv);
        }
    }

    fn edges_number(&self) -> usize {
        1
    }

    fn info(&self) -> String {
        String::from("1 dimensional line with 2 nodes in 3D space")
    }

    fn print_data(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(f, "Points:")?;
        for p in &self.points {
            writeln!(f, "    {}: {:?}", p.id(), coordinates_of(&**p))?;
        }
        Ok(())
    }
}

impl<P: Point> fmt::Display for Line3D2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_geometry(self, f)
    }
}

#[cfg(feature = "serde")]
impl ConvertToSerializable for Line3D2<Node> {
    type SerializableType = SerializableGeometry;
    fn to_serializable(&self) -> SerializableGeometry {
        SerializableGeometry::new(GeometryType::Line3D2, &self.id, &self.points)
    }
    fn from_serializable(s: SerializableGeometry) -> Result<Self> {
        let (id, points) = s.into_parts(GeometryType::Line3D2)?;
        Self::build(id, points)
    }
}
