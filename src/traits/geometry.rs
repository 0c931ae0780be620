//! Geometry

use super::{point::coordinates_of, Point};
use crate::{
    error::Result,
    geometry::GeometryData,
    types::{
        GeometryDimension, GeometryFamily, GeometryId, GeometryOrder, GeometryType,
        IntegrationMethod, IntegrationPoint, Jacobians, LumpingMethod, Matrix,
        ShapeFunctionsGradients,
    },
};
use std::{fmt, sync::Arc};

/// A geometry: a reference shape mapped to physical space through a set of shared points
///
/// Integration tables are shared by every instance of a geometry type and are read from
/// [`Geometry::geometry_data`]. Operations that have no meaning for a geometry (for example
/// the Jacobian of a point) log a warning and leave output arguments untouched or return zero.
///
/// Matrices written by the Jacobian methods have shape [working dimension, local dimension];
/// inverse Jacobians have the transposed shape.
pub trait Geometry: Sized {
    /// Point type
    type Point: Point;

    /// The points of the geometry
    fn points(&self) -> &[Arc<Self::Point>];

    /// Number of points
    fn points_number(&self) -> usize {
        self.points().len()
    }

    /// Point `index`
    fn point(&self, index: usize) -> &Arc<Self::Point> {
        &self.points()[index]
    }

    /// Identifier
    fn id(&self) -> &GeometryId;

    /// Create a geometry of the same type from new points
    fn create(&self, id: GeometryId, points: Vec<Arc<Self::Point>>) -> Result<Self>;

    /// Create a geometry of the same type sharing the points of `other`
    fn create_from(
        &self,
        id: GeometryId,
        other: &impl Geometry<Point = Self::Point>,
    ) -> Result<Self> {
        self.create(id, other.points().to_vec())
    }

    /// Geometry family
    fn geometry_family(&self) -> GeometryFamily {
        self.geometry_type().family()
    }

    /// Geometry type
    fn geometry_type(&self) -> GeometryType;

    /// Polynomial order
    fn geometry_order(&self) -> GeometryOrder {
        self.geometry_type().order()
    }

    /// Integration tables of this geometry type
    fn geometry_data(&self) -> &'static GeometryData {
        self.geometry_type().geometry_data()
    }

    /// Dimensions of this geometry type
    fn dimension(&self) -> &'static GeometryDimension {
        self.geometry_data().dimension()
    }

    /// Dimension of the physical space
    fn working_space_dimension(&self) -> usize {
        self.dimension().working_space_dimension()
    }

    /// Dimension of the reference space
    fn local_space_dimension(&self) -> usize {
        self.dimension().local_space_dimension()
    }

    /// Integration method used when none is given
    fn default_integration_method(&self) -> IntegrationMethod {
        self.geometry_data().default_integration_method()
    }

    /// Integration points of `method`
    fn integration_points(&self, method: IntegrationMethod) -> &'static [IntegrationPoint] {
        self.geometry_data().integration_points(method)
    }

    /// Number of integration points of `method`
    fn integration_points_number(&self, method: IntegrationMethod) -> usize {
        self.geometry_data().integration_points_number(method)
    }

    /// Shape function values at the integration points of `method`
    fn shape_functions_values(&self, method: IntegrationMethod) -> &'static Matrix {
        self.geometry_data().shape_functions_values(method)
    }

    /// Shape function local gradients at the integration points of `method`
    fn shape_functions_local_gradients(
        &self,
        method: IntegrationMethod,
    ) -> &'static ShapeFunctionsGradients {
        self.geometry_data().shape_functions_local_gradients(method)
    }

    /// Average of the points
    ///
    /// Only the first three coordinates of each point are used.
    fn center(&self) -> [f64; 3] {
        let mut center = [0.0; 3];
        for p in self.points() {
            for (c, x) in center.iter_mut().zip(coordinates_of(&**p)) {
                *c += x;
            }
        }
        let n = self.points_number() as f64;
        center.map(|c| c / n)
    }

    /// Length, or characteristic length
    fn length(&self) -> f64;

    /// Area
    fn area(&self) -> f64;

    /// Volume
    fn volume(&self) -> f64;

    /// Length, area or volume depending on the local dimension
    fn domain_size(&self) -> f64;

    /// Jacobians at every integration point of `method`
    fn jacobians(&self, method: IntegrationMethod, result: &mut Jacobians);

    /// Jacobians at every integration point of `method` in the configuration displaced by
    /// `delta_position`
    ///
    /// `delta_position` has shape [points in geometry, working dimension].
    fn jacobians_with_delta_position(
        &self,
        method: IntegrationMethod,
        delta_position: &Matrix,
        result: &mut Jacobians,
    );

    /// Jacobian at integration point `point_index` of `method`
    fn jacobian(&self, point_index: usize, method: IntegrationMethod, result: &mut Matrix);

    /// Jacobian at the local coordinates `local_point`
    fn jacobian_at(&self, local_point: &[f64], result: &mut Matrix);

    /// Determinants of the Jacobians at every integration point of `method`
    fn determinants_of_jacobian(&self, method: IntegrationMethod, result: &mut Vec<f64>);

    /// Determinant of the Jacobian at integration point `point_index` of `method`
    fn determinant_of_jacobian(&self, point_index: usize, method: IntegrationMethod) -> f64;

    /// Determinant of the Jacobian at the local coordinates `local_point`
    fn determinant_of_jacobian_at(&self, local_point: &[f64]) -> f64;

    /// Inverse Jacobians at every integration point of `method`
    fn inverses_of_jacobian(&self, method: IntegrationMethod, result: &mut Jacobians);

    /// Inverse Jacobian at integration point `point_index` of `method`
    fn inverse_of_jacobian(
        &self,
        point_index: usize,
        method: IntegrationMethod,
        result: &mut Matrix,
    );

    /// Inverse Jacobian at the local coordinates `local_point`
    fn inverse_of_jacobian_at(&self, local_point: &[f64], result: &mut Matrix);

    /// Value of shape function `index` at the local coordinates `local_point`
    fn shape_function_value(&self, index: usize, local_point: &[f64]) -> f64;

    /// Local gradients of all shape functions at the local coordinates `local_point`
    ///
    /// `result` has shape [points in geometry, local dimension].
    fn shape_functions_local_gradients_at(&self, local_point: &[f64], result: &mut Matrix);

    /// Gradients of all shape functions with respect to physical coordinates at every
    /// integration point of `method`
    ///
    /// Each matrix has shape [points in geometry, working dimension].
    fn shape_functions_integration_points_gradients(
        &self,
        method: IntegrationMethod,
        result: &mut ShapeFunctionsGradients,
    );

    /// Number of edges
    fn edges_number(&self) -> usize;

    /// Number of faces
    fn faces_number(&self) -> usize {
        0
    }

    /// Nodal weights of the lumped mass matrix
    ///
    /// The factors are computed with the default integration method and sum to one.
    fn lumping_factors(&self, method: LumpingMethod) -> Vec<f64> {
        let n = self.points_number();
        let equal = vec![1.0 / n as f64; n];
        if method == LumpingMethod::QuadratureOnNodes {
            return equal;
        }

        let integration_method = self.default_integration_method();
        let values = self.shape_functions_values(integration_method);
        let mut dets = vec![];
        self.determinants_of_jacobian(integration_method, &mut dets);

        let mut factors = vec![0.0; n];
        for ((g, p), det) in self
            .integration_points(integration_method)
            .iter()
            .enumerate()
            .zip(&dets)
        {
            let dv = p.weight() * det;
            for (i, f) in factors.iter_mut().enumerate() {
                let v = values[(g, i)];
                *f += match method {
                    LumpingMethod::DiagonalScaling => v * v * dv,
                    _ => v * dv,
                };
            }
        }

        let total = factors.iter().sum::<f64>();
        if total > 0.0 {
            factors.iter().map(|f| f / total).collect()
        } else {
            equal
        }
    }

    /// Short description
    fn info(&self) -> String;

    /// Write the short description
    fn print_info(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_str(&self.info())
    }

    /// Write the geometry's data
    fn print_data(&self, f: &mut dyn fmt::Write) -> fmt::Result;
}

/// Write `print_info`, a newline and `print_data` of a geometry
pub(crate) fn display_geometry(
    geometry: &impl Geometry,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    geometry.print_info(&mut *f)?;
    writeln!(f)?;
    geometry.print_data(f)
}
