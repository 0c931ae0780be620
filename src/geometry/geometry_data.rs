//! Integration tables shared by every instance of a geometry type
use crate::types::{
    GeometryDimension, IntegrationMethod, IntegrationPoint, IntegrationPointsContainer, Matrix,
    ShapeFunctionsGradients, ShapeFunctionsLocalGradientsContainer, ShapeFunctionsValuesContainer,
};
use itertools::izip;

/// Integration points, shape function values and shape function local gradients for every
/// integration method of a geometry type
#[derive(Debug)]
pub struct GeometryData {
    dimension: &'static GeometryDimension,
    default_method: IntegrationMethod,
    integration_points: IntegrationPointsContainer,
    shape_functions_values: ShapeFunctionsValuesContainer,
    shape_functions_local_gradients: ShapeFunctionsLocalGradientsContainer,
}

impl GeometryData {
    /// Create new
    ///
    /// The three tables must have one entry per integration method. Within a method, the
    /// value matrix must have one row per integration point and the gradient table one
    /// matrix per integration point, each with one row per shape function and one column
    /// per local dimension.
    pub fn new(
        dimension: &'static GeometryDimension,
        default_method: IntegrationMethod,
        integration_points: IntegrationPointsContainer,
        shape_functions_values: ShapeFunctionsValuesContainer,
        shape_functions_local_gradients: ShapeFunctionsLocalGradientsContainer,
    ) -> Self {
        assert_eq!(integration_points.len(), IntegrationMethod::COUNT);
        assert_eq!(shape_functions_values.len(), IntegrationMethod::COUNT);
        assert_eq!(shape_functions_local_gradients.len(), IntegrationMethod::COUNT);
        for (points, values, gradients) in izip!(
            &integration_points,
            &shape_functions_values,
            &shape_functions_local_gradients
        ) {
            assert_eq!(values.nrows(), points.len());
            assert_eq!(gradients.len(), points.len());
            for g in gradients {
                assert_eq!(g.nrows(), values.ncols());
                assert_eq!(g.ncols(), dimension.local_space_dimension());
            }
        }
        Self {
            dimension,
            default_method,
            integration_points,
            shape_functions_values,
            shape_functions_local_gradients,
        }
    }

    /// Build the tables by evaluating shape functions at the points of each method
    ///
    /// `values` maps the integration points of a method to a value matrix, `gradients`
    /// maps them to one gradient matrix per point.
    pub fn from_rules(
        dimension: &'static GeometryDimension,
        default_method: IntegrationMethod,
        rule: impl Fn(IntegrationMethod) -> Vec<IntegrationPoint>,
        values: impl Fn(&[IntegrationPoint]) -> Matrix,
        gradients: impl Fn(&[IntegrationPoint]) -> ShapeFunctionsGradients,
    ) -> Self {
        let integration_points = IntegrationMethod::ALL
            .iter()
            .map(|m| rule(*m))
            .collect::<Vec<_>>();
        let shape_functions_values = integration_points
            .iter()
            .map(|p| values(p))
            .collect::<Vec<_>>();
        let shape_functions_local_gradients = integration_points
            .iter()
            .map(|p| gradients(p))
            .collect::<Vec<_>>();
        Self::new(
            dimension,
            default_method,
            integration_points,
            shape_functions_values,
            shape_functions_local_gradients,
        )
    }

    /// Dimensions of the geometry type
    pub fn dimension(&self) -> &'static GeometryDimension {
        self.dimension
    }

    /// Working space dimension
    pub fn working_space_dimension(&self) -> usize {
        self.dimension.working_space_dimension()
    }

    /// Local space dimension
    pub fn local_space_dimension(&self) -> usize {
        self.dimension.local_space_dimension()
    }

    /// Integration method used when none is given
    pub fn default_integration_method(&self) -> IntegrationMethod {
        self.default_method
    }

    /// Integration points of `method`
    pub fn integration_points(&self, method: IntegrationMethod) -> &[IntegrationPoint] {
        &self.integration_points[method.index()]
    }

    /// Integration points of every method
    pub fn all_integration_points(&self) -> &IntegrationPointsContainer {
        &self.integration_points
    }

    /// Number of integration points of `method`
    pub fn integration_points_number(&self, method: IntegrationMethod) -> usize {
        self.integration_points(method).len()
    }

    /// Shape function values at the integration points of `method`
    ///
    /// Shape [integration point count, points in geometry].
    pub fn shape_functions_values(&self, method: IntegrationMethod) -> &Matrix {
        &self.shape_functions_values[method.index()]
    }

    /// Value of shape function `shape_function_index` at integration point `point_index` of `method`
    pub fn shape_function_value(
        &self,
        point_index: usize,
        shape_function_index: usize,
        method: IntegrationMethod,
    ) -> f64 {
        self.shape_functions_values(method)[(point_index, shape_function_index)]
    }

    /// Shape function local gradients at the integration points of `method`
    pub fn shape_functions_local_gradients(
        &self,
        method: IntegrationMethod,
    ) -> &ShapeFunctionsGradients {
        &self.shape_functions_local_gradients[method.index()]
    }

    /// Shape function local gradients at integration point `point_index` of `method`
    ///
    /// Shape [points in geometry, local dimension].
    pub fn shape_function_local_gradient(
        &self,
        point_index: usize,
        method: IntegrationMethod,
    ) -> &Matrix {
        &self.shape_functions_local_gradients(method)[point_index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::quadrature::line_gauss_legendre;

    static DIMENSION: GeometryDimension = GeometryDimension::new(2, 1);

    fn two_node_line() -> GeometryData {
        GeometryData::from_rules(
            &DIMENSION,
            IntegrationMethod::Gauss2,
            line_gauss_legendre,
            |pts| {
                Matrix::from_fn(pts.len(), 2, |i, j| {
                    let xi = pts[i].coordinates()[0];
                    if j == 0 {
                        0.5 * (1.0 - xi)
                    } else {
                        0.5 * (1.0 + xi)
                    }
                })
            },
            |pts| vec![Matrix::from_column_slice(2, 1, &[-0.5, 0.5]); pts.len()],
        )
    }

    #[test]
    fn test_tables_are_consistent() {
        let data = two_node_line();
        assert_eq!(data.all_integration_points().len(), IntegrationMethod::COUNT);
        for m in IntegrationMethod::ALL {
            assert_eq!(data.all_integration_points()[m.index()], data.integration_points(m));
            let n = data.integration_points_number(m);
            assert_eq!(n, m.points_per_direction());
            assert_eq!(data.shape_functions_values(m).shape(), (n, 2));
            assert_eq!(data.shape_functions_local_gradients(m).len(), n);
        }
        assert_eq!(data.default_integration_method(), IntegrationMethod::Gauss2);
        assert_eq!(data.working_space_dimension(), 2);
        assert_eq!(data.local_space_dimension(), 1);
    }

    #[test]
    fn test_partition_of_unity() {
        let data = two_node_line();
        for m in IntegrationMethod::ALL {
            for i in 0..data.integration_points_number(m) {
                let s = data.shape_function_value(i, 0, m) + data.shape_function_value(i, 1, m);
                approx::assert_relative_eq!(s, 1.0, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_local_gradient_at_point() {
        let data = two_node_line();
        let m = IntegrationMethod::Gauss3;
        for i in 0..data.integration_points_number(m) {
            let g = data.shape_function_local_gradient(i, m);
            assert_eq!(g, &data.shape_functions_local_gradients(m)[i]);
            assert_eq!(g.shape(), (2, 1));
            approx::assert_relative_eq!(g[(0, 0)], -0.5);
            approx::assert_relative_eq!(g[(1, 0)], 0.5);
        }
    }

    #[test]
    #[should_panic]
    fn test_local_gradient_out_of_range() {
        let data = two_node_line();
        data.shape_function_local_gradient(1, IntegrationMethod::Gauss1);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_tables() {
        let _ = GeometryData::from_rules(
            &DIMENSION,
            IntegrationMethod::Gauss1,
            line_gauss_legendre,
            |_| Matrix::zeros(1, 2),
            |pts| vec![Matrix::zeros(2, 1); pts.len()],
        );
    }
}
