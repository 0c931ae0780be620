//! Types

mod classification;
mod dimension;
mod geometry_id;
mod integration;
mod lumping;

pub use classification::{GeometryFamily, GeometryOrder, GeometryType};
pub use dimension::GeometryDimension;
pub use geometry_id::GeometryId;
pub use integration::{IntegrationMethod, IntegrationPoint};
pub use lumping::LumpingMethod;

/// Dense matrix used for shape function tables and Jacobians
pub type Matrix = nalgebra::DMatrix<f64>;

/// Integration points for every integration method, indexed by [`IntegrationMethod::index`]
pub type IntegrationPointsContainer = Vec<Vec<IntegrationPoint>>;

/// Shape function values for every integration method
///
/// Each matrix has shape [integration point count, points in geometry].
pub type ShapeFunctionsValuesContainer = Vec<Matrix>;

/// Shape function local gradients at the integration points of one integration method
///
/// One matrix of shape [points in geometry, local dimension] per integration point.
pub type ShapeFunctionsGradients = Vec<Matrix>;

/// Shape function local gradients for every integration method
pub type ShapeFunctionsLocalGradientsContainer = Vec<ShapeFunctionsGradients>;

/// Jacobians at the integration points of one integration method
///
/// One matrix of shape [working dimension, local dimension] per integration point.
pub type Jacobians = Vec<Matrix>;
