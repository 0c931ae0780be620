//! Geometries
mod geometry_data;
pub(crate) mod line_3d_2;
mod not_applicable;
mod point;
mod shape;
pub(crate) mod sphere_3d_1;

pub use geometry_data::GeometryData;
pub use line_3d_2::Line3D2;
pub use point::Node;
pub use shape::Shape;
pub use sphere_3d_1::Sphere3D1;

use crate::{
    error::{GeometryError, Result},
    types::GeometryType,
};
use std::sync::Arc;

/// Move `points` into a fixed-size array, failing if there are not exactly `N`
pub(crate) fn fixed_points<P, const N: usize>(
    geometry: GeometryType,
    points: Vec<Arc<P>>,
) -> Result<[Arc<P>; N]> {
    let given = points.len();
    <[Arc<P>; N]>::try_from(points).map_err(|_| GeometryError::InvalidPointsNumber {
        geometry,
        expected: N,
        given,
    })
}

#[cfg(feature = "serde")]
pub(crate) use serializable::SerializableGeometry;

#[cfg(feature = "serde")]
mod serializable {
    use super::Node;
    use crate::{
        error::{GeometryError, Result},
        traits::Point,
        types::{GeometryId, GeometryType},
    };
    use std::sync::Arc;

    /// A point reference as stored
    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
    pub struct SerializablePoint {
        id: usize,
        coordinates: [f64; 3],
    }

    /// The stored form of a geometry: its type, id and point references
    #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
    pub struct SerializableGeometry {
        geometry_type: GeometryType,
        id: GeometryId,
        points: Vec<SerializablePoint>,
    }

    impl SerializableGeometry {
        pub(crate) fn new(
            geometry_type: GeometryType,
            id: &GeometryId,
            points: &[Arc<Node>],
        ) -> Self {
            Self {
                geometry_type,
                id: id.clone(),
                points: points
                    .iter()
                    .map(|p| SerializablePoint {
                        id: p.id(),
                        coordinates: p.coordinates(),
                    })
                    .collect(),
            }
        }

        pub(crate) fn geometry_type(&self) -> GeometryType {
            self.geometry_type
        }

        /// Check the stored type and return the id and newly created points
        pub(crate) fn into_parts(
            self,
            expected: GeometryType,
        ) -> Result<(GeometryId, Vec<Arc<Node>>)> {
            if self.geometry_type != expected {
                return Err(GeometryError::GeometryTypeMismatch {
                    expected,
                    found: self.geometry_type,
                });
            }
            let points = self
                .points
                .into_iter()
                .map(|p| Arc::new(Node::new(p.id, p.coordinates)))
                .collect();
            Ok((self.id, points))
        }
    }
}
