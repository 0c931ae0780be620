//! Geometry classification

use crate::{
    geometry::{line_3d_2, sphere_3d_1, GeometryData},
    types::GeometryDimension,
};

/// Coarse classification of a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryFamily {
    /// Not a geometry
    NoElement,
    /// Zero-dimensional
    Point,
    /// Lines and curves
    Linear,
    /// Triangles
    Triangle,
    /// Quadrilaterals
    Quadrilateral,
    /// Tetrahedra
    Tetrahedra,
    /// Hexahedra
    Hexahedra,
    /// Prisms
    Prism,
    /// Pyramids
    Pyramid,
}

/// Polynomial order of a geometry's shape functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryOrder {
    /// Zero
    Zero,
    /// Linear
    Linear,
    /// Quadratic
    Quadratic,
    /// Cubic
    Cubic,
    /// Quartic
    Quartic,
    /// Order not known
    Unknown,
}

/// A concrete geometry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryType {
    /// A sphere represented by the single node at its center, in 3D space
    Sphere3D1,
    /// A two-node line in 3D space
    Line3D2,
}

impl GeometryType {
    /// The family of this type
    pub fn family(self) -> GeometryFamily {
        match self {
            GeometryType::Sphere3D1 => GeometryFamily::Point,
            GeometryType::Line3D2 => GeometryFamily::Linear,
        }
    }

    /// The order of this type
    pub fn order(self) -> GeometryOrder {
        match self {
            GeometryType::Sphere3D1 => GeometryOrder::Zero,
            GeometryType::Line3D2 => GeometryOrder::Linear,
        }
    }

    /// Number of points an instance of this type holds
    pub fn points_number(self) -> usize {
        match self {
            GeometryType::Sphere3D1 => sphere_3d_1::POINTS_NUMBER,
            GeometryType::Line3D2 => line_3d_2::POINTS_NUMBER,
        }
    }

    /// Dimensions of this type
    pub fn dimension(self) -> &'static GeometryDimension {
        self.geometry_data().dimension()
    }

    /// The integration tables shared by every instance of this type
    ///
    /// The tables are built on the first call.
    pub fn geometry_data(self) -> &'static GeometryData {
        match self {
            GeometryType::Sphere3D1 => sphere_3d_1::geometry_data(),
            GeometryType::Line3D2 => line_3d_2::geometry_data(),
        }
    }

    /// Name of this type
    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Sphere3D1 => "Sphere3D1",
            GeometryType::Line3D2 => "Line3D2",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
