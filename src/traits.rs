//! Traits

pub(crate) mod geometry;
mod io;
pub(crate) mod point;

pub use geometry::Geometry;
#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use point::Point;
