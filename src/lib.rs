//! Finite element reference geometries and their integration tables
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod error;
pub mod geometry;
mod io;
pub mod quadrature;
pub mod traits;
pub mod types;

pub use error::{GeometryError, Result};
pub use geometry::{GeometryData, Line3D2, Node, Shape, Sphere3D1};
