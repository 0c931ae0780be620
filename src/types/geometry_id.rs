//! Geometry identifiers

/// Identifier of a geometry instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryId {
    /// No identifier was given at construction
    #[default]
    Unassigned,
    /// A numeric identifier
    Index(usize),
    /// A named identifier
    Name(String),
}

impl From<usize> for GeometryId {
    fn from(id: usize) -> Self {
        GeometryId::Index(id)
    }
}

impl From<&str> for GeometryId {
    fn from(name: &str) -> Self {
        GeometryId::Name(name.to_string())
    }
}

impl From<String> for GeometryId {
    fn from(name: String) -> Self {
        GeometryId::Name(name)
    }
}
