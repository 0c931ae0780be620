//! Mass lumping

/// Method used to turn a consistent mass matrix into a diagonal one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LumpingMethod {
    /// Sum of each row of the consistent mass matrix
    #[default]
    RowSum,
    /// Diagonal of the consistent mass matrix scaled to preserve the total mass
    DiagonalScaling,
    /// Quadrature using only the nodal points
    QuadratureOnNodes,
}

impl LumpingMethod {
    /// All lumping methods
    pub const ALL: [LumpingMethod; 3] = [
        LumpingMethod::RowSum,
        LumpingMethod::DiagonalScaling,
        LumpingMethod::QuadratureOnNodes,
    ];
}
