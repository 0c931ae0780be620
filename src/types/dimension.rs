//! Geometry dimension

/// The working and local space dimensions of a geometry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryDimension {
    working_space_dimension: usize,
    local_space_dimension: usize,
}

impl GeometryDimension {
    /// Create new
    ///
    /// Panics if the local dimension is larger than the working dimension or the
    /// working dimension is zero. Usable in `static` items.
    pub const fn new(working_space_dimension: usize, local_space_dimension: usize) -> Self {
        assert!(working_space_dimension >= 1);
        assert!(local_space_dimension <= working_space_dimension);
        Self {
            working_space_dimension,
            local_space_dimension,
        }
    }

    /// Dimension of the physical space the geometry is embedded in
    pub const fn working_space_dimension(&self) -> usize {
        self.working_space_dimension
    }

    /// Dimension of the reference space the shape functions are defined on
    pub const fn local_space_dimension(&self) -> usize {
        self.local_space_dimension
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static DIMENSION: GeometryDimension = GeometryDimension::new(3, 1);

    #[test]
    fn test_static_dimension() {
        assert_eq!(DIMENSION.working_space_dimension(), 3);
        assert_eq!(DIMENSION.local_space_dimension(), 1);
    }

    #[test]
    fn test_zero_local_dimension() {
        let d = GeometryDimension::new(2, 0);
        assert_eq!(d.local_space_dimension(), 0);
    }

    #[test]
    #[should_panic]
    fn test_local_larger_than_working() {
        let _ = GeometryDimension::new(2, 3);
    }
}
