//! Integration methods and points

/// An integration method
///
/// The set is closed: every per-method table of a geometry has one entry per variant,
/// in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum IntegrationMethod {
    /// Gauss-Legendre with one point per direction
    Gauss1,
    /// Gauss-Legendre with two points per direction
    Gauss2,
    /// Gauss-Legendre with three points per direction
    Gauss3,
    /// Gauss-Legendre with four points per direction
    Gauss4,
    /// Gauss-Legendre with five points per direction
    Gauss5,
}

impl IntegrationMethod {
    /// Number of integration methods
    pub const COUNT: usize = 5;

    /// All integration methods in table order
    pub const ALL: [IntegrationMethod; IntegrationMethod::COUNT] = [
        IntegrationMethod::Gauss1,
        IntegrationMethod::Gauss2,
        IntegrationMethod::Gauss3,
        IntegrationMethod::Gauss4,
        IntegrationMethod::Gauss5,
    ];

    /// Position of this method in the per-method tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of points of the 1D rule this method is built on
    pub const fn points_per_direction(self) -> usize {
        self.index() + 1
    }

    /// The method at position `index` in the per-method tables
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A point in local coordinates with an integration weight
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationPoint {
    coordinates: [f64; 3],
    local_dimension: usize,
    weight: f64,
}

impl IntegrationPoint {
    /// Create new
    ///
    /// `coordinates` must have at most three entries.
    pub fn new(coordinates: &[f64], weight: f64) -> Self {
        assert!(coordinates.len() <= 3);
        let mut c = [0.0; 3];
        c[..coordinates.len()].copy_from_slice(coordinates);
        Self {
            coordinates: c,
            local_dimension: coordinates.len(),
            weight,
        }
    }

    /// Local coordinates
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates[..self.local_dimension]
    }

    /// Number of local coordinates
    pub fn local_dimension(&self) -> usize {
        self.local_dimension
    }

    /// Integration weight
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dense_indices() {
        for (i, m) in IntegrationMethod::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(IntegrationMethod::from_index(i), Some(*m));
        }
        assert_eq!(IntegrationMethod::from_index(IntegrationMethod::COUNT), None);
    }

    #[test]
    fn test_integration_point_coordinates() {
        let p = IntegrationPoint::new(&[0.5], 2.0);
        assert_eq!(p.coordinates(), &[0.5]);
        assert_eq!(p.local_dimension(), 1);
        assert_eq!(p.weight(), 2.0);

        let p = IntegrationPoint::new(&[], 1.0);
        assert!(p.coordinates().is_empty());
    }
}
