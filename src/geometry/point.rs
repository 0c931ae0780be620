//! Point
use crate::traits::Point as PointTrait;
use std::sync::atomic::{AtomicU64, Ordering};

/// A node of a mesh in 3D space
///
/// Geometries hold nodes through shared handles (`Arc<Node>`). The coordinates can be
/// updated through any handle and the update is seen by every geometry sharing the node.
/// Updates are not synchronised with each other beyond each coordinate being replaced
/// atomically.
#[derive(Debug)]
pub struct Node {
    id: usize,
    coordinates: [AtomicU64; 3],
}

impl Node {
    /// Create new
    pub fn new(id: usize, coordinates: [f64; 3]) -> Self {
        Self {
            id,
            coordinates: coordinates.map(|c| AtomicU64::new(c.to_bits())),
        }
    }

    /// Coordinates
    pub fn coordinates(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| f64::from_bits(self.coordinates[i].load(Ordering::Relaxed)))
    }

    /// Replace the coordinates
    pub fn set_coordinates(&self, coordinates: [f64; 3]) {
        for (a, c) in self.coordinates.iter().zip(coordinates) {
            a.store(c.to_bits(), Ordering::Relaxed);
        }
    }

    /// X coordinate
    pub fn x(&self) -> f64 {
        self.coordinates()[0]
    }

    /// Y coordinate
    pub fn y(&self) -> f64 {
        self.coordinates()[1]
    }

    /// Z coordinate
    pub fn z(&self) -> f64 {
        self.coordinates()[2]
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self::new(self.id, self.coordinates())
    }
}

impl PointTrait for Node {
    type T = f64;

    fn id(&self) -> usize {
        self.id
    }

    fn dim(&self) -> usize {
        3
    }

    fn coords(&self, data: &mut [f64]) {
        data.copy_from_slice(&self.coordinates());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_coords() {
        let n = Node::new(4, [1.0, -2.0, 0.5]);
        let mut c = [0.0; 3];
        n.coords(&mut c);
        assert_eq!(c, [1.0, -2.0, 0.5]);
        assert_eq!(n.id(), 4);
        assert_eq!(n.dim(), 3);
        assert_eq!((n.x(), n.y(), n.z()), (1.0, -2.0, 0.5));
    }

    #[test]
    fn test_update_visible_through_all_handles() {
        let a = Arc::new(Node::new(0, [0.0, 0.0, 0.0]));
        let b = Arc::clone(&a);
        b.set_coordinates([3.0, 2.0, 1.0]);
        assert_eq!(a.coordinates(), [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Node::new(1, [1.0, 1.0, 1.0]);
        let b = a.clone();
        b.set_coordinates([0.0, 0.0, 0.0]);
        assert_eq!(a.coordinates(), [1.0, 1.0, 1.0]);
    }
}
