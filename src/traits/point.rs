//! Point
use num::{Float, ToPrimitive, Zero};

/// A point that geometries hold shared references to
pub trait Point {
    /// Scalar type
    type T: Float;

    /// Identifier of the point in its owning container
    fn id(&self) -> usize;

    /// Return the dimension of the point.
    fn dim(&self) -> usize;

    /// Get the coordinates of the point.
    fn coords(&self, data: &mut [Self::T]);
}

/// Every coordinate of `point`, as `f64`
pub(crate) fn coordinates_of<P: Point>(point: &P) -> Vec<f64> {
    let mut data = vec![P::T::zero(); point.dim()];
    point.coords(&mut data);
    data.iter().map(|c| c.to_f64().unwrap_or(f64::NAN)).collect()
}
