//! defines data description

use num_traits::float::Float;

use std::fmt::Debug;

/// data to cluster identifier, the rank of the record in the input
pub type PointId = usize;

/// A point is immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    // id to identify points as coming from external client.
    id: PointId,
    /// data point
    p: Vec<T>,
}

impl<T> Point<T>
where
    T: Float + Debug,
{
    ///a point is characterized by its Id (in fact a rank)
    pub fn new(id: PointId, p: Vec<T>) -> Self {
        Point { id, p }
    }

    /// get id
    pub fn get_id(&self) -> PointId {
        self.id
    }

    /// gets the points coordinate
    pub fn get_position(&self) -> &[T] {
        &self.p
    }

    /// get minima and maxima of coordinates over all dimensions
    pub fn get_minmax(&self) -> (T, T) {
        self.p
            .iter()
            .fold((T::max_value(), T::min_value()), |acc, x| {
                (acc.0.min(*x), acc.1.max(*x))
            })
    }

    pub fn get_dimension(&self) -> usize {
        self.p.len()
    }
} // end of impl Point

//======================================

// end of mod tests
