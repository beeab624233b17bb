//! A dataset is the ordered, read-only set of points of a run.
//! All points share the same dimension, this is checked once at construction so that
//! distance computations never see points of different sizes.

use num_traits::float::Float;

use std::fmt::Debug;

use super::point::Point;
use crate::error::KmeansError;

#[derive(Debug, Clone)]
pub struct Dataset<T> {
    // dimension shared by all points
    dim: usize,
    //
    points: Vec<Point<T>>,
}

impl<T> Dataset<T>
where
    T: Float + Debug,
{
    /// checks points are not empty, have non null dimension and all the same dimension
    pub fn new(points: Vec<Point<T>>) -> Result<Self, KmeansError> {
        let dim = match points.first() {
            Some(p) => p.get_dimension(),
            None => return Err(KmeansError::EmptyInput),
        };
        if dim == 0 {
            return Err(KmeansError::ZeroDimension);
        }
        for (rank, p) in points.iter().enumerate() {
            if p.get_dimension() != dim {
                log::error!(
                    "point of rank {} has dimension {}, expected {}",
                    rank,
                    p.get_dimension(),
                    dim
                );
                return Err(KmeansError::DimensionMismatch {
                    point: rank,
                    expected: dim,
                    found: p.get_dimension(),
                });
            }
        }
        //
        if log::log_enabled!(log::Level::Debug) {
            let (xmin, xmax) = points.iter().fold(
                (T::max_value(), T::min_value()),
                |acc, p| {
                    let (pmin, pmax) = p.get_minmax();
                    (acc.0.min(pmin), acc.1.max(pmax))
                },
            );
            log::debug!(
                "dataset : {} points, dim {}, coordinates in [{:?}, {:?}]",
                points.len(),
                dim,
                xmin,
                xmax
            );
        }
        Ok(Dataset { dim, points })
    } // end of new

    /// builds a dataset from raw coordinates, ids are ranks
    pub fn from_vectors(data: Vec<Vec<T>>) -> Result<Self, KmeansError> {
        let points = data
            .into_iter()
            .enumerate()
            .map(|(i, v)| Point::new(i, v))
            .collect();
        Dataset::new(points)
    }

    /// dimension of points
    pub fn get_dim(&self) -> usize {
        self.dim
    }

    /// number of points
    pub fn get_nb_points(&self) -> usize {
        self.points.len()
    }

    pub fn get_points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn get_point(&self, rank: usize) -> &Point<T> {
        &self.points[rank]
    }
} // end of impl Dataset

//======================================

// end of mod tests
