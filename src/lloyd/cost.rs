//! within cluster sum of squares and stagnation detection

use num_traits::float::Float;

use std::fmt::Debug;

use super::centroid::Centroids;
use super::dataset::Dataset;
use super::distance::squared_distance;

/// number of consecutive unchanged costs after which iterations stop
pub const STAGNATION_PATIENCE: usize = 2;

#[cfg_attr(doc, katexit::katexit)]
/// computes the inertia $$ \sum_{i} \| x_i - c_{a(i)} \|^2 $$
/// where $a(i)$ is the cluster assigned to point $x_i$ and $c$ the centroids.
pub fn sum_of_squares<T>(data: &Dataset<T>, centroids: &Centroids<T>, assignment: &[usize]) -> T
where
    T: Float + Debug,
{
    assert_eq!(assignment.len(), data.get_nb_points());
    data.get_points()
        .iter()
        .zip(assignment.iter())
        .fold(T::zero(), |acc, (p, &c)| {
            acc + squared_distance(p.get_position(), &centroids[c])
        })
} // end of sum_of_squares

//==========================

/// Counts consecutive iterations whose cost is exactly the previous one.
/// Comparison is bitwise equality of costs, no tolerance.
#[derive(Debug, Clone)]
pub struct StagnationTracker<T> {
    previous: Option<T>,
    nb_unchanged: usize,
    patience: usize,
}

impl<T> Default for StagnationTracker<T> {
    fn default() -> Self {
        StagnationTracker::new(STAGNATION_PATIENCE)
    }
}

impl<T> StagnationTracker<T> {
    pub fn new(patience: usize) -> Self {
        StagnationTracker {
            previous: None,
            nb_unchanged: 0,
            patience,
        }
    }

    /// number of consecutive unchanged costs seen so far
    pub fn get_nb_unchanged(&self) -> usize {
        self.nb_unchanged
    }
}

impl<T> StagnationTracker<T>
where
    T: Float,
{
    /// records cost of an iteration, returns true when patience is reached
    pub fn update(&mut self, cost: T) -> bool {
        match self.previous {
            Some(prev) if prev == cost => self.nb_unchanged += 1,
            _ => self.nb_unchanged = 0,
        }
        self.previous = Some(cost);
        self.nb_unchanged >= self.patience
    }
} // end of impl StagnationTracker

//======================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn two_pairs() {
        log_init_test();
        let data =
            Dataset::<f64>::from_vectors(vec![vec![0., 0.], vec![0., 1.], vec![10., 10.], vec![10., 11.]])
                .unwrap();
        let centroids = vec![vec![0., 0.5], vec![10., 10.5]];
        let cost = sum_of_squares(&data, &centroids, &[0, 0, 1, 1]);
        assert_eq!(cost, 1.0);
        // exchanging clusters makes cost explode
        let cost = sum_of_squares(&data, &centroids, &[1, 1, 0, 0]);
        assert!(cost > 100.);
    }

    #[test]
    fn null_when_points_are_centroids() {
        log_init_test();
        let vectors = vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]];
        let data = Dataset::<f32>::from_vectors(vectors.clone()).unwrap();
        assert_eq!(sum_of_squares(&data, &vectors, &[0, 1, 2]), 0.);
    }

    #[test]
    fn stagnation_needs_two_consecutive() {
        log_init_test();
        let mut tracker = StagnationTracker::<f64>::default();
        assert!(!tracker.update(5.));
        assert!(!tracker.update(5.));
        assert_eq!(tracker.get_nb_unchanged(), 1);
        // a change resets the counter
        assert!(!tracker.update(4.));
        assert_eq!(tracker.get_nb_unchanged(), 0);
        assert!(!tracker.update(4.));
        assert!(tracker.update(4.));
    }
} // end of mod tests
