//! computes the mean of each cluster from an assignment of points.

use num_traits::float::Float;

use std::fmt::Debug;

use super::dataset::Dataset;
use crate::error::KmeansError;

/// centroids, indexed by cluster rank
pub type Centroids<T> = Vec<Vec<T>>;

/// Returns the coordinate-wise mean of points of each cluster, in cluster order 0..nb_cluster.
///
/// Centroids are recomputed from scratch. A cluster without any point has no mean,
/// in this case we return [KmeansError::EmptyCluster] with the lowest empty cluster rank.
/// `assignment` must have one entry in 0..nb_cluster per point.
pub fn compute_centroids<T>(
    data: &Dataset<T>,
    assignment: &[usize],
    nb_cluster: usize,
) -> Result<Centroids<T>, KmeansError>
where
    T: Float + Debug,
{
    assert_eq!(assignment.len(), data.get_nb_points());
    //
    let dim = data.get_dim();
    let mut sums: Centroids<T> = vec![vec![T::zero(); dim]; nb_cluster];
    let mut counts = vec![0usize; nb_cluster];
    // points are accumulated in dataset order
    for (point, &c) in data.get_points().iter().zip(assignment.iter()) {
        counts[c] += 1;
        for (s, x) in sums[c].iter_mut().zip(point.get_position()) {
            *s = *s + *x;
        }
    }
    //
    if let Some(empty) = counts.iter().position(|&n| n == 0) {
        log::error!(
            "cluster {} has no point, cluster sizes : {:?}",
            empty,
            counts
        );
        return Err(KmeansError::EmptyCluster { cluster: empty });
    }
    //
    for (s, n) in sums.iter_mut().zip(counts.iter()) {
        // conversion of usize to float does not fail
        let n = T::from(*n).unwrap_or_else(T::nan);
        s.iter_mut().for_each(|x| *x = *x / n);
    }
    Ok(sums)
} // end of compute_centroids

//======================================

#[cfg(test)]
mod tests {

    use super::*;

    use rand::distr::{Distribution, Uniform};
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn means_in_cluster_order() {
        log_init_test();
        let data =
            Dataset::<f64>::from_vectors(vec![vec![0., 0.], vec![10., 10.], vec![0., 1.], vec![10., 11.]])
                .unwrap();
        // cluster 0 gets the far points, order of output is by cluster not by point
        let centroids = compute_centroids(&data, &[1, 0, 1, 0], 2).unwrap();
        assert_eq!(centroids, vec![vec![10., 10.5], vec![0., 0.5]]);
    }

    #[test]
    fn empty_cluster_is_signaled() {
        log_init_test();
        let data = Dataset::<f64>::from_vectors(vec![vec![3., 3.]; 5]).unwrap();
        let res = compute_centroids(&data, &[0, 0, 2, 0, 2], 3);
        match res {
            Err(KmeansError::EmptyCluster { cluster }) => assert_eq!(cluster, 1),
            other => panic!("expected empty cluster, got {:?}", other),
        }
    }

    #[test]
    fn one_point_per_cluster() {
        log_init_test();
        let vectors = vec![vec![1., 2.], vec![-4., 0.5], vec![7., 7.]];
        let data = Dataset::<f64>::from_vectors(vectors.clone()).unwrap();
        let centroids = compute_centroids(&data, &[0, 1, 2], 3).unwrap();
        assert_eq!(centroids, vectors);
    }

    #[test]
    fn pure_function() {
        log_init_test();
        let nb_points = 300;
        let nb_cluster = 4;
        let unif = Uniform::<f64>::new(-10., 10.).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4664397_u64);
        let vectors: Vec<Vec<f64>> = (0..nb_points)
            .map(|_| (0..3).map(|_| unif.sample(&mut rng)).collect())
            .collect();
        let data = Dataset::from_vectors(vectors).unwrap();
        let assignment: Vec<usize> = (0..nb_points).map(|i| i % nb_cluster).collect();
        let first = compute_centroids(&data, &assignment, nb_cluster).unwrap();
        for _ in 0..5 {
            assert_eq!(first, compute_centroids(&data, &assignment, nb_cluster).unwrap());
        }
        assert_eq!(first.len(), nb_cluster);
        assert!(first.iter().all(|c| c.len() == 3));
    }
} // end of mod tests
