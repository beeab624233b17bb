//! nearest centroid assignment and random initial assignment

use num_traits::float::Float;
use rand::Rng;

use std::fmt::Debug;

use super::centroid::Centroids;
use super::dataset::Dataset;
use super::distance::distance;

/// Returns for each point, in dataset order, the rank of its nearest centroid.
///
/// In case of exact tie between distances the lowest cluster rank wins.
/// Cost is nb_points * nb_cluster distance computations.
pub fn assign<T>(data: &Dataset<T>, centroids: &Centroids<T>) -> Vec<usize>
where
    T: Float + Debug,
{
    assert!(!centroids.is_empty());
    data.get_points()
        .iter()
        .map(|p| nearest(p.get_position(), centroids))
        .collect()
} // end of assign

// rank of first centroid realizing minimal distance
fn nearest<T: Float>(x: &[T], centroids: &Centroids<T>) -> usize {
    let mut best = 0;
    let mut best_dist = T::infinity();
    for (c, center) in centroids.iter().enumerate() {
        let d = distance(x, center);
        if d < best_dist {
            best_dist = d;
            best = c;
        }
    }
    best
}

/// draws for each of the nb_points points a cluster uniformly in 0..nb_cluster
pub fn random_assignment<R: Rng>(nb_points: usize, nb_cluster: usize, rng: &mut R) -> Vec<usize> {
    assert!(nb_cluster > 0);
    (0..nb_points)
        .map(|_| rng.random_range(0..nb_cluster))
        .collect()
}

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
    fn ties_go_to_lowest_rank() {
        log_init_test();
        let data = Dataset::<f64>::from_vectors(vec![vec![0., 0.], vec![5., 0.]]).unwrap();
        // both points equidistant from the two centroids
        let centroids = vec![vec![2.5, 1.], vec![2.5, -1.]];
        assert_eq!(assign(&data, &centroids), vec![0, 0]);
        // identical centroids
        let centroids = vec![vec![1., 1.], vec![1., 1.], vec![1., 1.]];
        assert_eq!(assign(&data, &centroids), vec![0, 0]);
    }

    #[test]
    fn nearest_centroid_is_chosen() {
        log_init_test();
        let nb_points = 500;
        let nb_cluster = 6;
        let dim = 4;
        let unif = Uniform::<f64>::new(0., 1000.).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(234567_u64);
        let vectors: Vec<Vec<f64>> = (0..nb_points)
            .map(|_| (0..dim).map(|_| unif.sample(&mut rng)).collect())
            .collect();
        let centroids: Centroids<f64> = (0..nb_cluster)
            .map(|_| (0..dim).map(|_| unif.sample(&mut rng)).collect())
            .collect();
        let data = Dataset::from_vectors(vectors).unwrap();
        let assignment = assign(&data, &centroids);
        assert_eq!(assignment.len(), nb_points);
        for (p, &c) in data.get_points().iter().zip(assignment.iter()) {
            let d = distance(p.get_position(), &centroids[c]);
            for other in &centroids {
                assert!(d <= distance(p.get_position(), other));
            }
        }
    }

    #[test]
    fn random_assignment_is_reproducible() {
        log_init_test();
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(17_u64);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(17_u64);
        let a1 = random_assignment(1000, 5, &mut rng1);
        let a2 = random_assignment(1000, 5, &mut rng2);
        assert_eq!(a1, a2);
        assert!(a1.iter().all(|&c| c < 5));
        // with 1000 draws every cluster is hit
        for c in 0..5 {
            assert!(a1.contains(&c));
        }
    }
} // end of mod tests
